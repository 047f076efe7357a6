//! Hero: greeting over the particle backdrop.

use folio_core::{PROFILE, SOCIAL_LINKS};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::{PageContext, centered, wrap_text};

/// The hero never gets shorter than this, even in a tiny terminal.
pub const MIN_HEIGHT: u16 = 20;

const CONTENT_WIDTH: u16 = 80;

/// The hero fills the viewport.
pub fn height(viewport_rows: u16) -> u16 {
    viewport_rows.max(MIN_HEIGHT)
}

pub fn render(area: Rect, buf: &mut Buffer, ctx: &PageContext) {
    if let Some(particles) = ctx.particles {
        particles.render(area, buf);
    }

    let p = &ctx.palette;
    let content = centered(area, CONTENT_WIDTH);

    // Status dot blinks once a second.
    let dot_color = if (ctx.now_ms / 1000) % 2 == 0 {
        p.success
    } else {
        p.muted
    };

    let mut greeting = vec![Span::styled(
        "Hi, I'm ",
        Style::new().fg(p.fg).add_modifier(Modifier::BOLD),
    )];
    greeting.extend(p.gradient(PROFILE.name));

    let mut socials = Vec::new();
    for (i, link) in SOCIAL_LINKS.iter().enumerate() {
        if i > 0 {
            socials.push(Span::styled("  ·  ", p.muted_style()));
        }
        socials.push(Span::styled(link.label, p.accent_style()));
    }

    let mut lines = vec![
        Line::from(vec![
            Span::styled("● ", Style::new().fg(dot_color)),
            Span::styled(PROFILE.availability, p.muted_style()),
        ]),
        Line::default(),
        Line::from(greeting),
        Line::default(),
        Line::styled(PROFILE.title, Style::new().fg(p.fg)),
        Line::default(),
    ];
    lines.extend(
        wrap_text(PROFILE.tagline, content.width)
            .into_iter()
            .map(|l| Line::styled(l, p.muted_style())),
    );
    lines.extend([
        Line::default(),
        Line::from(vec![
            Span::styled(
                " View My Work (p) ",
                Style::new().fg(p.bg).bg(p.accent).add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled(
                format!(" Download CV {} ", PROFILE.resume_path),
                Style::new().fg(p.fg).add_modifier(Modifier::UNDERLINED),
            ),
        ]),
        Line::default(),
        Line::from(socials),
        Line::default(),
        Line::styled("↓", p.muted_style()),
    ]);

    let content_height = (lines.len() as u16).min(area.height);
    let top = area.y + (area.height - content_height) / 2;

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(
            Rect {
                y: top,
                height: content_height,
                ..content
            },
            buf,
        );
}
