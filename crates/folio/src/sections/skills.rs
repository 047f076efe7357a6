//! Skills: proficiency bars, the tech marquee and current learning topics.

use folio_core::{LEARNING_TOPICS, SKILL_CATEGORIES, SkillCategory, lerp_rgb};
use folio_watch::ProgressBarAnimation;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::{
    Header, PageContext, Palette, SECTION_PADDING, card, centered, chip_line, columns,
    content_area, content_width, pack_chips, render_lines, row, wrap_text, wrapped_rows,
};

pub const HEADER: Header = Header {
    badge: "My Skills",
    title: "Technologies I",
    highlight: "Work With",
    blurb: "I've worked with a variety of technologies in the web development world. \
        Here's a comprehensive overview of my technical skills and proficiency levels.",
};

const LEARNING_BLURB: &str = "Technology evolves rapidly, and I'm committed to continuous \
    learning. Currently exploring advanced React patterns, server-side rendering, and modern CSS \
    features to stay at the forefront of web development.";

const LEARNING_WIDTH: u16 = 80;
const WIDE: u16 = 90;
const GAP: u16 = 2;

/// Rows of the tech stack block: title, subtitle, blank, left row, blank, right row.
const MARQUEE_BLOCK_HEIGHT: u16 = 6;

fn card_height(category: &SkillCategory) -> u16 {
    // border, title, blank, two rows per skill, border
    4 + 2 * category.skills.len() as u16
}

/// Row offsets within the skills section, relative to its top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillsLayout {
    /// Top row of each category card.
    pub card_rows: Vec<u16>,
    /// Row of each skill's bar, indexed by category then skill.
    pub bar_rows: Vec<Vec<u16>>,
    pub marquee_top: u16,
    pub learning_top: u16,
    pub learning_height: u16,
    pub height: u16,
    wide: bool,
    row_height: u16,
}

impl SkillsLayout {
    pub fn new(width: u16) -> Self {
        let inner = content_width(width);
        let wide = inner >= WIDE;
        let mut top = SECTION_PADDING + HEADER.height(inner);

        let row_height = SKILL_CATEGORIES.iter().map(card_height).max().unwrap_or(0);
        let mut card_rows = Vec::with_capacity(SKILL_CATEGORIES.len());
        for category in SKILL_CATEGORIES {
            card_rows.push(top);
            if !wide {
                top += card_height(category);
            }
        }
        if wide {
            top += row_height;
        }
        let bar_rows = SKILL_CATEGORIES
            .iter()
            .zip(&card_rows)
            .map(|(category, card_top)| {
                (0..category.skills.len() as u16)
                    .map(|j| card_top + 3 + 2 * j + 1)
                    .collect()
            })
            .collect();
        top += 1;

        let marquee_top = top + 3;
        top += MARQUEE_BLOCK_HEIGHT + 1;

        let learning_top = top;
        let text_width = learning_text_width(inner);
        let learning_height = 2
            + 2
            + wrapped_rows(LEARNING_BLURB, text_width)
            + 1
            + pack_chips(LEARNING_TOPICS, text_width).len() as u16;
        top += learning_height;

        Self {
            card_rows,
            bar_rows,
            marquee_top,
            learning_top,
            learning_height,
            height: top + SECTION_PADDING,
            wide,
            row_height,
        }
    }
}

fn learning_text_width(inner: u16) -> u16 {
    inner.saturating_sub(4).min(LEARNING_WIDTH)
}

pub fn render(area: Rect, buf: &mut Buffer, ctx: &PageContext, layout: &SkillsLayout) {
    let p = &ctx.palette;
    let inner = content_area(area);
    HEADER.render(row(inner, SECTION_PADDING, area.height), buf, p);

    let slots: Vec<Rect> = if layout.wide {
        columns(
            row(inner, layout.card_rows[0], layout.row_height),
            SKILL_CATEGORIES.len() as u16,
            GAP,
        )
    } else {
        SKILL_CATEGORIES
            .iter()
            .zip(&layout.card_rows)
            .map(|(category, top)| row(inner, *top, card_height(category)))
            .collect()
    };
    for (index, (category, slot)) in SKILL_CATEGORIES.iter().zip(slots).enumerate() {
        let bars = ctx.bars.get(index).map_or(&[][..], Vec::as_slice);
        render_category(slot, buf, ctx, index, category, bars);
    }

    render_marquees(row(inner, layout.marquee_top - 3, MARQUEE_BLOCK_HEIGHT), buf, ctx);
    render_learning(
        row(inner, layout.learning_top, layout.learning_height),
        buf,
        p,
    );
}

fn render_category(
    area: Rect,
    buf: &mut Buffer,
    ctx: &PageContext,
    index: usize,
    category: &SkillCategory,
    bars: &[ProgressBarAnimation],
) {
    let p = &ctx.palette;
    let block = card(p, false);
    let body = block.inner(area).inner(Margin::new(1, 0));
    block.render(area, buf);

    Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} ", index + 1),
            Style::new().fg(p.bg).bg(p.accent).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            category.name,
            Style::new().fg(p.fg).add_modifier(Modifier::BOLD),
        ),
    ]))
    .render(row(body, 0, 1), buf);

    for (j, skill) in category.skills.iter().enumerate() {
        let top = 2 + 2 * j as u16;
        let label = row(body, top, 1);
        Paragraph::new(Line::styled(skill.name, Style::new().fg(p.fg))).render(label, buf);
        Paragraph::new(Line::styled(format!("{}%", skill.level), p.accent_style()))
            .alignment(Alignment::Right)
            .render(label, buf);

        let width = bars.get(j).map_or(0.0, |bar| bar.width_at(ctx.now_ms));
        Paragraph::new(bar_line(p, width, body.width)).render(row(body, top + 1, 1), buf);
    }
}

/// A bar `cells` wide, filled to `percent` with the accent gradient.
fn bar_line(p: &Palette, percent: f64, cells: u16) -> Line<'static> {
    let filled = ((percent / 100.0) * f64::from(cells)).round() as u16;
    let filled = filled.min(cells);
    let mut spans: Vec<Span> = (0..filled)
        .map(|i| {
            let t = f64::from(i) / f64::from(cells.max(2) - 1);
            let (r, g, b) = lerp_rgb(p.accent_rgb, p.secondary_rgb, t);
            Span::styled("━", Style::new().fg(Color::Rgb(r, g, b)))
        })
        .collect();
    spans.push(Span::styled(
        "─".repeat(usize::from(cells - filled)),
        p.border_style(),
    ));
    Line::from(spans)
}

fn render_marquees(area: Rect, buf: &mut Buffer, ctx: &PageContext) {
    let p = &ctx.palette;
    let mut title = vec![Span::styled(
        "My ",
        Style::new().fg(p.fg).add_modifier(Modifier::BOLD),
    )];
    title.extend(p.gradient("Tech Stack"));
    Paragraph::new(Line::from(title))
        .alignment(Alignment::Center)
        .render(row(area, 0, 1), buf);
    Paragraph::new(Line::styled("Technologies I use daily", p.muted_style()))
        .alignment(Alignment::Center)
        .render(row(area, 1, 1), buf);

    for (i, marquee) in ctx.marquees.iter().take(2).enumerate() {
        let text = marquee.window(ctx.now_ms, usize::from(area.width));
        let style = if i == 0 {
            p.accent_style()
        } else {
            Style::new().fg(p.fg)
        };
        Paragraph::new(Line::styled(text, style)).render(row(area, 3 + 2 * i as u16, 1), buf);
    }
}

fn render_learning(area: Rect, buf: &mut Buffer, p: &Palette) {
    let block = card(p, false);
    let body = block.inner(area);
    block.render(area, buf);
    let text_area = centered(body, learning_text_width(area.width));

    Paragraph::new(Line::styled(
        "Always Learning",
        Style::new().fg(p.fg).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .render(row(body, 0, 1), buf);

    let lines = wrap_text(LEARNING_BLURB, text_area.width);
    let text_rows = lines.len() as u16;
    render_lines(
        row(text_area, 2, text_rows),
        buf,
        &lines,
        p.muted_style(),
        Alignment::Center,
    );

    for (i, topics) in pack_chips(LEARNING_TOPICS, text_area.width).into_iter().enumerate() {
        Paragraph::new(chip_line(&topics, p.accent_style()))
            .alignment(Alignment::Center)
            .render(row(text_area, 3 + text_rows + i as u16, 1), buf);
    }
}
