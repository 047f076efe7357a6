//! Footer: brand, link groups and the copyright bar.

use folio_core::{FOOTER_GROUPS, FooterLink, PROFILE, SOCIAL_LINKS};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::{
    PageContext, Palette, column_width, columns, content_area, content_width, render_lines, row,
    wrap_text, wrapped_rows,
};

const BLURB: &str = "Crafting beautiful, responsive, and user-friendly web experiences. \
    Let's build something amazing together.";

const WIDE: u16 = 80;
const GAP: u16 = 2;

fn brand_height(width: u16) -> u16 {
    // brand, blank, blurb, blank, socials
    3 + wrapped_rows(BLURB, width) + 1
}

fn group_height() -> u16 {
    FOOTER_GROUPS
        .iter()
        .map(|g| 2 + g.links.len() as u16)
        .max()
        .unwrap_or(0)
}

/// Footer height for a terminal `width` columns wide.
pub fn height(width: u16) -> u16 {
    let inner = content_width(width);
    let body = if inner >= WIDE {
        let cols = FOOTER_GROUPS.len() as u16 + 1;
        brand_height(column_width(inner, cols, GAP)).max(group_height())
    } else {
        brand_height(inner)
            + FOOTER_GROUPS
                .iter()
                .map(|g| 1 + 2 + g.links.len() as u16)
                .sum::<u16>()
    };
    // rule, blank, body, blank, rule, copyright, blank
    2 + body + 4
}

pub fn render(area: Rect, buf: &mut Buffer, ctx: &PageContext) {
    let p = &ctx.palette;
    Block::new()
        .borders(Borders::TOP)
        .border_style(p.border_style())
        .render(row(area, 0, 1), buf);

    let inner = content_area(area);
    let body_height = area.height.saturating_sub(6);
    let body = row(inner, 2, body_height);

    if inner.width >= WIDE {
        let cols = columns(body, FOOTER_GROUPS.len() as u16 + 1, GAP);
        render_brand(cols[0], buf, p);
        for (group, col) in FOOTER_GROUPS.iter().zip(&cols[1..]) {
            render_group(*col, buf, p, group.title, group.links);
        }
    } else {
        let brand = brand_height(inner.width);
        render_brand(row(body, 0, brand), buf, p);
        let mut top = brand + 1;
        for group in FOOTER_GROUPS {
            let height = 2 + group.links.len() as u16;
            render_group(row(body, top, height), buf, p, group.title, group.links);
            top += height + 1;
        }
    }

    let bar_top = area.height.saturating_sub(3);
    Block::new()
        .borders(Borders::TOP)
        .border_style(p.border_style())
        .render(row(inner, bar_top, 1), buf);
    let bar = row(inner, bar_top + 1, 1);
    Paragraph::new(Line::styled(
        format!("© {} {}. All rights reserved.", ctx.year, PROFILE.name),
        p.muted_style(),
    ))
    .render(bar, buf);
    Paragraph::new(Line::styled("↑ Back to top (g)", p.accent_style()))
        .alignment(Alignment::Right)
        .render(bar, buf);
}

fn render_brand(area: Rect, buf: &mut Buffer, p: &Palette) {
    let mut brand = vec![Span::styled("◆ ", p.accent_style())];
    brand.extend(p.gradient(PROFILE.brand));
    Paragraph::new(Line::from(brand)).render(row(area, 0, 1), buf);

    let lines = wrap_text(BLURB, area.width);
    render_lines(
        row(area, 2, lines.len() as u16),
        buf,
        &lines,
        p.muted_style(),
        Alignment::Left,
    );

    let socials: Vec<Span> = SOCIAL_LINKS
        .iter()
        .flat_map(|s| [Span::styled(s.label, p.accent_style()), Span::raw("  ")])
        .collect();
    Paragraph::new(Line::from(socials)).render(row(area, 3 + lines.len() as u16, 1), buf);
}

fn link_line(p: &Palette, link: &FooterLink) -> Line<'static> {
    match link.section() {
        Some(section) => Line::from(vec![
            Span::styled(link.name, p.muted_style()),
            Span::styled(format!(" ({})", section.index() + 1), p.border_style()),
        ]),
        None if link.is_external() => Line::from(vec![
            Span::styled(link.name, p.muted_style()),
            Span::styled(" ↗", p.border_style()),
        ]),
        None => Line::styled(link.name, p.muted_style()),
    }
}

fn render_group(
    area: Rect,
    buf: &mut Buffer,
    p: &Palette,
    title: &'static str,
    links: &[FooterLink],
) {
    Paragraph::new(Line::styled(
        title,
        Style::new().fg(p.fg).add_modifier(Modifier::BOLD),
    ))
    .render(row(area, 0, 1), buf);

    let lines: Vec<Line> = links.iter().map(|l| link_line(p, l)).collect();
    Paragraph::new(lines).render(row(area, 2, links.len() as u16), buf);
}
