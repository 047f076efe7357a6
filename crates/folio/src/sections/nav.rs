//! Fixed navigation bar.

use folio_core::{PROFILE, Section};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use super::Palette;

/// Rows covered by the bar, including its bottom rule.
pub const NAV_HEIGHT: u16 = 2;

/// Below this width the links collapse into a menu.
pub const COMPACT_WIDTH: u16 = 80;

#[derive(Debug, Clone, Copy)]
pub struct NavState {
    pub active: Section,
    pub scrolled: bool,
    pub menu_open: bool,
}

pub fn is_compact(width: u16) -> bool {
    width < COMPACT_WIDTH
}

fn link_spans(palette: &Palette, active: Section) -> Vec<Span<'static>> {
    Section::ALL
        .iter()
        .enumerate()
        .flat_map(|(i, section)| {
            let label = format!(" {} {} ", i + 1, section.label());
            let span = if *section == active {
                Span::styled(
                    label,
                    Style::new()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED),
                )
            } else {
                Span::styled(label, palette.muted_style())
            };
            [span, Span::raw(" ")]
        })
        .collect()
}

/// Render the bar over the top of the viewport.
pub fn render(viewport: Rect, buf: &mut Buffer, palette: &Palette, state: NavState) {
    let bar = Rect {
        height: NAV_HEIGHT.min(viewport.height),
        ..viewport
    };
    if state.scrolled {
        Clear.render(bar, buf);
        Block::new()
            .borders(Borders::BOTTOM)
            .border_style(palette.border_style())
            .style(Style::new().bg(palette.bg))
            .render(bar, buf);
    }
    let line_area = Rect { height: 1, ..bar };

    let mut brand = vec![Span::styled("◆ ", palette.accent_style())];
    brand.extend(palette.gradient(PROFILE.brand));
    Paragraph::new(Line::from(brand)).render(line_area, buf);

    let compact = is_compact(viewport.width);
    let right = if compact {
        Line::from(Span::styled(
            if state.menu_open { "× menu (m) " } else { "≡ menu (m) " },
            palette.muted_style(),
        ))
    } else {
        let mut spans = link_spans(palette, state.active);
        spans.push(Span::styled(
            " Hire Me (h) ",
            Style::new()
                .fg(palette.bg)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ));
        Line::from(spans)
    };
    Paragraph::new(right)
        .alignment(Alignment::Right)
        .render(line_area, buf);

    if compact && state.menu_open {
        render_menu(viewport, buf, palette, state.active);
    }
}

fn render_menu(viewport: Rect, buf: &mut Buffer, palette: &Palette, active: Section) {
    let height = (Section::ALL.len() as u16 + 3).min(viewport.height.saturating_sub(NAV_HEIGHT));
    let menu = Rect {
        y: viewport.y + NAV_HEIGHT,
        height,
        ..viewport
    };
    Clear.render(menu, buf);

    let mut lines: Vec<Line> = Section::ALL
        .iter()
        .enumerate()
        .map(|(i, section)| {
            let style = if *section == active {
                palette.accent_style().add_modifier(Modifier::BOLD)
            } else {
                palette.muted_style()
            };
            Line::styled(format!(" {}  {}", i + 1, section.label()), style)
        })
        .collect();
    lines.push(Line::styled(
        " h  Hire Me",
        palette.accent_style().add_modifier(Modifier::BOLD),
    ));

    Paragraph::new(lines)
        .block(
            Block::new()
                .borders(Borders::BOTTOM)
                .border_style(palette.border_style()),
        )
        .style(Style::new().bg(palette.bg))
        .render(menu, buf);
}

#[cfg(test)]
mod tests {
    use folio_core::ColorTheme;

    use super::*;

    fn screen_text(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    fn state(menu_open: bool) -> NavState {
        NavState {
            active: Section::Skills,
            scrolled: false,
            menu_open,
        }
    }

    #[test]
    fn test_wide_bar_shows_links() {
        let area = Rect::new(0, 0, 120, 10);
        let mut buf = Buffer::empty(area);
        render(area, &mut buf, &Palette::new(ColorTheme::default()), state(false));

        let text = screen_text(&buf);
        assert!(text.contains("3 Skills"));
        assert!(text.contains("Hire Me (h)"));
        assert!(!text.contains("menu (m)"));
    }

    #[test]
    fn test_compact_bar_collapses_into_menu() {
        let area = Rect::new(0, 0, 60, 12);
        let palette = Palette::new(ColorTheme::default());

        let mut buf = Buffer::empty(area);
        render(area, &mut buf, &palette, state(false));
        let closed = screen_text(&buf);
        assert!(closed.contains("≡ menu (m)"));
        assert!(!closed.contains("Projects"));

        let mut buf = Buffer::empty(area);
        render(area, &mut buf, &palette, state(true));
        let open = screen_text(&buf);
        assert!(open.contains("× menu (m)"));
        assert!(open.contains("4  Projects"));
        assert!(open.contains("h  Hire Me"));
    }
}
