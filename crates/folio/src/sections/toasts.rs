//! Toast overlay in the bottom-right corner.

use folio_contact::{TOAST_LIFETIME_MS, ToastKind, Toasts};
use ratatui::{
    buffer::Buffer,
    layout::{Margin, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Clear, Gauge, Paragraph, Widget},
};

use super::{Palette, wrap_text};

const TOAST_WIDTH: u16 = 44;

fn toast_height(description: &str, width: u16) -> u16 {
    // border, title, description, countdown, border
    3 + wrap_text(description, width.saturating_sub(4)).len() as u16 + 1
}

/// Draw toasts stacked upwards from the bottom-right of `viewport`,
/// newest at the bottom.
pub fn render(viewport: Rect, buf: &mut Buffer, palette: &Palette, toasts: &Toasts, now_ms: u64) {
    let width = TOAST_WIDTH.min(viewport.width);
    let mut bottom = viewport.bottom().saturating_sub(1);

    for toast in toasts.iter().collect::<Vec<_>>().into_iter().rev() {
        let height = toast_height(toast.description, width);
        if bottom < viewport.y + height {
            break;
        }
        let area = Rect::new(
            viewport.right().saturating_sub(width + 1),
            bottom - height,
            width,
            height,
        );
        bottom -= height;

        let color = match toast.kind {
            ToastKind::Success => palette.success,
            ToastKind::Error => palette.error,
        };
        Clear.render(area, buf);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(color))
            .style(Style::new().bg(palette.bg));
        let body = block.inner(area).inner(Margin::new(1, 0));
        block.render(area, buf);

        let icon = match toast.kind {
            ToastKind::Success => "✓",
            ToastKind::Error => "✗",
        };
        let mut lines = vec![Line::styled(
            format!("{icon} {}", toast.title),
            Style::new().fg(color).add_modifier(Modifier::BOLD),
        )];
        lines.extend(
            wrap_text(toast.description, body.width)
                .into_iter()
                .map(|l| Line::styled(l, palette.muted_style())),
        );
        let text_rows = lines.len() as u16;
        Paragraph::new(lines).render(body, buf);

        let remaining = TOAST_LIFETIME_MS.saturating_sub(now_ms.saturating_sub(toast.shown_at_ms));
        Gauge::default()
            .gauge_style(Style::new().fg(color).bg(palette.bg))
            .ratio(remaining as f64 / TOAST_LIFETIME_MS as f64)
            .label("")
            .render(
                Rect {
                    y: body.y + text_rows,
                    height: 1,
                    ..body
                },
                buf,
            );
    }
}

#[cfg(test)]
mod tests {
    use folio_contact::Toast;
    use folio_core::ColorTheme;

    use super::*;

    fn screen_text(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_renders_toast_in_corner() {
        let mut toasts = Toasts::new();
        toasts.push(Toast::sent(0));
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        render(area, &mut buf, &Palette::new(ColorTheme::default()), &toasts, 1000);

        assert!(screen_text(&buf).contains("Message Sent!"));
        // Top-left stays untouched.
        assert_eq!(buf[(0, 0)].symbol(), " ");
    }

    #[test]
    fn test_tiny_viewport_skips_toasts() {
        let mut toasts = Toasts::new();
        toasts.push(Toast::send_failed(0));
        let area = Rect::new(0, 0, 80, 3);
        let mut buf = Buffer::empty(area);
        render(area, &mut buf, &Palette::new(ColorTheme::default()), &toasts, 0);
        assert!(!screen_text(&buf).contains("Failed"));
    }
}
