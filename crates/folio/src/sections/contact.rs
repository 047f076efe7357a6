//! Contact: details, socials and the message form.

use folio_contact::{ContactForm, Field};
use folio_core::{CONTACT_INFO, SOCIAL_LINKS};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};

use super::{
    Header, PageContext, Palette, SECTION_PADDING, card, content_area, content_width,
    render_lines, row, wrap_text, wrapped_rows,
};

pub const HEADER: Header = Header {
    badge: "Get In Touch",
    title: "Let's",
    highlight: "Connect",
    blurb: "Have a project in mind or want to collaborate? I'd love to hear from you. \
        Drop me a message and let's create something amazing together.",
};

const AVAILABILITY: &str = "I'm currently accepting new projects and freelance opportunities. \
    Let's discuss how I can help bring your ideas to life.";

const WIDE: u16 = 90;
const GAP: u16 = 3;

/// Text rows inside the message box.
const MESSAGE_ROWS: u16 = 6;

/// Bordered form height: title, blank, three single-line inputs of four rows,
/// the message input, blank, button and hint.
pub const FORM_HEIGHT: u16 = 2 + 2 + 3 * 4 + (MESSAGE_ROWS + 3) + 3;

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Rows of the info column before the availability card.
const INFO_FIXED_ROWS: u16 = 15;

/// Row offsets within the contact section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLayout {
    pub body_top: u16,
    pub info_width: u16,
    pub form_top: u16,
    pub form_left: u16,
    pub form_width: u16,
    pub height: u16,
}

impl ContactLayout {
    pub fn new(width: u16) -> Self {
        let inner = content_width(width);
        let body_top = SECTION_PADDING + HEADER.height(inner);

        let (info_width, form_left, form_width) = if inner >= WIDE {
            let info = inner * 2 / 5;
            (info, info + GAP, inner - info - GAP)
        } else {
            (inner, 0, inner)
        };
        let info_height = info_height(info_width);

        let (form_top, bottom) = if inner >= WIDE {
            (body_top, body_top + info_height.max(FORM_HEIGHT))
        } else {
            let form_top = body_top + info_height + 1;
            (form_top, form_top + FORM_HEIGHT)
        };

        Self {
            body_top,
            info_width,
            form_top,
            form_left,
            form_width,
            height: bottom + SECTION_PADDING,
        }
    }
}

fn info_height(width: u16) -> u16 {
    INFO_FIXED_ROWS + 3 + wrapped_rows(AVAILABILITY, width.saturating_sub(4))
}

pub fn render(area: Rect, buf: &mut Buffer, ctx: &PageContext, layout: &ContactLayout) {
    let p = &ctx.palette;
    let inner = content_area(area);
    HEADER.render(row(inner, SECTION_PADDING, area.height), buf, p);

    let info = Rect {
        width: layout.info_width,
        ..row(inner, layout.body_top, info_height(layout.info_width))
    };
    render_info(info, buf, ctx);

    let form = Rect {
        x: inner.x + layout.form_left,
        width: layout.form_width,
        ..row(inner, layout.form_top, FORM_HEIGHT)
    };
    render_form(form, buf, ctx, ctx.form);
}

fn title(text: &'static str, p: &Palette) -> Line<'static> {
    Line::styled(text, Style::new().fg(p.fg).add_modifier(Modifier::BOLD))
}

fn render_info(area: Rect, buf: &mut Buffer, ctx: &PageContext) {
    let p = &ctx.palette;
    Paragraph::new(title("Contact Information", p)).render(row(area, 0, 1), buf);

    for (i, info) in CONTACT_INFO.iter().enumerate() {
        let top = 2 + 3 * i as u16;
        Paragraph::new(vec![
            Line::styled(info.label, p.muted_style()),
            Line::styled(info.value, Style::new().fg(p.fg)),
        ])
        .render(row(area, top, 2), buf);
    }

    Paragraph::new(title("Follow Me", p)).render(row(area, 11, 1), buf);
    let mut socials = Vec::new();
    for (i, link) in SOCIAL_LINKS.iter().enumerate() {
        if i > 0 {
            socials.push(Span::raw("  "));
        }
        socials.push(Span::styled(format!("[ {} ]", link.label), p.accent_style()));
    }
    Paragraph::new(Line::from(socials)).render(row(area, 13, 1), buf);

    let blurb = wrap_text(AVAILABILITY, area.width.saturating_sub(4));
    let status = row(area, INFO_FIXED_ROWS, 3 + blurb.len() as u16);
    let block = card(p, false);
    let body = block.inner(status).inner(Margin::new(1, 0));
    block.render(status, buf);

    let dot = if (ctx.now_ms / 1000) % 2 == 0 { "●" } else { "○" };
    Paragraph::new(Line::styled(
        format!("{dot} Available for Work"),
        Style::new().fg(p.success).add_modifier(Modifier::BOLD),
    ))
    .render(row(body, 0, 1), buf);
    render_lines(
        row(body, 1, blurb.len() as u16),
        buf,
        &blurb,
        p.muted_style(),
        Alignment::Left,
    );
}

fn render_form(area: Rect, buf: &mut Buffer, ctx: &PageContext, form: &ContactForm) {
    let p = &ctx.palette;
    let block = card(p, ctx.editing);
    let body = block.inner(area).inner(Margin::new(1, 0));
    block.render(area, buf);

    Paragraph::new(title("Send a Message", p)).render(row(body, 0, 1), buf);

    let mut top = 2;
    for field in Field::ALL {
        let rows = if field == Field::Message {
            MESSAGE_ROWS
        } else {
            1
        };
        let focused = ctx.editing && form.focus() == field;
        let label_style = if focused {
            p.accent_style().add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(p.fg)
        };
        Paragraph::new(Line::styled(field.label(), label_style)).render(row(body, top, 1), buf);
        render_input(row(body, top + 1, rows + 2), buf, p, form, field, focused, ctx.now_ms);
        top += rows + 3;
    }

    top += 1;
    let button = if form.is_submitting() {
        let frame = SPINNER[(ctx.now_ms / 80) as usize % SPINNER.len()];
        Span::styled(
            format!(" {frame} Sending... "),
            Style::new().fg(p.muted).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            " ➤ Send Message (Ctrl-S) ",
            Style::new().fg(p.bg).bg(p.accent).add_modifier(Modifier::BOLD),
        )
    };
    Paragraph::new(Line::from(button))
        .alignment(Alignment::Center)
        .render(row(body, top, 1), buf);

    let hint = match ctx.form_error {
        Some(error) => Line::styled(format!("⚠ {error}"), Style::new().fg(p.error)),
        None if ctx.editing => Line::styled(
            "Tab next field · Enter new line in message · Esc done",
            p.muted_style(),
        ),
        None => Line::styled("Press e to write a message", p.muted_style()),
    };
    Paragraph::new(hint)
        .alignment(Alignment::Center)
        .render(row(body, top + 1, 1), buf);
}

fn render_input(
    area: Rect,
    buf: &mut Buffer,
    p: &Palette,
    form: &ContactForm,
    field: Field,
    focused: bool,
    now_ms: u64,
) {
    let border = if focused {
        p.accent_style()
    } else {
        p.border_style()
    };
    let block = Block::bordered()
        .border_type(BorderType::Plain)
        .border_style(border);
    let text_area = block.inner(area);
    block.render(area, buf);

    let value = form.value(field);
    if value.is_empty() && !focused {
        Paragraph::new(Line::styled(field.placeholder(), p.muted_style())).render(text_area, buf);
        return;
    }

    // Blinking block cursor after the text.
    let cursor = if focused && (now_ms / 500) % 2 == 0 {
        "▏"
    } else {
        " "
    };
    let width = text_area.width.saturating_sub(1).max(1);
    let lines = visible_tail(value, width, text_area.height);
    let last = lines.len().saturating_sub(1);
    let lines: Vec<Line> = lines
        .into_iter()
        .enumerate()
        .map(|(i, text)| {
            let mut spans = vec![Span::styled(text, Style::new().fg(p.fg))];
            if i == last {
                spans.push(Span::styled(cursor, p.accent_style()));
            }
            Line::from(spans)
        })
        .collect();
    Paragraph::new(lines).render(text_area, buf);
}

/// The last `rows` lines of `value` wrapped to `width`. Single-row inputs
/// keep the end of the text in view.
fn visible_tail(value: &str, width: u16, rows: u16) -> Vec<String> {
    if rows <= 1 {
        let chars: Vec<char> = value.chars().collect();
        let start = chars.len().saturating_sub(usize::from(width));
        return vec![chars[start..].iter().collect()];
    }
    let lines = wrap_text(value, width);
    let start = lines.len().saturating_sub(usize::from(rows));
    lines[start..].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_layout_is_side_by_side() {
        let layout = ContactLayout::new(140);
        assert_eq!(layout.form_top, layout.body_top);
        assert!(layout.form_left >= layout.info_width);
        assert!(layout.height >= layout.body_top + FORM_HEIGHT);
    }

    #[test]
    fn test_narrow_layout_stacks() {
        let layout = ContactLayout::new(60);
        assert_eq!(layout.form_left, 0);
        assert!(layout.form_top > layout.body_top);
        assert_eq!(layout.height, layout.form_top + FORM_HEIGHT + SECTION_PADDING);
    }

    #[test]
    fn test_single_line_input_keeps_end_in_view() {
        assert_eq!(visible_tail("hello world", 5, 1), vec!["world"]);
        assert_eq!(visible_tail("hi", 5, 1), vec!["hi"]);
    }

    #[test]
    fn test_message_shows_last_rows() {
        let tail = visible_tail("a\nb\nc\nd", 10, 2);
        assert_eq!(tail, vec!["c", "d"]);
    }

    #[test]
    fn test_form_renders_values() {
        let mut form = ContactForm::new();
        form.set(Field::Name, "Ada");
        let ctx_palette = Palette::new(folio_core::ColorTheme::default());
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);
        render_input(area, &mut buf, &ctx_palette, &form, Field::Name, false, 0);
        let row: String = (0..area.width)
            .map(|x| buf[(x, 1)].symbol().to_string())
            .collect();
        assert!(row.contains("Ada"));

        let mut buf = Buffer::empty(area);
        render_input(area, &mut buf, &ctx_palette, &form, Field::Email, false, 0);
        let row: String = (0..area.width)
            .map(|x| buf[(x, 1)].symbol().to_string())
            .collect();
        assert!(row.contains("email@example.com"));
    }
}
