//! Page sections, each rendered into a tall off-screen page buffer.

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod nav;
pub mod projects;
pub mod skills;
pub mod toasts;

use folio_contact::ContactForm;
use folio_core::{BACKGROUND_RGB, ColorTheme, ProjectFilter, lerp_rgb};
use folio_particles::CanvasSurface;
use folio_watch::{CounterAnimation, Marquee, ProgressBarAnimation};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};

/// Blank rows above and below every section's content.
pub const SECTION_PADDING: u16 = 2;

/// Content never grows wider than this, however wide the terminal.
pub const MAX_CONTENT_WIDTH: u16 = 110;

/// Colours derived from the accent theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub accent: Color,
    pub accent_rgb: (u8, u8, u8),
    pub secondary_rgb: (u8, u8, u8),
    pub fg: Color,
    pub muted: Color,
    pub border: Color,
    pub bg: Color,
    pub success: Color,
    pub error: Color,
}

impl Palette {
    pub fn new(theme: ColorTheme) -> Self {
        let (r, g, b) = BACKGROUND_RGB;
        Self {
            accent: theme.color(),
            accent_rgb: theme.rgb(),
            secondary_rgb: (59, 130, 246),
            fg: Color::Rgb(241, 245, 249),
            muted: Color::Rgb(148, 163, 184),
            border: Color::Rgb(51, 65, 85),
            bg: Color::Rgb(r, g, b),
            success: Color::Rgb(74, 222, 128),
            error: Color::Rgb(248, 113, 113),
        }
    }

    pub fn accent_style(&self) -> Style {
        Style::new().fg(self.accent)
    }

    pub fn muted_style(&self) -> Style {
        Style::new().fg(self.muted)
    }

    pub fn border_style(&self) -> Style {
        Style::new().fg(self.border)
    }

    /// Text coloured along the accent-to-secondary gradient.
    pub fn gradient(&self, text: &str) -> Vec<Span<'static>> {
        gradient_spans(text, self.accent_rgb, self.secondary_rgb)
    }
}

/// Everything a section needs to draw itself for the current frame.
pub struct PageContext<'a> {
    pub palette: Palette,
    pub now_ms: u64,
    pub counters: &'a [CounterAnimation],
    pub bars: &'a [Vec<ProgressBarAnimation>],
    pub marquees: &'a [Marquee],
    pub filter: ProjectFilter,
    pub selected_project: usize,
    pub form: &'a ContactForm,
    pub editing: bool,
    /// Why the last submit attempt was refused, shown under the form.
    pub form_error: Option<&'a str>,
    pub particles: Option<&'a CanvasSurface>,
    pub year: i32,
}

/// One span per character, interpolating from `from` to `to`.
pub fn gradient_spans(text: &str, from: (u8, u8, u8), to: (u8, u8, u8)) -> Vec<Span<'static>> {
    let count = text.chars().count().max(2) - 1;
    text.chars()
        .enumerate()
        .map(|(i, ch)| {
            let (r, g, b) = lerp_rgb(from, to, i as f64 / count as f64);
            Span::styled(
                ch.to_string(),
                Style::new()
                    .fg(Color::Rgb(r, g, b))
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect()
}

/// A horizontally centred slice of `area`, at most `max_width` wide.
pub fn centered(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

/// The `row`th line of `area`, clipped to it.
pub fn row(area: Rect, row: u16, height: u16) -> Rect {
    let y = area.y.saturating_add(row);
    let bottom = area.bottom();
    Rect {
        y: y.min(bottom),
        height: height.min(bottom.saturating_sub(y)),
        ..area
    }
}

/// The content column of a section: centred, capped and inset from the edges.
pub fn content_area(area: Rect) -> Rect {
    let area = centered(area, MAX_CONTENT_WIDTH);
    let margin = if area.width > 8 { 2 } else { 0 };
    area.inner(Margin::new(margin, 0))
}

/// Width of [`content_area`] for a terminal `width` columns wide.
pub fn content_width(width: u16) -> u16 {
    content_area(Rect::new(0, 0, width, 1)).width
}

/// Width of each of `cols` columns separated by `gap`.
pub fn column_width(width: u16, cols: u16, gap: u16) -> u16 {
    let cols = cols.max(1);
    width.saturating_sub(gap * (cols - 1)) / cols
}

/// Split `area` into `cols` equal columns separated by `gap`.
pub fn columns(area: Rect, cols: u16, gap: u16) -> Vec<Rect> {
    let width = column_width(area.width, cols, gap);
    (0..cols.max(1))
        .map(|i| Rect {
            x: area.x + i * (width + gap),
            width,
            ..area
        })
        .collect()
}

/// Greedy word wrap into lines at most `width` characters wide.
///
/// Explicit newlines start a new line and words longer than `width` are
/// split. Always returns at least one line.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut len = 0;
        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while word.len() > width {
                if len > 0 {
                    lines.push(std::mem::take(&mut current));
                    len = 0;
                }
                let rest = word.split_off(width);
                lines.push(word.into_iter().collect());
                word = rest;
            }
            if len > 0 && len + 1 + word.len() > width {
                lines.push(std::mem::take(&mut current));
                len = 0;
            }
            if len > 0 {
                current.push(' ');
                len += 1;
            }
            len += word.len();
            current.extend(word);
        }
        lines.push(current);
    }
    lines
}

/// Number of rows `text` takes when wrapped to `width`.
pub fn wrapped_rows(text: &str, width: u16) -> u16 {
    wrap_text(text, width).len() as u16
}

/// Paint pre-wrapped lines into `area`, one per row.
pub fn render_lines(area: Rect, buf: &mut Buffer, lines: &[String], style: Style, alignment: Alignment) {
    let lines: Vec<Line> = lines
        .iter()
        .map(|l| Line::styled(l.clone(), style))
        .collect();
    Paragraph::new(lines).alignment(alignment).render(area, buf);
}

/// Gap between chips on a row.
pub const CHIP_GAP: u16 = 2;

/// A bracketed tag label.
pub fn chip(label: &str) -> String {
    format!("[ {label} ]")
}

/// Greedily pack chips into rows no wider than `width`.
pub fn pack_chips<'a>(labels: &[&'a str], width: u16) -> Vec<Vec<&'a str>> {
    let width = usize::from(width.max(1));
    let gap = usize::from(CHIP_GAP);
    let mut rows: Vec<Vec<&'a str>> = Vec::new();
    let mut used = 0;
    for &label in labels {
        let len = chip(label).chars().count();
        match rows.last_mut() {
            Some(current) if used + gap + len <= width => {
                current.push(label);
                used += gap + len;
            }
            _ => {
                rows.push(vec![label]);
                used = len;
            }
        }
    }
    rows
}

/// One row of chips.
pub fn chip_line(labels: &[&str], style: Style) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" ".repeat(usize::from(CHIP_GAP))));
        }
        spans.push(Span::styled(chip(label), style));
    }
    Line::from(spans)
}

/// Rounded card border, highlighted in the accent colour when selected.
pub fn card(palette: &Palette, highlighted: bool) -> Block<'static> {
    let style = if highlighted {
        palette.accent_style()
    } else {
        palette.border_style()
    };
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(style)
}

/// A section header: badge, two-tone title and a wrapped blurb.
#[derive(Debug, Clone, Copy)]
pub struct Header {
    pub badge: &'static str,
    pub title: &'static str,
    pub highlight: &'static str,
    pub blurb: &'static str,
}

impl Header {
    const BLURB_WIDTH: u16 = 90;

    /// Rows the header takes, including the blank row after it.
    pub fn height(&self, width: u16) -> u16 {
        3 + wrapped_rows(self.blurb, width.min(Self::BLURB_WIDTH)) + 1
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, palette: &Palette) {
        Paragraph::new(Line::from(Span::styled(
            format!("‹ {} ›", self.badge),
            palette.accent_style(),
        )))
        .alignment(Alignment::Center)
        .render(row(area, 0, 1), buf);

        let mut spans = vec![Span::styled(
            format!("{} ", self.title),
            Style::new().fg(palette.fg).add_modifier(Modifier::BOLD),
        )];
        spans.extend(palette.gradient(self.highlight));
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(row(area, 1, 1), buf);

        let blurb_area = centered(area, Self::BLURB_WIDTH);
        let lines = wrap_text(self.blurb, blurb_area.width);
        render_lines(
            row(blurb_area, 3, lines.len() as u16),
            buf,
            &lines,
            palette.muted_style(),
            Alignment::Center,
        );
    }
}
