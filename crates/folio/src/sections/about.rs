//! About: counters, biography and services.

use folio_core::{PROFILE, SERVICES, STATS};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::{
    Header, PageContext, Palette, SECTION_PADDING, card, column_width, columns, content_area,
    content_width, render_lines, row, wrap_text, wrapped_rows,
};

pub const HEADER: Header = Header {
    badge: "About Me",
    title: "Passionate About",
    highlight: "Creating",
    blurb: "I'm a dedicated frontend developer with a love for clean code and beautiful design. \
        My goal is to build web experiences that are both functional and delightful.",
};

const BIO: &[&str] = &[
    "I'm a frontend developer with a growing passion for creating clean and interactive web \
     applications. Over the past few months, I've been exploring web development, building \
     personal projects and UI/UX replicas to sharpen my skills and understand real-world design \
     and functionality.",
    "I primarily work with React and Tailwind CSS, and I'm currently learning Next.js to expand \
     my capabilities in building modern, scalable web applications. My focus is on translating \
     designs into responsive, user-friendly websites while practicing efficient code structure \
     and dynamic functionality.",
    "When I'm not coding, I enjoy experimenting with new web technologies, learning from online \
     communities, and improving my workflow by building small projects that challenge my skills.",
];

/// Height of a bordered stat card: value and label.
pub const STAT_HEIGHT: u16 = 4;

const WIDE: u16 = 60;
const GAP: u16 = 2;

fn details() -> [(&'static str, &'static str); 4] {
    [
        ("Location", PROFILE.location),
        ("Email", PROFILE.email),
        ("Experience", PROFILE.experience),
        ("Availability", "Open to Work"),
    ]
}

/// Row offsets within the about section, relative to its top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutLayout {
    /// Top row of each stat card, in [`STATS`] order.
    pub stat_rows: Vec<u16>,
    pub body_top: u16,
    pub services_top: u16,
    pub service_height: u16,
    pub height: u16,
    wide: bool,
}

impl AboutLayout {
    pub fn new(width: u16) -> Self {
        let inner = content_width(width);
        let wide = inner >= WIDE;
        let mut top = SECTION_PADDING + HEADER.height(inner);

        let stat_rows: Vec<u16> = if wide {
            vec![top; STATS.len()]
        } else {
            (0..STATS.len() as u16)
                .map(|i| top + i * STAT_HEIGHT)
                .collect()
        };
        top += if wide {
            STAT_HEIGHT
        } else {
            STAT_HEIGHT * STATS.len() as u16
        };
        top += 1;

        let body_top = top;
        top += body_height(inner) + 1;

        let services_top = top;
        let cols = if wide { SERVICES.len() as u16 } else { 1 };
        let service_width = column_width(inner, cols, GAP);
        let service_height = SERVICES
            .iter()
            .map(|s| 4 + wrapped_rows(s.description, service_width.saturating_sub(4)))
            .max()
            .unwrap_or(0);
        top += 2;
        top += if wide {
            service_height
        } else {
            service_height * SERVICES.len() as u16
        };

        Self {
            stat_rows,
            body_top,
            services_top,
            service_height,
            height: top + SECTION_PADDING,
            wide,
        }
    }
}

fn body_height(width: u16) -> u16 {
    let paragraphs: u16 = BIO.iter().map(|p| wrapped_rows(p, width) + 1).sum();
    2 + paragraphs + details().len() as u16
}

pub fn render(area: Rect, buf: &mut Buffer, ctx: &PageContext, layout: &AboutLayout) {
    let p = &ctx.palette;
    let inner = content_area(area);
    HEADER.render(row(inner, SECTION_PADDING, area.height), buf, p);

    render_stats(inner, buf, ctx, layout);
    render_body(row(inner, layout.body_top, area.height), buf, p);
    render_services(row(inner, layout.services_top, area.height), buf, p, layout);
}

fn render_stats(inner: Rect, buf: &mut Buffer, ctx: &PageContext, layout: &AboutLayout) {
    let p = &ctx.palette;
    let slots: Vec<Rect> = if layout.wide {
        columns(row(inner, layout.stat_rows[0], STAT_HEIGHT), STATS.len() as u16, GAP)
    } else {
        layout
            .stat_rows
            .iter()
            .map(|top| row(inner, *top, STAT_HEIGHT))
            .collect()
    };

    for (i, (stat, slot)) in STATS.iter().zip(slots).enumerate() {
        let value = ctx
            .counters
            .get(i)
            .map_or(0, |counter| counter.value_at(ctx.now_ms));
        let block = card(p, false);
        let body = block.inner(slot);
        block.render(slot, buf);
        Paragraph::new(vec![
            Line::from(vec![
                Span::styled(
                    value.to_string(),
                    Style::new().fg(p.fg).add_modifier(Modifier::BOLD),
                ),
                Span::styled(stat.suffix, p.accent_style()),
            ]),
            Line::styled(stat.label, p.muted_style()),
        ])
        .alignment(Alignment::Center)
        .render(body, buf);
    }
}

fn render_body(area: Rect, buf: &mut Buffer, p: &Palette) {
    let mut title = vec![Span::styled(
        "Transforming Ideas Into ",
        Style::new().fg(p.fg).add_modifier(Modifier::BOLD),
    )];
    title.extend(p.gradient("Digital Reality"));
    Paragraph::new(Line::from(title)).render(row(area, 0, 1), buf);

    let mut top = 2;
    for paragraph in BIO {
        let lines = wrap_text(paragraph, area.width);
        let height = lines.len() as u16;
        render_lines(
            row(area, top, height),
            buf,
            &lines,
            p.muted_style(),
            Alignment::Left,
        );
        top += height + 1;
    }

    for (label, value) in details() {
        let value_style = if label == "Availability" {
            p.accent_style()
        } else {
            Style::new().fg(p.fg)
        };
        Paragraph::new(Line::from(vec![
            Span::styled(format!("{label:<14}"), p.muted_style()),
            Span::styled(value, value_style),
        ]))
        .render(row(area, top, 1), buf);
        top += 1;
    }
}

fn render_services(area: Rect, buf: &mut Buffer, p: &Palette, layout: &AboutLayout) {
    let mut title = vec![Span::styled(
        "What I ",
        Style::new().fg(p.fg).add_modifier(Modifier::BOLD),
    )];
    title.extend(p.gradient("Offer"));
    Paragraph::new(Line::from(title))
        .alignment(Alignment::Center)
        .render(row(area, 0, 1), buf);

    let slots: Vec<Rect> = if layout.wide {
        columns(row(area, 2, layout.service_height), SERVICES.len() as u16, GAP)
    } else {
        (0..SERVICES.len() as u16)
            .map(|i| row(area, 2 + i * layout.service_height, layout.service_height))
            .collect()
    };

    for (service, slot) in SERVICES.iter().zip(slots) {
        let block = card(p, false);
        let body = block.inner(slot).inner(Margin::new(1, 0));
        block.render(slot, buf);
        Paragraph::new(Line::styled(
            service.title,
            Style::new().fg(p.fg).add_modifier(Modifier::BOLD),
        ))
        .render(row(body, 0, 1), buf);
        let lines = wrap_text(service.description, body.width);
        render_lines(
            row(body, 1, lines.len() as u16),
            buf,
            &lines,
            p.muted_style(),
            Alignment::Left,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_stats_share_a_row() {
        let layout = AboutLayout::new(120);
        assert_eq!(layout.stat_rows.len(), STATS.len());
        assert!(layout.stat_rows.iter().all(|r| *r == layout.stat_rows[0]));
        assert!(layout.body_top > layout.stat_rows[0] + STAT_HEIGHT - 1);
    }

    #[test]
    fn test_narrow_stats_stack() {
        let layout = AboutLayout::new(40);
        assert_eq!(layout.stat_rows[1] - layout.stat_rows[0], STAT_HEIGHT);
        assert!(layout.height > AboutLayout::new(120).height);
    }

    #[test]
    fn test_sections_in_order() {
        let layout = AboutLayout::new(100);
        assert!(layout.stat_rows[0] < layout.body_top);
        assert!(layout.body_top < layout.services_top);
        assert!(layout.services_top + layout.service_height < layout.height);
    }
}
