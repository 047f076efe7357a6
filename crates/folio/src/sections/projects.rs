//! Projects: filter tabs over a grid of project cards.

use folio_core::{PROJECTS, Project, ProjectFilter, filter_projects};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::{
    Header, PageContext, Palette, SECTION_PADDING, card, chip_line, column_width, content_area,
    content_width, pack_chips, render_lines, row, wrap_text,
};

pub const HEADER: Header = Header {
    badge: "My Projects",
    title: "Featured",
    highlight: "Work",
    blurb: "Here are some of my recent projects that showcase my skills and expertise. \
        Each project represents a unique challenge and creative solution.",
};

/// Descriptions are cut to this many lines.
pub const DESCRIPTION_LINES: usize = 3;

const MORE_URL: &str = "https://github.com/chusamaikram";
const GAP: u16 = 2;

/// Number of card columns for a content area `width` wide.
pub fn grid_columns(width: u16) -> u16 {
    match width {
        w if w >= 100 => 3,
        w if w >= 64 => 2,
        _ => 1,
    }
}

/// Description wrapped and clamped to [`DESCRIPTION_LINES`], with an
/// ellipsis when cut.
fn description_lines(project: &Project, width: u16) -> Vec<String> {
    let mut lines = wrap_text(project.description, width);
    if lines.len() > DESCRIPTION_LINES {
        lines.truncate(DESCRIPTION_LINES);
        if let Some(last) = lines.last_mut() {
            let keep = usize::from(width).saturating_sub(1);
            if last.chars().count() > keep {
                *last = last.chars().take(keep).collect();
            }
            last.push('…');
        }
    }
    lines
}

/// Pre-wrapped text of one card.
struct CardText {
    title: Vec<String>,
    description: Vec<String>,
    tags: Vec<Vec<&'static str>>,
}

impl CardText {
    fn new(project: &Project, width: u16) -> Self {
        let tags: Vec<&'static str> = project.visible_tags().collect();
        Self {
            title: wrap_text(project.title, width),
            description: description_lines(project, width),
            tags: pack_chips(&tags, width),
        }
    }

    /// Card height including borders: kind row, title, blank, description,
    /// blank, tags, blank, two link rows.
    fn height(&self) -> u16 {
        let text = self.title.len() + self.description.len() + self.tags.len();
        text as u16 + 9
    }
}

/// A card's position relative to the section top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSlot {
    pub top: u16,
    pub column: u16,
    pub height: u16,
}

/// Row offsets within the projects section for one filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectsLayout {
    pub filter: ProjectFilter,
    pub tabs_top: u16,
    pub columns: u16,
    pub card_width: u16,
    /// One slot per visible project, in catalogue order.
    pub cards: Vec<CardSlot>,
    pub more_top: u16,
    pub height: u16,
}

impl ProjectsLayout {
    pub fn new(width: u16, filter: ProjectFilter) -> Self {
        let inner = content_width(width);
        let mut top = SECTION_PADDING + HEADER.height(inner);
        let tabs_top = top;
        top += 2;

        let columns = grid_columns(inner);
        let card_width = column_width(inner, columns, GAP);
        let text_width = card_width.saturating_sub(4);

        let visible = filter_projects(PROJECTS, filter);
        let mut cards = Vec::with_capacity(visible.len());
        if visible.is_empty() {
            top += 2;
        }
        for chunk in visible.chunks(usize::from(columns)) {
            let height = chunk
                .iter()
                .map(|p| CardText::new(p, text_width).height())
                .max()
                .unwrap_or(0);
            for column in 0..chunk.len() as u16 {
                cards.push(CardSlot {
                    top,
                    column,
                    height,
                });
            }
            top += height + 1;
        }

        let more_top = top;
        top += 1;

        Self {
            filter,
            tabs_top,
            columns,
            card_width,
            cards,
            more_top,
            height: top + SECTION_PADDING,
        }
    }
}

pub fn render(area: Rect, buf: &mut Buffer, ctx: &PageContext, layout: &ProjectsLayout) {
    let p = &ctx.palette;
    let inner = content_area(area);
    HEADER.render(row(inner, SECTION_PADDING, area.height), buf, p);
    render_tabs(row(inner, layout.tabs_top, 1), buf, p, layout.filter);

    let visible = filter_projects(PROJECTS, layout.filter);
    if visible.is_empty() {
        Paragraph::new(Line::styled("No projects in this category.", p.muted_style()))
            .alignment(Alignment::Center)
            .render(row(inner, layout.tabs_top + 2, 1), buf);
    }
    for (index, (project, slot)) in visible.iter().zip(&layout.cards).enumerate() {
        let card_area = Rect {
            x: inner.x + slot.column * (layout.card_width + GAP),
            width: layout.card_width,
            ..row(inner, slot.top, slot.height)
        };
        render_card(card_area, buf, p, project, index == ctx.selected_project);
    }

    Paragraph::new(Line::from(vec![
        Span::styled("View More on GitHub → ", Style::new().fg(p.fg)),
        Span::styled(MORE_URL, p.accent_style().add_modifier(Modifier::UNDERLINED)),
    ]))
    .alignment(Alignment::Center)
    .render(row(inner, layout.more_top, 1), buf);
}

fn render_tabs(area: Rect, buf: &mut Buffer, p: &Palette, active: ProjectFilter) {
    let mut spans = Vec::new();
    for (i, filter) in ProjectFilter::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let label = format!(" {} ", filter.label());
        spans.push(if *filter == active {
            Span::styled(
                label,
                Style::new().fg(p.bg).bg(p.accent).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(label, p.muted_style())
        });
    }
    spans.push(Span::styled("   (f)", p.muted_style()));
    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .render(area, buf);
}

fn render_card(area: Rect, buf: &mut Buffer, p: &Palette, project: &Project, selected: bool) {
    let block = card(p, selected);
    let body = block.inner(area).inner(Margin::new(1, 0));
    block.render(area, buf);
    let text = CardText::new(project, body.width);

    let mut kind = vec![Span::styled(project.category.label(), p.muted_style())];
    if project.featured {
        kind.push(Span::raw("  "));
        kind.push(Span::styled(
            "★ Featured",
            Style::new().fg(p.bg).bg(p.accent).add_modifier(Modifier::BOLD),
        ));
    }
    Paragraph::new(Line::from(kind)).render(row(body, 0, 1), buf);

    let mut top = 1;
    let title_style = if selected {
        p.accent_style().add_modifier(Modifier::BOLD)
    } else {
        Style::new().fg(p.fg).add_modifier(Modifier::BOLD)
    };
    render_lines(
        row(body, top, text.title.len() as u16),
        buf,
        &text.title,
        title_style,
        Alignment::Left,
    );
    top += text.title.len() as u16 + 1;

    render_lines(
        row(body, top, text.description.len() as u16),
        buf,
        &text.description,
        p.muted_style(),
        Alignment::Left,
    );
    top += text.description.len() as u16 + 1;

    for tags in &text.tags {
        Paragraph::new(chip_line(tags, p.accent_style())).render(row(body, top, 1), buf);
        top += 1;
    }

    // Links sit on the last two rows so cards in a row line up.
    let links_top = body.height.saturating_sub(2);
    Paragraph::new(vec![
        Line::from(vec![
            Span::styled("↗ Live  ", Style::new().fg(p.fg)),
            Span::styled(project.live_url, p.accent_style()),
        ]),
        Line::from(vec![
            Span::styled("⌥ Code  ", Style::new().fg(p.fg)),
            Span::styled(project.github_url, p.muted_style()),
        ]),
    ])
    .render(row(body, links_top, 2), buf);
}
