//! Vertical layout of the whole page.

use folio_core::{ProjectFilter, Section};
use ratatui::layout::Rect;

use crate::sections::{
    about::AboutLayout, contact::ContactLayout, footer, hero, projects::ProjectsLayout,
    skills::SkillsLayout,
};

/// Where every section sits on the page for a given terminal size and
/// project filter. Rows are page rows, counted from the top of the hero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub width: u16,
    pub viewport_rows: u16,
    pub about: AboutLayout,
    pub skills: SkillsLayout,
    pub projects: ProjectsLayout,
    pub contact: ContactLayout,
    tops: [u16; 5],
    heights: [u16; 5],
    pub footer_top: u16,
    pub footer_height: u16,
    pub total: u16,
}

impl PageLayout {
    pub fn new(width: u16, viewport_rows: u16, filter: ProjectFilter) -> Self {
        let about = AboutLayout::new(width);
        let skills = SkillsLayout::new(width);
        let projects = ProjectsLayout::new(width, filter);
        let contact = ContactLayout::new(width);
        let heights = [
            hero::height(viewport_rows),
            about.height,
            skills.height,
            projects.height,
            contact.height,
        ];

        let mut tops = [0; 5];
        let mut top = 0u16;
        for (slot, height) in tops.iter_mut().zip(heights) {
            *slot = top;
            top = top.saturating_add(height);
        }
        let footer_top = top;
        let footer_height = footer::height(width);

        Self {
            width,
            viewport_rows,
            about,
            skills,
            projects,
            contact,
            tops,
            heights,
            footer_top,
            footer_height,
            total: footer_top.saturating_add(footer_height),
        }
    }

    pub fn top(&self, section: Section) -> u16 {
        self.tops[section.index()]
    }

    pub fn height(&self, section: Section) -> u16 {
        self.heights[section.index()]
    }

    /// Area of `section` on the page buffer.
    pub fn area(&self, section: Section) -> Rect {
        Rect::new(0, self.top(section), self.width, self.height(section))
    }

    pub fn footer_area(&self) -> Rect {
        Rect::new(0, self.footer_top, self.width, self.footer_height)
    }

    pub fn page_area(&self) -> Rect {
        Rect::new(0, 0, self.width, self.total)
    }

    /// Furthest the page can scroll.
    pub fn max_scroll(&self) -> u16 {
        self.total.saturating_sub(self.viewport_rows)
    }

    /// Scroll position that brings `section` to the top of the viewport, or
    /// as close as the page allows.
    pub fn scroll_to(&self, section: Section) -> u16 {
        self.top(section).min(self.max_scroll())
    }

    /// Page row `row` relative to the viewport top at `scroll`.
    pub fn relative(row: u16, scroll: u16) -> i32 {
        i32::from(row) - i32::from(scroll)
    }

    /// Each section's top relative to the viewport at `scroll`.
    pub fn section_tops(&self, scroll: u16) -> [(Section, Option<i32>); 5] {
        Section::ALL.map(|section| (section, Some(Self::relative(self.top(section), scroll))))
    }

    /// Whether `area` overlaps the viewport at `scroll`.
    pub fn is_visible(&self, area: Rect, scroll: u16) -> bool {
        area.bottom() > scroll && area.top() < scroll.saturating_add(self.viewport_rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_stack_in_order() {
        let layout = PageLayout::new(120, 40, ProjectFilter::All);
        assert_eq!(layout.top(Section::Home), 0);
        assert_eq!(layout.height(Section::Home), 40);
        for pair in Section::ALL.windows(2) {
            assert_eq!(
                layout.top(pair[1]),
                layout.top(pair[0]) + layout.height(pair[0])
            );
        }
        assert_eq!(
            layout.footer_top,
            layout.top(Section::Contact) + layout.height(Section::Contact)
        );
        assert_eq!(layout.total, layout.footer_top + layout.footer_height);
    }

    #[test]
    fn test_hero_has_minimum_height() {
        let layout = PageLayout::new(120, 8, ProjectFilter::All);
        assert_eq!(layout.height(Section::Home), hero::MIN_HEIGHT);
    }

    #[test]
    fn test_scroll_to_clamps_to_page_end() {
        let layout = PageLayout::new(120, 40, ProjectFilter::All);
        assert_eq!(layout.scroll_to(Section::About), layout.top(Section::About));
        assert!(layout.scroll_to(Section::Contact) <= layout.max_scroll());
    }

    #[test]
    fn test_filter_moves_contact() {
        let all = PageLayout::new(120, 40, ProjectFilter::All);
        let dashboard = PageLayout::new(120, 40, ProjectFilter::Dashboard);
        assert!(dashboard.top(Section::Contact) < all.top(Section::Contact));
        assert_eq!(dashboard.top(Section::Projects), all.top(Section::Projects));
    }

    #[test]
    fn test_section_tops_relative_to_scroll() {
        let layout = PageLayout::new(120, 40, ProjectFilter::All);
        let tops = layout.section_tops(10);
        assert_eq!(tops[0], (Section::Home, Some(-10)));
        assert_eq!(
            tops[1].1,
            Some(i32::from(layout.top(Section::About)) - 10)
        );
    }

    #[test]
    fn test_visibility() {
        let layout = PageLayout::new(120, 40, ProjectFilter::All);
        assert!(layout.is_visible(layout.area(Section::Home), 0));
        assert!(!layout.is_visible(layout.footer_area(), 0));
        assert!(layout.is_visible(layout.footer_area(), layout.max_scroll()));
    }
}
