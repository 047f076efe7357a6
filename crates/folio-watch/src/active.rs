//! Active navigation link tracking.

use folio_core::Section;

/// A section becomes active once its top is within this many rows of the
/// viewport top (100px at 16px per row, rounded down).
pub const ACTIVE_OFFSET_ROWS: i32 = 6;

/// Scroll distance after which the navigation bar gets its solid backdrop.
pub const SCROLLED_THRESHOLD_ROWS: u16 = 3;

/// Whether the page has scrolled far enough to restyle the navigation bar.
pub fn is_scrolled(scroll_rows: u16) -> bool {
    scroll_rows > SCROLLED_THRESHOLD_ROWS
}

/// Tracks which section the navigation bar highlights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActiveSectionTracker {
    active: Section,
}

impl ActiveSectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Re-evaluate after a scroll.
    ///
    /// `tops` gives each section's top row relative to the viewport, in page
    /// order; `None` means the section is not laid out and is skipped. The
    /// last section whose top has reached [`ACTIVE_OFFSET_ROWS`] wins. If none
    /// has, the previous choice is kept.
    pub fn update<I>(&mut self, tops: I) -> Section
    where
        I: IntoIterator<Item = (Section, Option<i32>)>,
        I::IntoIter: DoubleEndedIterator,
    {
        let found = tops
            .into_iter()
            .rev()
            .find_map(|(section, top)| match top {
                Some(top) if top <= ACTIVE_OFFSET_ROWS => Some(section),
                _ => None,
            });
        if let Some(section) = found
            && section != self.active
        {
            log::trace!("active section {:?} -> {:?}", self.active, section);
            self.active = section;
        }
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tops(values: [i32; 5]) -> Vec<(Section, Option<i32>)> {
        Section::ALL
            .into_iter()
            .zip(values)
            .map(|(s, t)| (s, Some(t)))
            .collect()
    }

    #[test]
    fn test_defaults_to_home() {
        assert_eq!(ActiveSectionTracker::new().active(), Section::Home);
    }

    #[test]
    fn test_last_section_past_offset_wins() {
        let mut tracker = ActiveSectionTracker::new();
        assert_eq!(tracker.update(tops([-80, -40, 5, 40, 80])), Section::Skills);
        assert_eq!(
            tracker.update(tops([-80, -40, -10, 6, 40])),
            Section::Projects
        );
    }

    #[test]
    fn test_top_of_page_is_home() {
        let mut tracker = ActiveSectionTracker::new();
        tracker.update(tops([-80, -40, 5, 40, 80]));
        assert_eq!(tracker.update(tops([0, 30, 60, 90, 120])), Section::Home);
    }

    #[test]
    fn test_missing_sections_skipped() {
        let mut tracker = ActiveSectionTracker::new();
        let mut positions = tops([-80, -40, 2, 40, 80]);
        positions[2].1 = None;
        assert_eq!(tracker.update(positions), Section::About);
    }

    #[test]
    fn test_nothing_reached_keeps_previous() {
        let mut tracker = ActiveSectionTracker::new();
        tracker.update(tops([-80, -40, 5, 40, 80]));
        let none: Vec<(Section, Option<i32>)> =
            Section::ALL.into_iter().map(|s| (s, None)).collect();
        assert_eq!(tracker.update(none), Section::Skills);
    }

    #[test]
    fn test_scrolled_threshold() {
        assert!(!is_scrolled(0));
        assert!(!is_scrolled(SCROLLED_THRESHOLD_ROWS));
        assert!(is_scrolled(SCROLLED_THRESHOLD_ROWS + 1));
    }
}
