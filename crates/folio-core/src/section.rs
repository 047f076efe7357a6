//! Page sections in display order.

/// A navigable section of the portfolio.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    /// All navigable sections, top to bottom.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// Label shown in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    /// Anchor id, as used by footer links.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "#home",
            Section::About => "#about",
            Section::Skills => "#skills",
            Section::Projects => "#projects",
            Section::Contact => "#contact",
        }
    }

    /// Resolve an anchor like `#skills` back to its section.
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.anchor() == anchor)
    }

    /// Position of this section in [`Section::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Section for a 1-based hotkey digit.
    pub fn from_digit(digit: u32) -> Option<Self> {
        (digit as usize)
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Cycle to the next section, wrapping to the top.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Cycle to the previous section, wrapping to the bottom.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_cycle() {
        assert_eq!(Section::Home.next(), Section::About);
        assert_eq!(Section::Contact.next(), Section::Home);
        assert_eq!(Section::Home.prev(), Section::Contact);
    }

    #[test]
    fn test_anchor_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_anchor(section.anchor()), Some(section));
        }
        assert_eq!(Section::from_anchor("#nowhere"), None);
    }

    #[test]
    fn test_from_digit() {
        assert_eq!(Section::from_digit(1), Some(Section::Home));
        assert_eq!(Section::from_digit(5), Some(Section::Contact));
        assert_eq!(Section::from_digit(0), None);
        assert_eq!(Section::from_digit(6), None);
    }
}
