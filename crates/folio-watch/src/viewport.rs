//! Row spans and how much of them a viewport shows.

/// Vertical extent of an element, in rows relative to the viewport top.
/// `top` is negative once the element has scrolled past the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSpan {
    pub top: i32,
    pub height: u16,
}

impl RowSpan {
    pub const fn new(top: i32, height: u16) -> Self {
        Self { top, height }
    }

    pub fn bottom(self) -> i32 {
        self.top + i32::from(self.height)
    }
}

/// Fraction of `span` inside a viewport of `viewport_rows` rows.
pub fn visible_fraction(span: RowSpan, viewport_rows: u16) -> f64 {
    if span.height == 0 {
        return 0.0;
    }
    let start = span.top.max(0);
    let end = span.bottom().min(i32::from(viewport_rows));
    let overlap = (end - start).max(0);
    f64::from(overlap) / f64::from(span.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fully_visible() {
        assert_eq!(visible_fraction(RowSpan::new(2, 4), 20), 1.0);
    }

    #[test]
    fn test_partially_visible() {
        assert_eq!(visible_fraction(RowSpan::new(18, 4), 20), 0.5);
        assert_eq!(visible_fraction(RowSpan::new(-3, 4), 20), 0.25);
    }

    #[test]
    fn test_not_visible() {
        assert_eq!(visible_fraction(RowSpan::new(25, 4), 20), 0.0);
        assert_eq!(visible_fraction(RowSpan::new(-10, 4), 20), 0.0);
        assert_eq!(visible_fraction(RowSpan::new(5, 0), 20), 0.0);
    }
}
