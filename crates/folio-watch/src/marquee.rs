//! Endlessly scrolling row of labels.

/// Scroll direction of a marquee row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// A row of labels repeated three times and scrolled by one copy per period.
#[derive(Debug, Clone)]
pub struct Marquee {
    strip: Vec<char>,
    copy_len: usize,
    period_ms: u64,
    direction: Direction,
}

impl Marquee {
    pub fn new(items: &[&str], period_ms: u64, direction: Direction) -> Self {
        let copy: String = items.iter().map(|item| format!(" {item}  ·")).collect();
        let copy: Vec<char> = copy.chars().collect();
        let copy_len = copy.len();
        let strip = copy.repeat(3);
        Self {
            strip,
            copy_len,
            period_ms: period_ms.max(1),
            direction,
        }
    }

    /// Character offset into the strip at `elapsed_ms`.
    pub fn offset(&self, elapsed_ms: u64) -> usize {
        if self.copy_len == 0 {
            return 0;
        }
        let phase = (elapsed_ms % self.period_ms) as f64 / self.period_ms as f64;
        let travelled = (phase * self.copy_len as f64) as usize % self.copy_len;
        match self.direction {
            Direction::Left => travelled,
            Direction::Right => (self.copy_len - travelled) % self.copy_len,
        }
    }

    /// The `width` characters visible at `elapsed_ms`.
    pub fn window(&self, elapsed_ms: u64, width: usize) -> String {
        if self.copy_len == 0 {
            return " ".repeat(width);
        }
        let start = self.offset(elapsed_ms);
        self.strip
            .iter()
            .cycle()
            .skip(start)
            .take(width)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_marquee_advances() {
        let marquee = Marquee::new(&["Git", "npm"], 1000, Direction::Left);
        assert_eq!(marquee.offset(0), 0);
        assert!(marquee.offset(500) > 0);
        assert_eq!(marquee.offset(1000), 0);
    }

    #[test]
    fn test_right_marquee_runs_backwards() {
        let left = Marquee::new(&["Git", "npm"], 1000, Direction::Left);
        let right = Marquee::new(&["Git", "npm"], 1000, Direction::Right);
        assert_eq!(right.offset(0), 0);
        assert_eq!(
            right.offset(250),
            (left.copy_len - left.offset(250)) % left.copy_len
        );
    }

    #[test]
    fn test_window_is_seamless() {
        let marquee = Marquee::new(&["HTML5", "CSS3"], 3000, Direction::Left);
        for t in (0..6000).step_by(37) {
            assert_eq!(marquee.window(t, 40).chars().count(), 40);
        }
        assert!(marquee.window(0, 40).starts_with(" HTML5  · CSS3"));
    }

    #[test]
    fn test_empty_row() {
        let marquee = Marquee::new(&[], 1000, Direction::Left);
        assert_eq!(marquee.window(123, 5), "     ");
    }
}
