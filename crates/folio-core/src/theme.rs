//! Accent colour themes.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Accent colour used for highlights, particles and progress bars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    #[default]
    Cyan,
    Blue,
    Green,
    Magenta,
    Yellow,
    White,
}

impl ColorTheme {
    /// Cycle to the next colour theme.
    pub fn next(self) -> Self {
        match self {
            ColorTheme::Cyan => ColorTheme::Blue,
            ColorTheme::Blue => ColorTheme::Green,
            ColorTheme::Green => ColorTheme::Magenta,
            ColorTheme::Magenta => ColorTheme::Yellow,
            ColorTheme::Yellow => ColorTheme::White,
            ColorTheme::White => ColorTheme::Cyan,
        }
    }

    /// Accent as an RGB triple.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            ColorTheme::Cyan => (34, 211, 238),
            ColorTheme::Blue => (59, 130, 246),
            ColorTheme::Green => (74, 222, 128),
            ColorTheme::Magenta => (192, 132, 252),
            ColorTheme::Yellow => (250, 204, 21),
            ColorTheme::White => (241, 245, 249),
        }
    }

    /// Accent as a Ratatui colour.
    pub fn color(self) -> Color {
        let (r, g, b) = self.rgb();
        Color::Rgb(r, g, b)
    }
}

/// Page background, matching `hsl(222 47% 8%)`.
pub const BACKGROUND_RGB: (u8, u8, u8) = (11, 17, 30);

/// Linear interpolation between two colours, `t` clamped to `0.0..=1.0`.
pub fn lerp_rgb(from: (u8, u8, u8), to: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let t = t.clamp(0.0, 1.0);
    let channel = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
    (
        channel(from.0, to.0),
        channel(from.1, to.1),
        channel(from.2, to.2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_cycle_returns_to_start() {
        let mut theme = ColorTheme::default();
        for _ in 0..6 {
            theme = theme.next();
        }
        assert_eq!(theme, ColorTheme::Cyan);
    }

    #[test]
    fn test_accent_color_matches_rgb() {
        assert_eq!(ColorTheme::Cyan.color(), Color::Rgb(34, 211, 238));
    }

    #[test]
    fn test_lerp_rgb() {
        assert_eq!(lerp_rgb((0, 0, 0), (200, 100, 50), 0.5), (100, 50, 25));
        assert_eq!(lerp_rgb((0, 0, 0), (200, 100, 50), 2.0), (200, 100, 50));
        assert_eq!(lerp_rgb((10, 20, 30), (200, 100, 50), 0.0), (10, 20, 30));
    }
}
