//! Colour helpers for translucent drawing on an opaque terminal.

use folio_core::lerp_rgb;
use ratatui::style::Color;

/// Composite `fg` over `bg` with the given alpha.
pub fn blend(fg: (u8, u8, u8), bg: (u8, u8, u8), alpha: f64) -> Color {
    let (r, g, b) = lerp_rgb(bg, fg, alpha);
    Color::Rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_extremes() {
        let fg = (34, 211, 238);
        let bg = (11, 17, 30);
        assert_eq!(blend(fg, bg, 1.0), Color::Rgb(34, 211, 238));
        assert_eq!(blend(fg, bg, 0.0), Color::Rgb(11, 17, 30));
        assert_eq!(blend(fg, bg, 5.0), Color::Rgb(34, 211, 238));
    }
}
