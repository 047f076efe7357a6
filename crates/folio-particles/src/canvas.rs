//! Terminal surface backed by a braille canvas.

use folio_core::BACKGROUND_RGB;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    symbols::Marker,
    widgets::{
        Widget,
        canvas::{Canvas, Circle, Line, Points},
    },
};

use crate::color::blend;
use crate::surface::{Size, Surface};

#[derive(Debug, Clone, Copy)]
struct Dot {
    x: f64,
    y: f64,
    radius: f64,
    alpha: f64,
}

#[derive(Debug, Clone, Copy)]
struct Link {
    from: (f64, f64),
    to: (f64, f64),
    alpha: f64,
}

/// A [`Surface`] that buffers one frame of shapes and paints them as a
/// ratatui braille canvas.
///
/// Terminal colours have no alpha, so every shape is composited over the
/// page background before painting. Links go on the lower layer so dots stay
/// visible where they overlap.
#[derive(Debug, Clone)]
pub struct CanvasSurface {
    size: Size,
    accent: (u8, u8, u8),
    dots: Vec<Dot>,
    links: Vec<Link>,
}

impl CanvasSurface {
    pub fn new(size: Size, accent: (u8, u8, u8)) -> Self {
        Self {
            size,
            accent,
            dots: Vec::new(),
            links: Vec::new(),
        }
    }

    /// Follow a viewport resize.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub fn set_accent(&mut self, accent: (u8, u8, u8)) {
        self.accent = accent;
    }

    fn flip(&self, y: f64) -> f64 {
        // Canvas y grows upwards.
        f64::from(self.size.height) - y
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self) {
        self.dots.clear();
        self.links.clear();
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, alpha: f64) {
        self.dots.push(Dot {
            x,
            y,
            radius,
            alpha,
        });
    }

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), alpha: f64) {
        self.links.push(Link { from, to, alpha });
    }
}

impl Widget for &CanvasSurface {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, f64::from(self.size.width)])
            .y_bounds([0.0, f64::from(self.size.height)])
            .paint(|ctx| {
                for link in &self.links {
                    ctx.draw(&Line {
                        x1: link.from.0,
                        y1: self.flip(link.from.1),
                        x2: link.to.0,
                        y2: self.flip(link.to.1),
                        color: blend(self.accent, BACKGROUND_RGB, link.alpha),
                    });
                }
                ctx.layer();
                for dot in &self.dots {
                    let color = blend(self.accent, BACKGROUND_RGB, dot.alpha);
                    let y = self.flip(dot.y);
                    ctx.draw(&Points {
                        coords: &[(dot.x, y)],
                        color,
                    });
                    ctx.draw(&Circle {
                        x: dot.x,
                        y,
                        radius: dot.radius,
                        color,
                    });
                }
            })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_drops_buffered_shapes() {
        let mut surface = CanvasSurface::new(Size::new(80, 32), (34, 211, 238));
        surface.fill_circle(10.0, 10.0, 2.0, 0.5);
        surface.stroke_line((0.0, 0.0), (10.0, 10.0), 0.1);
        surface.clear();
        assert!(surface.dots.is_empty());
        assert!(surface.links.is_empty());
    }

    #[test]
    fn test_renders_dot_into_buffer() {
        let size = Size::from_cells(10, 2);
        let mut surface = CanvasSurface::new(size, (34, 211, 238));
        surface.fill_circle(40.0, 16.0, 1.0, 0.7);

        let area = Rect::new(0, 0, 10, 2);
        let mut buf = Buffer::empty(area);
        (&surface).render(area, &mut buf);

        let painted = buf.content().iter().filter(|c| c.symbol() != " ").count();
        assert!(painted > 0);
    }
}
