//! Drawing surface abstraction.

/// Virtual pixel width of one terminal cell.
pub const CELL_WIDTH_PX: u32 = 8;

/// Virtual pixel height of one terminal cell.
pub const CELL_HEIGHT_PX: u32 = 16;

/// Surface dimensions in virtual pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Pixel size of an area measured in terminal cells.
    pub fn from_cells(columns: u16, rows: u16) -> Self {
        Self {
            width: u32::from(columns) * CELL_WIDTH_PX,
            height: u32::from(rows) * CELL_HEIGHT_PX,
        }
    }

    /// A surface with no area cannot be drawn on.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// A 2D drawing target.
///
/// Coordinates are virtual pixels with the origin at the top left and `y`
/// growing downwards. Alpha is in `0.0..=1.0`.
pub trait Surface {
    /// Current surface size.
    fn size(&self) -> Size;

    /// Erase everything drawn so far.
    fn clear(&mut self);

    /// Draw a filled circle.
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, alpha: f64);

    /// Draw a line segment.
    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), alpha: f64);
}

/// Surface that records draw calls, for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub size: Size,
    pub clears: usize,
    pub circles: Vec<(f64, f64, f64, f64)>,
    pub lines: Vec<((f64, f64), (f64, f64), f64)>,
}

#[cfg(test)]
impl RecordingSurface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self) {
        self.clears += 1;
        self.circles.clear();
        self.lines.clear();
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, alpha: f64) {
        self.circles.push((x, y, radius, alpha));
    }

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), alpha: f64) {
        self.lines.push((from, to, alpha));
    }
}
