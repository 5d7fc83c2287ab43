//! Reference grid: a fixed 10×10 split of the surface with lettered rows and
//! numbered columns, so a location can be called out as e.g. "C7".

use tacmap_engine::coords::{SurfaceSize, Vec2};

use crate::painter::Painter;
use crate::resources::DrawResources;

/// Rows and columns on each axis.
pub const GRID_CELLS: u32 = 10;
/// Distance of row labels from the left edge and column labels from the top.
pub const LABEL_INSET: f32 = 2.0;

/// Grid geometry for one surface size.
///
/// Steps are whole pixels (`width / 10`, `height / 10`), so on surfaces whose
/// size is not a multiple of ten the last line sits slightly inside the edge.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GridLayout {
    pub surface: SurfaceSize,
    pub column_step: u32,
    pub row_step: u32,
}

impl GridLayout {
    pub fn new(surface: SurfaceSize) -> Self {
        Self {
            surface,
            column_step: surface.width / GRID_CELLS,
            row_step: surface.height / GRID_CELLS,
        }
    }

    /// `"A"` for the top row through `"J"` for the bottom.
    pub fn row_label(row: u32) -> String {
        char::from(b'A' + row as u8).to_string()
    }

    /// `"1"` for the leftmost column through `"10"` for the rightmost.
    pub fn column_label(column: u32) -> String {
        (column + 1).to_string()
    }

    /// Line closing the bottom of `row`, spanning the full width.
    pub fn row_line(&self, row: u32) -> (Vec2, Vec2) {
        let y = step_offset(self.row_step, row + 1) as f32;
        (Vec2::new(0.0, y), Vec2::new(self.surface.width as f32, y))
    }

    /// Line closing the right side of `column`, spanning the full height.
    pub fn column_line(&self, column: u32) -> (Vec2, Vec2) {
        let x = step_offset(self.column_step, column + 1) as f32;
        (Vec2::new(x, 0.0), Vec2::new(x, self.surface.height as f32))
    }

    /// Top-left for a row label of `extent`, vertically centred in the row.
    pub fn row_label_origin(&self, row: u32, extent: Vec2) -> Vec2 {
        let middle = u64::from(self.row_step / 2) + step_offset(self.row_step, row);
        Vec2::new(LABEL_INSET, middle as f32 - extent.y / 2.0)
    }

    /// Top-left for a column label of `extent`, horizontally centred in the column.
    pub fn column_label_origin(&self, column: u32, extent: Vec2) -> Vec2 {
        let middle = u64::from(self.column_step / 2) + step_offset(self.column_step, column);
        Vec2::new(middle as f32 - extent.x / 2.0, LABEL_INSET)
    }
}

/// `step × count` in a type that cannot overflow for any `u32` surface.
#[inline]
fn step_offset(step: u32, count: u32) -> u64 {
    u64::from(step) * u64::from(count)
}

/// Records all grid lines and labels, row then column for each index.
pub(crate) fn paint_grid(painter: &mut Painter<'_>, layout: &GridLayout, res: &DrawResources) {
    for i in 0..GRID_CELLS {
        let (from, to) = layout.row_line(i);
        painter.line(from, to, res.grid_pen);
        let label = GridLayout::row_label(i);
        let extent = painter.measure_text(&label, res.font, res.font_size);
        let origin = layout.row_label_origin(i, extent);
        painter.text(label, res.font, res.font_size, res.grid_text, origin);

        let (from, to) = layout.column_line(i);
        painter.line(from, to, res.grid_pen);
        let label = GridLayout::column_label(i);
        let extent = painter.measure_text(&label, res.font, res.font_size);
        let origin = layout.column_label_origin(i, extent);
        painter.text(label, res.font, res.font_size, res.grid_text, origin);
    }
}
