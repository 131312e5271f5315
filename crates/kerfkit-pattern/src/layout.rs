//! Grid Layout Engine
//!
//! Splits a canvas region into columns and rows and yields the center,
//! size, and mirroring direction of every visible cell. Odd columns are
//! pushed down by half a cell, giving a brick-like interleave.

use kerfkit_core::{CanvasRegion, Direction, Point};
use serde::{Deserialize, Serialize};

/// One grid cell, produced fresh on every layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    pub column: u32,
    pub row: u32,
    pub center: Point,
    pub cell_width: f64,
    pub cell_height: f64,
    pub direction: Direction,
}

/// Culling bound applied to cell centers.
///
/// Cells are kept only while their center Y lies above `cull_height`.
/// This is the absolute canvas height, not the region's own height, so a
/// region offset downward is culled against the canvas bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutBounds {
    pub cull_height: f64,
}

impl LayoutBounds {
    pub fn new(cull_height: f64) -> Self {
        Self { cull_height }
    }

    /// Bound for a region that spans the whole canvas.
    pub fn for_region(region: &CanvasRegion) -> Self {
        Self::new(region.height)
    }

    /// Whether a cell centered at `center` is drawn.
    pub fn is_visible(&self, center: Point) -> bool {
        center.x > 0.0 && center.y < self.cull_height
    }
}

/// Width and height of a single grid cell.
pub fn cell_size(region: &CanvasRegion, columns: u32, rows: u32) -> (f64, f64) {
    (
        region.width / columns as f64,
        region.height / rows as f64,
    )
}

/// Lay out the visible cells of a `columns` × `rows` grid.
///
/// Iteration is row-major: rows ascend in the outer loop, columns in the
/// inner loop. Columns and rows must be non-zero; nothing is validated here.
pub fn layout_cells(
    region: &CanvasRegion,
    columns: u32,
    rows: u32,
    bounds: &LayoutBounds,
) -> Vec<GridCell> {
    let (cell_width, cell_height) = cell_size(region, columns, rows);
    let mut cells = Vec::with_capacity(columns as usize * rows as usize);

    for row in 0..rows {
        for column in 0..columns {
            let direction = Direction::for_column(column);
            let alternating_offset_y = (cell_height / 2.0) * (column % 2) as f64;
            let offset_x = region.origin_x + cell_width / 2.0;
            let offset_y = region.origin_y + cell_height / 2.0 + alternating_offset_y;
            let center = Point::new(
                column as f64 * cell_width + offset_x,
                row as f64 * cell_height + offset_y,
            );

            if !bounds.is_visible(center) {
                tracing::trace!(row, column, %center, "cell culled");
                continue;
            }

            cells.push(GridCell {
                column,
                row,
                center,
                cell_width,
                cell_height,
                direction,
            });
        }
    }

    cells
}
