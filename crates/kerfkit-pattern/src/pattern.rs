//! Kerf Bending Pattern
//!
//! Runs one complete layout-and-render pass: lays out the grid, sizes the
//! motif relative to a cell, and renders a motif at every visible cell.
//! A pass is a pure function of its inputs.

use crate::layout::{cell_size, layout_cells, GridCell, LayoutBounds};
use crate::path::MotifPath;
use crate::renderer::MotifRenderer;
use kerfkit_core::{CanvasRegion, MotifType};
use serde::{Deserialize, Serialize};

/// Prefix of every exported file name.
pub const FILE_PREFIX: &str = "kerf-bending-pattern";

/// Parameters for one pattern.
///
/// `columns` and `rows` must be at least 2 and the ratios are fractions of
/// one cell. Range enforcement belongs to whoever supplies the values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternConfig {
    pub motif: MotifType,
    pub columns: u32,
    pub rows: u32,
    pub relative_width: f64,
    pub relative_height: f64,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            motif: MotifType::Line,
            columns: 49,
            rows: 8,
            relative_width: 0.5,
            relative_height: 0.8,
        }
    }
}

/// Size of the motif drawn in each cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KerfSize {
    pub width: f64,
    pub height: f64,
}

impl KerfSize {
    /// Motif size derived once from the top-level column and row counts.
    pub fn for_config(config: &PatternConfig, region: &CanvasRegion) -> Self {
        let (cell_width, cell_height) = cell_size(region, config.columns, config.rows);
        Self {
            width: config.relative_width * cell_width,
            height: config.relative_height * cell_height,
        }
    }
}

/// Result of one pass. `paths[i]` is the motif drawn in `cells[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternPass {
    pub motif: MotifType,
    pub kerf: KerfSize,
    pub cells: Vec<GridCell>,
    pub paths: Vec<MotifPath>,
}

impl PatternPass {
    /// Export file name without extension,
    /// e.g. `kerf-bending-pattern-line-66.7x160.0`.
    ///
    /// Sizes are rounded half away from zero to one decimal, so a kerf of
    /// 6.25 is named `6.3`.
    pub fn file_stem(&self) -> String {
        format!(
            "{}-{}-{:.1}x{:.1}",
            FILE_PREFIX,
            self.motif.as_str(),
            round_tenth(self.kerf.width),
            round_tenth(self.kerf.height)
        )
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Cells paired with the motif rendered in each.
    pub fn iter(&self) -> impl Iterator<Item = (&GridCell, &MotifPath)> {
        self.cells.iter().zip(self.paths.iter())
    }

    /// Union of every motif's bounds as `(min_x, min_y, max_x, max_y)`.
    ///
    /// `None` when nothing in the pass draws.
    pub fn extent(&self) -> Option<(f64, f64, f64, f64)> {
        self.paths
            .iter()
            .filter_map(MotifPath::bounds)
            .reduce(|a, b| (a.0.min(b.0), a.1.min(b.1), a.2.max(b.2), a.3.max(b.3)))
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Produces complete pattern passes.
#[derive(Debug, Default)]
pub struct PatternGenerator {
    renderer: MotifRenderer,
}

impl PatternGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_renderer(renderer: MotifRenderer) -> Self {
        Self { renderer }
    }

    pub fn renderer(&self) -> &MotifRenderer {
        &self.renderer
    }

    /// Mutable access to the renderer. Any cached passes become stale once
    /// the custom slot changes.
    pub fn renderer_mut(&mut self) -> &mut MotifRenderer {
        &mut self.renderer
    }

    /// Lay out and render the whole pattern.
    pub fn generate(
        &self,
        config: &PatternConfig,
        region: &CanvasRegion,
        bounds: &LayoutBounds,
    ) -> PatternPass {
        let kerf = KerfSize::for_config(config, region);
        let cells = layout_cells(region, config.columns, config.rows, bounds);
        let paths: Vec<MotifPath> = cells
            .iter()
            .map(|cell| {
                self.renderer.render(
                    config.motif,
                    cell.center,
                    kerf.width,
                    kerf.height,
                    cell.direction,
                )
            })
            .collect();

        let total = config.columns as usize * config.rows as usize;
        tracing::debug!(
            motif = %config.motif,
            columns = config.columns,
            rows = config.rows,
            emitted = cells.len(),
            culled = total.saturating_sub(cells.len()),
            "generated kerf pattern"
        );

        PatternPass {
            motif: config.motif,
            kerf,
            cells,
            paths,
        }
    }
}
