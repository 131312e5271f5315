//! Parameter ranges
//!
//! Each pattern parameter is bound to a slider-style range with a step.
//! Values outside a range are rejected by validation; `clamp` snaps a
//! value to the nearest step and pulls it inside the range.

use serde::{Deserialize, Serialize};

const TOLERANCE: f64 = 1e-9;
const SNAP_SCALE: f64 = 1e9;

/// A closed range with a step, as a UI slider presents it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

/// Column count: odd values from 3 to 129.
pub const COLUMNS: SliderRange = SliderRange::new(3.0, 129.0, 2.0, 49.0);

/// Row count.
pub const ROWS: SliderRange = SliderRange::new(2.0, 16.0, 1.0, 8.0);

/// Motif width as a fraction of the cell width.
pub const RELATIVE_WIDTH: SliderRange = SliderRange::new(0.0, 0.9, 0.1, 0.5);

/// Motif height as a fraction of the cell height.
pub const RELATIVE_HEIGHT: SliderRange = SliderRange::new(0.0, 0.9, 0.1, 0.8);

impl SliderRange {
    pub const fn new(min: f64, max: f64, step: f64, default: f64) -> Self {
        Self {
            min,
            max,
            step,
            default,
        }
    }

    /// Whether `value` lies within the range. Non-finite values never do.
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min - TOLERANCE && value <= self.max + TOLERANCE
    }

    /// Snap to the nearest step counted from `min`, then clamp.
    ///
    /// Non-finite input falls back to the default.
    pub fn clamp(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.default;
        }
        let snapped = if self.step > 0.0 {
            self.min + ((value - self.min) / self.step).round() * self.step
        } else {
            value
        };
        // Strip float noise such as 0.30000000000000004.
        let snapped = (snapped * SNAP_SCALE).round() / SNAP_SCALE;
        snapped.clamp(self.min, self.max)
    }

    /// Clamp and convert to an integer count.
    pub fn clamp_count(&self, value: f64) -> u32 {
        self.clamp(value).round() as u32
    }
}
