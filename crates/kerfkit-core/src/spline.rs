//! Catmull-Rom splines
//!
//! Converts a list of interpolating control points into cubic Bézier
//! segments. The curve passes through every control point except the
//! first and last, which only shape the end tangents.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// A single cubic Bézier segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicSegment {
    pub from: Point,
    pub ctrl1: Point,
    pub ctrl2: Point,
    pub to: Point,
}

impl CubicSegment {
    /// Evaluate the segment at `t` in [0, 1].
    pub fn point_at(&self, t: f64) -> Point {
        // B(t) = (1-t)³P0 + 3(1-t)²tP1 + 3(1-t)t²P2 + t³P3
        let t2 = t * t;
        let t3 = t2 * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;

        Point::new(
            mt3 * self.from.x
                + 3.0 * mt2 * t * self.ctrl1.x
                + 3.0 * mt * t2 * self.ctrl2.x
                + t3 * self.to.x,
            mt3 * self.from.y
                + 3.0 * mt2 * t * self.ctrl1.y
                + 3.0 * mt * t2 * self.ctrl2.y
                + t3 * self.to.y,
        )
    }

    /// Approximate the segment with `steps` line segments.
    ///
    /// The start point is excluded so consecutive segments can be chained.
    pub fn flatten(&self, steps: usize) -> Vec<Point> {
        let steps = steps.max(1);
        (1..=steps)
            .map(|i| self.point_at(i as f64 / steps as f64))
            .collect()
    }
}

/// Convert uniform Catmull-Rom control points to cubic Bézier segments.
///
/// Returns one segment per visible span, `points.len() - 3` in total,
/// or nothing when fewer than four points are supplied.
pub fn catmull_rom_segments(points: &[Point]) -> Vec<CubicSegment> {
    points
        .windows(4)
        .map(|w| {
            let (p0, p1, p2, p3) = (w[0], w[1], w[2], w[3]);
            CubicSegment {
                from: p1,
                ctrl1: p1 + (p2 - p0) * (1.0 / 6.0),
                ctrl2: p2 - (p3 - p1) * (1.0 / 6.0),
                to: p2,
            }
        })
        .collect()
}
