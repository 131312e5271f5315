//! Motif output paths

use kerfkit_core::{catmull_rom_segments, Point};
use serde::{Deserialize, Serialize};

/// Outline of one motif, ready to be stroked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MotifPath {
    /// Straight slot between two endpoints
    Line { from: Point, to: Point },
    /// Straight segments with round joins. Closed polylines repeat their
    /// first vertex as the last one.
    Polyline { points: Vec<Point>, closed: bool },
    /// Interpolating curve through `control_points[1..len - 1]`; the outer
    /// two points only condition the end tangents.
    Curve { control_points: Vec<Point> },
    /// Axis-aligned ellipse with the given overall width and height
    Ellipse {
        center: Point,
        width: f64,
        height: f64,
    },
    /// Nothing to draw
    Empty,
}

impl MotifPath {
    /// The vertices that define this path.
    ///
    /// For an ellipse this is just its center.
    pub fn points(&self) -> Vec<Point> {
        match self {
            Self::Line { from, to } => vec![*from, *to],
            Self::Polyline { points, .. } => points.clone(),
            Self::Curve { control_points } => control_points.clone(),
            Self::Ellipse { center, .. } => vec![*center],
            Self::Empty => Vec::new(),
        }
    }

    pub fn is_closed(&self) -> bool {
        match self {
            Self::Polyline { closed, .. } => *closed,
            Self::Ellipse { .. } => true,
            _ => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Bounding box as `(min_x, min_y, max_x, max_y)`.
    ///
    /// Curves are bounded tightly along the visible span, not by their
    /// control points.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        match self {
            Self::Empty => None,
            Self::Ellipse {
                center,
                width,
                height,
            } => {
                let (rx, ry) = (width.abs() / 2.0, height.abs() / 2.0);
                Some((center.x - rx, center.y - ry, center.x + rx, center.y + ry))
            }
            Self::Curve { control_points } => curve_bounds(control_points),
            _ => point_bounds(&self.points()),
        }
    }
}

fn point_bounds(points: &[Point]) -> Option<(f64, f64, f64, f64)> {
    if points.is_empty() {
        return None;
    }

    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    Some((min_x, min_y, max_x, max_y))
}

fn curve_bounds(control_points: &[Point]) -> Option<(f64, f64, f64, f64)> {
    let segments = catmull_rom_segments(control_points);
    let first = segments.first()?;

    let mut builder = lyon::path::Path::builder();
    builder.begin(to_lyon(first.from));
    for segment in &segments {
        builder.cubic_bezier_to(
            to_lyon(segment.ctrl1),
            to_lyon(segment.ctrl2),
            to_lyon(segment.to),
        );
    }
    builder.end(false);
    let path = builder.build();

    let rect = lyon::algorithms::aabb::bounding_box(&path);
    Some((
        rect.min.x as f64,
        rect.min.y as f64,
        rect.max.x as f64,
        rect.max.y as f64,
    ))
}

fn to_lyon(p: Point) -> lyon::math::Point {
    lyon::math::point(p.x as f32, p.y as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_bounds() {
        let path = MotifPath::Line {
            from: Point::new(10.0, 40.0),
            to: Point::new(0.0, 5.0),
        };
        assert_eq!(path.bounds(), Some((0.0, 5.0, 10.0, 40.0)));
        assert!(!path.is_closed());
    }

    #[test]
    fn test_ellipse_bounds_use_half_extents() {
        let path = MotifPath::Ellipse {
            center: Point::new(50.0, 50.0),
            width: 20.0,
            height: 10.0,
        };
        assert_eq!(path.bounds(), Some((40.0, 45.0, 60.0, 55.0)));
        assert!(path.is_closed());
    }

    #[test]
    fn test_empty_path() {
        assert!(MotifPath::Empty.is_empty());
        assert!(MotifPath::Empty.points().is_empty());
        assert_eq!(MotifPath::Empty.bounds(), None);
    }

    #[test]
    fn test_curve_bounds_follow_visible_span() {
        // Collinear control points: the curve runs from x=1 to x=3 only.
        let path = MotifPath::Curve {
            control_points: (0..5).map(|i| Point::new(i as f64, 10.0)).collect(),
        };
        let (min_x, min_y, max_x, max_y) = path.bounds().unwrap();
        assert!((min_x - 1.0).abs() < 1e-4);
        assert!((max_x - 3.0).abs() < 1e-4);
        assert!((min_y - 10.0).abs() < 1e-4);
        assert!((max_y - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_curve_bounds_include_overshoot() {
        // The arch between the inner points bulges above them.
        let path = MotifPath::Curve {
            control_points: vec![
                Point::new(0.0, 0.0),
                Point::new(0.0, 10.0),
                Point::new(10.0, 10.0),
                Point::new(10.0, 0.0),
            ],
        };
        let (min_x, _, max_x, max_y) = path.bounds().unwrap();
        assert!((min_x - 0.0).abs() < 1e-4);
        assert!((max_x - 10.0).abs() < 1e-4);
        assert!(max_y > 10.5);
    }

    #[test]
    fn test_degenerate_curve_has_no_bounds() {
        let path = MotifPath::Curve {
            control_points: vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)],
        };
        assert_eq!(path.bounds(), None);
    }
}
