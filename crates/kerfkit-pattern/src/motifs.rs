//! Built-in motif shapes
//!
//! Each motif lives in a local frame centered on the cell, with half
//! extents `width / 2` and `height / 2` scaled independently per axis.
//! Angular motifs use the `(sin θ, cos θ)` parametrization, so angle zero
//! points along +Y.

use crate::path::MotifPath;
use kerfkit_core::{Direction, Point};
use std::f64::consts::TAU;

const QUAD_VERTICES: usize = 4;
const QUAD_RADIUS: f64 = 0.5;

const ZIGZAG_VERTICES: usize = 8;
const ZIGZAG_FREQUENCY: f64 = 2.0;

const CURLY_VERTICES: i32 = 5;
const CURLY_FREQUENCY: f64 = 2.0;

const STAR_CORNERS: usize = 5;
const STAR_INNER_RADIUS: f64 = 0.2;
const STAR_OUTER_RADIUS: f64 = 0.5;

/// Diagonal slot whose slant flips with `direction`.
pub fn line(center: Point, width: f64, height: f64, direction: Direction) -> MotifPath {
    let dx = (direction.sign() * width) / 2.0;
    MotifPath::Line {
        from: Point::new(center.x - dx, center.y - height / 2.0),
        to: Point::new(center.x + dx, center.y + height / 2.0),
    }
}

/// Diamond with a vertex pointing up. Ignores `direction`.
pub fn quad(center: Point, width: f64, height: f64, _direction: Direction) -> MotifPath {
    let points = closed_ring(QUAD_VERTICES, |i| {
        let angle = TAU * (i as f64 / QUAD_VERTICES as f64);
        polar(center, width, height, angle, QUAD_RADIUS)
    });
    MotifPath::Polyline {
        points,
        closed: true,
    }
}

/// Open zigzag making two full sweeps across the cell, top to bottom.
pub fn zigzag(center: Point, width: f64, height: f64, direction: Direction) -> MotifPath {
    let points = (0..=ZIGZAG_VERTICES)
        .map(|i| {
            let progress = i as f64 / ZIGZAG_VERTICES as f64;
            wave_point(center, width, height, direction, progress, ZIGZAG_FREQUENCY)
        })
        .collect();
    MotifPath::Polyline {
        points,
        closed: false,
    }
}

/// Smooth wave over the same formula as [`zigzag`] with five divisions.
///
/// One control point is added before the start and one after the end so
/// the interpolated curve has correct tangents at its true endpoints.
pub fn curly(center: Point, width: f64, height: f64, direction: Direction) -> MotifPath {
    let control_points = (-1..=CURLY_VERTICES + 1)
        .map(|i| {
            let progress = i as f64 / CURLY_VERTICES as f64;
            wave_point(center, width, height, direction, progress, CURLY_FREQUENCY)
        })
        .collect();
    MotifPath::Curve { control_points }
}

/// Axis-aligned ellipse primitive sized exactly `width` × `height`.
pub fn ellipse(center: Point, width: f64, height: f64, _direction: Direction) -> MotifPath {
    MotifPath::Ellipse {
        center,
        width,
        height,
    }
}

/// Five-point star with a spike pointing up. Ignores `direction`.
pub fn star(center: Point, width: f64, height: f64, _direction: Direction) -> MotifPath {
    let vertices = STAR_CORNERS * 2;
    let points = closed_ring(vertices, |i| {
        let angle = TAU * (i as f64 / vertices as f64);
        // Even indices take the inner radius. Swapping inverts the spikes.
        let radius = if i % 2 == 1 {
            STAR_OUTER_RADIUS
        } else {
            STAR_INNER_RADIUS
        };
        polar(center, width, height, angle, radius)
    });
    MotifPath::Polyline {
        points,
        closed: true,
    }
}

fn polar(center: Point, width: f64, height: f64, angle: f64, radius: f64) -> Point {
    Point::new(
        center.x + angle.sin() * width * radius,
        center.y + angle.cos() * height * radius,
    )
}

fn wave_point(
    center: Point,
    width: f64,
    height: f64,
    direction: Direction,
    progress: f64,
    frequency: f64,
) -> Point {
    let angle = TAU * progress * frequency;
    let offset_x = (direction.sign() * (angle.sin() * width)) / 2.0;
    let offset_y = map_range(progress, 0.0, 1.0, -height / 2.0, height / 2.0);
    Point::new(center.x + offset_x, center.y + offset_y)
}

/// `count` vertices followed by an exact copy of the first.
fn closed_ring(count: usize, vertex: impl Fn(usize) -> Point) -> Vec<Point> {
    let mut points: Vec<Point> = (0..count).map(vertex).collect();
    if let Some(&first) = points.first() {
        points.push(first);
    }
    points
}

fn map_range(value: f64, start1: f64, stop1: f64, start2: f64, stop2: f64) -> f64 {
    start2 + (stop2 - start2) * ((value - start1) / (stop1 - start1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn vertices(path: &MotifPath) -> Vec<Point> {
        path.points()
    }

    #[test]
    fn test_line_endpoints() {
        let path = line(Point::new(50.0, 50.0), 20.0, 40.0, Direction::Forward);
        assert_eq!(
            path,
            MotifPath::Line {
                from: Point::new(40.0, 30.0),
                to: Point::new(60.0, 70.0),
            }
        );

        let path = line(Point::new(50.0, 50.0), 20.0, 40.0, Direction::Reverse);
        assert_eq!(
            path,
            MotifPath::Line {
                from: Point::new(60.0, 30.0),
                to: Point::new(40.0, 70.0),
            }
        );
    }

    #[test]
    fn test_quad_is_upright_diamond() {
        let pts = vertices(&quad(Point::new(0.0, 0.0), 10.0, 20.0, Direction::Forward));
        assert_eq!(pts.len(), 5);
        assert!(close(pts[0].x, 0.0) && close(pts[0].y, 10.0));
        assert!(close(pts[1].x, 5.0) && close(pts[1].y, 0.0));
        assert!(close(pts[2].x, 0.0) && close(pts[2].y, -10.0));
        assert!(close(pts[3].x, -5.0) && close(pts[3].y, 0.0));
        assert_eq!(pts[0], pts[4]);
    }

    #[test]
    fn test_zigzag_shape() {
        let pts = vertices(&zigzag(Point::new(0.0, 0.0), 10.0, 80.0, Direction::Forward));
        assert_eq!(pts.len(), 9);
        assert!(close(pts[0].y, -40.0));
        assert!(close(pts[8].y, 40.0));
        assert!(close(pts[1].y, -30.0));
        // Two periods: peaks at i = 1, 5 and troughs at i = 3, 7.
        assert!(close(pts[1].x, 5.0));
        assert!(close(pts[3].x, -5.0));
        assert!(close(pts[5].x, 5.0));
        assert!(close(pts[7].x, -5.0));
        assert_ne!(pts[0], pts[8]);
    }

    #[test]
    fn test_curly_has_guard_points() {
        let path = curly(Point::new(0.0, 0.0), 10.0, 50.0, Direction::Forward);
        let pts = vertices(&path);
        assert_eq!(pts.len(), 8);
        // Visible span runs from progress 0 to progress 1.
        assert!(close(pts[1].y, -25.0));
        assert!(close(pts[6].y, 25.0));
        // Guard points extend one division beyond each end.
        assert!(close(pts[0].y, -35.0));
        assert!(close(pts[7].y, 35.0));
    }

    #[test]
    fn test_ellipse_passes_size_through() {
        let path = ellipse(Point::new(3.0, 4.0), 12.5, 7.25, Direction::Reverse);
        assert_eq!(
            path,
            MotifPath::Ellipse {
                center: Point::new(3.0, 4.0),
                width: 12.5,
                height: 7.25,
            }
        );
    }

    #[test]
    fn test_star_radius_parity() {
        let pts = vertices(&star(Point::new(0.0, 0.0), 100.0, 100.0, Direction::Forward));
        assert_eq!(pts.len(), 11);
        assert_eq!(pts[0], pts[10]);
        // Index 0 is an inner vertex straight down the +Y axis.
        assert!(close(pts[0].x, 0.0) && close(pts[0].y, 20.0));
        for (i, p) in pts.iter().take(10).enumerate() {
            let r = (p.x * p.x + p.y * p.y).sqrt();
            let expected = if i % 2 == 1 { 50.0 } else { 20.0 };
            assert!(close(r, expected), "vertex {i} radius {r}");
        }
    }

    #[test]
    fn test_direction_ignored_by_symmetric_motifs() {
        let c = Point::new(12.0, 34.0);
        for f in [quad, ellipse, star] {
            assert_eq!(
                f(c, 8.0, 16.0, Direction::Forward),
                f(c, 8.0, 16.0, Direction::Reverse)
            );
        }
    }
}
