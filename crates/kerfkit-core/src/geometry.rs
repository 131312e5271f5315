//! Geometric value types
//!
//! Plain 2D types the layout engine and motif renderer exchange.
//! Coordinates follow the drawing surface convention: X grows to the
//! right, Y grows downward.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A point in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point with the given X and Y coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns this point shifted by the given offsets.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

/// The drawable area a pattern is laid out in.
///
/// Width and height are expected to be positive; the layout engine
/// does not check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasRegion {
    pub origin_x: f64,
    pub origin_y: f64,
    pub width: f64,
    pub height: f64,
}

impl CanvasRegion {
    pub fn new(origin_x: f64, origin_y: f64, width: f64, height: f64) -> Self {
        Self {
            origin_x,
            origin_y,
            width,
            height,
        }
    }

    /// A region covering a whole canvas anchored at the origin.
    pub fn full(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }
}

/// Mirroring sign applied to a motif's X offsets.
///
/// Alternates by column so neighbouring columns flex symmetrically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// +1, used on even columns
    Forward,
    /// -1, used on odd columns
    Reverse,
}

impl Direction {
    /// Direction for the given zero-based column index.
    pub fn for_column(column: u32) -> Self {
        if column % 2 == 0 {
            Self::Forward
        } else {
            Self::Reverse
        }
    }

    /// The numeric sign, +1.0 or -1.0.
    pub fn sign(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Reverse => -1.0,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => write!(f, "+1"),
            Self::Reverse => write!(f, "-1"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);
        assert_eq!(a + b, Point::new(5.0, 8.0));
        assert_eq!(b - a, Point::new(3.0, 4.0));
        assert_eq!(a * 2.0, Point::new(2.0, 4.0));
        assert_eq!(a.offset(-1.0, 1.0), Point::new(0.0, 3.0));
    }

    #[test]
    fn test_direction_alternates_by_column() {
        assert_eq!(Direction::for_column(0), Direction::Forward);
        assert_eq!(Direction::for_column(1), Direction::Reverse);
        assert_eq!(Direction::for_column(2), Direction::Forward);
        assert_eq!(Direction::for_column(3), Direction::Reverse);
        assert_eq!(Direction::Forward.sign(), 1.0);
        assert_eq!(Direction::Reverse.sign(), -1.0);
    }

    #[test]
    fn test_full_region() {
        let region = CanvasRegion::full(400.0, 300.0);
        assert_eq!(region.origin_x, 0.0);
        assert_eq!(region.origin_y, 0.0);
        assert_eq!(region.width, 400.0);
        assert_eq!(region.height, 300.0);
    }
}
