//! # KerfKit Core
//!
//! Core types and utilities shared by the KerfKit crates.
//! Provides the geometric value types the pattern engine works in,
//! the motif type tag, Catmull-Rom spline conversion, and the
//! unified error type.

pub mod error;
pub mod geometry;
pub mod motif_type;
pub mod spline;

pub use error::{Error, ExportError, Result};
pub use geometry::{CanvasRegion, Direction, Point};
pub use motif_type::MotifType;
pub use spline::{catmull_rom_segments, CubicSegment};
