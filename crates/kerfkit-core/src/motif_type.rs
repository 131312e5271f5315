//! Motif type tag
//!
//! Selector values map onto seven motif kinds. Resolution from a string
//! never fails: anything that is not one of the six built-in names lands
//! in the custom slot.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Kind of cut-slot shape placed at each grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MotifType {
    /// Diagonal slot
    Line,
    /// Diamond
    Quad,
    /// Two-period zigzag polyline
    Zigzag,
    /// Smooth two-period wave
    Curly,
    /// Axis-aligned ellipse primitive
    Ellipse,
    /// Five-point star
    Star,
    /// User-registered generator
    Custom,
}

impl MotifType {
    /// All motif types in selector order.
    pub const ALL: [MotifType; 7] = [
        MotifType::Line,
        MotifType::Quad,
        MotifType::Zigzag,
        MotifType::Curly,
        MotifType::Ellipse,
        MotifType::Star,
        MotifType::Custom,
    ];

    /// Resolve a selector tag, falling back to [`MotifType::Custom`].
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "line" => Self::Line,
            "quad" => Self::Quad,
            "zigzag" => Self::Zigzag,
            "curly" => Self::Curly,
            "ellipse" => Self::Ellipse,
            "star" => Self::Star,
            "custom" => Self::Custom,
            other => {
                tracing::trace!(tag = other, "unrecognized motif tag, using custom slot");
                Self::Custom
            }
        }
    }

    /// Lowercase selector tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Quad => "quad",
            Self::Zigzag => "zigzag",
            Self::Curly => "curly",
            Self::Ellipse => "ellipse",
            Self::Star => "star",
            Self::Custom => "custom",
        }
    }

    /// Whether the column direction changes this motif's geometry.
    pub fn is_direction_sensitive(self) -> bool {
        matches!(self, Self::Line | Self::Zigzag | Self::Curly)
    }
}

impl Default for MotifType {
    fn default() -> Self {
        Self::Line
    }
}

impl fmt::Display for MotifType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MotifType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for MotifType {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for MotifType {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<MotifType> for String {
    fn from(value: MotifType) -> Self {
        value.as_str().to_string()
    }
}
