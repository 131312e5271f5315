//! KerfKit Settings Crate
//!
//! The parameter source for pattern generation: slider ranges, validation,
//! and configuration file persistence.

pub mod config;
pub mod error;
pub mod ranges;

pub use config::{CanvasSettings, Config, PatternSettings};
pub use error::{SettingsError, SettingsResult};
pub use ranges::SliderRange;
