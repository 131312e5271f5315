//! Configuration and settings management for KerfKit
//!
//! Holds the pattern parameters and canvas size a pattern is drawn with,
//! enforces the parameter ranges before anything reaches the pattern
//! engine, and reads/writes configuration files.
//!
//! Supports JSON and TOML file formats, chosen by file extension.

use crate::error::{SettingsError, SettingsResult};
use crate::ranges::{self, SliderRange};
use kerfkit_core::{CanvasRegion, MotifType};
use kerfkit_pattern::{LayoutBounds, PatternConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application directory name under the platform config dir.
pub const APP_DIR: &str = "kerfkit";

/// Default config file name.
pub const CONFIG_FILE: &str = "config.toml";

/// Pattern parameters as the user picks them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternSettings {
    /// Motif drawn at every cell
    pub motif: MotifType,
    /// Number of grid columns
    pub columns: u32,
    /// Number of grid rows
    pub rows: u32,
    /// Motif width as a fraction of the cell width
    pub relative_width: f64,
    /// Motif height as a fraction of the cell height
    pub relative_height: f64,
}

impl Default for PatternSettings {
    fn default() -> Self {
        Self {
            motif: MotifType::Line,
            columns: ranges::COLUMNS.default as u32,
            rows: ranges::ROWS.default as u32,
            relative_width: ranges::RELATIVE_WIDTH.default,
            relative_height: ranges::RELATIVE_HEIGHT.default,
        }
    }
}

impl PatternSettings {
    /// Reject any value outside its slider range.
    pub fn validate(&self) -> SettingsResult<()> {
        check("columns", self.columns as f64, &ranges::COLUMNS)?;
        check("rows", self.rows as f64, &ranges::ROWS)?;
        check("relative_width", self.relative_width, &ranges::RELATIVE_WIDTH)?;
        check("relative_height", self.relative_height, &ranges::RELATIVE_HEIGHT)?;
        Ok(())
    }

    /// Copy with every value snapped into its slider range.
    pub fn clamped(&self) -> Self {
        Self {
            motif: self.motif,
            columns: ranges::COLUMNS.clamp_count(self.columns as f64),
            rows: ranges::ROWS.clamp_count(self.rows as f64),
            relative_width: ranges::RELATIVE_WIDTH.clamp(self.relative_width),
            relative_height: ranges::RELATIVE_HEIGHT.clamp(self.relative_height),
        }
    }

    pub fn to_config(&self) -> PatternConfig {
        PatternConfig {
            motif: self.motif,
            columns: self.columns,
            rows: self.rows,
            relative_width: self.relative_width,
            relative_height: self.relative_height,
        }
    }
}

fn check(key: &str, value: f64, range: &SliderRange) -> SettingsResult<()> {
    if range.contains(value) {
        Ok(())
    } else {
        Err(SettingsError::OutOfRange {
            key: key.to_string(),
            value,
            min: range.min,
            max: range.max,
        })
    }
}

/// Size of the drawing surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Canvas width in drawing units
    pub width: f64,
    /// Canvas height in drawing units
    pub height: f64,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 400.0,
        }
    }
}

impl CanvasSettings {
    pub fn validate(&self) -> SettingsResult<()> {
        for (key, value) in [("canvas.width", self.width), ("canvas.height", self.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SettingsError::InvalidSetting {
                    key: key.to_string(),
                    reason: format!("must be a positive number, got {}", value),
                });
            }
        }
        Ok(())
    }

    /// The whole canvas as a drawing region.
    pub fn region(&self) -> CanvasRegion {
        CanvasRegion::full(self.width, self.height)
    }

    /// Culling bound anchored to the canvas bottom edge.
    pub fn bounds(&self) -> LayoutBounds {
        LayoutBounds::new(self.height)
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Directory exported files are written to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    /// Pattern parameters
    pub pattern: PatternSettings,
    /// Canvas size
    pub canvas: CanvasSettings,
}

impl Config {
    /// Default config file location, e.g. `~/.config/kerfkit/config.toml`.
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = FileFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            FileFormat::Json => serde_json::from_str(&content)?,
            FileFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match FileFormat::from_path(path)? {
            FileFormat::Json => serde_json::to_string_pretty(self)?,
            FileFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        self.pattern.validate()?;
        self.canvas.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
