//! # KerfKit
//!
//! Procedural kerf bending pattern generator. Lays out a grid of cut-slot
//! motifs that let rigid sheet material bend once laser cut, and exports
//! the pattern as SVG.
//!
//! ## Architecture
//!
//! KerfKit is organized as a workspace with multiple crates:
//!
//! 1. **kerfkit-core** - Geometry types, motif tags, spline math, errors
//! 2. **kerfkit-pattern** - Grid layout, motif rendering, pass cache, SVG export
//! 3. **kerfkit-settings** - Parameter ranges, validation, config files
//! 4. **kerfkit** - Command-line driver that integrates all crates

pub use kerfkit_core::{CanvasRegion, Direction, Error, MotifType, Point, Result};

pub use kerfkit_pattern::{
    layout_cells, render_motif, FnMotif, GridCell, KerfSize, LayoutBounds, MotifGenerator,
    MotifPath, MotifRenderer, PatternCache, PatternConfig, PatternGenerator, PatternPass,
    SvgExporter,
};

pub use kerfkit_settings::{
    CanvasSettings, Config, PatternSettings, SettingsError, SettingsResult, SliderRange,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Log filter used when RUST_LOG is not set.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Generate the pattern described by a validated config.
pub fn generate(config: &Config, generator: &PatternGenerator) -> PatternPass {
    generator.generate(
        &config.pattern.to_config(),
        &config.canvas.region(),
        &config.canvas.bounds(),
    )
}

/// SVG exporter sized to the config's canvas.
pub fn exporter_for(config: &Config) -> SvgExporter {
    SvgExporter::new(config.canvas.width, config.canvas.height)
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty formatted output on stderr, keeping stdout free for SVG output
/// - RUST_LOG environment variable support, `info` when it is unset
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
