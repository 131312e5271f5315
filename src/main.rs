//! kerfkit CLI - kerf bending pattern generator
//!
//! Generates a kerf bending pattern from command-line flags and/or a
//! config file and writes it as SVG.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kerfkit::{init_logging, Config, MotifType, PatternGenerator, BUILD_DATE, VERSION};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "kerfkit")]
#[command(about = "Procedural kerf bending pattern generator", long_about = None)]
#[command(version = version_string())]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a pattern and export it as SVG
    Generate(GenerateArgs),
    /// List the available motif types
    Motifs,
    /// Write a default config file (format determined by extension: .toml, .json)
    InitConfig {
        /// Output config file
        path: PathBuf,
    },
}

#[derive(clap::Args, Debug, Default)]
struct GenerateArgs {
    /// Motif type (line, quad, zigzag, curly, ellipse, star, custom)
    #[arg(short, long)]
    motif: Option<String>,
    /// Number of grid columns
    #[arg(short, long)]
    columns: Option<u32>,
    /// Number of grid rows
    #[arg(short, long)]
    rows: Option<u32>,
    /// Motif width as a fraction of the cell width
    #[arg(long)]
    relative_width: Option<f64>,
    /// Motif height as a fraction of the cell height
    #[arg(long)]
    relative_height: Option<f64>,
    /// Canvas width
    #[arg(long)]
    width: Option<f64>,
    /// Canvas height
    #[arg(long)]
    height: Option<f64>,
    /// Config file to start from (.toml or .json)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory to write the SVG into
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
    /// Print the SVG to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,
    /// Snap out-of-range values into range instead of rejecting them
    #[arg(long)]
    clamp: bool,
}

const fn version_string() -> &'static str {
    concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging()?;
    tracing::debug!(version = VERSION, build_date = BUILD_DATE, "kerfkit starting");

    match cli.command {
        Commands::Generate(args) => generate(args)?,
        Commands::Motifs => {
            for motif in MotifType::ALL {
                println!("{}", motif);
            }
        }
        Commands::InitConfig { path } => init_config(&path)?,
    }

    Ok(())
}

fn resolve_config(args: &GenerateArgs) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(motif) = &args.motif {
        config.pattern.motif = MotifType::parse(motif);
    }
    if let Some(columns) = args.columns {
        config.pattern.columns = columns;
    }
    if let Some(rows) = args.rows {
        config.pattern.rows = rows;
    }
    if let Some(relative_width) = args.relative_width {
        config.pattern.relative_width = relative_width;
    }
    if let Some(relative_height) = args.relative_height {
        config.pattern.relative_height = relative_height;
    }
    if let Some(width) = args.width {
        config.canvas.width = width;
    }
    if let Some(height) = args.height {
        config.canvas.height = height;
    }
    if let Some(dir) = &args.output_dir {
        config.output_dir = Some(dir.clone());
    }

    if args.clamp {
        config.pattern = config.pattern.clamped();
    }
    config.validate().context("Invalid pattern parameters")?;
    Ok(config)
}

fn generate(args: GenerateArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    let pass = kerfkit::generate(&config, &PatternGenerator::new());
    let exporter = kerfkit::exporter_for(&config);
    tracing::debug!(motifs = pass.len(), extent = ?pass.extent(), "pattern ready");

    if args.stdout {
        let svg = exporter.to_svg(&pass);
        std::io::stdout()
            .lock()
            .write_all(svg.as_bytes())
            .context("Failed to write SVG to stdout")?;
        return Ok(());
    }

    let dir = config.output_dir.clone().unwrap_or_else(|| PathBuf::from("."));
    let path = exporter
        .write_svg(&pass, &dir)
        .with_context(|| format!("Failed to export SVG into {}", dir.display()))?;
    println!("{}", path.display());
    Ok(())
}

fn init_config(path: &Path) -> Result<()> {
    Config::default()
        .save_to_file(path)
        .with_context(|| format!("Failed to write config {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote default config");
    Ok(())
}
