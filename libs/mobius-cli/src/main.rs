//! mobius: report and export a sampled Möbius strip.
//!
//! Prints the strip's edge-length and surface-area estimates and can write
//! the sampled surface and its boundary curves as an OBJ scene.
//!
//! # Logging
//!
//! Set the `RUST_LOG` environment variable to control log output:
//! - `RUST_LOG=mobius_mesh=info` - Scene export logging
//! - `RUST_LOG=mobius_mesh=debug` - Sampling details
//!
//! # Example
//!
//! ```bash
//! # Reference strip
//! mobius
//! # Properties: Edge=18.85, Area=7.54
//!
//! # Custom strip, JSON report, OBJ scene
//! mobius --radius 2 --width 0.5 --format json --obj strip.obj
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod report;

/// mobius - sample a Möbius strip and report its properties.
#[derive(Parser, Debug)]
#[command(name = "mobius")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Centerline radius
    #[arg(long, default_value = "1.5")]
    pub radius: f64,

    /// Strip width
    #[arg(long, default_value = "0.4")]
    pub width: f64,

    /// Samples along each axis of the surface grid
    #[arg(long, default_value = "100")]
    pub resolution: usize,

    /// Samples along each boundary curve
    #[arg(long, default_value_t = config::constants::DEFAULT_BOUNDARY_SAMPLES)]
    pub boundary_samples: usize,

    /// Write the surface and boundary curves to this OBJ file
    #[arg(long)]
    pub obj: Option<PathBuf>,

    /// Output format for the report
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Suppress all non-error output
    #[arg(long, short)]
    pub quiet: bool,

    /// Increase log verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(long, short, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for scripting
    Json,
}

/// Initialize the tracing subscriber based on verbosity level.
fn init_tracing(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    // RUST_LOG wins over -v flags
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "warn",
            1 => "mobius_mesh=info,mobius=info",
            2 => "mobius_mesh=debug,mobius=debug",
            _ => "trace",
        };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    report::run(&cli)
}
