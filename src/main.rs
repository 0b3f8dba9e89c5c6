//! # Beach or Nah Command-Line Entry Point
//!
//! Collects a coordinate, runs one beach check against the flood-monitoring
//! service and prints the answer. Without `--lat`/`--lon` the location from
//! beach-config.toml (or the built-in default) is used.


use anyhow::Context;
use beach_or_nah_lib::{
    api::FloodMonitoringApi,
    beach::check_beach,
    config::Config,
    logging,
    renderer::{render_failure, render_report},
    Coordinate,
};
use clap::Parser;
use std::path::{Path, PathBuf};

/// Is it beach time at the nearest tide gauge?
#[derive(Debug, Parser)]
#[command(name = "beach-or-nah", version)]
struct Cli {
    /// Latitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Longitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<f64>,

    /// Path to the configuration file [default: beach-config.toml]
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,

    /// Append the raw station and reading payloads
    #[arg(long)]
    debug: bool,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,
}

/// Configuration from `--config`, or from the default file when not given.
fn load_config(path: Option<&Path>) -> Config {
    match path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Main application entry point.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    let config = load_config(cli.config.as_deref());
    let query = Coordinate::new(
        cli.lat.unwrap_or(config.location.latitude),
        cli.lon.unwrap_or(config.location.longitude),
    )
    .context("invalid location")?;

    let api = FloodMonitoringApi::new(&config.api).context("failed to build HTTP client")?;

    let rt = tokio::runtime::Runtime::new()?;
    match rt.block_on(check_beach(&api, query)) {
        Ok(report) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", render_report(&report, cli.debug));
            }
            Ok(())
        }
        Err(error) => {
            tracing::error!("beach check failed: {error}");
            eprintln!("{}", render_failure(&error));
            std::process::exit(1);
        }
    }
}
