//! Canopyscan CLI
//!
//! Command-line interface for inspecting survey tile grids and
//! stitching raw satellite mosaics. Detection itself requires an
//! injected model and is driven through the library by a serving
//! layer, not from this binary.

mod commands;
mod error;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::error::CliError;

#[derive(Debug, Parser)]
#[command(name = "canopyscan", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the tile grid and area statistics for a rectangle
    Grid(commands::grid::GridArgs),
    /// Download and stitch the raw (unannotated) satellite mosaic
    Mosaic(commands::mosaic::MosaicArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let result: Result<(), CliError> = match cli.command {
        Command::Grid(args) => commands::grid::run(args),
        Command::Mosaic(args) => commands::mosaic::run(args),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
