//! Raw mosaic stitching command.
//!
//! Downloads every tile of the requested grid and composites the raw
//! imagery, without running detection. Useful for checking coverage
//! and tile-source health before a full survey.

use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use canopyscan::coord::rect_to_grid;
use canopyscan::mosaic::MosaicCanvas;
use canopyscan::provider::{ReqwestTransport, SatelliteProvider, TileProvider};

use super::AreaArgs;
use crate::error::CliError;

#[derive(Debug, Args)]
pub struct MosaicArgs {
    #[command(flatten)]
    pub area: AreaArgs,

    /// Output image path
    #[arg(long, short, default_value = "mosaic.jpg")]
    pub out: PathBuf,

    /// Tile host override
    #[arg(long)]
    pub host: Option<String>,
}

/// Fetch and stitch the raw satellite mosaic for a rectangle.
///
/// Failed tiles are skipped and left black, matching the survey
/// pipeline's skip-on-error policy.
pub fn run(args: MosaicArgs) -> Result<(), CliError> {
    let rect = args.area.rect();
    let grid = rect_to_grid(&rect, args.area.zoom)?;

    let transport = ReqwestTransport::new()?;
    let provider = match &args.host {
        Some(host) => SatelliteProvider::with_host(transport, host.clone()),
        None => SatelliteProvider::new(transport),
    };

    println!(
        "Fetching {} tiles ({}x{} px canvas)...",
        grid.tile_count(),
        grid.pixel_width(),
        grid.pixel_height()
    );

    let mut canvas = MosaicCanvas::new(&grid);
    let mut failed: u64 = 0;
    for tile in grid.iter() {
        let image = provider
            .fetch_tile(&tile)
            .ok()
            .and_then(|bytes| image::load_from_memory(&bytes).ok())
            .map(|img| img.to_rgb8());

        match image {
            Some(img) => canvas.paste(&tile, &img),
            None => {
                debug!(%tile, "tile skipped");
                failed += 1;
            }
        }
    }

    let mosaic = canvas.into_image();
    mosaic
        .save(&args.out)
        .map_err(|e| CliError::Output(e.to_string()))?;

    if failed > 0 {
        println!("Done with {} missing tiles: {}", failed, args.out.display());
    } else {
        println!("Done: {}", args.out.display());
    }
    Ok(())
}
