//! Tile-grid inspection command.

use clap::Args;

use canopyscan::coord::{ground_resolution, rect_area_km2, rect_to_grid};

use super::AreaArgs;
use crate::error::CliError;

#[derive(Debug, Args)]
pub struct GridArgs {
    #[command(flatten)]
    pub area: AreaArgs,
}

/// Print the tile grid and area statistics for a rectangle.
pub fn run(args: GridArgs) -> Result<(), CliError> {
    let rect = args.area.rect();
    let grid = rect_to_grid(&rect, args.area.zoom)?;

    let center_lat = (args.area.lat1 + args.area.lat2) / 2.0;

    println!("Zoom:       {}", grid.zoom);
    println!("Tiles X:    {}..{}", grid.x_min, grid.x_max);
    println!("Tiles Y:    {}..{}", grid.y_min, grid.y_max);
    println!(
        "Grid:       {}x{} ({} tiles)",
        grid.width(),
        grid.height(),
        grid.tile_count()
    );
    println!(
        "Canvas:     {}x{} px",
        grid.pixel_width(),
        grid.pixel_height()
    );
    println!("Area:       {:.2} km²", rect_area_km2(&rect));
    println!(
        "Resolution: {:.2} m/px",
        ground_resolution(center_lat, args.area.zoom)
    );

    Ok(())
}
