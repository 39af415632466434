//! CLI command implementations.

pub mod grid;
pub mod mosaic;

use clap::Args;

use canopyscan::coord::GeoRect;
use canopyscan::pipeline::DEFAULT_ZOOM;

/// Rectangle and zoom arguments shared by survey commands.
#[derive(Debug, Args)]
pub struct AreaArgs {
    /// Latitude of the first corner
    pub lat1: f64,
    /// Longitude of the first corner
    pub lon1: f64,
    /// Latitude of the opposite corner
    pub lat2: f64,
    /// Longitude of the opposite corner
    pub lon2: f64,

    /// Tile zoom level
    #[arg(long, default_value_t = DEFAULT_ZOOM)]
    pub zoom: u8,
}

impl AreaArgs {
    pub fn rect(&self) -> GeoRect {
        GeoRect::from_corners(self.lat1, self.lon1, self.lat2, self.lon2)
    }
}
