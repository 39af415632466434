//! Provider trait and errors

use crate::coord::TileCoord;

/// Errors that can occur while fetching imagery from a provider.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProviderError {
    /// HTTP transport failure or non-success status
    #[error("HTTP error: {0}")]
    HttpError(String),
    /// Requested zoom level is outside the provider's supported range
    #[error("unsupported zoom level: {0}")]
    UnsupportedZoom(u8),
}

/// Trait for satellite tile sources.
///
/// A provider retrieves the raw raster bytes (typically JPEG) for a
/// single tile coordinate. Implementations must be thread-safe so the
/// pipeline can fan tile fetches out across workers.
///
/// A fetch failure is terminal for that tile: providers do not retry.
pub trait TileProvider: Send + Sync {
    /// Downloads the raster bytes for one tile.
    fn fetch_tile(&self, tile: &TileCoord) -> Result<Vec<u8>, ProviderError>;

    /// Human-readable provider name for logging.
    fn name(&self) -> &str;

    /// Minimum supported zoom level.
    fn min_zoom(&self) -> u8 {
        0
    }

    /// Maximum supported zoom level.
    fn max_zoom(&self) -> u8;

    /// Whether the provider serves tiles at the given zoom.
    fn supports_zoom(&self, zoom: u8) -> bool {
        (self.min_zoom()..=self.max_zoom()).contains(&zoom)
    }
}
