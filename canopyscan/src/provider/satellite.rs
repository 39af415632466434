//! Satellite imagery tile source.
//!
//! Fetches 256×256 raster tiles from a slippy-map tile host using the
//! `lyrs=s` (satellite layer) URL scheme:
//!
//! `https://{host}/vt/lyrs=s&x={x}&y={y}&z={zoom}`
//!
//! The default host is `mt1.google.com`. The host is configurable so
//! tests and alternative mirrors can be substituted without touching
//! the URL construction.

use tracing::error;

use crate::coord::TileCoord;
use crate::provider::{HttpTransport, ProviderError, TileProvider};

/// Default tile host serving the satellite layer.
pub const DEFAULT_TILE_HOST: &str = "mt1.google.com";

/// Satellite imagery provider over a slippy-map tile endpoint.
///
/// A failed download is reported with its URL and cause at error
/// level and returned to the caller; the provider never retries.
///
/// # Example
///
/// ```no_run
/// use canopyscan::coord::TileCoord;
/// use canopyscan::provider::{ReqwestTransport, SatelliteProvider, TileProvider};
///
/// let transport = ReqwestTransport::new().unwrap();
/// let provider = SatelliteProvider::new(transport);
/// let bytes = provider.fetch_tile(&TileCoord::new(77185, 99230, 18));
/// ```
pub struct SatelliteProvider<T: HttpTransport> {
    transport: T,
    host: String,
}

impl<T: HttpTransport> SatelliteProvider<T> {
    /// Creates a provider against the default tile host.
    pub fn new(transport: T) -> Self {
        Self::with_host(transport, DEFAULT_TILE_HOST)
    }

    /// Creates a provider against a specific tile host.
    pub fn with_host(transport: T, host: impl Into<String>) -> Self {
        Self {
            transport,
            host: host.into(),
        }
    }

    /// Builds the tile URL for the given coordinate.
    fn build_url(&self, tile: &TileCoord) -> String {
        format!(
            "https://{}/vt/lyrs=s&x={}&y={}&z={}",
            self.host, tile.x, tile.y, tile.zoom
        )
    }
}

impl<T: HttpTransport> TileProvider for SatelliteProvider<T> {
    fn fetch_tile(&self, tile: &TileCoord) -> Result<Vec<u8>, ProviderError> {
        if !self.supports_zoom(tile.zoom) {
            return Err(ProviderError::UnsupportedZoom(tile.zoom));
        }

        let url = self.build_url(tile);
        self.transport.get_bytes(&url).map_err(|e| {
            error!(%url, "failed to download tile: {}", e);
            e
        })
    }

    fn name(&self) -> &str {
        "Satellite"
    }

    fn max_zoom(&self) -> u8 {
        22
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::MockTransport;

    fn mock_provider(reply: Result<Vec<u8>, ProviderError>) -> SatelliteProvider<MockTransport> {
        SatelliteProvider::new(MockTransport::replying(reply))
    }

    #[test]
    fn test_provider_name() {
        assert_eq!(mock_provider(Ok(vec![])).name(), "Satellite");
    }

    #[test]
    fn test_fetch_requests_templated_url() {
        let provider = mock_provider(Ok(vec![]));

        provider.fetch_tile(&TileCoord::new(77185, 99230, 18)).unwrap();

        assert_eq!(
            provider.transport.requested_urls(),
            vec!["https://mt1.google.com/vt/lyrs=s&x=77185&y=99230&z=18"]
        );
    }

    #[test]
    fn test_fetch_respects_custom_host() {
        let provider = SatelliteProvider::with_host(
            MockTransport::replying(Ok(vec![])),
            "tiles.example.com",
        );

        provider.fetch_tile(&TileCoord::new(1, 2, 3)).unwrap();

        assert_eq!(
            provider.transport.requested_urls(),
            vec!["https://tiles.example.com/vt/lyrs=s&x=1&y=2&z=3"]
        );
    }

    #[test]
    fn test_fetch_tile_success() {
        let data = vec![0xFF, 0xD8, 0xFF, 0xE0];
        let provider = mock_provider(Ok(data.clone()));

        let result = provider.fetch_tile(&TileCoord::new(100, 200, 10));
        assert_eq!(result.unwrap(), data);
    }

    #[test]
    fn test_fetch_tile_http_error() {
        let provider = mock_provider(Err(ProviderError::HttpError(
            "tile host returned 404".to_string(),
        )));

        let result = provider.fetch_tile(&TileCoord::new(100, 200, 10));
        assert!(matches!(result, Err(ProviderError::HttpError(_))));
    }

    #[test]
    fn test_unsupported_zoom_skips_transport() {
        let provider = mock_provider(Ok(vec![]));

        let result = provider.fetch_tile(&TileCoord::new(0, 0, 23));
        assert!(matches!(result, Err(ProviderError::UnsupportedZoom(23))));
        assert!(provider.transport.requested_urls().is_empty());
    }

    #[test]
    fn test_supports_zoom_range() {
        let provider = mock_provider(Ok(vec![]));
        assert!(provider.supports_zoom(0));
        assert!(provider.supports_zoom(18));
        assert!(provider.supports_zoom(22));
        assert!(!provider.supports_zoom(23));
    }
}
