//! Satellite imagery provider abstraction
//!
//! This module provides the trait and implementations for downloading
//! raw raster tiles from a remote satellite imagery source. The HTTP
//! transport sits behind [`HttpTransport`] so tests can serve canned
//! tiles.

mod satellite;
mod transport;
mod types;

pub use satellite::{SatelliteProvider, DEFAULT_TILE_HOST};
pub use transport::{HttpTransport, ReqwestTransport};
pub use types::{ProviderError, TileProvider};

#[cfg(test)]
pub use transport::tests::MockTransport;
