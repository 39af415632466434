//! HTTP transport for tile downloads.
//!
//! Tile hosts are plain GET endpoints returning raster bytes, so the
//! whole transport surface is one call. It sits behind a trait so
//! provider tests can serve canned tiles instead of hitting a live
//! host.

use std::time::Duration;

use super::types::ProviderError;

/// Default per-request timeout.
///
/// A stuck fetch should cost one tile, not stall the survey; the
/// pipeline treats a timeout like any other lost tile.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking HTTP GET against a tile host.
pub trait HttpTransport: Send + Sync {
    /// Fetches the raw tile payload at `url`.
    ///
    /// Any non-2xx status is an error; the body is never partially
    /// returned.
    fn get_bytes(&self, url: &str) -> Result<Vec<u8>, ProviderError>;
}

/// reqwest-backed transport with a bounded per-request timeout.
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// Builds a transport with the default timeout.
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Builds a transport with a custom per-request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, ProviderError> {
        reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map(|client| Self { client })
            .map_err(|e| ProviderError::HttpError(format!("could not build tile client: {}", e)))
    }
}

impl HttpTransport for ReqwestTransport {
    fn get_bytes(&self, url: &str) -> Result<Vec<u8>, ProviderError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| ProviderError::HttpError(format!("tile request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::HttpError(format!(
                "tile host returned {} for {}",
                status, url
            )));
        }

        response
            .bytes()
            .map(|body| body.to_vec())
            .map_err(|e| ProviderError::HttpError(format!("failed reading tile body: {}", e)))
    }
}

#[cfg(test)]
pub mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Canned-response transport that records every requested URL.
    pub struct MockTransport {
        reply: Result<Vec<u8>, ProviderError>,
        requested: Mutex<Vec<String>>,
    }

    impl MockTransport {
        pub fn replying(reply: Result<Vec<u8>, ProviderError>) -> Self {
            Self {
                reply,
                requested: Mutex::new(Vec::new()),
            }
        }

        /// URLs requested so far, in order.
        pub fn requested_urls(&self) -> Vec<String> {
            self.requested.lock().unwrap().clone()
        }
    }

    impl HttpTransport for MockTransport {
        fn get_bytes(&self, url: &str) -> Result<Vec<u8>, ProviderError> {
            self.requested.lock().unwrap().push(url.to_string());
            self.reply.clone()
        }
    }

    #[test]
    fn test_mock_serves_canned_payload() {
        let mock = MockTransport::replying(Ok(vec![0xFF, 0xD8]));

        let body = mock.get_bytes("https://tiles.example/vt").unwrap();
        assert_eq!(body, vec![0xFF, 0xD8]);
    }

    #[test]
    fn test_mock_records_requested_urls() {
        let mock = MockTransport::replying(Ok(vec![]));

        mock.get_bytes("https://tiles.example/a").unwrap();
        mock.get_bytes("https://tiles.example/b").unwrap();

        assert_eq!(
            mock.requested_urls(),
            vec!["https://tiles.example/a", "https://tiles.example/b"]
        );
    }

    #[test]
    fn test_mock_propagates_errors() {
        let mock =
            MockTransport::replying(Err(ProviderError::HttpError("tile host returned 404".into())));

        assert!(mock.get_bytes("https://tiles.example/vt").is_err());
        assert_eq!(mock.requested_urls().len(), 1);
    }
}
