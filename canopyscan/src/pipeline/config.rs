//! Survey request and pipeline configuration.

use crate::coord::GeoRect;

/// Default zoom level for area surveys.
///
/// Zoom 18 gives roughly 0.6 m/px ground resolution at mid
/// latitudes, fine enough to separate individual tree crowns.
pub const DEFAULT_ZOOM: u8 = 18;

/// Default detection confidence threshold.
pub const DEFAULT_CONFIDENCE: f32 = 0.5;

/// Default number of tile workers.
pub const DEFAULT_WORKERS: usize = 4;

/// One area survey request.
///
/// Wraps the rectangle with the tunable detection parameters, with
/// builder-style overrides over sensible defaults.
///
/// # Example
///
/// ```
/// use canopyscan::coord::GeoRect;
/// use canopyscan::pipeline::SurveyRequest;
///
/// let rect = GeoRect::from_corners(40.0, -74.0, 40.01, -73.99);
/// let request = SurveyRequest::new(rect).with_zoom(17).with_confidence(0.25);
/// assert_eq!(request.zoom, 17);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurveyRequest {
    /// Geographic rectangle to survey (corners in any order)
    pub rect: GeoRect,
    /// Tile zoom level
    pub zoom: u8,
    /// Minimum detection confidence
    pub confidence: f32,
}

impl SurveyRequest {
    /// Creates a request with the default zoom and confidence.
    pub fn new(rect: GeoRect) -> Self {
        Self {
            rect,
            zoom: DEFAULT_ZOOM,
            confidence: DEFAULT_CONFIDENCE,
        }
    }

    /// Overrides the zoom level.
    pub fn with_zoom(mut self, zoom: u8) -> Self {
        self.zoom = zoom;
        self
    }

    /// Overrides the confidence threshold.
    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = confidence;
        self
    }
}

/// Pipeline tuning knobs.
#[derive(Debug, Clone, Copy)]
pub struct PipelineConfig {
    /// Size of the bounded tile worker pool.
    ///
    /// Bounds both concurrent tile-host requests and concurrent
    /// detector invocations.
    pub workers: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
        }
    }
}

impl PipelineConfig {
    /// Sets the worker pool size.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let rect = GeoRect::from_corners(40.0, -74.0, 40.01, -73.99);
        let request = SurveyRequest::new(rect);
        assert_eq!(request.zoom, 18);
        assert_eq!(request.confidence, 0.5);
    }

    #[test]
    fn test_request_overrides() {
        let rect = GeoRect::from_corners(40.0, -74.0, 40.01, -73.99);
        let request = SurveyRequest::new(rect).with_zoom(15).with_confidence(0.8);
        assert_eq!(request.zoom, 15);
        assert_eq!(request.confidence, 0.8);
    }

    #[test]
    fn test_config_worker_floor() {
        let config = PipelineConfig::default().with_workers(0);
        assert_eq!(config.workers, 1);
    }
}
