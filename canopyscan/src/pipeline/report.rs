//! Survey result types.

use std::path::PathBuf;

use image::RgbImage;
use serde::Serialize;

use crate::coord::Density;

/// Complete result of an area survey.
///
/// Carries the composed mosaic plus the aggregate statistics. When
/// some tiles failed, the mosaic and counts under-represent the true
/// area; `tiles_failed` exposes that degradation to callers.
pub struct AreaReport {
    /// The stitched, annotated mosaic
    pub mosaic: RgbImage,
    /// Objects detected across all successful tiles
    pub total_count: u64,
    /// Approximate surveyed area in km²
    pub area_km2: f64,
    /// Objects per km², or not computable for a zero-area rectangle
    pub density: Density,
    /// Terminal progress value; always 100 for a finished survey
    pub progress_percent: f64,
    /// Tiles in the surveyed grid
    pub tiles_total: u64,
    /// Tiles skipped after fetch, decode, or detect failures
    pub tiles_failed: u64,
    /// Where the mosaic was saved, when a result store was configured
    pub image_path: Option<PathBuf>,
}

impl AreaReport {
    /// Produces the serializable summary of this report.
    pub fn summary(&self) -> AreaSummary {
        let (width, height) = self.mosaic.dimensions();
        AreaSummary {
            count: self.total_count,
            area: format!("{:.2} km²", self.area_km2),
            density: self.density.to_string(),
            resolution: format!("{}x{}", width, height),
            image_path: self
                .image_path
                .as_ref()
                .map(|p| p.to_string_lossy().into_owned()),
            progress: self.progress_percent,
            tiles_failed: self.tiles_failed,
        }
    }
}

/// Wire-friendly summary of an [`AreaReport`].
///
/// This is what a serving layer returns to clients; the mosaic image
/// itself is referenced by path rather than inlined.
#[derive(Debug, Clone, Serialize)]
pub struct AreaSummary {
    pub count: u64,
    pub area: String,
    pub density: String,
    pub resolution: String,
    pub image_path: Option<String>,
    pub progress: f64,
    pub tiles_failed: u64,
}

/// Result of detection on a single caller-supplied image.
pub struct ImageReport {
    /// Input image with detections drawn on it
    pub annotated: RgbImage,
    /// Number of detected objects
    pub count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> AreaReport {
        AreaReport {
            mosaic: RgbImage::new(512, 256),
            total_count: 40,
            area_km2: 2.0,
            density: Density::from_count(40, 2.0),
            progress_percent: 100.0,
            tiles_total: 2,
            tiles_failed: 0,
            image_path: None,
        }
    }

    #[test]
    fn test_summary_formats_fields() {
        let summary = report().summary();
        assert_eq!(summary.count, 40);
        assert_eq!(summary.area, "2.00 km²");
        assert_eq!(summary.density, "20.00 per km²");
        assert_eq!(summary.resolution, "512x256");
        assert_eq!(summary.progress, 100.0);
    }

    #[test]
    fn test_summary_serializes_to_json() {
        let json = serde_json::to_value(report().summary()).unwrap();
        assert_eq!(json["count"], 40);
        assert_eq!(json["resolution"], "512x256");
        assert!(json["image_path"].is_null());
    }

    #[test]
    fn test_summary_field_names_are_stable() {
        let json = serde_json::to_value(report().summary()).unwrap();
        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            [
                "area",
                "count",
                "density",
                "image_path",
                "progress",
                "resolution",
                "tiles_failed"
            ]
        );
    }

    #[test]
    fn test_summary_not_computable_density() {
        let mut r = report();
        r.area_km2 = 0.0;
        r.density = Density::from_count(40, 0.0);
        assert_eq!(r.summary().density, "N/A (area is too small)");
    }
}
