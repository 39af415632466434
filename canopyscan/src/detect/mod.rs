//! Object detection boundary.
//!
//! The detection model itself lives outside this crate; the pipeline
//! only depends on the [`Detector`] trait defined here. Implementations
//! wrap whatever inference runtime hosts the model and must be
//! thread-safe (`Send + Sync`) so tiles can be processed concurrently
//! against a single loaded model.

use image::RgbImage;

/// Detection output for one image.
///
/// Carries the annotated copy of the input (boxes drawn over the
/// raster) together with what the model actually produced.
#[derive(Debug, Clone)]
pub struct Detection {
    /// Input image with detections drawn on it
    pub image: RgbImage,
    /// Which result shape the model produced, with its element count
    pub outcome: DetectionOutcome,
}

impl Detection {
    /// Number of detected objects, regardless of result shape.
    #[inline]
    pub fn count(&self) -> u32 {
        self.outcome.count()
    }
}

/// The result shape a detection model produced.
///
/// Models emit either axis-aligned boxes or oriented (rotated) boxes
/// depending on how they were trained. Some inference paths return
/// neither; that is a warning condition, not an error, and counts as
/// zero objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionOutcome {
    /// Axis-aligned bounding boxes
    Boxes(u32),
    /// Oriented bounding boxes (rotated rectangles)
    OrientedBoxes(u32),
    /// The model returned no recognizable result set
    Empty,
}

impl DetectionOutcome {
    /// Element count of whichever result set is present.
    #[inline]
    pub fn count(&self) -> u32 {
        match self {
            DetectionOutcome::Boxes(n) => *n,
            DetectionOutcome::OrientedBoxes(n) => *n,
            DetectionOutcome::Empty => 0,
        }
    }
}

/// Errors raised by a detection backend.
#[derive(Debug, thiserror::Error)]
pub enum DetectError {
    /// The model rejected or failed on this input
    #[error("inference failed: {0}")]
    Inference(String),
}

/// Trait for object detection backends.
///
/// The pipeline treats the model as a black box: image in, annotated
/// image plus count out. A model that fails on one tile only loses
/// that tile; model *absence* is a pipeline-level precondition checked
/// before any tile work starts.
pub trait Detector: Send + Sync {
    /// Runs detection on one image.
    ///
    /// # Arguments
    ///
    /// * `image` - Decoded raster to analyze
    /// * `confidence` - Minimum confidence threshold in (0, 1]
    fn detect(&self, image: &RgbImage, confidence: f32) -> Result<Detection, DetectError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    struct FixedDetector {
        outcome: DetectionOutcome,
    }

    impl Detector for FixedDetector {
        fn detect(&self, image: &RgbImage, _confidence: f32) -> Result<Detection, DetectError> {
            Ok(Detection {
                image: image.clone(),
                outcome: self.outcome,
            })
        }
    }

    #[test]
    fn test_count_matches_boxes_variant() {
        assert_eq!(DetectionOutcome::Boxes(7).count(), 7);
    }

    #[test]
    fn test_count_matches_oriented_variant() {
        assert_eq!(DetectionOutcome::OrientedBoxes(12).count(), 12);
    }

    #[test]
    fn test_empty_outcome_counts_zero() {
        assert_eq!(DetectionOutcome::Empty.count(), 0);
    }

    #[test]
    fn test_trait_object_detect() {
        let detector: Arc<dyn Detector> = Arc::new(FixedDetector {
            outcome: DetectionOutcome::OrientedBoxes(3),
        });

        let image = RgbImage::new(8, 8);
        let detection = detector.detect(&image, 0.5).unwrap();
        assert_eq!(detection.count(), 3);
        assert_eq!(detection.image.dimensions(), (8, 8));
    }

    #[test]
    fn test_trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn Detector>();
    }
}
