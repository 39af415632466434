//! Area survey orchestration.

use std::sync::Arc;

use chrono::Local;
use image::RgbImage;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::coord::{rect_area_km2, rect_to_grid, CoordError, Density, TileCoord};
use crate::detect::{DetectError, DetectionOutcome, Detector};
use crate::mosaic::MosaicCanvas;
use crate::provider::TileProvider;
use crate::storage::{ResultStore, SurveyRecord};
use crate::telemetry::SurveyMetrics;

use super::config::{PipelineConfig, SurveyRequest};
use super::report::{AreaReport, ImageReport};

/// Fatal pipeline errors.
///
/// Everything here is a precondition failure raised before any tile
/// work starts (or, for single-image processing, a detect failure the
/// caller must see). Per-tile failures during an area survey never
/// surface as errors; they are absorbed at the tile boundary.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// No detection model was injected, or it failed to load
    #[error("detection model is not available")]
    DetectorUnavailable,
    /// The requested rectangle or zoom cannot be mapped to tiles
    #[error("invalid survey rectangle: {0}")]
    InvalidRectangle(#[from] CoordError),
    /// Detection failed on a caller-supplied image
    #[error("detection failed: {0}")]
    Detection(#[from] DetectError),
    /// The tile worker pool could not be created
    #[error("failed to build worker pool: {0}")]
    WorkerPool(String),
}

/// What one tile contributed to the survey.
struct TileOutcome {
    tile: TileCoord,
    /// Annotated tile image; `None` when the tile was lost
    annotated: Option<RgbImage>,
    count: u32,
}

impl TileOutcome {
    fn failed(tile: TileCoord) -> Self {
        Self {
            tile,
            annotated: None,
            count: 0,
        }
    }
}

/// Drives a survey over a tile grid: fetch, detect, composite,
/// aggregate.
///
/// All collaborators are injected: the tile source, the detection
/// model, and (optionally) result persistence. Tiles are mutually
/// independent, so they are fanned out over a bounded worker pool
/// and joined before a single-threaded composite pass; the only
/// cross-tile state is the metrics counters.
///
/// # Failure semantics
///
/// Individual tile failures (fetch, decode, detect) are logged and
/// skipped: the tile contributes zero objects and its canvas region
/// stays background. The mosaic and counts may therefore
/// under-represent the true area; [`AreaReport::tiles_failed`] tells
/// callers by how many tiles. Only preconditions fail the whole job.
pub struct AreaPipeline {
    provider: Arc<dyn TileProvider>,
    detector: Option<Arc<dyn Detector>>,
    store: Option<Arc<dyn ResultStore>>,
    metrics: Arc<SurveyMetrics>,
    config: PipelineConfig,
}

impl AreaPipeline {
    /// Creates a pipeline with the default configuration.
    ///
    /// `detector` is `None` when the model failed to load at startup;
    /// the pipeline then rejects every survey up front instead of at
    /// inference time.
    pub fn new(provider: Arc<dyn TileProvider>, detector: Option<Arc<dyn Detector>>) -> Self {
        Self {
            provider,
            detector,
            store: None,
            metrics: Arc::new(SurveyMetrics::new()),
            config: PipelineConfig::default(),
        }
    }

    /// Attaches a result store for mosaic and summary persistence.
    pub fn with_store(mut self, store: Arc<dyn ResultStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Overrides the pipeline configuration.
    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Live metrics for this pipeline, for progress polling.
    ///
    /// The counters track one survey at a time: `process_area` resets
    /// them on entry, so run concurrent surveys on separate pipeline
    /// instances if their progress must be observed independently.
    pub fn metrics(&self) -> Arc<SurveyMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Surveys a geographic rectangle.
    ///
    /// Computes the tile grid, processes every tile (skipping
    /// failures), composites the mosaic, and aggregates counts into
    /// area statistics. When a result store is attached, the mosaic
    /// and a summary row are persisted best-effort.
    pub fn process_area(&self, request: &SurveyRequest) -> Result<AreaReport, PipelineError> {
        let detector = self
            .detector
            .as_deref()
            .ok_or(PipelineError::DetectorUnavailable)?;

        let grid = rect_to_grid(&request.rect, request.zoom)?;
        self.metrics.survey_started(grid.tile_count());
        info!(
            zoom = request.zoom,
            tiles = grid.tile_count(),
            width = grid.width(),
            height = grid.height(),
            "starting area survey"
        );

        let tiles: Vec<TileCoord> = grid.iter().collect();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.workers)
            .build()
            .map_err(|e| PipelineError::WorkerPool(e.to_string()))?;

        let outcomes: Vec<TileOutcome> = pool.install(|| {
            tiles
                .par_iter()
                .map(|tile| self.process_tile(tile, detector, request.confidence))
                .collect()
        });

        // Join step: composite and reduce counts single-threaded.
        // Tile regions are disjoint, so order is irrelevant.
        let mut canvas = MosaicCanvas::new(&grid);
        let mut total_count: u64 = 0;
        let mut tiles_failed: u64 = 0;
        for outcome in &outcomes {
            match &outcome.annotated {
                Some(image) => {
                    canvas.paste(&outcome.tile, image);
                    total_count += outcome.count as u64;
                }
                None => tiles_failed += 1,
            }
        }

        let area_km2 = rect_area_km2(&request.rect);
        let density = Density::from_count(total_count, area_km2);
        let mosaic = canvas.into_image();
        let image_path = self.persist(&mosaic, request, total_count);

        if tiles_failed > 0 {
            warn!(
                tiles_failed,
                tiles_total = grid.tile_count(),
                "survey completed with missing tiles; counts under-represent the area"
            );
        }

        Ok(AreaReport {
            mosaic,
            total_count,
            area_km2,
            density,
            progress_percent: 100.0,
            tiles_total: grid.tile_count(),
            tiles_failed,
            image_path,
        })
    }

    /// Runs detection on a single caller-supplied image, bypassing
    /// tiling entirely.
    pub fn process_single_image(
        &self,
        image: &RgbImage,
        confidence: f32,
    ) -> Result<ImageReport, PipelineError> {
        let detector = self
            .detector
            .as_deref()
            .ok_or(PipelineError::DetectorUnavailable)?;

        let detection = detector.detect(image, confidence)?;
        if detection.outcome == DetectionOutcome::Empty {
            warn!("model returned no recognizable result set");
        }

        Ok(ImageReport {
            count: detection.count(),
            annotated: detection.image,
        })
    }

    /// Fetch → decode → detect for one tile. All failures are
    /// absorbed here and reported as a lost tile.
    fn process_tile(
        &self,
        tile: &TileCoord,
        detector: &dyn Detector,
        confidence: f32,
    ) -> TileOutcome {
        let bytes = match self.provider.fetch_tile(tile) {
            Ok(bytes) => bytes,
            Err(e) => {
                debug!(%tile, "skipping tile after fetch failure: {}", e);
                self.metrics.tile_failed();
                return TileOutcome::failed(*tile);
            }
        };

        let decoded = match image::load_from_memory(&bytes) {
            Ok(image) => image.to_rgb8(),
            Err(e) => {
                warn!(%tile, "skipping undecodable tile: {}", e);
                self.metrics.tile_failed();
                return TileOutcome::failed(*tile);
            }
        };

        match detector.detect(&decoded, confidence) {
            Ok(detection) => {
                if detection.outcome == DetectionOutcome::Empty {
                    warn!(%tile, "model returned no recognizable result set");
                }
                let count = detection.count();
                self.metrics.tile_succeeded(count as u64);
                TileOutcome {
                    tile: *tile,
                    annotated: Some(detection.image),
                    count,
                }
            }
            Err(e) => {
                warn!(%tile, "skipping tile after detection failure: {}", e);
                self.metrics.tile_failed();
                TileOutcome::failed(*tile)
            }
        }
    }

    /// Best-effort persistence of the mosaic and summary row. Store
    /// failures degrade to warnings; the survey result stands.
    fn persist(
        &self,
        mosaic: &RgbImage,
        request: &SurveyRequest,
        total_count: u64,
    ) -> Option<std::path::PathBuf> {
        let store = self.store.as_ref()?;

        let stem = format!("processed_area_{}", Local::now().format("%Y%m%d_%H%M%S"));
        let image_path = match store.save_image(mosaic, &stem) {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("failed to save mosaic image: {}", e);
                None
            }
        };

        let record = SurveyRecord::new(request.rect, request.zoom, total_count);
        if let Err(e) = store.append_summary(&record) {
            warn!("failed to append survey summary: {}", e);
        }

        image_path
    }
}
