//! Area survey pipeline
//!
//! Coordinates the whole geotile acquisition and mosaic flow: grid
//! computation, parallel tile fetch + detection, mosaic compositing,
//! and aggregate statistics.
//!
//! ```text
//! GeoRect ──► TileGrid ──► [fetch ──► decode ──► detect]×N ──► join
//!                                                              │
//!                      AreaReport ◄── stats ◄── MosaicCanvas ◄─┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use canopyscan::coord::GeoRect;
//! use canopyscan::pipeline::{AreaPipeline, SurveyRequest};
//! use canopyscan::provider::{ReqwestTransport, SatelliteProvider};
//!
//! let provider = Arc::new(SatelliteProvider::new(ReqwestTransport::new()?));
//! let pipeline = AreaPipeline::new(provider, Some(model));
//!
//! let rect = GeoRect::from_corners(40.0, -74.0, 40.01, -73.99);
//! let report = pipeline.process_area(&SurveyRequest::new(rect))?;
//! println!("{} objects over {:.2} km²", report.total_count, report.area_km2);
//! ```

mod config;
mod report;
mod survey;

pub use config::{
    PipelineConfig, SurveyRequest, DEFAULT_CONFIDENCE, DEFAULT_WORKERS, DEFAULT_ZOOM,
};
pub use report::{AreaReport, AreaSummary, ImageReport};
pub use survey::{AreaPipeline, PipelineError};
