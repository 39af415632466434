//! Canopyscan - aerial object surveys from satellite tile mosaics
//!
//! This library turns a latitude/longitude rectangle into a stitched,
//! annotated aerial mosaic plus aggregate object counts and density
//! statistics. It covers the tile grid math, tile acquisition, the
//! detection-model boundary, mosaic assembly, and the survey
//! orchestration; the detection model itself and any serving layer
//! live outside the crate and are injected as collaborators.

pub mod coord;
pub mod detect;
pub mod mosaic;
pub mod pipeline;
pub mod provider;
pub mod storage;
pub mod telemetry;
