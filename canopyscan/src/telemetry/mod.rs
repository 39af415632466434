//! Survey telemetry for observability and progress reporting.
//!
//! Tile workers record per-tile outcomes into lock-free atomic
//! counters; callers take point-in-time snapshots to observe progress
//! while a survey runs. The pipeline itself only reports the terminal
//! value, but a serving layer can poll [`SurveyMetrics::snapshot`]
//! for incremental progress.
//!
//! ```text
//! Tile workers ────► SurveyMetrics ────► MetricsSnapshot ────► Views
//!                    (atomic counters)   (point-in-time copy)
//! ```

mod metrics;
mod snapshot;

pub use metrics::SurveyMetrics;
pub use snapshot::MetricsSnapshot;
