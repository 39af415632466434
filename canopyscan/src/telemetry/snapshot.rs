//! Point-in-time view of survey metrics.

/// Copy of the survey counters at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// Tiles in the current survey's grid
    pub tiles_total: u64,
    /// Tiles fetched, detected, and composited
    pub tiles_succeeded: u64,
    /// Tiles skipped after a fetch, decode, or detect failure
    pub tiles_failed: u64,
    /// Objects detected across all successful tiles
    pub objects_detected: u64,
}

impl MetricsSnapshot {
    /// Tiles accounted for so far, successful or not.
    pub fn tiles_processed(&self) -> u64 {
        self.tiles_succeeded + self.tiles_failed
    }

    /// Survey completion as a percentage.
    ///
    /// An empty survey reports 100 so pollers always terminate.
    pub fn progress_percent(&self) -> f64 {
        if self.tiles_total == 0 {
            return 100.0;
        }
        self.tiles_processed() as f64 / self.tiles_total as f64 * 100.0
    }
}
