//! Lock-free survey metrics.

use std::sync::atomic::{AtomicU64, Ordering};

use super::snapshot::MetricsSnapshot;

/// Metrics for one area survey, updated from tile workers.
///
/// All counters are atomic so workers can record events without
/// locking; `Relaxed` ordering is sufficient because the values are
/// independent counters read only for reporting.
#[derive(Debug, Default)]
pub struct SurveyMetrics {
    tiles_total: AtomicU64,
    tiles_succeeded: AtomicU64,
    tiles_failed: AtomicU64,
    objects_detected: AtomicU64,
}

impl SurveyMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets all counters for a new survey over `total` tiles.
    ///
    /// One `SurveyMetrics` instance tracks one survey at a time;
    /// starting a second survey mid-flight discards the first
    /// survey's progress.
    pub fn survey_started(&self, total: u64) {
        self.tiles_total.store(total, Ordering::Relaxed);
        self.tiles_succeeded.store(0, Ordering::Relaxed);
        self.tiles_failed.store(0, Ordering::Relaxed);
        self.objects_detected.store(0, Ordering::Relaxed);
    }

    /// Records a successfully processed tile and its object count.
    pub fn tile_succeeded(&self, objects: u64) {
        self.tiles_succeeded.fetch_add(1, Ordering::Relaxed);
        self.objects_detected.fetch_add(objects, Ordering::Relaxed);
    }

    /// Records a tile lost to a fetch, decode, or detect failure.
    pub fn tile_failed(&self) {
        self.tiles_failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Takes a point-in-time copy of all counters.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            tiles_total: self.tiles_total.load(Ordering::Relaxed),
            tiles_succeeded: self.tiles_succeeded.load(Ordering::Relaxed),
            tiles_failed: self.tiles_failed.load(Ordering::Relaxed),
            objects_detected: self.objects_detected.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_accumulate() {
        let metrics = SurveyMetrics::new();
        metrics.survey_started(4);
        metrics.tile_succeeded(5);
        metrics.tile_succeeded(3);
        metrics.tile_failed();

        let snap = metrics.snapshot();
        assert_eq!(snap.tiles_total, 4);
        assert_eq!(snap.tiles_succeeded, 2);
        assert_eq!(snap.tiles_failed, 1);
        assert_eq!(snap.objects_detected, 8);
    }

    #[test]
    fn test_survey_started_resets() {
        let metrics = SurveyMetrics::new();
        metrics.survey_started(2);
        metrics.tile_succeeded(9);

        metrics.survey_started(10);
        let snap = metrics.snapshot();
        assert_eq!(snap.tiles_total, 10);
        assert_eq!(snap.tiles_succeeded, 0);
        assert_eq!(snap.objects_detected, 0);
    }

    #[test]
    fn test_concurrent_updates() {
        use std::sync::Arc;

        let metrics = Arc::new(SurveyMetrics::new());
        metrics.survey_started(64);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let m = Arc::clone(&metrics);
                std::thread::spawn(move || {
                    for _ in 0..8 {
                        m.tile_succeeded(2);
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let snap = metrics.snapshot();
        assert_eq!(snap.tiles_succeeded, 64);
        assert_eq!(snap.objects_detected, 128);
    }
}
