//! Logger metrics for observability
//!
//! Counters for monitoring logger health: how many records were written,
//! filtered by level, or dropped because a sink write failed.

use std::sync::atomic::{AtomicU64, Ordering};

/// Per-logger emission counters.
///
/// # Example
///
/// ```
/// use structured_logger_system::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_written();
/// metrics.record_dropped();
///
/// assert_eq!(metrics.records_written(), 1);
/// assert_eq!(metrics.dropped_count(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Records serialized and written to the sink
    records_written: AtomicU64,

    /// Emit calls that were below the threshold and produced no record
    records_filtered: AtomicU64,

    /// Records lost to sink write failures under the count-and-drop policy
    dropped_count: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            records_written: AtomicU64::new(0),
            records_filtered: AtomicU64::new(0),
            dropped_count: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn records_written(&self) -> u64 {
        self.records_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn records_filtered(&self) -> u64 {
        self.records_filtered.load(Ordering::Relaxed)
    }

    /// Records lost to sink write failures, observable without destabilizing
    /// the emit path.
    #[inline]
    pub fn dropped_count(&self) -> u64 {
        self.dropped_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_written(&self) -> u64 {
        self.records_written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.records_filtered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_dropped(&self) -> u64 {
        self.dropped_count.fetch_add(1, Ordering::Relaxed)
    }

    /// Drop rate as a percentage (0.0 - 100.0) of attempted writes.
    ///
    /// Returns 0.0 if nothing has been attempted.
    pub fn drop_rate(&self) -> f64 {
        let dropped = self.dropped_count() as f64;
        let total = self.records_written() as f64 + dropped;
        if total == 0.0 {
            0.0
        } else {
            (dropped / total) * 100.0
        }
    }

    /// Reset all counters to zero. Useful for tests.
    pub fn reset(&self) {
        self.records_written.store(0, Ordering::Relaxed);
        self.records_filtered.store(0, Ordering::Relaxed);
        self.dropped_count.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.records_written(), 0);
        assert_eq!(metrics.records_filtered(), 0);
        assert_eq!(metrics.dropped_count(), 0);
    }

    #[test]
    fn test_metrics_counting() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.record_dropped(), 0); // returns previous value
        metrics.record_dropped();
        metrics.record_written();
        metrics.record_filtered();

        assert_eq!(metrics.dropped_count(), 2);
        assert_eq!(metrics.records_written(), 1);
        assert_eq!(metrics.records_filtered(), 1);
    }

    #[test]
    fn test_metrics_drop_rate() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.drop_rate(), 0.0);

        for _ in 0..90 {
            metrics.record_written();
        }
        for _ in 0..10 {
            metrics.record_dropped();
        }

        let rate = metrics.drop_rate();
        assert!((9.9..=10.1).contains(&rate), "Drop rate was {}", rate);
    }

    #[test]
    fn test_metrics_reset() {
        let metrics = LoggerMetrics::new();
        metrics.record_written();
        metrics.record_dropped();

        metrics.reset();

        assert_eq!(metrics.records_written(), 0);
        assert_eq!(metrics.dropped_count(), 0);
    }
}
