//! LFU Cache Metrics
//!
//! Metrics specific to the LFU (Least Frequently Used) cache algorithm.

extern crate alloc;

use super::{CacheMetrics, CoreCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// LFU-specific metrics (extends CoreCacheMetrics)
///
/// The frequency distribution fields (`min_frequency`, `max_frequency`,
/// `active_frequency_levels`) describe the cache at the moment the report was
/// taken; the counters accumulate over the cache's lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LfuCacheMetrics {
    /// Core metrics common to all cache algorithms
    pub core: CoreCacheMetrics,

    /// Lowest frequency currently held (0 when empty)
    pub min_frequency: u64,

    /// Highest frequency currently held (0 when empty)
    pub max_frequency: u64,

    /// Total number of frequency increments (get hits plus put updates)
    pub total_frequency_increments: u64,

    /// Number of distinct frequency buckets currently in use
    pub active_frequency_levels: u64,
}

impl LfuCacheMetrics {
    /// Creates zeroed metrics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one frequency increment (a get hit or a put update).
    ///
    /// The distribution fields are filled in by
    /// [`observe_levels`](Self::observe_levels) when a report is taken.
    #[inline]
    pub fn record_frequency_increment(&mut self) {
        self.total_frequency_increments += 1;
    }

    /// Records a get hit.
    #[inline]
    pub fn record_frequency_hit(&mut self) {
        self.core.record_hit();
        self.record_frequency_increment();
    }

    /// Records a get miss.
    #[inline]
    pub fn record_miss(&mut self) {
        self.core.record_miss();
    }

    /// Overwrites the distribution fields with the cache's current state.
    pub fn observe_levels(&mut self, min: Option<u64>, max: Option<u64>, levels: usize) {
        self.min_frequency = min.unwrap_or(0);
        self.max_frequency = max.unwrap_or(0);
        self.active_frequency_levels = levels as u64;
    }

    /// Average number of uses per stored key: insertions plus frequency
    /// increments (get hits and put updates), divided by insertions.
    /// 0.0 before the first insertion.
    pub fn average_frequency(&self) -> f64 {
        if self.core.insertions > 0 {
            (self.core.insertions + self.total_frequency_increments) as f64
                / self.core.insertions as f64
        } else {
            0.0
        }
    }

    /// The range of frequencies currently in the cache.
    pub fn frequency_range(&self) -> u64 {
        self.max_frequency.saturating_sub(self.min_frequency)
    }

    /// Converts LFU metrics to a BTreeMap for reporting.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = self.core.to_btreemap();

        metrics.insert("min_frequency".to_string(), self.min_frequency as f64);
        metrics.insert("max_frequency".to_string(), self.max_frequency as f64);
        metrics.insert("frequency_range".to_string(), self.frequency_range() as f64);
        metrics.insert(
            "total_frequency_increments".to_string(),
            self.total_frequency_increments as f64,
        );
        metrics.insert(
            "active_frequency_levels".to_string(),
            self.active_frequency_levels as f64,
        );
        metrics.insert("average_frequency".to_string(), self.average_frequency());

        metrics
    }
}

impl CacheMetrics for LfuCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LFU"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_hit_counts_hit_and_increment() {
        let mut metrics = LfuCacheMetrics::new();
        assert_eq!(metrics.average_frequency(), 0.0);

        metrics.core.record_insertion();
        metrics.core.record_insertion();
        metrics.record_frequency_hit();
        metrics.record_frequency_hit();
        metrics.record_frequency_increment();

        assert_eq!(metrics.core.cache_hits, 2);
        assert_eq!(metrics.total_frequency_increments, 3);
        // Two keys used five times in total.
        assert_eq!(metrics.average_frequency(), 2.5);
    }

    #[test]
    fn test_increments_leave_distribution_to_observe_levels() {
        let mut metrics = LfuCacheMetrics::new();
        metrics.record_frequency_hit();
        metrics.record_frequency_increment();
        assert_eq!(metrics.max_frequency, 0);

        metrics.observe_levels(Some(1), Some(3), 2);
        assert_eq!(metrics.max_frequency, 3);
    }

    #[test]
    fn test_observe_levels() {
        let mut metrics = LfuCacheMetrics::new();
        metrics.observe_levels(Some(2), Some(9), 3);
        assert_eq!(metrics.frequency_range(), 7);

        let map = metrics.metrics();
        assert_eq!(map["min_frequency"], 2.0);
        assert_eq!(map["active_frequency_levels"], 3.0);
        assert_eq!(metrics.algorithm_name(), "LFU");

        metrics.observe_levels(None, None, 0);
        assert_eq!(metrics.min_frequency, 0);
        assert_eq!(metrics.max_frequency, 0);
    }
}
