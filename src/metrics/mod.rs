//! Cache Metrics System
//!
//! Every cache reports its counters as a `BTreeMap<String, f64>` through the
//! [`CacheMetrics`] trait. BTreeMap keeps the keys sorted, so two reports of
//! the same workload print identically and can be diffed in tests.
//!
//! Hit and miss counters follow one rule: each `get` call records exactly one
//! hit or one miss. `put`, `peek`, `contains_key` and removals never touch them.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

pub mod lfu;

pub use lfu::LfuCacheMetrics;

/// Counters common to every cache.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CoreCacheMetrics {
    /// Total number of `get` calls
    pub requests: u64,

    /// Number of `get` calls that found their key
    pub cache_hits: u64,

    /// New keys stored
    pub insertions: u64,

    /// Puts that replaced the value of an existing key
    pub updates: u64,

    /// Entries dropped to make room (put on a full cache, or a shrinking limit)
    pub evictions: u64,

    /// Entries dropped on request (`remove`, `pop`, `remove_by_priority`)
    pub removals: u64,
}

impl CoreCacheMetrics {
    /// Creates zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a `get` that found its key.
    #[inline]
    pub fn record_hit(&mut self) {
        self.requests += 1;
        self.cache_hits += 1;
    }

    /// Records a `get` that did not find its key.
    #[inline]
    pub fn record_miss(&mut self) {
        self.requests += 1;
    }

    /// Records a new key stored by `put` or `insert_if_absent`.
    #[inline]
    pub fn record_insertion(&mut self) {
        self.insertions += 1;
    }

    /// Records a `put` that replaced the value of an existing key.
    #[inline]
    pub fn record_update(&mut self) {
        self.updates += 1;
    }

    /// Records one entry evicted to make room or to fit a smaller limit.
    #[inline]
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Records `count` entries removed explicitly.
    #[inline]
    pub fn record_removals(&mut self, count: u64) {
        self.removals += count;
    }

    /// Number of `get` calls that missed.
    #[inline]
    pub fn cache_misses(&self) -> u64 {
        self.requests - self.cache_hits
    }

    /// Hit ratio in `0.0..=1.0`, or 0.0 before the first request.
    pub fn hit_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_hits as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Miss ratio in `0.0..=1.0`, or 0.0 before the first request.
    pub fn miss_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_misses() as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Converts the counters to a BTreeMap for reporting.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();

        metrics.insert("cache_hits".to_string(), self.cache_hits as f64);
        metrics.insert("cache_misses".to_string(), self.cache_misses() as f64);
        metrics.insert("evictions".to_string(), self.evictions as f64);
        metrics.insert("insertions".to_string(), self.insertions as f64);
        metrics.insert("removals".to_string(), self.removals as f64);
        metrics.insert("requests".to_string(), self.requests as f64);
        metrics.insert("updates".to_string(), self.updates as f64);

        metrics.insert("hit_rate".to_string(), self.hit_rate());
        metrics.insert("miss_rate".to_string(), self.miss_rate());

        if self.requests > 0 {
            metrics.insert(
                "eviction_rate".to_string(),
                self.evictions as f64 / self.requests as f64,
            );
        }

        metrics
    }
}

/// Uniform metrics reporting for every cache type.
pub trait CacheMetrics {
    /// Returns all metrics as key-value pairs, sorted by key.
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// Short name of the eviction algorithm, e.g. `"LFU"`.
    fn algorithm_name(&self) -> &'static str;
}
