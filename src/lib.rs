//! # lfu-memo
//!
//! A constant-time Least Frequently Used cache with least-recently-used
//! tie-breaking, a single-lock concurrent wrapper, and a function memoizer
//! built on top of it.
//!
//! ```
//! use lfu_memo::LfuCache;
//!
//! let mut cache = LfuCache::new(2);
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get(&"a");
//!
//! // "b" has the lowest frequency and is evicted
//! assert_eq!(cache.put("c", 3), Some(("b", 2)));
//! assert!(!cache.contains_key(&"b"));
//! ```
//!
//! # Features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `hashbrown` | yes | Use `hashbrown` maps; without it the crate needs `std` |
//! | `concurrent` | yes | [`ConcurrentLfuCache`] and the [`memoize`](mod@memoize) module, via `parking_lot` |
//! | `std` | no | Link `std` |
//! | `nightly` | no | Nightly optimizations in `hashbrown` |
//!
//! The crate is `no_std` and only needs `alloc` with the default features.
//!
//! # Complexity
//!
//! `get`, `put` and eviction are O(1), whatever the number of distinct
//! frequencies. Bulk removal by priority, `entries()`, and `remove`/`pop`
//! calls that empty the lowest-frequency bucket scan the distinct
//! frequencies.
//!
//! # Logging
//!
//! Evictions, limit changes and bulk removals are reported at `debug` level
//! through the `log` facade; memoizer misses at `trace` level. Install any
//! `log` backend to see them.

#![no_std]

extern crate alloc;

#[cfg(any(feature = "std", not(feature = "hashbrown"), test))]
extern crate std;

/// Slot arena holding cache entries under stable integer ids.
pub(crate) mod arena;

/// Cache entry types.
///
/// `Entry` is the internal arena record; [`CacheEntry`] is the snapshot
/// returned to callers.
pub mod entry;

/// Intrusive recency list used for each frequency bucket.
pub(crate) mod list;

/// Frequency to bucket index with the tracked minimum frequency.
pub(crate) mod bucket;

/// Cache configuration structures.
pub mod config;

/// Error types for configuration parsing.
pub mod error;

/// Cache metrics system.
///
/// Every cache reports its counters through the [`metrics::CacheMetrics`] trait.
pub mod metrics;

/// Least Frequently Used (LFU) cache implementation.
pub mod lfu;

/// Concurrent cache implementations.
///
/// Available when the `concurrent` feature is enabled.
#[cfg(feature = "concurrent")]
pub mod concurrent;

/// Function memoization on top of the concurrent LFU cache.
///
/// Available when the `concurrent` feature is enabled.
#[cfg(feature = "concurrent")]
pub mod memoize;

pub use bucket::ScanOrder;
pub use config::{LfuCacheConfig, Limit, MemoizeConfig};
pub use entry::CacheEntry;
pub use error::CacheError;
pub use lfu::LfuCache;
pub use metrics::CacheMetrics;

#[cfg(feature = "concurrent")]
pub use concurrent::ConcurrentLfuCache;

#[cfg(feature = "concurrent")]
pub use memoize::{memoize, Arg, Args, CacheKey, Memoized};
