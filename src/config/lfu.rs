//! Configuration for the Least Frequently Used (LFU) cache.
//!
//! # Examples
//!
//! ```
//! use lfu_memo::config::{LfuCacheConfig, Limit};
//! use lfu_memo::LfuCache;
//!
//! // Bounded cache
//! let config = LfuCacheConfig {
//!     limit: Limit::Bounded(100),
//! };
//! let cache: LfuCache<String, i32> = LfuCache::init(config, None);
//! assert_eq!(cache.capacity(), 100);
//!
//! // Cache that never evicts on put
//! let cache: LfuCache<String, i32> = LfuCache::init(LfuCacheConfig::unbounded(), None);
//! assert_eq!(cache.capacity(), usize::MAX);
//! ```

use super::Limit;
use core::fmt;

/// Configuration for an LFU (Least Frequently Used) cache.
///
/// # Fields
///
/// - `limit`: Maximum number of entries. `Limit::Bounded(0)` disables the
///   cache, `Limit::Unbounded` never evicts on put.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct LfuCacheConfig {
    /// Maximum number of key-value pairs the cache can hold
    pub limit: Limit,
}

impl LfuCacheConfig {
    /// Creates a bounded configuration holding at most `capacity` entries.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            limit: Limit::Bounded(capacity),
        }
    }

    /// Creates a configuration without an entry limit.
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            limit: Limit::Unbounded,
        }
    }

    /// Returns the entry count the limit allows (`usize::MAX` when unbounded).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.limit.capacity()
    }
}

impl fmt::Debug for LfuCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LfuCacheConfig")
            .field("limit", &self.limit)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lfu_config_creation() {
        let config = LfuCacheConfig::new(100);
        assert_eq!(config.limit, Limit::Bounded(100));
        assert_eq!(config.capacity(), 100);
    }

    #[test]
    fn test_lfu_config_unbounded() {
        let config = LfuCacheConfig::unbounded();
        assert!(config.limit.is_unbounded());
        assert_eq!(config.capacity(), usize::MAX);
    }

    #[test]
    fn test_lfu_config_default_matches_limit_default() {
        assert_eq!(LfuCacheConfig::default().limit, Limit::DEFAULT);
    }
}
