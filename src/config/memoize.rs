//! Configuration for memoized functions.

use super::Limit;

/// Configuration for a [`Memoized`](crate::memoize::Memoized) function.
///
/// # Fields
///
/// - `limit`: Size of the function's LFU cache (default 128 entries).
/// - `typed`: When `true`, each argument's type is part of the cache key, so
///   `1` and `1.0` are cached separately. Costs a little more per call.
///
/// # Examples
///
/// ```
/// use lfu_memo::config::{Limit, MemoizeConfig};
///
/// let config = MemoizeConfig::new(Limit::Bounded(1024)).typed(true);
/// assert!(config.typed);
/// assert_eq!(MemoizeConfig::default().limit, Limit::Bounded(128));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemoizeConfig {
    /// Maximum number of cached results
    pub limit: Limit,
    /// Whether argument types take part in the cache key
    pub typed: bool,
}

impl MemoizeConfig {
    /// Untyped configuration with the given limit.
    #[must_use]
    pub fn new(limit: Limit) -> Self {
        Self {
            limit,
            typed: false,
        }
    }

    /// Sets whether argument types take part in the cache key.
    #[must_use]
    pub fn typed(mut self, typed: bool) -> Self {
        self.typed = typed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memoize_config_builder() {
        let config = MemoizeConfig::new(Limit::Unbounded).typed(true);
        assert_eq!(config.limit, Limit::Unbounded);
        assert!(config.typed);
    }

    #[test]
    fn test_memoize_config_default() {
        let config = MemoizeConfig::default();
        assert_eq!(config.limit, Limit::Bounded(128));
        assert!(!config.typed);
    }
}
