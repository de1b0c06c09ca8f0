//! Error types.
//!
//! Cache operations themselves never fail: a missing key is `None`/`false`,
//! eviction is expected behaviour and a zero limit is a valid (disabled)
//! configuration. Errors only come out of turning untyped input, such as a
//! number read from a config file or a string from an environment variable,
//! into a [`Limit`](crate::config::Limit).
//!
//! ```
//! use lfu_memo::config::Limit;
//! use lfu_memo::CacheError;
//!
//! assert_eq!(Limit::try_from(-1i64), Err(CacheError::NegativeLimit(-1)));
//! assert!(matches!("whoops".parse::<Limit>(), Err(CacheError::InvalidLimit(_))));
//! ```

extern crate alloc;

use alloc::string::String;
use thiserror::Error;

/// Errors raised while building a cache configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    /// A signed limit below zero.
    #[error("limit must be >= 0 or unbounded, got {0}")]
    NegativeLimit(i64),

    /// A textual limit that is neither a count nor a known keyword.
    #[error("invalid limit {0:?}: expected a non-negative integer, \"unbounded\" or \"disabled\"")]
    InvalidLimit(String),
}

/// Result alias for fallible configuration helpers.
pub type Result<T> = core::result::Result<T, CacheError>;
