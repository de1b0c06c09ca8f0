//! Cache Configuration Module
//!
//! Configuration structs have public fields for simple instantiation, plus a
//! couple of constructors for the common cases.
//!
//! | Config | Used by | Description |
//! |--------|---------|-------------|
//! | [`LfuCacheConfig`] | [`LfuCache`](crate::LfuCache), `ConcurrentLfuCache` | Entry limit |
//! | [`MemoizeConfig`] | `Memoized` | Entry limit and typed keys |
//!
//! Both are built around [`Limit`], which can also be parsed from text:
//!
//! ```
//! use lfu_memo::config::{LfuCacheConfig, Limit};
//!
//! let limit: Limit = "512".parse().unwrap();
//! let config = LfuCacheConfig { limit };
//! assert_eq!(config.capacity(), 512);
//! ```

pub mod lfu;
pub mod limit;
pub mod memoize;

pub use lfu::LfuCacheConfig;
pub use limit::Limit;
pub use memoize::MemoizeConfig;
