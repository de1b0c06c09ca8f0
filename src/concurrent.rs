//! Concurrent Cache Implementations
//!
//! Thread-safe wrappers around the single-threaded caches.
//!
//! # One Coarse Lock
//!
//! A `get` on an LFU cache is a write: it bumps the entry's frequency and
//! relocates it between two buckets while the key index points at it. Those
//! three structures must change together, so every public operation runs
//! inside a single `parking_lot::Mutex`.
//!
//! The key space is deliberately not sharded: frequency order is global, and
//! splitting the cache into independently evicting segments would let a cold
//! key in one segment outlive a hotter key in another.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ConcurrentLfuCache`] | Thread-safe LFU cache behind one lock |
//!
//! # Example
//!
//! ```rust
//! use lfu_memo::concurrent::ConcurrentLfuCache;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let cache = Arc::new(ConcurrentLfuCache::new(1000));
//!
//! let handles: Vec<_> = (0..4).map(|t| {
//!     let cache = Arc::clone(&cache);
//!     thread::spawn(move || {
//!         for i in 0..100 {
//!             let key = format!("key_{}_{}", t, i);
//!             cache.put(key.clone(), i);
//!             let _ = cache.get(&key);
//!         }
//!     })
//! }).collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! assert_eq!(cache.len(), 400);
//! ```
//!
//! # Zero-Copy Access
//!
//! `get` clones the value out so the lock is released immediately. Use
//! `get_with()` to read the value in place while the lock is held:
//!
//! ```rust
//! use lfu_memo::concurrent::ConcurrentLfuCache;
//!
//! let cache = ConcurrentLfuCache::new(8);
//! cache.put("blob", vec![0u8; 4096]);
//! assert_eq!(cache.get_with(&"blob", |v| v.len()), Some(4096));
//! ```

mod lfu;

pub use self::lfu::ConcurrentLfuCache;
