//! Concurrent LFU Cache Implementation
//!
//! [`ConcurrentLfuCache`] is an [`LfuCache`] behind one `parking_lot::Mutex`.
//! Each method takes the lock once, runs the single-threaded operation and
//! releases it, so callers only ever observe whole operations.
//!
//! Values returned by `get`, `peek` and `entries` are clones; use
//! [`get_with`](ConcurrentLfuCache::get_with) or
//! [`lock`](ConcurrentLfuCache::lock) to avoid copying.

extern crate alloc;

use crate::bucket::ScanOrder;
use crate::config::{LfuCacheConfig, Limit};
use crate::entry::CacheEntry;
use crate::lfu::LfuCache;
use crate::metrics::CacheMetrics;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use parking_lot::{Mutex, MutexGuard};

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;

/// A thread-safe LFU cache guarded by a single lock.
pub struct ConcurrentLfuCache<K, V, S = DefaultHashBuilder> {
    inner: Mutex<LfuCache<K, V, S>>,
}

impl<K: Hash + Eq, V> ConcurrentLfuCache<K, V> {
    /// Creates a concurrent LFU cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self::from_cache(LfuCache::new(capacity))
    }

    /// Creates a concurrent LFU cache without an entry limit.
    pub fn unbounded() -> Self {
        Self::from_cache(LfuCache::unbounded())
    }
}

impl<K, V, S> ConcurrentLfuCache<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Creates a concurrent cache from a configuration and an optional hasher.
    pub fn init(config: LfuCacheConfig, hasher: Option<S>) -> Self
    where
        S: Default,
    {
        Self::from_cache(LfuCache::init(config, hasher))
    }

    /// Wraps an existing cache, keeping its entries and counters.
    pub fn from_cache(cache: LfuCache<K, V, S>) -> Self {
        Self {
            inner: Mutex::new(cache),
        }
    }

    /// Unwraps the cache.
    pub fn into_inner(self) -> LfuCache<K, V, S> {
        self.inner.into_inner()
    }

    /// Locks the cache for a compound operation.
    ///
    /// Other threads block until the guard is dropped.
    pub fn lock(&self) -> MutexGuard<'_, LfuCache<K, V, S>> {
        self.inner.lock()
    }

    /// Returns the current entry limit.
    pub fn limit(&self) -> Limit {
        self.inner.lock().limit()
    }

    /// Returns the maximum number of entries (`usize::MAX` when unbounded).
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns `true` if the cache contains no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Number of `get` calls that found their key.
    pub fn hits(&self) -> u64 {
        self.inner.lock().hits()
    }

    /// Number of `get` calls that did not find their key.
    pub fn misses(&self) -> u64 {
        self.inner.lock().misses()
    }

    /// Gets a clone of the value, counting one use.
    ///
    /// For zero-copy access, use `get_with()` instead.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        V: Clone,
    {
        self.inner.lock().get(key).cloned()
    }

    /// Counts one use and applies `f` to the value while holding the lock.
    pub fn get_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&V) -> R,
    {
        self.inner.lock().get(key).map(f)
    }

    /// Gets a clone of the value without counting a use.
    pub fn peek<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        V: Clone,
    {
        self.inner.lock().peek(key).cloned()
    }

    /// Returns `true` if the cache contains the key. Counts nothing.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.lock().contains_key(key)
    }

    /// Returns the current access count of `key`.
    pub fn frequency<Q>(&self, key: &Q) -> Option<u64>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.lock().frequency(key)
    }

    /// Inserts a key-value pair. See [`LfuCache::put`].
    pub fn put(&self, key: K, value: V) -> Option<(K, V)>
    where
        K: Clone,
    {
        self.inner.lock().put(key, value)
    }

    /// Inserts the pair only if the key is absent. See [`LfuCache::insert_if_absent`].
    pub fn insert_if_absent(&self, key: K, value: V) -> bool
    where
        K: Clone,
    {
        self.inner.lock().insert_if_absent(key, value)
    }

    /// Removes a key from the cache, returning the value if it existed.
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.lock().remove(key)
    }

    /// Removes and returns the current eviction candidate.
    pub fn pop(&self) -> Option<(K, V)> {
        self.inner.lock().pop()
    }

    /// Bulk removal by frequency. See [`LfuCache::remove_by_priority`];
    /// the lock is held for the whole scan.
    pub fn remove_by_priority<P>(&self, predicate: P, limit: usize, order: ScanOrder) -> usize
    where
        P: FnMut(u64) -> bool,
    {
        self.inner.lock().remove_by_priority(predicate, limit, order)
    }

    /// Changes the entry limit, returning the pairs evicted to fit it.
    pub fn set_limit(&self, limit: Limit) -> Vec<(K, V)> {
        self.inner.lock().set_limit(limit)
    }

    /// Clears all entries from the cache.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Owned snapshot of every entry in priority order. See [`LfuCache::entries`].
    pub fn entries(&self) -> Vec<CacheEntry<K, V>>
    where
        K: Clone,
        V: Clone,
    {
        self.inner
            .lock()
            .entries()
            .iter()
            .map(CacheEntry::to_owned_entry)
            .collect()
    }
}

impl<K, V, S> CacheMetrics for ConcurrentLfuCache<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.inner.lock().metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        "ConcurrentLFU"
    }
}

impl<K, V, S> core::fmt::Debug for ConcurrentLfuCache<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.inner.try_lock() {
            Some(cache) => f
                .debug_struct("ConcurrentLfuCache")
                .field("inner", &*cache)
                .finish(),
            None => f
                .debug_struct("ConcurrentLfuCache")
                .field("inner", &"<locked>")
                .finish(),
        }
    }
}
