//! Least Frequently Used Cache Implementation.
//!
//! The LFU (Least Frequently Used) cache evicts the entry with the smallest
//! access count when a new key arrives at a full cache. Among entries sharing
//! that count, the one touched least recently goes first.
//!
//! # How It Works
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │ keys: HashMap<K, SlotId>          entries: SlotArena<Entry<K, V>>    │
//! │   "a" ─────────────────────────────▶ slot 0  freq 3                  │
//! │   "b" ─────────────────────────────▶ slot 1  freq 1                  │
//! │   "c" ─────────────────────────────▶ slot 2  freq 1                  │
//! │                                                                      │
//! │ buckets: HashMap<u64, FrequencyBucket>      min_frequency = 1        │
//! │   1: head ─▶ [slot 2] ◀─▶ [slot 1] ◀─ tail   (tail is evicted first) │
//! │   3: head ─▶ [slot 0] ◀─ tail                                        │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - `get` and `put` on an existing key move the entry from bucket `f` to the
//!   head of bucket `f + 1`.
//! - a new key enters the head of bucket 1, which also becomes the minimum.
//! - eviction pops the tail of the bucket at `min_frequency`; the new key
//!   that follows resets the minimum to 1, so nothing is rescanned.
//!
//! All three are O(1). `remove`, `pop` and `set_limit` are O(1) too unless
//! they empty the minimum bucket, which rescans the distinct frequencies.
//! [`LfuCache::remove_by_priority`] and [`LfuCache::entries`] walk buckets
//! and are the slow path.
//!
//! # Thread Safety
//!
//! `LfuCache` is not synchronized; every operation needs `&mut self`. Use
//! `ConcurrentLfuCache` (feature `concurrent`) to share one cache between
//! threads behind a single lock.

extern crate alloc;

use crate::arena::{SlotArena, SlotId};
use crate::bucket::{BucketIndex, ScanOrder};
use crate::config::{LfuCacheConfig, Limit};
use crate::entry::{CacheEntry, Entry};
use crate::metrics::{CacheMetrics, LfuCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use log::debug;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// An implementation of a Least Frequently Used (LFU) cache.
///
/// New keys start at frequency 1. Every `get` hit and every `put` on an
/// existing key adds one. When the cache is full, inserting a new key first
/// evicts the entry with the lowest frequency, least recently touched first.
///
/// # Examples
///
/// ```
/// use lfu_memo::LfuCache;
///
/// let mut cache = LfuCache::new(2);
/// cache.put("a", 1);
/// cache.put("b", 2);
///
/// // "a" now has frequency 2, "b" still 1
/// assert_eq!(cache.get(&"a"), Some(&1));
///
/// // "b" is evicted to make room for "c"
/// assert_eq!(cache.put("c", 3), Some(("b", 2)));
/// assert_eq!(cache.get(&"b"), None);
/// assert_eq!(cache.hits(), 1);
/// assert_eq!(cache.misses(), 1);
/// ```
pub struct LfuCache<K, V, S = DefaultHashBuilder> {
    /// Configuration for the LFU cache
    config: LfuCacheConfig,

    /// Key index: key to the slot holding its entry
    keys: HashMap<K, SlotId, S>,

    /// Entry storage; bucket links are slot ids into this arena
    entries: SlotArena<Entry<K, V>>,

    /// Frequency buckets and the current minimum frequency
    buckets: BucketIndex,

    /// Metrics for tracking cache performance and frequency distribution
    metrics: LfuCacheMetrics,
}

impl<K: Hash + Eq, V> LfuCache<K, V> {
    /// Creates a new LFU cache holding at most `capacity` entries.
    ///
    /// A capacity of 0 creates a disabled cache: puts are dropped and every
    /// get misses.
    ///
    /// # Examples
    ///
    /// ```
    /// use lfu_memo::LfuCache;
    ///
    /// let cache: LfuCache<&str, u32> = LfuCache::new(10);
    /// assert_eq!(cache.capacity(), 10);
    /// ```
    pub fn new(capacity: usize) -> Self {
        Self::init(LfuCacheConfig::new(capacity), None)
    }

    /// Creates a cache without an entry limit. It never evicts on put.
    pub fn unbounded() -> Self {
        Self::init(LfuCacheConfig::unbounded(), None)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> LfuCache<K, V, S> {
    /// Creates a cache from a configuration and an optional hasher.
    ///
    /// # Examples
    ///
    /// ```
    /// use lfu_memo::config::{LfuCacheConfig, Limit};
    /// use lfu_memo::LfuCache;
    /// use std::collections::hash_map::RandomState;
    ///
    /// let config = LfuCacheConfig { limit: Limit::Bounded(8) };
    /// let cache: LfuCache<u64, String, RandomState> =
    ///     LfuCache::init(config, Some(RandomState::new()));
    /// assert!(cache.is_empty());
    /// ```
    pub fn init(config: LfuCacheConfig, hasher: Option<S>) -> Self
    where
        S: Default,
    {
        Self::with_hasher(config, hasher.unwrap_or_default())
    }

    /// Creates a cache from a configuration and a hash builder.
    pub fn with_hasher(config: LfuCacheConfig, hash_builder: S) -> Self {
        // Preallocate only for modest bounded limits; unbounded caches grow on demand.
        let reserve = match config.limit {
            Limit::Bounded(n) if n <= 4096 => n,
            _ => 0,
        };
        LfuCache {
            config,
            keys: HashMap::with_capacity_and_hasher(reserve, hash_builder),
            entries: SlotArena::with_capacity(reserve),
            buckets: BucketIndex::new(),
            metrics: LfuCacheMetrics::new(),
        }
    }

    /// Returns the current entry limit.
    #[inline]
    pub fn limit(&self) -> Limit {
        self.config.limit
    }

    /// Returns the maximum number of entries (`usize::MAX` when unbounded).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.config.capacity()
    }

    /// Returns the current number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if the cache holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Number of `get` calls that found their key.
    #[inline]
    pub fn hits(&self) -> u64 {
        self.metrics.core.cache_hits
    }

    /// Number of `get` calls that did not find their key.
    #[inline]
    pub fn misses(&self) -> u64 {
        self.metrics.core.cache_misses()
    }

    /// Lowest frequency currently held, `None` when empty.
    #[inline]
    pub fn min_frequency(&self) -> Option<u64> {
        self.buckets.min_frequency()
    }

    /// Returns a reference to the value for `key`, counting one use.
    ///
    /// The key may be any borrowed form of the cache's key type, but
    /// [`Hash`] and [`Eq`] on the borrowed form *must* match those for
    /// the key type.
    ///
    /// A hit increments the entry's frequency and the hit counter; a miss
    /// only increments the miss counter.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let id = self.touch(key)?;
        Some(&self.entries[id].value)
    }

    /// Like [`get`](Self::get) but returns a mutable reference.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let id = self.touch(key)?;
        Some(&mut self.entries[id].value)
    }

    /// Returns the value for `key` without counting a use.
    ///
    /// Neither the frequency nor the hit/miss counters change.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let &id = self.keys.get(key)?;
        Some(&self.entries[id].value)
    }

    /// Returns `true` if `key` is cached. Counts nothing.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.keys.contains_key(key)
    }

    /// Returns the current access count of `key`.
    pub fn frequency<Q>(&self, key: &Q) -> Option<u64>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let &id = self.keys.get(key)?;
        Some(self.entries[id].frequency)
    }

    /// Inserts a key-value pair, counting one use if the key already exists.
    ///
    /// - Existing key: the value is replaced, the frequency goes up by one,
    ///   and the previous pair `(key, old_value)` is returned.
    /// - New key on a full cache: the least frequently used entry (least
    ///   recently touched among ties) is evicted and returned.
    /// - New key otherwise: stored with frequency 1, `None` is returned.
    ///
    /// On a disabled cache (limit 0) the pair is dropped and `None` returned.
    /// Puts never change the hit/miss counters.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)>
    where
        K: Clone,
    {
        if let Some(&id) = self.keys.get(&key) {
            let old_value = core::mem::replace(&mut self.entries[id].value, value);
            self.buckets.touch(&mut self.entries, id);
            self.metrics.record_frequency_increment();
            self.metrics.core.record_update();
            return Some((key, old_value));
        }

        if self.config.limit.is_disabled() {
            return None;
        }

        let evicted = if self.config.limit.is_full(self.len()) {
            self.evict()
        } else {
            None
        };
        self.insert_new(key, value);
        evicted
    }

    /// Inserts the pair only if `key` is absent, returning `true` if it was stored.
    ///
    /// An existing entry is left as is: neither its value nor its frequency
    /// changes. A full cache evicts as for [`put`](Self::put).
    pub fn insert_if_absent(&mut self, key: K, value: V) -> bool
    where
        K: Clone,
    {
        if self.config.limit.is_disabled() || self.keys.contains_key(&key) {
            return false;
        }
        if self.config.limit.is_full(self.len()) {
            self.evict();
        }
        self.insert_new(key, value);
        true
    }

    /// Removes `key`, returning its value if it was cached.
    ///
    /// Use `.is_some()` for a plain "was anything removed" answer.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let id = self.keys.remove(key)?;
        self.buckets.detach(&mut self.entries, id);
        let entry = self.entries.remove(id)?;
        self.metrics.core.record_removals(1);
        Some(entry.value)
    }

    /// Removes and returns the current eviction candidate.
    ///
    /// # Examples
    ///
    /// ```
    /// use lfu_memo::LfuCache;
    ///
    /// let mut cache = LfuCache::new(2);
    /// cache.put("a", 1);
    /// cache.put("b", 2);
    /// cache.get(&"a");
    ///
    /// assert_eq!(cache.pop(), Some(("b", 2)));
    /// ```
    pub fn pop(&mut self) -> Option<(K, V)> {
        let pair = self.take_min()?;
        self.metrics.core.record_removals(1);
        Some(pair)
    }

    /// Removes up to `limit` entries whose frequency satisfies `predicate`.
    ///
    /// Buckets are visited in `order`; inside a bucket the least recently
    /// touched entries go first. Returns the number of entries removed.
    ///
    /// This is the slow path: it sorts the distinct frequencies and costs
    /// O(F log F + removed) for F distinct frequencies, unlike the O(1)
    /// `get`/`put`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lfu_memo::{LfuCache, ScanOrder};
    ///
    /// let mut cache = LfuCache::new(3);
    /// cache.put("a", 1);
    /// cache.put("b", 2);
    /// cache.put("c", 3);
    /// cache.get(&"c");
    ///
    /// let removed = cache.remove_by_priority(|freq| freq == 1, usize::MAX, ScanOrder::Ascending);
    /// assert_eq!(removed, 2);
    /// assert_eq!(cache.len(), 1);
    /// assert!(cache.contains_key(&"c"));
    /// ```
    pub fn remove_by_priority<P>(
        &mut self,
        mut predicate: P,
        limit: usize,
        order: ScanOrder,
    ) -> usize
    where
        P: FnMut(u64) -> bool,
    {
        let mut removed = 0;
        for frequency in self.buckets.frequencies(order) {
            if removed == limit {
                break;
            }
            if !predicate(frequency) {
                continue;
            }
            while removed < limit {
                let Some(id) = self.buckets.get(frequency).and_then(|b| b.tail()) else {
                    break;
                };
                self.buckets.detach(&mut self.entries, id);
                if let Some(entry) = self.entries.remove(id) {
                    self.keys.remove(&entry.key);
                }
                removed += 1;
            }
        }

        if removed > 0 {
            self.metrics.core.record_removals(removed as u64);
            debug!("removed {removed} entries by priority, {} left", self.len());
        }
        removed
    }

    /// Changes the entry limit, evicting entries until the cache fits.
    ///
    /// Shrinking evicts in eviction order (lowest frequency, least recently
    /// touched first) and returns the evicted pairs. `Limit::Bounded(0)`
    /// empties the cache. Growing never evicts.
    pub fn set_limit(&mut self, limit: Limit) -> Vec<(K, V)> {
        self.config.limit = limit;
        let mut evicted = Vec::new();
        while self.len() > limit.capacity() {
            match self.take_min() {
                Some(pair) => {
                    self.metrics.core.record_eviction();
                    evicted.push(pair);
                }
                None => break,
            }
        }
        debug!(
            "lfu limit set to {limit}, evicted {} entries",
            evicted.len()
        );
        evicted
    }

    /// Removes every entry. The limit and the counters are kept.
    pub fn clear(&mut self) {
        self.keys.clear();
        self.entries.clear();
        self.buckets.clear();
    }

    /// Snapshot of every entry in priority order.
    ///
    /// The first element has the highest frequency (most recently touched
    /// first among ties); the last one is the next eviction candidate.
    /// Walks the whole cache: O(n + F log F).
    pub fn entries(&self) -> Vec<CacheEntry<&K, &V>> {
        let mut out = Vec::with_capacity(self.len());
        for frequency in self.buckets.frequencies(ScanOrder::Descending) {
            if let Some(bucket) = self.buckets.get(frequency) {
                out.extend(
                    bucket
                        .iter(&self.entries)
                        .map(|(_, e)| CacheEntry::new(&e.key, &e.value, e.frequency)),
                );
            }
        }
        out
    }

    /// Returns the counters and the current frequency distribution.
    pub fn lfu_metrics(&self) -> LfuCacheMetrics {
        let mut metrics = self.metrics.clone();
        metrics.observe_levels(
            self.buckets.min_frequency(),
            self.buckets.max_frequency(),
            self.buckets.len(),
        );
        metrics
    }

    /// Looks `key` up and, on a hit, moves it one bucket up.
    fn touch<Q>(&mut self, key: &Q) -> Option<SlotId>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let Some(&id) = self.keys.get(key) else {
            self.metrics.record_miss();
            return None;
        };
        self.buckets.touch(&mut self.entries, id);
        self.metrics.record_frequency_hit();
        Some(id)
    }

    fn insert_new(&mut self, key: K, value: V)
    where
        K: Clone,
    {
        let id = self.entries.insert(Entry::new(key.clone(), value));
        self.buckets.attach(&mut self.entries, id);
        self.keys.insert(key, id);
        self.metrics.core.record_insertion();
    }

    /// Evicts the LFU entry to make room for a new key.
    ///
    /// Must be followed by `insert_new`, which restores the minimum frequency.
    fn evict(&mut self) -> Option<(K, V)> {
        let id = self.buckets.evict_min(&mut self.entries)?;
        let entry = self.entries.remove(id)?;
        self.keys.remove(&entry.key);
        self.metrics.core.record_eviction();
        debug!("lfu evicted an entry, {} left", self.len());
        Some(entry.into_pair())
    }

    fn take_min(&mut self) -> Option<(K, V)> {
        let id = self.buckets.pop_min(&mut self.entries)?;
        let entry = self.entries.remove(id)?;
        self.keys.remove(&entry.key);
        Some(entry.into_pair())
    }

    #[cfg(test)]
    fn assert_consistent(&self) {
        assert_eq!(self.keys.len(), self.entries.len());
        assert!(self.len() <= self.capacity());
        for (key, &id) in &self.keys {
            assert!(self.entries[id].key == *key);
        }
        self.buckets.assert_consistent(&self.entries);
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for LfuCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.lfu_metrics().to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LFU"
    }
}

impl<K, V, S> fmt::Debug for LfuCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LfuCache")
            .field("limit", &self.config.limit)
            .field("len", &self.entries.len())
            .field("min_frequency", &self.buckets.min_frequency())
            .finish()
    }
}
