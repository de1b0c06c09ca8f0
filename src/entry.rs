//! Cache entry types.
//!
//! [`Entry`] is the record stored in the cache's slot arena: key, value,
//! access frequency and the two links that thread it into its frequency
//! bucket. It never leaves the crate.
//!
//! [`CacheEntry`] is the read-only snapshot handed to callers by
//! [`LfuCache::entries`](crate::LfuCache::entries).
//!
//! # Memory Layout
//!
//! The links are read on every touch and eviction, so they sit first:
//! - `prev`, `next` - 2 x 16 bytes (`Option<SlotId>`)
//! - `frequency` - 8 bytes
//! - `key: K`, `value: V` - user types

use crate::arena::SlotId;
use core::fmt;

/// Arena record for one cached key.
///
/// An entry belongs to exactly one frequency bucket at a time: the one whose
/// frequency equals `frequency`. `prev` points towards the more recently
/// touched neighbour, `next` towards the less recently touched one.
pub(crate) struct Entry<K, V> {
    pub(crate) prev: Option<SlotId>,
    pub(crate) next: Option<SlotId>,
    pub(crate) frequency: u64,
    pub(crate) key: K,
    pub(crate) value: V,
}

impl<K, V> Entry<K, V> {
    /// Creates an unlinked entry with frequency 1.
    #[inline]
    pub(crate) fn new(key: K, value: V) -> Self {
        Self {
            prev: None,
            next: None,
            frequency: 1,
            key,
            value,
        }
    }

    #[inline]
    pub(crate) fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Entry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("frequency", &self.frequency)
            .finish()
    }
}

/// Snapshot of a cached key, its value and its access count.
///
/// # Examples
///
/// ```
/// use lfu_memo::LfuCache;
///
/// let mut cache = LfuCache::new(4);
/// cache.put("a", 1);
/// cache.get(&"a");
///
/// let entries = cache.entries();
/// assert_eq!(entries[0].key, &"a");
/// assert_eq!(entries[0].value, &1);
/// assert_eq!(entries[0].frequency, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheEntry<K, V> {
    /// The cached key
    pub key: K,

    /// The cached value
    pub value: V,

    /// Number of uses so far: 1 on insertion, plus one per get hit or put update.
    pub frequency: u64,
}

impl<K, V> CacheEntry<K, V> {
    /// Creates a snapshot from its parts.
    #[inline]
    pub fn new(key: K, value: V, frequency: u64) -> Self {
        Self {
            key,
            value,
            frequency,
        }
    }
}

impl<K: Clone, V: Clone> CacheEntry<&K, &V> {
    /// Clones the borrowed key and value into an owned snapshot.
    #[inline]
    pub fn to_owned_entry(&self) -> CacheEntry<K, V> {
        CacheEntry::new(self.key.clone(), self.value.clone(), self.frequency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_starts_unlinked_at_frequency_one() {
        let entry = Entry::new("key", 42);
        assert_eq!(entry.frequency, 1);
        assert!(entry.prev.is_none());
        assert!(entry.next.is_none());
        assert_eq!(entry.into_pair(), ("key", 42));
    }

    #[test]
    fn test_snapshot_to_owned() {
        let key = 7u32;
        let value = 70u64;
        let borrowed = CacheEntry::new(&key, &value, 3);
        let owned = borrowed.to_owned_entry();
        assert_eq!(owned, CacheEntry::new(7, 70, 3));
    }
}
