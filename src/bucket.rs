//! Frequency → bucket index with a tracked minimum frequency.
//!
//! Invariants kept after every public method returns:
//! - no empty bucket is stored;
//! - `min_frequency` is the smallest stored frequency, or `None` when empty;
//! - every linked entry's `frequency` equals the key of the bucket holding it.
//!
//! Touching an entry, inserting a new one and evicting are O(1). Eviction
//! goes through [`BucketIndex::evict_min`], which relies on the frequency-1
//! attach that always follows it to restore the minimum. Detaching the last
//! member of the minimum bucket any other way (`remove`, `pop`, shrinking,
//! priority removal) rescans the bucket keys, which is O(number of distinct
//! frequencies).

extern crate alloc;

use crate::arena::{SlotArena, SlotId};
use crate::entry::Entry;
use crate::list::FrequencyBucket;
use alloc::vec::Vec;

#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// Order in which [`LfuCache::remove_by_priority`](crate::LfuCache::remove_by_priority)
/// visits frequency buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ScanOrder {
    /// Lowest frequency first: the entries eviction would pick first.
    #[default]
    Ascending,
    /// Highest frequency first.
    Descending,
}

#[derive(Debug, Default)]
pub(crate) struct BucketIndex {
    buckets: HashMap<u64, FrequencyBucket>,
    min_frequency: Option<u64>,
}

impl BucketIndex {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Number of distinct frequencies currently held.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    pub(crate) fn min_frequency(&self) -> Option<u64> {
        self.min_frequency
    }

    pub(crate) fn max_frequency(&self) -> Option<u64> {
        self.buckets.keys().copied().max()
    }

    #[inline]
    pub(crate) fn get(&self, frequency: u64) -> Option<&FrequencyBucket> {
        self.buckets.get(&frequency)
    }

    /// Stored frequencies, sorted in `order`.
    pub(crate) fn frequencies(&self, order: ScanOrder) -> Vec<u64> {
        let mut frequencies: Vec<u64> = self.buckets.keys().copied().collect();
        match order {
            ScanOrder::Ascending => frequencies.sort_unstable(),
            ScanOrder::Descending => frequencies.sort_unstable_by(|a, b| b.cmp(a)),
        }
        frequencies
    }

    /// Links a freshly inserted entry into the bucket for its frequency.
    pub(crate) fn attach<K, V>(&mut self, arena: &mut SlotArena<Entry<K, V>>, id: SlotId) {
        let frequency = arena[id].frequency;
        self.buckets
            .entry(frequency)
            .or_insert_with(FrequencyBucket::new)
            .push_front(arena, id);
        if self.min_frequency.map_or(true, |min| frequency < min) {
            self.min_frequency = Some(frequency);
        }
    }

    /// Counts one use of `id`: moves it to the recent end of the next bucket
    /// and returns its new frequency.
    pub(crate) fn touch<K, V>(&mut self, arena: &mut SlotArena<Entry<K, V>>, id: SlotId) -> u64 {
        let old_frequency = arena[id].frequency;
        let new_frequency = old_frequency + 1;

        if self.unlink(arena, id, old_frequency) && self.min_frequency == Some(old_frequency) {
            // The entry lands in `new_frequency`, so that bucket is about to exist.
            self.min_frequency = Some(new_frequency);
        }

        arena[id].frequency = new_frequency;
        self.buckets
            .entry(new_frequency)
            .or_insert_with(FrequencyBucket::new)
            .push_front(arena, id);
        new_frequency
    }

    /// Unlinks `id` for good and restores the minimum-frequency invariant.
    pub(crate) fn detach<K, V>(&mut self, arena: &mut SlotArena<Entry<K, V>>, id: SlotId) {
        let frequency = arena[id].frequency;
        if self.unlink(arena, id, frequency) && self.min_frequency == Some(frequency) {
            self.recompute_min();
        }
    }

    /// Unlinks and returns the least recently touched entry of the minimum
    /// bucket, i.e. the LFU eviction candidate.
    pub(crate) fn pop_min<K, V>(&mut self, arena: &mut SlotArena<Entry<K, V>>) -> Option<SlotId> {
        let frequency = self.min_frequency?;
        let id = self.buckets.get(&frequency)?.tail()?;
        self.detach(arena, id);
        Some(id)
    }

    /// Unlinks the eviction candidate like [`pop_min`](Self::pop_min) but
    /// leaves `min_frequency` as is, so an emptied minimum bucket costs no
    /// rescan.
    ///
    /// The caller must [`attach`](Self::attach) a new frequency-1 entry right
    /// after. Every frequency is at least 1, so that attach makes 1 the
    /// minimum again whatever the stale value was.
    pub(crate) fn evict_min<K, V>(
        &mut self,
        arena: &mut SlotArena<Entry<K, V>>,
    ) -> Option<SlotId> {
        let frequency = self.min_frequency?;
        let id = self.buckets.get(&frequency)?.tail()?;
        self.unlink(arena, id, frequency);
        Some(id)
    }

    pub(crate) fn clear(&mut self) {
        self.buckets.clear();
        self.min_frequency = None;
    }

    /// Unlinks `id` from the bucket at `frequency`, dropping the bucket when it
    /// empties. Returns `true` if the bucket was dropped.
    fn unlink<K, V>(
        &mut self,
        arena: &mut SlotArena<Entry<K, V>>,
        id: SlotId,
        frequency: u64,
    ) -> bool {
        let Some(bucket) = self.buckets.get_mut(&frequency) else {
            return false;
        };
        bucket.unlink(arena, id);
        if bucket.is_empty() {
            self.buckets.remove(&frequency);
            true
        } else {
            false
        }
    }

    fn recompute_min(&mut self) {
        self.min_frequency = self.buckets.keys().copied().min();
    }

    /// Checks every invariant listed in the module docs.
    #[cfg(test)]
    pub(crate) fn assert_consistent<K, V>(&self, arena: &SlotArena<Entry<K, V>>) {
        assert_eq!(self.min_frequency, self.buckets.keys().copied().min());
        let mut linked = 0;
        for (&frequency, bucket) in &self.buckets {
            assert!(!bucket.is_empty(), "empty bucket {frequency} kept");
            let mut count = 0;
            for (_, entry) in bucket.iter(arena) {
                assert_eq!(entry.frequency, frequency);
                count += 1;
            }
            assert_eq!(count, bucket.len());
            linked += count;
        }
        assert_eq!(linked, arena.len());
    }
}
