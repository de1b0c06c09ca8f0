//! Frequency bucket: an intrusive doubly linked list of arena slots.
//!
//! A bucket only stores its two ends and its length. The links themselves live
//! on the [`Entry`] records inside the [`SlotArena`], so moving an entry from
//! one bucket to another is a couple of index writes.
//!
//! ```text
//!   head (most recent)                         tail (least recent)
//!      │                                            │
//!      ▼                                            ▼
//!   [slot 4] ──next──▶ [slot 0] ──next──▶ [slot 7]
//!            ◀──prev──          ◀──prev──
//! ```
//!
//! New and relocated entries are pushed at the head; eviction takes the tail.

use crate::arena::{SlotArena, SlotId};
use crate::entry::Entry;

/// Entries sharing one access frequency, ordered by recency.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FrequencyBucket {
    head: Option<SlotId>,
    tail: Option<SlotId>,
    len: usize,
}

impl FrequencyBucket {
    #[inline]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Most recently touched member.
    #[cfg(test)]
    #[inline]
    pub(crate) fn head(&self) -> Option<SlotId> {
        self.head
    }

    /// Least recently touched member: the eviction candidate of this bucket.
    #[inline]
    pub(crate) fn tail(&self) -> Option<SlotId> {
        self.tail
    }

    /// Links an unlinked entry at the recent end.
    pub(crate) fn push_front<K, V>(&mut self, arena: &mut SlotArena<Entry<K, V>>, id: SlotId) {
        let old_head = self.head;
        {
            let entry = &mut arena[id];
            entry.prev = None;
            entry.next = old_head;
        }
        match old_head {
            Some(h) => arena[h].prev = Some(id),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        self.len += 1;
    }

    /// Unlinks `id` from this bucket. The entry must be a member.
    pub(crate) fn unlink<K, V>(&mut self, arena: &mut SlotArena<Entry<K, V>>, id: SlotId) {
        let (prev, next) = {
            let entry = &mut arena[id];
            (entry.prev.take(), entry.next.take())
        };
        match prev {
            Some(p) => arena[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => arena[n].prev = prev,
            None => self.tail = prev,
        }
        self.len -= 1;
    }

    /// Walks the members from most to least recently touched.
    pub(crate) fn iter<'a, K, V>(&self, arena: &'a SlotArena<Entry<K, V>>) -> Iter<'a, K, V> {
        Iter {
            arena,
            cursor: self.head,
        }
    }
}

pub(crate) struct Iter<'a, K, V> {
    arena: &'a SlotArena<Entry<K, V>>,
    cursor: Option<SlotId>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (SlotId, &'a Entry<K, V>);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let entry = &self.arena[id];
        self.cursor = entry.next;
        Some((id, entry))
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use super::*;
    use alloc::vec::Vec;

    fn keys(
        bucket: &FrequencyBucket,
        arena: &SlotArena<Entry<&'static str, u32>>,
    ) -> Vec<&'static str> {
        bucket.iter(arena).map(|(_, e)| e.key).collect()
    }

    #[test]
    fn test_push_front_orders_by_recency() {
        let mut arena = SlotArena::new();
        let mut bucket = FrequencyBucket::new();
        for key in ["a", "b", "c"] {
            let id = arena.insert(Entry::new(key, 0));
            bucket.push_front(&mut arena, id);
        }

        assert_eq!(bucket.len(), 3);
        assert_eq!(keys(&bucket, &arena), ["c", "b", "a"]);
        assert_eq!(arena[bucket.tail().unwrap()].key, "a");
        assert_eq!(arena[bucket.head().unwrap()].key, "c");
    }

    #[test]
    fn test_unlink_middle_head_and_tail() {
        let mut arena = SlotArena::new();
        let mut bucket = FrequencyBucket::new();
        let ids: Vec<SlotId> = ["a", "b", "c", "d"]
            .into_iter()
            .map(|key| {
                let id = arena.insert(Entry::new(key, 0));
                bucket.push_front(&mut arena, id);
                id
            })
            .collect();

        bucket.unlink(&mut arena, ids[1]);
        assert_eq!(keys(&bucket, &arena), ["d", "c", "a"]);

        bucket.unlink(&mut arena, ids[3]);
        assert_eq!(keys(&bucket, &arena), ["c", "a"]);

        bucket.unlink(&mut arena, ids[0]);
        assert_eq!(keys(&bucket, &arena), ["c"]);
        assert_eq!(bucket.head(), bucket.tail());

        bucket.unlink(&mut arena, ids[2]);
        assert!(bucket.is_empty());
        assert_eq!(bucket.head(), None);
        assert_eq!(bucket.tail(), None);
    }
}
