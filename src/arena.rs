//! Slot arena backing the cache entries.
//!
//! Entries are stored in a `Vec` of slots and addressed by [`SlotId`], a plain
//! index that stays valid until the entry is removed. Freed slots are recycled
//! through a free list, so a long-running cache does not grow its storage past
//! the peak number of live entries.
//!
//! Frequency buckets link entries together through these ids instead of
//! pointers, which keeps relocation O(1) without any `unsafe` code.

extern crate alloc;

use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

/// Stable handle to an occupied slot in a [`SlotArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct SlotId(usize);

impl SlotId {
    #[cfg(test)]
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
pub(crate) struct SlotArena<T> {
    slots: Vec<Option<T>>,
    free_list: Vec<usize>,
    len: usize,
}

impl<T> SlotArena<T> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            len: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            len: 0,
        }
    }

    /// Stores `value` in a free slot (or a new one) and returns its id.
    pub(crate) fn insert(&mut self, value: T) -> SlotId {
        let idx = if let Some(idx) = self.free_list.pop() {
            self.slots[idx] = Some(value);
            idx
        } else {
            self.slots.push(Some(value));
            self.slots.len() - 1
        };
        self.len += 1;
        SlotId(idx)
    }

    pub(crate) fn remove(&mut self, id: SlotId) -> Option<T> {
        let value = self.slots.get_mut(id.0)?.take()?;
        self.free_list.push(id.0);
        self.len -= 1;
        Some(value)
    }

    #[inline]
    pub(crate) fn get(&self, id: SlotId) -> Option<&T> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[cfg(test)]
    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_list.clear();
        self.len = 0;
    }
}

impl<T> Default for SlotArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Ids handed out by the arena are only used while the slot is occupied, so a
// vacant slot here means the bucket links and the key index disagree.
impl<T> Index<SlotId> for SlotArena<T> {
    type Output = T;

    #[inline]
    fn index(&self, id: SlotId) -> &T {
        match self.get(id) {
            Some(value) => value,
            None => panic!("slot {} is vacant", id.0),
        }
    }
}

impl<T> IndexMut<SlotId> for SlotArena<T> {
    #[inline]
    fn index_mut(&mut self, id: SlotId) -> &mut T {
        match self.get_mut(id) {
            Some(value) => value,
            None => panic!("slot {} is vacant", id.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove_reuses_slot() {
        let mut arena = SlotArena::new();
        let a = arena.insert("a");
        let b = arena.insert("b");
        assert_eq!(arena.len(), 2);
        assert_eq!(arena[a], "a");
        assert_eq!(arena.get(b), Some(&"b"));

        assert_eq!(arena.remove(a), Some("a"));
        assert_eq!(arena.remove(a), None);
        assert_eq!(arena.len(), 1);

        let c = arena.insert("c");
        assert_eq!(c.index(), a.index());
        assert_eq!(arena[c], "c");
    }

    #[test]
    fn test_clear_empties_arena() {
        let mut arena = SlotArena::with_capacity(4);
        let id = arena.insert(1u32);
        arena[id] += 1;
        assert_eq!(arena.get(id), Some(&2));

        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(arena.get(id), None);
    }

    #[test]
    #[should_panic(expected = "vacant")]
    fn test_index_on_vacant_slot_panics() {
        let mut arena = SlotArena::new();
        let id = arena.insert(7);
        arena.remove(id);
        let _ = arena[id];
    }
}
