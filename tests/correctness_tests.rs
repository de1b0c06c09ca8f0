//! Correctness Tests for the LFU Cache
//!
//! This module validates the eviction policy of `LfuCache` using simple,
//! predictable access patterns. Each test explicitly checks which key gets
//! evicted when a put causes an eviction.
//!
//! ## Test Strategy
//! - Small cache sizes (2-5 entries) for predictable behavior
//! - Simple, deterministic access patterns
//! - Explicit checks for which key was evicted after each put

use lfu_memo::config::{LfuCacheConfig, Limit};
use lfu_memo::metrics::CacheMetrics;
use lfu_memo::{CacheEntry, LfuCache, ScanOrder};

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Helper to create an LfuCache with the given capacity through its config
fn make_lfu<K: std::hash::Hash + Eq + Clone, V>(cap: usize) -> LfuCache<K, V> {
    let config = LfuCacheConfig {
        limit: Limit::Bounded(cap),
    };
    LfuCache::init(config, None)
}

fn keys_by_priority<V>(cache: &LfuCache<&'static str, V>) -> Vec<&'static str> {
    cache.entries().into_iter().map(|e| *e.key).collect()
}

// ============================================================================
// BASIC RETRIEVAL
// ============================================================================

#[test]
fn test_every_key_retrievable_up_to_capacity() {
    let mut cache = make_lfu(5);
    for i in 0..5 {
        cache.put(i, i * 10);
    }
    for i in 0..5 {
        cache.put(i, i * 100);
    }
    for i in 0..5 {
        assert_eq!(cache.get(&i), Some(&(i * 100)), "key {i} lost its latest value");
    }
    assert_eq!(cache.len(), 5);
}

#[test]
fn test_overflow_without_gets_evicts_first_inserted() {
    let mut cache = make_lfu(3);
    cache.put("a", 1);
    cache.put("b", 2);
    cache.put("c", 3);

    assert_eq!(cache.put("d", 4), Some(("a", 1)));
    assert!(!cache.contains_key(&"a"));
    for key in ["b", "c", "d"] {
        assert!(cache.contains_key(&key), "{key} should survive");
    }
}

#[test]
fn test_hot_key_survives_new_puts() {
    let mut cache = make_lfu(3);
    cache.put("hot", 0);
    for _ in 0..5 {
        cache.get(&"hot");
    }
    for i in 0..20 {
        cache.put(Box::leak(format!("cold-{i}").into_boxed_str()), i);
        assert!(cache.contains_key(&"hot"));
    }
    assert_eq!(cache.frequency(&"hot"), Some(6));
}

#[test]
fn test_size_never_exceeds_capacity() {
    let mut cache = make_lfu(4);
    for i in 0..100u32 {
        cache.put(i, i);
        if i % 3 == 0 {
            cache.get(&(i / 2));
        }
        assert!(cache.len() <= cache.capacity());
        if i >= 4 {
            assert_eq!(cache.len(), cache.capacity());
        }
    }
}

// ============================================================================
// EVICTION POLICY
// ============================================================================

#[test]
fn test_capacity_two_example() {
    let mut cache = make_lfu(2);
    cache.put("a", 1);
    cache.put("b", 2);
    assert_eq!(cache.get(&"a"), Some(&1));

    assert_eq!(cache.put("c", 3), Some(("b", 2)));

    assert_eq!(cache.peek(&"a"), Some(&1));
    assert_eq!(cache.peek(&"c"), Some(&3));
    assert_eq!(cache.get(&"b"), None);
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_eviction_prefers_lowest_frequency() {
    let mut cache = make_lfu(3);
    cache.put("a", 1);
    cache.put("b", 2);
    cache.put("c", 3);

    cache.get(&"a");
    cache.get(&"a");
    cache.get(&"c");

    // a=3, b=1, c=2
    assert_eq!(cache.put("d", 4), Some(("b", 2)));
    // a=3, c=2, d=1
    assert_eq!(cache.put("e", 5), Some(("d", 4)));
    assert_eq!(keys_by_priority(&cache), ["a", "c", "e"]);
}

#[test]
fn test_tie_break_evicts_least_recently_touched() {
    let mut cache = make_lfu(3);
    cache.put("a", 1);
    cache.put("b", 2);
    cache.put("c", 3);

    // All at frequency 2; "b" was touched first.
    cache.get(&"b");
    cache.get(&"c");
    cache.get(&"a");

    assert_eq!(cache.put("d", 4), Some(("b", 2)));
    // "d" is alone at frequency 1 and goes next.
    assert_eq!(cache.put("e", 5), Some(("d", 4)));
    // Then "c": the least recent member of frequency 2.
    cache.get(&"e");
    assert_eq!(cache.put("f", 6), Some(("c", 3)));
}

#[test]
fn test_update_counts_as_use() {
    let mut cache = make_lfu(2);
    cache.put("a", 1);
    cache.put("b", 2);
    assert_eq!(cache.put("a", 10), Some(("a", 1)));

    assert_eq!(cache.put("c", 3), Some(("b", 2)));
    assert_eq!(cache.peek(&"a"), Some(&10));
    assert_eq!(cache.hits() + cache.misses(), 0);
}

#[test]
fn test_new_key_becomes_next_victim() {
    let mut cache = make_lfu(2);
    cache.put("a", 1);
    cache.get(&"a");
    cache.put("b", 2);
    cache.get(&"b");

    assert_eq!(cache.put("c", 3), Some(("a", 1)));
    assert_eq!(cache.min_frequency(), Some(1));
    assert_eq!(cache.put("d", 4), Some(("c", 3)));
}

// ============================================================================
// DEGENERATE CONFIGURATIONS
// ============================================================================

#[test]
fn test_capacity_zero_is_noop() {
    let mut cache = make_lfu(0);
    assert_eq!(cache.put("x", 1), None);
    assert_eq!(cache.get(&"x"), None);
    assert_eq!(cache.len(), 0);
    assert_eq!(cache.misses(), 1);
    assert!(cache.limit().is_disabled());
}

#[test]
fn test_capacity_one() {
    let mut cache = make_lfu(1);
    cache.put("a", 1);
    cache.get(&"a");
    assert_eq!(cache.put("b", 2), Some(("a", 1)));
    assert_eq!(cache.put("c", 3), Some(("b", 2)));
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_unbounded_limit() {
    let config = LfuCacheConfig::unbounded();
    let mut cache: LfuCache<u32, u32> = LfuCache::init(config, None);
    for i in 0..10_000 {
        assert_eq!(cache.put(i, i), None);
    }
    assert_eq!(cache.len(), 10_000);
    assert!(cache.limit().is_unbounded());
}

// ============================================================================
// MISSES
// ============================================================================

#[test]
fn test_missing_get_only_counts_miss() {
    let mut cache = make_lfu(3);
    cache.put("a", 1);
    cache.put("b", 2);
    let before: Vec<CacheEntry<&str, i32>> =
        cache.entries().iter().map(CacheEntry::to_owned_entry).collect();

    for _ in 0..10 {
        assert_eq!(cache.get(&"zzz"), None);
    }

    let after: Vec<CacheEntry<&str, i32>> =
        cache.entries().iter().map(CacheEntry::to_owned_entry).collect();
    assert_eq!(before, after);
    assert_eq!(cache.len(), 2);
    assert_eq!(cache.misses(), 10);
    assert_eq!(cache.hits(), 0);
}

#[test]
fn test_hit_and_miss_counted_once_per_get() {
    let mut cache = make_lfu(2);
    cache.put(1, "one");
    cache.get(&1);
    cache.get(&2);
    cache.get(&1);
    cache.put(3, "three");
    cache.put(1, "uno");

    assert_eq!(cache.hits(), 2);
    assert_eq!(cache.misses(), 1);
    let metrics = cache.metrics();
    assert_eq!(metrics["requests"], 3.0);
    assert_eq!(metrics["cache_hits"], 2.0);
}

// ============================================================================
// REMOVAL
// ============================================================================

#[test]
fn test_remove_by_priority_frequency_one() {
    let mut cache = make_lfu(3);
    cache.put("a", 1);
    cache.put("b", 2);
    cache.put("c", 3);
    cache.get(&"c");

    let removed = cache.remove_by_priority(|f| f == 1, usize::MAX, ScanOrder::Ascending);
    assert_eq!(removed, 2);
    assert_eq!(keys_by_priority(&cache), ["c"]);
    assert_eq!(cache.frequency(&"c"), Some(2));
}

#[test]
fn test_remove_by_priority_limit_takes_least_recent_first() {
    let mut cache = make_lfu(4);
    for key in ["a", "b", "c", "d"] {
        cache.put(key, 0);
    }
    assert_eq!(cache.remove_by_priority(|_| true, 3, ScanOrder::Ascending), 3);
    assert_eq!(keys_by_priority(&cache), ["d"]);
}

#[test]
fn test_remove_then_reinsert_starts_fresh() {
    let mut cache = make_lfu(2);
    cache.put("a", 1);
    cache.get(&"a");
    cache.get(&"a");
    assert_eq!(cache.remove(&"a"), Some(1));
    assert_eq!(cache.remove(&"a"), None);

    cache.put("a", 2);
    assert_eq!(cache.frequency(&"a"), Some(1));
    assert_eq!(cache.min_frequency(), Some(1));
}

#[test]
fn test_shrink_limit_evicts_lowest_first() {
    let mut cache = make_lfu(5);
    for (i, key) in ["a", "b", "c", "d", "e"].into_iter().enumerate() {
        cache.put(key, i);
        for _ in 0..i {
            cache.get(&key);
        }
    }

    let evicted: Vec<&str> = cache
        .set_limit(Limit::Bounded(2))
        .into_iter()
        .map(|(k, _)| k)
        .collect();
    assert_eq!(evicted, ["a", "b", "c"]);
    assert_eq!(keys_by_priority(&cache), ["e", "d"]);

    // Growing back never evicts, and the cache fills again.
    assert!(cache.set_limit(Limit::Bounded(3)).is_empty());
    assert_eq!(cache.put("f", 9), None);
    assert_eq!(cache.put("g", 9), Some(("f", 9)));
}
