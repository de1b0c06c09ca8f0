//! Stress Tests for the Concurrent Cache
//!
//! These tests verify thread safety and correctness under high contention on
//! the single cache lock.

#![cfg(feature = "concurrent")]

use lfu_memo::config::{Limit, MemoizeConfig};
use lfu_memo::{memoize, Args, ConcurrentLfuCache};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

const NUM_THREADS: usize = 16;
const OPS_PER_THREAD: usize = 10_000;

#[test]
fn stress_lfu_high_contention() {
    let cache: Arc<ConcurrentLfuCache<String, usize>> = Arc::new(ConcurrentLfuCache::new(100));
    let ops = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..NUM_THREADS)
        .map(|t| {
            let cache = Arc::clone(&cache);
            let ops = Arc::clone(&ops);
            thread::spawn(move || {
                for i in 0..OPS_PER_THREAD {
                    // Small key space forces contention and eviction.
                    let key = format!("key_{}", (t * OPS_PER_THREAD + i) % 500);
                    if i % 2 == 0 {
                        cache.put(key, i);
                    } else {
                        let _ = cache.get(&key);
                    }
                    ops.fetch_add(1, Ordering::Relaxed);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(ops.load(Ordering::Relaxed), NUM_THREADS * OPS_PER_THREAD);
    assert_eq!(cache.len(), 100);
    assert_eq!(
        cache.hits() + cache.misses(),
        (NUM_THREADS * OPS_PER_THREAD / 2) as u64
    );
}

#[test]
fn stress_lfu_get_with_readers_and_writers() {
    let cache: Arc<ConcurrentLfuCache<usize, Vec<u8>>> = Arc::new(ConcurrentLfuCache::new(64));
    for i in 0..64 {
        cache.put(i, vec![i as u8; 128]);
    }

    let handles: Vec<_> = (0..NUM_THREADS)
        .map(|t| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..OPS_PER_THREAD / 10 {
                    let key = (t * 31 + i) % 96;
                    if t % 4 == 0 {
                        cache.put(key, vec![key as u8; 128]);
                    } else if let Some(first) = cache.get_with(&key, |v| v[0]) {
                        assert_eq!(first, key as u8);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(cache.len(), 64);
}

#[test]
fn stress_memoized_function_across_threads() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let (fib_mod, cache) = memoize(MemoizeConfig::new(Limit::Unbounded), move |args: &Args| {
        counter.fetch_add(1, Ordering::Relaxed);
        let n = args.get(0).and_then(|a| a.as_int()).unwrap_or(0);
        (0..n).fold((0u64, 1u64), |(a, b), _| (b, (a + b) % 1_000_007)).0
    });
    let fib_mod = Arc::new(fib_mod);

    let handles: Vec<_> = (0..NUM_THREADS)
        .map(|t| {
            let fib_mod = Arc::clone(&fib_mod);
            thread::spawn(move || {
                for i in 0..1_000 {
                    let n = ((t + i) % 50) as i64;
                    let _ = fib_mod.call(&Args::new().arg(n));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(cache.len(), 50);
    // Racing misses may compute a value twice, but never more than once per thread.
    let computed = calls.load(Ordering::Relaxed);
    assert!((50..=50 * NUM_THREADS).contains(&computed), "computed {computed}");
    assert_eq!(fib_mod.call(&Args::new().arg(10)), 55);
}
