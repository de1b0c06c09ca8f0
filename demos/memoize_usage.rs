//! Memoization and Metrics Demonstration
//!
//! Wraps a slow function with an LFU result cache, shows which results
//! survive eviction, and prints the cache metrics.
//!
//! Run with: cargo run --example memoize_usage

use lfu_memo::config::{Limit, MemoizeConfig};
use lfu_memo::metrics::CacheMetrics;
use lfu_memo::{memoize, Args, ScanOrder};
use std::time::{Duration, Instant};

fn slow_square(args: &Args) -> i64 {
    std::thread::sleep(Duration::from_millis(20));
    let x = args.get(0).and_then(|a| a.as_int()).unwrap_or(0);
    x * x
}

fn main() {
    let limit: Limit = std::env::var("MEMO_LIMIT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(Limit::Bounded(3));

    println!("Memoized slow_square with limit {limit}\n");
    let (square, cache) = memoize(MemoizeConfig::new(limit), slow_square);

    let workload = [2, 3, 2, 2, 4, 3, 5, 6, 2, 3];
    for x in workload {
        let start = Instant::now();
        let result = square.call(&Args::new().arg(x));
        println!(
            "square({x}) = {result:>3}  in {:>5.1?}  (cached: {})",
            start.elapsed(),
            cache.len()
        );
    }

    println!("\nCached results by priority:");
    for entry in cache.entries() {
        println!("  {:?} -> {} (frequency {})", entry.key.values(), entry.value, entry.frequency);
    }

    let removed = cache.remove_by_priority(|f| f == 1, usize::MAX, ScanOrder::Ascending);
    println!("\nDropped {removed} results used only once");

    println!("\n{} metrics:", square.algorithm_name());
    for (name, value) in square.metrics() {
        println!("  {name:<24} {value:.2}");
    }
}
