//! Function memoization backed by a shared LFU cache.
//!
//! [`memoize`] wraps a function of [`Args`] in a [`Memoized`] value that
//! owns an `Arc` handle to a [`ConcurrentLfuCache`]. Each call builds a
//! [`CacheKey`] from its arguments, returns a clone of the cached result on
//! a hit, and otherwise runs the function and stores its result.
//!
//! ```text
//!   call(args) ──▶ make_key(args) ──▶ cache.get(key)
//!                                        │ hit  ──▶ clone of cached value
//!                                        │ miss ──▶ func(args) ──▶ cache.put(key, result)
//! ```
//!
//! There is no global registry of memoized functions: the handle returned by
//! [`memoize`] is the only way to reach the cache from outside, and it can be
//! cloned freely.
//!
//! The function runs outside the cache lock. Two threads missing on the same
//! key at the same time both run it, and the second `put` counts as a use of
//! the entry the first one stored.
//!
//! # Examples
//!
//! ```
//! use lfu_memo::config::{Limit, MemoizeConfig};
//! use lfu_memo::{memoize, Args};
//!
//! let (square, cache) = memoize(MemoizeConfig::new(Limit::Bounded(16)), |args: &Args| {
//!     let x = args.get(0).and_then(|a| a.as_int()).unwrap_or(0);
//!     x * x
//! });
//!
//! assert_eq!(square.call(&Args::new().arg(12)), 144);
//! assert_eq!(square.call(&Args::new().arg(12.0)), 144); // same untyped key
//! assert_eq!(cache.hits(), 1);
//! assert_eq!(cache.misses(), 1);
//! ```

extern crate alloc;

mod key;

pub use self::key::{
    key_builder, typed_key, untyped_key, Arg, Args, CacheKey, KeyAtom, KeyBuilder, TypeTag,
};

use crate::concurrent::ConcurrentLfuCache;
use crate::config::{LfuCacheConfig, MemoizeConfig};
use crate::metrics::CacheMetrics;
use crate::LfuCache;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;
use log::trace;

/// Shared handle to the cache of a memoized function.
pub type CacheHandle<R> = Arc<ConcurrentLfuCache<CacheKey, R>>;

/// A function wrapped with an LFU result cache.
pub struct Memoized<F, R> {
    func: F,
    cache: CacheHandle<R>,
    make_key: KeyBuilder,
    typed: bool,
}

/// Wraps `func` with a new LFU cache and returns it with the cache handle.
///
/// `config.limit` sizes the cache; `config.typed` selects typed keys.
pub fn memoize<F, R>(config: MemoizeConfig, func: F) -> (Memoized<F, R>, CacheHandle<R>)
where
    F: Fn(&Args) -> R,
    R: Clone,
{
    let memoized = Memoized::new(config, func);
    let handle = Arc::clone(&memoized.cache);
    (memoized, handle)
}

/// Like [`memoize`] for functions returning `Result`; only `Ok` values are cached.
///
/// ```
/// use lfu_memo::config::MemoizeConfig;
/// use lfu_memo::memoize::memoize_fallible;
/// use lfu_memo::Args;
///
/// let (parse, cache) = memoize_fallible(MemoizeConfig::default(), |args: &Args| {
///     args.get(0)
///         .and_then(|a| a.as_str())
///         .ok_or("expected a string")?
///         .parse::<u32>()
///         .map_err(|_| "not a number")
/// });
///
/// assert_eq!(parse.try_call(&Args::new().arg("42")), Ok(42));
/// assert_eq!(parse.try_call(&Args::new().arg("x")), Err("not a number"));
/// assert_eq!(cache.len(), 1);
/// ```
pub fn memoize_fallible<F, R, E>(config: MemoizeConfig, func: F) -> (Memoized<F, R>, CacheHandle<R>)
where
    F: Fn(&Args) -> Result<R, E>,
    R: Clone,
{
    let memoized = Memoized::new(config, func);
    let handle = Arc::clone(&memoized.cache);
    (memoized, handle)
}

impl<F, R> Memoized<F, R> {
    /// Wraps `func` with a fresh cache built from `config`.
    pub fn new(config: MemoizeConfig, func: F) -> Self {
        let cache = LfuCache::init(LfuCacheConfig { limit: config.limit }, None);
        Self::with_cache(func, Arc::new(ConcurrentLfuCache::from_cache(cache)), config.typed)
    }

    /// Wraps `func` around an existing cache handle.
    ///
    /// Functions sharing a handle also share entries whenever their keys match,
    /// so only share a cache between functions that agree on results.
    pub fn with_cache(func: F, cache: CacheHandle<R>, typed: bool) -> Self {
        Self {
            func,
            cache,
            make_key: key_builder(typed),
            typed,
        }
    }

    /// The original, uncached function.
    pub fn wrapped(&self) -> &F {
        &self.func
    }

    /// Handle to the result cache.
    pub fn cache(&self) -> &CacheHandle<R> {
        &self.cache
    }

    /// `true` if argument types are part of the cache key.
    pub fn is_typed(&self) -> bool {
        self.typed
    }

    /// The key a call with `args` is cached under.
    pub fn key_for(&self, args: &Args) -> CacheKey {
        (self.make_key)(args)
    }

    /// Unwraps the original function.
    pub fn into_inner(self) -> F {
        self.func
    }

    /// Calls the function, serving the result from the cache when possible.
    pub fn call(&self, args: &Args) -> R
    where
        F: Fn(&Args) -> R,
        R: Clone,
    {
        let key = self.key_for(args);
        if let Some(value) = self.cache.get(&key) {
            return value;
        }
        trace!("memoized call missed, {} cached results", self.cache.len());
        let value = (self.func)(args);
        self.cache.put(key, value.clone());
        value
    }

    /// Calls a fallible function. `Ok` results are cached; errors are
    /// returned as is and the next call with the same arguments retries.
    pub fn try_call<E>(&self, args: &Args) -> Result<R, E>
    where
        F: Fn(&Args) -> Result<R, E>,
        R: Clone,
    {
        let key = self.key_for(args);
        if let Some(value) = self.cache.get(&key) {
            return Ok(value);
        }
        trace!("memoized call missed, {} cached results", self.cache.len());
        let value = (self.func)(args)?;
        self.cache.put(key, value.clone());
        Ok(value)
    }
}

impl<F, R> CacheMetrics for Memoized<F, R> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.cache.metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        "MemoizedLFU"
    }
}

impl<F, R> fmt::Debug for Memoized<F, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoized")
            .field("typed", &self.typed)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}
