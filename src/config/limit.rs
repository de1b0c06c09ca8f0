//! Entry-count limit shared by every cache configuration.

extern crate alloc;

use crate::error::{CacheError, Result};
use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

/// Maximum number of entries a cache may hold.
///
/// - `Bounded(n)` with `n > 0`: once `n` entries are stored, inserting a new
///   key evicts the least frequently used one.
/// - `Bounded(0)`: the cache is disabled. Puts are dropped and every get misses.
/// - `Unbounded`: the cache grows without ever evicting on put.
///
/// # Examples
///
/// ```
/// use lfu_memo::config::Limit;
///
/// assert_eq!("256".parse::<Limit>().unwrap(), Limit::Bounded(256));
/// assert_eq!("unbounded".parse::<Limit>().unwrap(), Limit::Unbounded);
/// assert!("disabled".parse::<Limit>().unwrap().is_disabled());
/// assert_eq!(Limit::Unbounded.capacity(), usize::MAX);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Limit {
    /// At most this many entries.
    Bounded(usize),
    /// No entry limit.
    Unbounded,
}

impl Limit {
    /// The disabled cache: nothing is ever stored.
    pub const DISABLED: Limit = Limit::Bounded(0);

    /// Default limit for memoized functions.
    pub const DEFAULT: Limit = Limit::Bounded(128);

    /// Entry count this limit allows; `usize::MAX` when unbounded.
    #[inline]
    pub fn capacity(self) -> usize {
        match self {
            Limit::Bounded(n) => n,
            Limit::Unbounded => usize::MAX,
        }
    }

    /// `true` for `Bounded(0)`: nothing is ever stored.
    #[inline]
    pub fn is_disabled(self) -> bool {
        self == Limit::DISABLED
    }

    /// `true` if the cache never evicts on put.
    #[inline]
    pub fn is_unbounded(self) -> bool {
        self == Limit::Unbounded
    }

    /// `true` if a cache holding `len` entries has no room for a new key.
    #[inline]
    pub(crate) fn is_full(self, len: usize) -> bool {
        len >= self.capacity()
    }
}

impl Default for Limit {
    fn default() -> Self {
        Limit::DEFAULT
    }
}

impl From<usize> for Limit {
    fn from(capacity: usize) -> Self {
        Limit::Bounded(capacity)
    }
}

impl From<Option<usize>> for Limit {
    /// `None` means unbounded.
    fn from(capacity: Option<usize>) -> Self {
        capacity.map_or(Limit::Unbounded, Limit::Bounded)
    }
}

impl TryFrom<i64> for Limit {
    type Error = CacheError;

    fn try_from(value: i64) -> Result<Self> {
        usize::try_from(value)
            .map(Limit::Bounded)
            .map_err(|_| CacheError::NegativeLimit(value))
    }
}

impl FromStr for Limit {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("unbounded") || trimmed.eq_ignore_ascii_case("none") {
            return Ok(Limit::Unbounded);
        }
        if trimmed.eq_ignore_ascii_case("disabled") {
            return Ok(Limit::DISABLED);
        }
        match trimmed.parse::<i64>() {
            Ok(n) => Limit::try_from(n),
            Err(_) => trimmed
                .parse::<usize>()
                .map(Limit::Bounded)
                .map_err(|_| CacheError::InvalidLimit(s.to_string())),
        }
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Limit::Bounded(n) => write!(f, "{n}"),
            Limit::Unbounded => f.write_str("unbounded"),
        }
    }
}
