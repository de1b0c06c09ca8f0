//! Argument values and the cache keys built from them.
//!
//! A memoized function takes its arguments as [`Args`]: positional [`Arg`]
//! values plus ordered keyword pairs. [`untyped_key`] and [`typed_key`] flatten
//! them into a [`CacheKey`].
//!
//! Untyped keys compare arguments by value across numeric kinds:
//! `true`, `1` and `1.0` produce the same key, `-0.0` matches `0`, and every
//! NaN matches every other NaN. Typed keys keep the same values and append
//! one [`TypeTag`] per argument, so `1` and `1.0` are cached separately.
//!
//! ```text
//!   f(1, 2.5, scale = true)
//!   untyped: [Int(1), Float(2.5), KeywordMark, Str("scale"), Int(1)]
//!   typed:   same values + [Int, Float, Bool]
//! ```
//!
//! Keyword order matters: `f(x = 1, y = 2)` and `f(y = 2, x = 1)` are two keys.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// A dynamically typed argument of a memoized call.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// Absent value.
    None,
    /// Boolean; equal to `Int(0)`/`Int(1)` in untyped keys.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Float; integral values equal the matching `Int` in untyped keys.
    Float(f64),
    /// UTF-8 string.
    Str(String),
    /// Raw bytes, never equal to a `Str`.
    Bytes(Vec<u8>),
    /// Ordered group of values, compared element-wise.
    Tuple(Vec<Arg>),
}

impl Arg {
    /// Runtime type of the value, as recorded by typed keys.
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Arg::None => TypeTag::None,
            Arg::Bool(_) => TypeTag::Bool,
            Arg::Int(_) => TypeTag::Int,
            Arg::Float(_) => TypeTag::Float,
            Arg::Str(_) => TypeTag::Str,
            Arg::Bytes(_) => TypeTag::Bytes,
            Arg::Tuple(_) => TypeTag::Tuple,
        }
    }

    /// Integer view of `Int` and `Bool` values.
    pub fn as_int(&self) -> Option<i64> {
        match *self {
            Arg::Int(i) => Some(i),
            Arg::Bool(b) => Some(i64::from(b)),
            _ => None,
        }
    }

    /// Float view of any numeric value.
    pub fn as_float(&self) -> Option<f64> {
        match *self {
            Arg::Float(f) => Some(f),
            Arg::Int(i) => Some(i as f64),
            Arg::Bool(b) => Some(if b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    /// The value of a `Bool`. Integers are not converted.
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Arg::Bool(b) => Some(b),
            _ => None,
        }
    }

    /// The contents of a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Arg::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The contents of a `Bytes`.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Arg::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// The items of a `Tuple`.
    pub fn as_tuple(&self) -> Option<&[Arg]> {
        match self {
            Arg::Tuple(items) => Some(items),
            _ => None,
        }
    }

    /// `true` for `Arg::None`.
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Arg::None)
    }

    /// Hashable form of the value under cross-kind numeric equality.
    pub fn to_atom(&self) -> KeyAtom {
        match self {
            Arg::None => KeyAtom::None,
            Arg::Bool(b) => KeyAtom::Int(i64::from(*b)),
            Arg::Int(i) => KeyAtom::Int(*i),
            Arg::Float(f) => float_atom(*f),
            Arg::Str(s) => KeyAtom::Str(s.clone()),
            Arg::Bytes(b) => KeyAtom::Bytes(b.clone()),
            Arg::Tuple(items) => KeyAtom::Tuple(items.iter().map(Arg::to_atom).collect()),
        }
    }
}

/// Integral floats inside the `i64` range fold into `Int`; NaNs share one key.
fn float_atom(f: f64) -> KeyAtom {
    const CANONICAL_NAN: u64 = 0x7ff8_0000_0000_0000;
    const LOWER: f64 = i64::MIN as f64;

    if f.is_nan() {
        return KeyAtom::Float(CANONICAL_NAN);
    }
    // LOWER is exactly -2^63, so -LOWER is the first float past i64::MAX.
    if f >= LOWER && f < -LOWER {
        let i = f as i64;
        if i as f64 == f {
            return KeyAtom::Int(i);
        }
    }
    KeyAtom::Float(f.to_bits())
}

impl From<()> for Arg {
    fn from(_: ()) -> Self {
        Arg::None
    }
}

impl From<bool> for Arg {
    fn from(b: bool) -> Self {
        Arg::Bool(b)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Arg {
            fn from(i: $t) -> Self {
                Arg::Int(i64::from(i))
            }
        })*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Arg {
    fn from(f: f32) -> Self {
        Arg::Float(f64::from(f))
    }
}

impl From<f64> for Arg {
    fn from(f: f64) -> Self {
        Arg::Float(f)
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Str(String::from(s))
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::Str(s)
    }
}

impl From<&[u8]> for Arg {
    fn from(b: &[u8]) -> Self {
        Arg::Bytes(b.to_vec())
    }
}

impl From<Vec<u8>> for Arg {
    fn from(b: Vec<u8>) -> Self {
        Arg::Bytes(b)
    }
}

impl From<Vec<Arg>> for Arg {
    fn from(items: Vec<Arg>) -> Self {
        Arg::Tuple(items)
    }
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(value: Option<T>) -> Self {
        value.map_or(Arg::None, Into::into)
    }
}

/// Positional and keyword arguments of one call.
///
/// # Examples
///
/// ```
/// use lfu_memo::{Arg, Args};
///
/// let args = Args::new().arg(3).arg("x").kwarg("scale", 2.5);
/// assert_eq!(args.get(0), Some(&Arg::Int(3)));
/// assert_eq!(args.keyword("scale").and_then(Arg::as_float), Some(2.5));
/// assert_eq!(args.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    positional: Vec<Arg>,
    keywords: Vec<(String, Arg)>,
}

impl Args {
    /// An empty argument list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a positional argument.
    #[must_use]
    pub fn arg(mut self, value: impl Into<Arg>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Appends a keyword argument. Call order is preserved and is part of the key.
    #[must_use]
    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<Arg>) -> Self {
        self.keywords.push((name.into(), value.into()));
        self
    }

    /// Positional arguments in call order.
    pub fn positional(&self) -> &[Arg] {
        &self.positional
    }

    /// Keyword arguments in call order.
    pub fn keywords(&self) -> &[(String, Arg)] {
        &self.keywords
    }

    /// Positional argument at `index`.
    pub fn get(&self, index: usize) -> Option<&Arg> {
        self.positional.get(index)
    }

    /// First keyword argument called `name`.
    pub fn keyword(&self, name: &str) -> Option<&Arg> {
        self.keywords
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    /// Total number of arguments, positional and keyword.
    pub fn len(&self) -> usize {
        self.positional.len() + self.keywords.len()
    }

    /// `true` when the call has no arguments at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Into<Arg>> FromIterator<T> for Args {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Args {
            positional: iter.into_iter().map(Into::into).collect(),
            keywords: Vec::new(),
        }
    }
}

/// One hashable component of a [`CacheKey`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyAtom {
    /// From `Arg::None`.
    None,
    /// From `Int`, `Bool` and integral `Float` values.
    Int(i64),
    /// Bit pattern of a non-integral float.
    Float(u64),
    /// From `Arg::Str`; also holds keyword names.
    Str(String),
    /// From `Arg::Bytes`.
    Bytes(Vec<u8>),
    /// From `Arg::Tuple`, normalised element-wise.
    Tuple(Vec<KeyAtom>),
    /// Separates positional values from keyword pairs.
    KeywordMark,
}

/// Runtime type of an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// `Arg::None`
    None,
    /// `Arg::Bool`
    Bool,
    /// `Arg::Int`
    Int,
    /// `Arg::Float`
    Float,
    /// `Arg::Str`
    Str,
    /// `Arg::Bytes`
    Bytes,
    /// `Arg::Tuple`, whatever its items
    Tuple,
}

/// Cache key of a memoized call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// Argument values only.
    Untyped(Vec<KeyAtom>),
    /// Argument values plus one type tag per positional then keyword value.
    Typed {
        /// Same atoms as the untyped key.
        values: Vec<KeyAtom>,
        /// Positional types, then keyword value types.
        types: Vec<TypeTag>,
    },
}

impl CacheKey {
    /// The flattened argument values.
    pub fn values(&self) -> &[KeyAtom] {
        match self {
            CacheKey::Untyped(values) | CacheKey::Typed { values, .. } => values,
        }
    }

    /// `true` for keys built by [`typed_key`].
    pub fn is_typed(&self) -> bool {
        matches!(self, CacheKey::Typed { .. })
    }
}

/// Builds a cache key from a call's arguments.
pub type KeyBuilder = fn(&Args) -> CacheKey;

/// Key built from argument values alone.
///
/// ```
/// use lfu_memo::memoize::untyped_key;
/// use lfu_memo::Args;
///
/// let a = untyped_key(&Args::new().arg(1));
/// assert_eq!(a, untyped_key(&Args::new().arg(1.0)));
/// assert_eq!(a, untyped_key(&Args::new().arg(true)));
/// assert_ne!(a, untyped_key(&Args::new().arg("1")));
/// ```
pub fn untyped_key(args: &Args) -> CacheKey {
    CacheKey::Untyped(flatten(args))
}

/// Key built from argument values and their runtime types.
///
/// ```
/// use lfu_memo::memoize::typed_key;
/// use lfu_memo::Args;
///
/// assert_ne!(typed_key(&Args::new().arg(1)), typed_key(&Args::new().arg(1.0)));
/// ```
pub fn typed_key(args: &Args) -> CacheKey {
    let types = args
        .positional
        .iter()
        .chain(args.keywords.iter().map(|(_, v)| v))
        .map(Arg::type_tag)
        .collect();
    CacheKey::Typed {
        values: flatten(args),
        types,
    }
}

/// Picks the key builder once, so calls never branch on `typed`.
pub fn key_builder(typed: bool) -> KeyBuilder {
    if typed {
        typed_key
    } else {
        untyped_key
    }
}

fn flatten(args: &Args) -> Vec<KeyAtom> {
    let extra = if args.keywords.is_empty() {
        0
    } else {
        1 + 2 * args.keywords.len()
    };
    let mut atoms = Vec::with_capacity(args.positional.len() + extra);
    atoms.extend(args.positional.iter().map(Arg::to_atom));
    if !args.keywords.is_empty() {
        atoms.push(KeyAtom::KeywordMark);
        for (name, value) in &args.keywords {
            atoms.push(KeyAtom::Str(name.clone()));
            atoms.push(value.to_atom());
        }
    }
    atoms
}
