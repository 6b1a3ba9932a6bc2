//! # Layer 2: The Stream Wrapper
//!
//! [`Stream`] is the chainable surface. It owns exactly one source and
//! carries its [`Species`] as the variant of that source:
//!
//! ```text
//! Backing::Lazy(cursor)        -> Species::Generic   "Stream"
//! Backing::Array(Vec<T>)       -> Species::Array     "ArrayStream"
//! Backing::Sequence(Box<dyn>)  -> Species::Sequence  "SequenceStream"
//! ```
//!
//! Every chain method consumes the stream and returns a new one, so a
//! wrapper can never be observed mutated. Dispatch per method:
//!
//! | Method | Array | Sequence | Generic |
//! |--------|-------|----------|---------|
//! | `map`, `filter`, `flat_map` | native, eager | lazy stage, stays a sequence | lazy stage |
//! | `slice` | native relative bounds | bounded materialization | lazy stage |
//! | `concat` | native extend | multi-source composition | lazy stage |
//! | `sort` | native sort | warns, then becomes an array | becomes an array |
//! | `reduce`, `into_vec` | native | drains | drains |
//!
//! Lazy stages are wrapped back through [`Species::construct`], so a chain
//! keeps the species it started with until an operation (`sort`) cannot
//! express its result in that form.

mod array;
mod sequence;
mod species;

pub use species::Species;

use std::cmp::Ordering;
use std::fmt;
use std::iter;

use crate::capability::{cursor, Cursor, Part};
use crate::error::Result;
use crate::pipeline::{self, Offset};
use crate::sequence::Sequence;

enum Backing<'a, T: 'a> {
    Lazy(Cursor<'a, T>),
    Array(Vec<T>),
    Sequence(Box<dyn Sequence<'a, T> + 'a>),
}

impl<'a, T: 'a> Backing<'a, T> {
    fn species(&self) -> Species {
        match self {
            Backing::Lazy(_) => Species::Generic,
            Backing::Array(_) => Species::Array,
            Backing::Sequence(_) => Species::Sequence,
        }
    }

    fn into_cursor(self) -> Cursor<'a, T> {
        match self {
            Backing::Lazy(cursor) => cursor,
            Backing::Array(items) => Box::new(items.into_iter()),
            Backing::Sequence(sequence) => sequence.into_cursor(),
        }
    }
}

/// A chainable wrapper over one sequence source.
pub struct Stream<'a, T: 'a> {
    source: Backing<'a, T>,
}

// =============================================================================
// Constructors
// =============================================================================

impl<'a, T: 'a> Stream<'a, T> {
    /// Generic stream over any cursor-producing value.
    pub fn new<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Stream::lazy(cursor(source))
    }

    /// Array stream over a materialized vector.
    pub fn array(items: Vec<T>) -> Self {
        Stream {
            source: Backing::Array(items),
        }
    }

    /// Sequence stream over an external lazy sequence.
    pub fn sequence<S: Sequence<'a, T>>(sequence: S) -> Self {
        Stream::from_sequence(Box::new(sequence))
    }

    /// Generic stream over a generator: `next()` returns `None` at the end.
    pub fn from_fn<F>(next: F) -> Self
    where
        F: FnMut() -> Option<T> + 'a,
    {
        Stream::new(iter::from_fn(next))
    }

    pub(crate) fn lazy(cursor: Cursor<'a, T>) -> Self {
        Stream {
            source: Backing::Lazy(cursor),
        }
    }

    pub(crate) fn from_sequence(sequence: Box<dyn Sequence<'a, T> + 'a>) -> Self {
        Stream {
            source: Backing::Sequence(sequence),
        }
    }
}

impl<'a> Stream<'a, char> {
    /// Generic stream over the characters of a string.
    pub fn text(text: &'a str) -> Self {
        Stream::new(text.chars())
    }
}

impl<'a, T: 'a> From<Vec<T>> for Stream<'a, T> {
    fn from(items: Vec<T>) -> Self {
        Stream::array(items)
    }
}

impl<'a, T: 'a> FromIterator<T> for Stream<'a, T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stream::array(iter.into_iter().collect())
    }
}

// =============================================================================
// Chain Operations
// =============================================================================

impl<'a, T: 'a> Stream<'a, T> {
    pub fn species(&self) -> Species {
        self.source.species()
    }

    /// Type name of this stream's variant.
    pub fn type_name(&self) -> &'static str {
        self.species().type_name()
    }

    /// Transform every item with `f`.
    pub fn map<U: 'a, F>(self, f: F) -> Stream<'a, U>
    where
        F: FnMut(T) -> U + 'a,
    {
        match self.source {
            Backing::Array(items) => Stream::array(array::map(items, f)),
            source => {
                let species = source.species();
                species.construct(cursor(pipeline::map(source.into_cursor(), f)))
            }
        }
    }

    /// Keep the items for which `predicate(&item, index)` holds.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnMut(&T, usize) -> bool + 'a,
    {
        match self.source {
            Backing::Array(items) => Stream::array(array::filter(items, predicate)),
            source => {
                let species = source.species();
                species.construct(cursor(pipeline::filter(source.into_cursor(), predicate)))
            }
        }
    }

    /// Items at zero-based positions in `[begin, end)`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`](crate::Error) when a bound is unusable for
    /// this stream's species; see [`Stream::slice_bounds`].
    pub fn slice(self, begin: impl Into<Offset>, end: impl Into<Offset>) -> Result<Self> {
        self.slice_bounds(Some(begin.into()), Some(end.into()))
    }

    /// Items from the zero-based position `begin` to the end.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`](crate::Error) when `begin` is unusable for
    /// this stream's species.
    pub fn slice_from(self, begin: impl Into<Offset>) -> Result<Self> {
        self.slice_bounds(Some(begin.into()), None)
    }

    /// Slice with optional bounds. Without `begin` an equivalent stream over
    /// the same source is returned.
    ///
    /// - Generic: bounds must be numbers and act as position thresholds.
    /// - Array: bounds are collection indices; negative values count from the
    ///   end and fractions truncate.
    /// - Sequence: bounds must be non-negative integers with `end >= begin`;
    ///   the window is materialized by the sequence itself.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`](crate::Error) naming the rejected bound.
    pub fn slice_bounds(self, begin: Option<Offset>, end: Option<Offset>) -> Result<Self> {
        match self.source {
            Backing::Array(items) => Ok(Stream::array(array::slice(
                items,
                begin.as_ref(),
                end.as_ref(),
            )?)),
            Backing::Sequence(seq) => sequence::slice(seq, begin, end),
            source => {
                let species = source.species();
                let sliced = pipeline::slice(source.into_cursor(), begin, end)?;
                Ok(species.construct(cursor(sliced)))
            }
        }
    }

    /// Append parts: [`Part::Items`] are flattened one level, [`Part::Item`]
    /// is appended as one element.
    pub fn concat<P>(self, parts: P) -> Self
    where
        P: IntoIterator<Item = Part<'a, T>>,
    {
        let parts: Vec<_> = parts.into_iter().collect();
        match self.source {
            Backing::Array(items) => Stream::array(array::concat(items, parts)),
            Backing::Sequence(seq) => sequence::concat(seq, parts),
            source => {
                let species = source.species();
                species.construct(cursor(pipeline::concat(source.into_cursor(), parts)))
            }
        }
    }

    /// Replace every item with the items `f` produces for it.
    pub fn flat_map<U: 'a, J, F>(self, f: F) -> Stream<'a, U>
    where
        J: IntoIterator<Item = U> + 'a,
        J::IntoIter: 'a,
        F: FnMut(T) -> J + 'a,
    {
        match self.source {
            Backing::Array(items) => Stream::array(items.into_iter().flat_map(f).collect()),
            source => {
                let species = source.species();
                species.construct(cursor(pipeline::flat_map_delegate(
                    source.into_cursor(),
                    f,
                )))
            }
        }
    }

    /// Left fold calling `f(accumulator, item, index)`.
    pub fn reduce<A, F>(self, f: F, init: A) -> A
    where
        F: FnMut(A, T, usize) -> A,
    {
        match self.source {
            Backing::Array(items) => pipeline::reduce(items, f, init),
            source => pipeline::reduce(source.into_cursor(), f, init),
        }
    }

    /// Sort by the string form of each item. Always yields an array stream.
    pub fn sort(self) -> Self
    where
        T: fmt::Display,
    {
        self.sort_by(pipeline::default_compare::<T>)
    }

    /// Stable sort with `compare`. Always yields an array stream.
    pub fn sort_by<F>(self, compare: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        match self.source {
            Backing::Array(items) => Stream::array(array::sort_by(items, compare)),
            Backing::Sequence(seq) => sequence::sort_by(seq, compare),
            source => Stream::array(pipeline::sort_by(source.into_cursor(), compare)),
        }
    }

    /// Drain into a vector. Does not terminate on an unbounded source.
    pub fn into_vec(self) -> Vec<T> {
        match self.source {
            Backing::Array(items) => items,
            source => source.into_cursor().collect(),
        }
    }

    /// The underlying cursor, unchanged.
    pub fn into_cursor(self) -> Cursor<'a, T> {
        self.source.into_cursor()
    }

    /// An independent copy of an array stream, or of a sequence stream whose
    /// sequence can be re-read. Lazy streams are single-pass and return `None`.
    pub fn try_clone(&self) -> Option<Self>
    where
        T: Clone,
    {
        let source = match &self.source {
            Backing::Array(items) => Backing::Array(items.clone()),
            Backing::Sequence(seq) => Backing::Sequence(seq.try_clone()?),
            Backing::Lazy(_) => return None,
        };
        Some(Stream { source })
    }
}

// =============================================================================
// Structural Queries
// =============================================================================

#[cfg(feature = "query")]
impl<'a, T: crate::query::Query + 'a> Stream<'a, T> {
    /// Evaluate `path` against every item that supports structural queries
    /// and yield all matches. Items without the capability contribute nothing.
    ///
    /// The result is always a generic stream.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`](crate::Error) when `path` is empty or
    /// malformed, or when it references a variable `bindings` does not bind
    /// to a field name or index.
    pub fn flat_map_path(
        self,
        path: &str,
        bindings: &crate::query::Bindings,
    ) -> Result<Stream<'a, crate::query::Value>> {
        let path = crate::query::Path::parse(path)?;
        bindings.check(&path)?;
        let bindings = bindings.clone();
        let matches = pipeline::flat_map_delegate(self.into_cursor(), move |item: T| {
            item.query(&path, &bindings).unwrap_or_default()
        });
        Ok(Stream::new(matches))
    }
}

// =============================================================================
// Cursor Capability
// =============================================================================

impl<'a, T: 'a> IntoIterator for Stream<'a, T> {
    type Item = T;
    type IntoIter = Cursor<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_cursor()
    }
}

impl<T> fmt::Debug for Stream<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct(self.type_name());
        if let Backing::Array(items) = &self.source {
            debug.field("len", &items.len());
        }
        debug.finish_non_exhaustive()
    }
}
