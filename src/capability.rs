//! # Layer 0: Cursor Capability
//!
//! A value satisfies the cursor capability when it can hand out a pull-based
//! cursor: something that answers "next item, or end of sequence". In Rust
//! that is exactly [`IntoIterator`], so every collection, range, iterator and
//! [`Stream`](crate::Stream) already qualifies.
//!
//! Once a value has been turned into a cursor it is type-erased into a
//! [`Cursor`], which is what the wrapper stores between lazy stages.
//!
//! ```text
//! Vec<T> / [T; N] / Range / impl Iterator / Stream
//!                 |
//!                 v  into_iter()
//!        Cursor<'a, T> = Box<dyn Iterator<Item = T> + 'a>
//! ```

use core::fmt;
use core::iter;

/// A type-erased, single-pass cursor.
pub type Cursor<'a, T> = Box<dyn Iterator<Item = T> + 'a>;

/// Erase any cursor-producing value into a [`Cursor`].
pub fn cursor<'a, I>(source: I) -> Cursor<'a, I::Item>
where
    I: IntoIterator,
    I::IntoIter: 'a,
{
    Box::new(source.into_iter())
}

// =============================================================================
// Concat Arguments
// =============================================================================

/// One trailing argument of a `concat` call.
///
/// A [`Part::Items`] is flattened one level into the result, a [`Part::Item`]
/// is appended as a single element even when it is itself a collection or a
/// string.
pub enum Part<'a, T> {
    /// A single scalar element.
    Item(T),
    /// A cursor whose items are appended in order.
    Items(Cursor<'a, T>),
}

impl<'a, T: 'a> Part<'a, T> {
    pub fn item(value: T) -> Self {
        Part::Item(value)
    }

    pub fn items<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Part::Items(cursor(source))
    }

    /// The items this part contributes, in order.
    pub fn into_cursor(self) -> Cursor<'a, T> {
        match self {
            Part::Item(value) => Box::new(iter::once(value)),
            Part::Items(items) => items,
        }
    }
}

impl<'a, T: 'a> IntoIterator for Part<'a, T> {
    type Item = T;
    type IntoIter = Cursor<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_cursor()
    }
}

impl<T> fmt::Debug for Part<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::Item(_) => f.write_str("Part::Item"),
            Part::Items(_) => f.write_str("Part::Items"),
        }
    }
}
