//! # Layer 1: External Lazy Sequences
//!
//! A [`Sequence`] is a lazily evaluated source that, beyond handing out a
//! cursor, knows how to:
//!
//! - **materialize a bounded window** (`subsequence`) without walking the
//!   whole source, addressed with a 1-based start offset and an optional
//!   length;
//! - **compose** itself with trailing sub-sequences and scalars into one new
//!   sequence (`compose`).
//!
//! Both have lazy defaults, so a minimal implementation only provides
//! `into_cursor`. Sources that can do better (an index, a paged backend, a
//! shared buffer) override them.
//!
//! ```text
//! Stream::slice(3, 5)  --(0-based, exclusive end)-->  subsequence(4, Some(2))
//! Stream::concat(..)   --------------------------->  compose(parts)
//! ```

mod lazy;
mod shared;

pub use lazy::LazySequence;
pub use shared::SharedSequence;

use crate::capability::{Cursor, Part};
use crate::pipeline;

/// The external lazy-sequence capability.
///
/// Methods consume `Box<Self>`: a sequence is exclusively owned by the stream
/// wrapping it and each operation hands back a new view.
pub trait Sequence<'a, T: 'a>: 'a {
    /// Pull-based cursor over every item.
    fn into_cursor(self: Box<Self>) -> Cursor<'a, T>;

    /// Restricted view starting at the 1-based `start`, `length` items long
    /// (or to the end when `None`).
    fn subsequence(
        self: Box<Self>,
        start: usize,
        length: Option<usize>,
    ) -> Box<dyn Sequence<'a, T> + 'a> {
        tracing::debug!(start, ?length, "bounded materialization through a lazy window");
        Box::new(LazySequence::new(window(self.into_cursor(), start, length)))
    }

    /// This sequence followed by each part, as one sequence.
    fn compose(self: Box<Self>, parts: Vec<Part<'a, T>>) -> Box<dyn Sequence<'a, T> + 'a> {
        tracing::debug!(parts = parts.len(), "composition through a lazy chain");
        Box::new(LazySequence::new(pipeline::concat(self.into_cursor(), parts)))
    }

    /// An independent copy, for sources that can be re-read.
    fn try_clone(&self) -> Option<Box<dyn Sequence<'a, T> + 'a>> {
        None
    }

    /// Number of items, when known without evaluation.
    fn len_hint(&self) -> Option<usize> {
        None
    }
}

/// Lazy 1-based window over a cursor.
pub(crate) fn window<'a, T: 'a>(
    cursor: Cursor<'a, T>,
    start: usize,
    length: Option<usize>,
) -> Cursor<'a, T> {
    let skipped = cursor.skip(start.saturating_sub(1));
    match length {
        Some(length) => Box::new(skipped.take(length)),
        None => Box::new(skipped),
    }
}
