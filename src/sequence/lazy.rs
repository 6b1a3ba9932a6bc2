use std::fmt;

use crate::capability::{cursor, Cursor, Part};
use crate::pipeline;

use super::{window, Sequence};

/// A sequence over an arbitrary cursor.
///
/// Windows are a lazy skip/take and compositions a lazy chain, so nothing
/// outside the requested items is ever produced.
pub struct LazySequence<'a, T> {
    cursor: Cursor<'a, T>,
}

impl<'a, T: 'a> LazySequence<'a, T> {
    pub fn new<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        LazySequence {
            cursor: cursor(source),
        }
    }
}

impl<'a, T: 'a> Sequence<'a, T> for LazySequence<'a, T> {
    fn into_cursor(self: Box<Self>) -> Cursor<'a, T> {
        self.cursor
    }

    fn subsequence(
        self: Box<Self>,
        start: usize,
        length: Option<usize>,
    ) -> Box<dyn Sequence<'a, T> + 'a> {
        Box::new(LazySequence {
            cursor: window(self.cursor, start, length),
        })
    }

    fn compose(self: Box<Self>, parts: Vec<Part<'a, T>>) -> Box<dyn Sequence<'a, T> + 'a> {
        Box::new(LazySequence::new(pipeline::concat(self.cursor, parts)))
    }
}

impl<T> fmt::Debug for LazySequence<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazySequence").finish_non_exhaustive()
    }
}
