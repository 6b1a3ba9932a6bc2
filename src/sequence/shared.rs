use std::ops::Range;
use std::rc::Rc;

use crate::capability::Cursor;

use super::Sequence;

/// A shared, in-memory sequence viewed through a window.
///
/// Bounded materialization only narrows the window, so it costs the same
/// whatever the size of the buffer. Copies share the buffer.
#[derive(Debug)]
pub struct SharedSequence<T> {
    items: Rc<[T]>,
    window: Range<usize>,
}

impl<T> SharedSequence<T> {
    pub fn new(items: impl Into<Rc<[T]>>) -> Self {
        let items = items.into();
        let window = 0..items.len();
        SharedSequence { items, window }
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// The items currently in view.
    pub fn as_slice(&self) -> &[T] {
        &self.items[self.window.clone()]
    }
}

impl<T> Clone for SharedSequence<T> {
    fn clone(&self) -> Self {
        SharedSequence {
            items: Rc::clone(&self.items),
            window: self.window.clone(),
        }
    }
}

impl<T> From<Vec<T>> for SharedSequence<T> {
    fn from(items: Vec<T>) -> Self {
        SharedSequence::new(items)
    }
}

impl<'a, T: Clone + 'a> Sequence<'a, T> for SharedSequence<T> {
    fn into_cursor(self: Box<Self>) -> Cursor<'a, T> {
        let SharedSequence { items, window } = *self;
        Box::new(window.map(move |index| items[index].clone()))
    }

    fn subsequence(
        self: Box<Self>,
        start: usize,
        length: Option<usize>,
    ) -> Box<dyn Sequence<'a, T> + 'a> {
        let SharedSequence { items, window } = *self;
        let begin = window
            .start
            .saturating_add(start.saturating_sub(1))
            .min(window.end);
        let end = match length {
            Some(length) => begin.saturating_add(length).min(window.end),
            None => window.end,
        };
        Box::new(SharedSequence {
            items,
            window: begin..end,
        })
    }

    fn try_clone(&self) -> Option<Box<dyn Sequence<'a, T> + 'a>> {
        Some(Box::new(self.clone()))
    }

    fn len_hint(&self) -> Option<usize> {
        Some(self.len())
    }
}
