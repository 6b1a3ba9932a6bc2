//! # Layer 1: Generic Pipeline Primitives
//!
//! Free-standing operators over anything that satisfies the cursor
//! capability. They are what a wrapper falls back to when its backing source
//! has no native equivalent.
//!
//! | Operator | Evaluation | Upstream pulls per yielded item |
//! |----------|------------|---------------------------------|
//! | [`map`] | lazy | exactly one |
//! | [`filter`] | lazy | one or more (skips rejected items) |
//! | [`slice()`] | lazy | fast-forwards to `begin`, never pulls past `end` |
//! | [`concat`] | lazy | one, from the source then from each part |
//! | [`flat_map_delegate`] | lazy | one per produced sub-sequence |
//! | [`reduce`] | eager | drains the source |
//! | [`sort_by`] | eager | drains the source |
//!
//! Lazy operators do no work until their consumer asks for the next item, and
//! a consumer that stops early never causes the rest of the upstream to be
//! produced. All validation happens when the operator is called, before any
//! cursor exists.

mod order;
mod slice;

pub use order::{default_compare, sort_by};
pub use slice::{slice, Offset, Slice};

use crate::capability::Part;

/// Lazily apply `f` to every item, in source order.
pub fn map<'a, S, U, F>(source: S, f: F) -> impl Iterator<Item = U> + 'a
where
    S: IntoIterator,
    S::IntoIter: 'a,
    F: FnMut(S::Item) -> U + 'a,
{
    source.into_iter().map(f)
}

/// Lazily keep the items for which `predicate(&item, index)` holds.
///
/// `index` counts every item considered, not only the ones kept.
pub fn filter<'a, S, P>(source: S, mut predicate: P) -> impl Iterator<Item = S::Item> + 'a
where
    S: IntoIterator,
    S::IntoIter: 'a,
    P: FnMut(&S::Item, usize) -> bool + 'a,
{
    source
        .into_iter()
        .enumerate()
        .filter_map(move |(index, item)| predicate(&item, index).then_some(item))
}

/// Lazily yield all of `source`, then the items of every part.
///
/// A [`Part::Items`] is flattened one level, a [`Part::Item`] is yielded as is.
pub fn concat<'a, S, P>(source: S, parts: P) -> impl Iterator<Item = S::Item> + 'a
where
    S: IntoIterator,
    S::IntoIter: 'a,
    S::Item: 'a,
    P: IntoIterator<Item = Part<'a, S::Item>>,
    P::IntoIter: 'a,
{
    source
        .into_iter()
        .chain(parts.into_iter().flat_map(Part::into_cursor))
}

/// Eager left fold calling `f(accumulator, item, index)`.
pub fn reduce<S, A, F>(source: S, mut f: F, init: A) -> A
where
    S: IntoIterator,
    F: FnMut(A, S::Item, usize) -> A,
{
    source
        .into_iter()
        .enumerate()
        .fold(init, |acc, (index, item)| f(acc, item, index))
}

/// Lazily yield every value produced by `f(item)`, one level deep.
pub fn flat_map_delegate<'a, S, J, F>(source: S, f: F) -> impl Iterator<Item = J::Item> + 'a
where
    S: IntoIterator,
    S::IntoIter: 'a,
    J: IntoIterator + 'a,
    J::IntoIter: 'a,
    F: FnMut(S::Item) -> J + 'a,
{
    source.into_iter().flat_map(f)
}
