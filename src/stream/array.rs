//! Native bulk operations for vector-backed streams.
//!
//! The backing vector is already materialized, so every operation here is
//! eager and works on the vector directly.

use std::cmp::Ordering;

use crate::capability::Part;
use crate::error::Result;
use crate::pipeline::Offset;

pub(super) fn map<T, U, F>(items: Vec<T>, f: F) -> Vec<U>
where
    F: FnMut(T) -> U,
{
    items.into_iter().map(f).collect()
}

pub(super) fn filter<T, P>(mut items: Vec<T>, mut predicate: P) -> Vec<T>
where
    P: FnMut(&T, usize) -> bool,
{
    // `retain` visits every element exactly once, in order.
    let mut index = 0;
    items.retain(|item| {
        let keep = predicate(item, index);
        index += 1;
        keep
    });
    items
}

pub(super) fn slice<T>(
    mut items: Vec<T>,
    begin: Option<&Offset>,
    end: Option<&Offset>,
) -> Result<Vec<T>> {
    let Some(begin) = begin else {
        return Ok(items);
    };
    let len = items.len();
    let start = begin.relative("begin", len)?;
    let stop = match end {
        Some(end) => end.relative("end", len)?,
        None => len,
    };
    if start >= stop {
        return Ok(Vec::new());
    }
    items.truncate(stop);
    items.drain(..start);
    Ok(items)
}

pub(super) fn concat<'a, T: 'a>(mut items: Vec<T>, parts: Vec<Part<'a, T>>) -> Vec<T> {
    for part in parts {
        match part {
            Part::Item(item) => items.push(item),
            Part::Items(more) => items.extend(more),
        }
    }
    items
}

pub(super) fn sort_by<T, F>(mut items: Vec<T>, compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    items.sort_by(compare);
    items
}
