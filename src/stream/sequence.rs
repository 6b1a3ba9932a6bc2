//! Overrides for sequence-backed streams.

use std::cmp::Ordering;

use crate::capability::Part;
use crate::error::{Error, Result};
use crate::pipeline::{self, Offset};
use crate::sequence::Sequence;

use super::Stream;

type Boxed<'a, T> = Box<dyn Sequence<'a, T> + 'a>;

/// Translate a 0-based, end-exclusive slice into the sequence's 1-based
/// start offset and length.
pub(super) fn slice<'a, T: 'a>(
    sequence: Boxed<'a, T>,
    begin: Option<Offset>,
    end: Option<Offset>,
) -> Result<Stream<'a, T>> {
    let Some(begin) = begin else {
        return Ok(Stream::from_sequence(sequence));
    };
    let begin = begin.index("begin")?;
    let length = match end {
        Some(end) => {
            let end = end.index("end")?;
            if end < begin {
                return Err(Error::invalid(
                    "end",
                    "must be greater than or equal to begin",
                ));
            }
            Some(end - begin)
        }
        None => None,
    };
    Ok(Stream::from_sequence(
        sequence.subsequence(begin.saturating_add(1), length),
    ))
}

pub(super) fn concat<'a, T: 'a>(sequence: Boxed<'a, T>, parts: Vec<Part<'a, T>>) -> Stream<'a, T> {
    if parts.is_empty() {
        return Stream::from_sequence(sequence);
    }
    Stream::from_sequence(sequence.compose(parts))
}

pub(super) fn sort_by<'a, T: 'a, F>(sequence: Boxed<'a, T>, compare: F) -> Stream<'a, T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    tracing::warn!(
        len = ?sequence.len_hint(),
        "sorting a sequence-backed stream materializes the entire sequence"
    );
    Stream::array(pipeline::sort_by(sequence.into_cursor(), compare))
}
