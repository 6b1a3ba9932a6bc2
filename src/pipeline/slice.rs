//! Slice bounds and the generic slice cursor.
//!
//! Bounds arrive as an [`Offset`] so untyped input can be validated when the
//! slice is requested. Each wrapper variant reads the same bound differently:
//!
//! | Reader | Accepts | Meaning |
//! |--------|---------|---------|
//! | `Offset::number` | any number | numeric threshold on the zero-based position |
//! | `Offset::relative` | any number | collection index, negative counts from the end |
//! | `Offset::index` | non-negative integers | zero-based position |

use std::fmt;
use std::iter::FusedIterator;

use crate::error::{Error, Result};

/// A slice bound as supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Offset {
    Int(i64),
    Float(f64),
    /// Never a valid bound; kept so the rejection is reported, not silently coerced.
    Text(String),
}

macro_rules! offset_from_int {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Offset {
                fn from(value: $ty) -> Self {
                    Offset::Int(i64::from(value))
                }
            }
        )+
    };
}

offset_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<usize> for Offset {
    fn from(value: usize) -> Self {
        i64::try_from(value).map_or(Offset::Float(value as f64), Offset::Int)
    }
}

impl From<isize> for Offset {
    fn from(value: isize) -> Self {
        i64::try_from(value).map_or(Offset::Float(value as f64), Offset::Int)
    }
}

impl From<f32> for Offset {
    fn from(value: f32) -> Self {
        Offset::Float(f64::from(value))
    }
}

impl From<f64> for Offset {
    fn from(value: f64) -> Self {
        Offset::Float(value)
    }
}

impl From<&str> for Offset {
    fn from(value: &str) -> Self {
        Offset::Text(value.to_owned())
    }
}

impl From<String> for Offset {
    fn from(value: String) -> Self {
        Offset::Text(value)
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Offset::Int(v) => write!(f, "{v}"),
            Offset::Float(v) => write!(f, "{v}"),
            Offset::Text(v) => write!(f, "{v:?}"),
        }
    }
}

impl Offset {
    /// The bound as a number. Text and NaN are rejected.
    pub(crate) fn number(&self, argument: &'static str) -> Result<f64> {
        match *self {
            Offset::Int(v) => Ok(v as f64),
            Offset::Float(v) if !v.is_nan() => Ok(v),
            _ => Err(Error::invalid(argument, "must be a number")),
        }
    }

    /// The bound as a strict zero-based position.
    pub(crate) fn index(&self, argument: &'static str) -> Result<usize> {
        let index = match *self {
            Offset::Int(v) => usize::try_from(v).ok(),
            Offset::Float(v) if v.is_finite() && v >= 0.0 && v.fract() == 0.0 => Some(v as usize),
            _ => None,
        };
        index.ok_or_else(|| Error::invalid(argument, "must be a positive integer"))
    }

    /// The bound resolved against a collection of `len` items.
    ///
    /// Fractions truncate toward zero, negative values count back from the end,
    /// and the result is clamped to `0..=len`.
    pub(crate) fn relative(&self, argument: &'static str, len: usize) -> Result<usize> {
        let offset = match *self {
            Offset::Int(v) => v,
            // `as` truncates toward zero, saturates, and maps NaN to 0.
            Offset::Float(v) => v as i64,
            Offset::Text(_) => return Err(Error::invalid(argument, "must be a number")),
        };
        let len = i64::try_from(len).unwrap_or(i64::MAX);
        let resolved = if offset < 0 {
            (len + offset).max(0)
        } else {
            offset.min(len)
        };
        Ok(usize::try_from(resolved).unwrap_or(0))
    }
}

// =============================================================================
// Slice Cursor
// =============================================================================

/// Lazy cursor over the items of `upstream` whose position falls in `[begin, end)`.
///
/// Items before `begin` are pulled and dropped. Once the position reaches
/// `end` the cursor finishes without pulling the item at `end`.
#[derive(Debug, Clone)]
pub struct Slice<I> {
    upstream: I,
    position: usize,
    begin: f64,
    end: Option<f64>,
    finished: bool,
}

impl<I: Iterator> Iterator for Slice<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            if self.end.is_some_and(|end| self.position as f64 >= end) {
                self.finished = true;
                break;
            }
            let Some(item) = self.upstream.next() else {
                self.finished = true;
                break;
            };
            let position = self.position;
            self.position += 1;
            if position as f64 >= self.begin {
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            (0, Some(0))
        } else {
            (0, self.upstream.size_hint().1)
        }
    }
}

impl<I: Iterator> FusedIterator for Slice<I> {}

/// Slice any cursor-producing source by position.
///
/// Without `begin` the whole source is passed through and `end` is ignored.
/// Both bounds must be numbers.
///
/// # Errors
///
/// [`Error::InvalidArgument`] when a bound is not a number.
pub fn slice<S: IntoIterator>(
    source: S,
    begin: Option<Offset>,
    end: Option<Offset>,
) -> Result<Slice<S::IntoIter>> {
    let (begin, end) = match begin {
        None => (f64::NEG_INFINITY, None),
        Some(begin) => (
            begin.number("begin")?,
            end.map(|end| end.number("end")).transpose()?,
        ),
    };
    tracing::trace!(begin, ?end, "slice stage");
    Ok(Slice {
        upstream: source.into_iter(),
        position: 0,
        begin,
        end,
        finished: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_rejects_negative_fraction_text() {
        assert_eq!(Offset::from(3).index("begin"), Ok(3));
        assert_eq!(Offset::from(2.0).index("begin"), Ok(2));
        for bad in [Offset::from(-1), Offset::from(1.5), Offset::from("a")] {
            let err = bad.index("begin").unwrap_err();
            assert_eq!(err.to_string(), "begin must be a positive integer");
        }
    }

    #[test]
    fn test_relative_counts_from_end() {
        assert_eq!(Offset::from(-2).relative("begin", 5), Ok(3));
        assert_eq!(Offset::from(-9).relative("begin", 5), Ok(0));
        assert_eq!(Offset::from(9).relative("end", 5), Ok(5));
        assert_eq!(Offset::from(1.9).relative("begin", 5), Ok(1));
        assert_eq!(Offset::from(-1.5).relative("begin", 5), Ok(4));
        assert!(Offset::from("1").relative("begin", 5).is_err());
    }

    #[test]
    fn test_number_rejects_text_and_nan() {
        assert_eq!(Offset::from(-1).number("begin"), Ok(-1.0));
        assert!(Offset::from(f64::NAN).number("end").is_err());
        assert!(Offset::from("a").number("begin").is_err());
    }

    #[test]
    fn test_slice_never_pulls_past_end() {
        let mut pulled = 0;
        let source = (0..100).inspect(|_| pulled += 1);
        let out: Vec<_> = slice(source, Some(2.into()), Some(4.into())).unwrap().collect();
        assert_eq!(out, vec![2, 3]);
        assert_eq!(pulled, 4);
    }

    #[test]
    fn test_slice_without_begin_ignores_end() {
        let out: Vec<_> = slice(1..=3, None, Some(1.into())).unwrap().collect();
        assert_eq!(out, vec![1, 2, 3]);
    }
}
