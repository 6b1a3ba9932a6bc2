//! Autoref-based detection for values.
//!
//! `is_iterable!` calls `(&&&Probe(&value)).is_iterable(..)`. Method lookup
//! tries the most-referenced receiver first, so the impls are layered:
//!
//! ```text
//! &&Probe<T>  ExplicitProbe  strings, slices, Option (answer depends on the value)
//! &Probe<T>   CursorProbe    T: IntoIterator      -> true
//! Probe<T>    FallbackProbe  everything else      -> false
//! ```

use std::borrow::Cow;

/// Value probe. Borrowed so detection never consumes the value.
#[doc(hidden)]
pub struct Probe<'v, T: ?Sized>(pub &'v T);

#[doc(hidden)]
pub trait ExplicitProbe {
    fn is_iterable(&self, ignore_strings: bool) -> bool;
}

#[doc(hidden)]
pub trait CursorProbe {
    fn is_iterable(&self, _ignore_strings: bool) -> bool {
        true
    }
}

#[doc(hidden)]
pub trait FallbackProbe {
    fn is_iterable(&self, _ignore_strings: bool) -> bool {
        false
    }
}

macro_rules! impl_text_probe {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ExplicitProbe for &&Probe<'_, $ty> {
                fn is_iterable(&self, ignore_strings: bool) -> bool {
                    !ignore_strings
                }
            }
        )+
    };
}

impl_text_probe!(str, String, &str, Box<str>, Cow<'_, str>);

impl<T> ExplicitProbe for &&Probe<'_, [T]> {
    fn is_iterable(&self, _ignore_strings: bool) -> bool {
        true
    }
}

// `None` is the absent value.
impl<T> ExplicitProbe for &&Probe<'_, Option<T>> {
    fn is_iterable(&self, _ignore_strings: bool) -> bool {
        self.0.is_some()
    }
}

impl<T: IntoIterator> CursorProbe for &Probe<'_, T> {}

impl<T: ?Sized> FallbackProbe for Probe<'_, T> {}
