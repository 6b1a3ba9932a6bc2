//! # Layer 0: Capability Predicate
//!
//! Decides whether a value (or a concrete type) satisfies the cursor
//! capability.
//!
//! ## Public API
//!
//! ```ignore
//! use seqwrap::{is_iterable, iterable_check};
//!
//! assert!(is_iterable!(vec![1, 2, 3]));
//! assert!(is_iterable!("abc"));
//! assert!(!is_iterable!("abc", true)); // ignore strings
//! assert!(!is_iterable!(None::<Vec<u8>>));
//! assert!(!is_iterable!(42));
//!
//! assert!(iterable_check!(Vec<i32>));
//! assert!(!iterable_check!(String, true));
//! ```
//!
//! Both macros resolve at the call site, so they answer for the concrete type
//! written there. Inside a generic `fn foo<T>()` they only see the bounds
//! declared on `T`.

pub mod autoref;
pub mod probe;

pub use autoref::{Detect, IterableFallback, TextFallback};
pub use probe::{CursorProbe, ExplicitProbe, FallbackProbe, Probe};

/// Whether a value satisfies the cursor capability.
///
/// Strings count as cursor-producing unless `ignore_strings` is `true`.
/// `None` is the absent value and never qualifies.
///
/// ```ignore
/// assert!(is_iterable!([1, 2]));
/// assert!(!is_iterable!(String::from("ab"), true));
/// ```
#[macro_export]
macro_rules! is_iterable {
    ($value:expr) => {
        $crate::is_iterable!($value, false)
    };
    ($value:expr, $ignore_strings:expr) => {{
        #[allow(unused_imports)]
        use $crate::detect::{CursorProbe as _, ExplicitProbe as _, FallbackProbe as _};
        (&&&$crate::detect::Probe(&$value)).is_iterable($ignore_strings)
    }};
}

/// Whether a concrete type satisfies the cursor capability.
///
/// ```ignore
/// assert!(iterable_check!(std::ops::Range<u8>));
/// assert!(iterable_check!(&str));
/// assert!(!iterable_check!(&str, true));
/// assert!(!iterable_check!(u64));
/// ```
#[macro_export]
macro_rules! iterable_check {
    ($ty:ty) => {
        $crate::iterable_check!($ty, false)
    };
    ($ty:ty, $ignore_strings:expr) => {{
        #[allow(unused_imports)]
        use $crate::detect::{IterableFallback as _, TextFallback as _};
        if $crate::detect::Detect::<$ty>::IS_TEXT {
            !$ignore_strings
        } else {
            $crate::detect::Detect::<$ty>::IS_ITERABLE
        }
    }};
}
