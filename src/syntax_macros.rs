//! Declarative sugar for building chain arguments.

// =============================================================================
// parts! - Build the trailing arguments of Stream::concat
// =============================================================================

/// Build a `Vec<Part>` for [`Stream::concat`](crate::Stream::concat).
///
/// A bare expression is one element, `..expr` spreads a cursor-producing
/// value one level deep.
///
/// # Example
///
/// ```
/// use seqwrap::{parts, Stream};
///
/// let all = Stream::array(vec![1, 2, 3]).concat(parts![4, 5, ..vec![6, 7]]);
/// assert_eq!(all.into_vec(), vec![1, 2, 3, 4, 5, 6, 7]);
///
/// // A nested collection without `..` stays one element.
/// let nested = Stream::array(vec![vec![1]]).concat(parts![vec![2, 3]]);
/// assert_eq!(nested.into_vec(), vec![vec![1], vec![2, 3]]);
/// ```
#[macro_export]
macro_rules! parts {
    () => {
        ::std::vec::Vec::<$crate::Part<_>>::new()
    };
    ($($rest:tt)+) => {{
        let mut parts = ::std::vec::Vec::new();
        $crate::__parts_push!(parts; $($rest)+);
        parts
    }};
}

/// Internal muncher for `parts!`.
#[macro_export]
#[doc(hidden)]
macro_rules! __parts_push {
    ($parts:ident;) => {};
    ($parts:ident; .. $items:expr $(, $($rest:tt)*)?) => {
        $parts.push($crate::Part::items($items));
        $crate::__parts_push!($parts; $($($rest)*)?);
    };
    ($parts:ident; $item:expr $(, $($rest:tt)*)?) => {
        $parts.push($crate::Part::item($item));
        $crate::__parts_push!($parts; $($($rest)*)?);
    };
}
