//! Eager ordering.

use std::cmp::Ordering;
use std::fmt::Display;

/// Compare two values by their string forms, code point by code point.
pub fn default_compare<T: Display + ?Sized>(a: &T, b: &T) -> Ordering {
    a.to_string().cmp(&b.to_string())
}

/// Drain `source` into a vector and stable-sort it with `compare`.
pub fn sort_by<S, F>(source: S, compare: F) -> Vec<S::Item>
where
    S: IntoIterator,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let mut items: Vec<_> = source.into_iter().collect();
    items.sort_by(compare);
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_compare_is_lexical() {
        assert_eq!(default_compare(&10, &9), Ordering::Less);
        assert_eq!(default_compare("b", "a"), Ordering::Greater);
        assert_eq!(default_compare(&'x', &'x'), Ordering::Equal);
    }

    #[test]
    fn test_sort_by_is_stable() {
        let sorted = sort_by(vec![(1, 'a'), (0, 'b'), (1, 'c')], |a, b| a.0.cmp(&b.0));
        assert_eq!(sorted, vec![(0, 'b'), (1, 'a'), (1, 'c')]);
    }
}
