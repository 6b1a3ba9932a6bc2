//! Generic pipeline primitives used directly, without a wrapper.

use std::cell::Cell;

use seqwrap::pipeline::{self, Offset};
use seqwrap::Part;

// =============================================================================
// Laziness
// =============================================================================

#[test]
fn test_no_work_before_first_pull() {
    let pulled = Cell::new(0);
    let source = (0..).inspect(|_| pulled.set(pulled.get() + 1));

    let mapped = pipeline::map(source, |x| x + 1);
    let filtered = pipeline::filter(mapped, |x, _| x % 2 == 0);
    let mut sliced = pipeline::slice(filtered, Some(1.into()), Some(3.into())).unwrap();
    assert_eq!(pulled.get(), 0);

    assert_eq!(sliced.next(), Some(4));
    assert_eq!(sliced.next(), Some(6));
    assert_eq!(sliced.next(), None);
    // 1..=6 were mapped; the slice stops before pulling the next even value.
    assert_eq!(pulled.get(), 6);
}

#[test]
fn test_unbounded_source_with_early_stop() {
    let first: Vec<_> = pipeline::map(0u64.., |x| x * x).take(4).collect();
    assert_eq!(first, vec![0, 1, 4, 9]);
}

#[test]
fn test_concat_pulls_parts_on_demand() {
    let touched = Cell::new(false);
    let tail = std::iter::once(()).map(|_| {
        touched.set(true);
        9
    });
    let mut all = pipeline::concat(vec![1, 2], vec![Part::items(tail)]);
    assert_eq!(all.next(), Some(1));
    assert_eq!(all.next(), Some(2));
    assert!(!touched.get());
    assert_eq!(all.next(), Some(9));
    assert!(touched.get());
}

// =============================================================================
// Slice
// =============================================================================

#[test]
fn test_slice_numeric_thresholds() {
    let fractional: Vec<_> = pipeline::slice(0..6, Some(1.5.into()), None).unwrap().collect();
    assert_eq!(fractional, vec![2, 3, 4, 5]);

    let negative: Vec<_> = pipeline::slice(0..3, Some((-4).into()), Some(2.into()))
        .unwrap()
        .collect();
    assert_eq!(negative, vec![0, 1]);

    let empty: Vec<_> = pipeline::slice(0..6, Some(4.into()), Some(2.into()))
        .unwrap()
        .collect();
    assert!(empty.is_empty());
}

#[test]
fn test_slice_rejects_non_numbers_eagerly() {
    let err = pipeline::slice(0..3, Some(Offset::from("a")), None).unwrap_err();
    assert_eq!(err.to_string(), "begin must be a number");

    let err = pipeline::slice(0..3, Some(0.into()), Some(f64::NAN.into())).unwrap_err();
    assert_eq!(err.argument(), "end");
}

// =============================================================================
// Eager
// =============================================================================

#[test]
fn test_reduce_and_sort() {
    let joined = pipeline::reduce(
        vec!["a", "b", "c"],
        |mut acc: String, s, index| {
            acc.push_str(&format!("{index}{s}"));
            acc
        },
        String::new(),
    );
    assert_eq!(joined, "0a1b2c");

    let sorted = pipeline::sort_by(vec![10, 9, 100], pipeline::default_compare);
    assert_eq!(sorted, vec![10, 100, 9]);
}
