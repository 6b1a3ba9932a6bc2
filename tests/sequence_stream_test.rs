//! Sequence-backed streams: bounded materialization, composition, and the
//! sort warning.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use rstest::rstest;
use seqwrap::prelude::*;
use seqwrap::{Cursor, Error};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

fn six() -> Stream<'static, i32> {
    Stream::sequence(SharedSequence::from(vec![1, 2, 3, 4, 5, 6]))
}

// =============================================================================
// Slice
// =============================================================================

#[rstest]
#[case::from_one(Some(1), None, vec![2, 3, 4, 5, 6])]
#[case::window(Some(3), Some(5), vec![4, 5])]
#[case::empty_window(Some(3), Some(3), vec![])]
#[case::clamped(Some(3), Some(1000), vec![4, 5, 6])]
#[case::past_the_end(Some(10), None, vec![])]
#[case::no_bounds(None, None, vec![1, 2, 3, 4, 5, 6])]
fn test_slice_window(
    #[case] begin: Option<i64>,
    #[case] end: Option<i64>,
    #[case] expected: Vec<i32>,
) {
    let sliced = six()
        .slice_bounds(begin.map(Offset::from), end.map(Offset::from))
        .unwrap();
    assert!(sliced.is_sequence());
    assert_eq!(sliced.into_vec(), expected);
}

#[rstest]
#[case::negative(Offset::from(-1), None, "begin must be a positive integer")]
#[case::fraction(Offset::from(1.5), None, "begin must be a positive integer")]
#[case::text(Offset::from("a"), None, "begin must be a positive integer")]
#[case::negative_end(Offset::from(0), Some(Offset::from(-2)), "end must be a positive integer")]
#[case::crossed(Offset::from(11), Some(Offset::from(10)), "end must be greater than or equal to begin")]
fn test_slice_rejects(#[case] begin: Offset, #[case] end: Option<Offset>, #[case] message: &str) {
    let err = six().slice_bounds(Some(begin), end).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
    assert_eq!(err.to_string(), message);
}

#[test]
fn test_slice_accepts_integral_floats() {
    let sliced = six().slice(1.0, 3.0).unwrap();
    assert_eq!(sliced.into_vec(), vec![2, 3]);
}

#[test]
fn test_nested_slices_narrow_the_window() {
    let inner = six().slice(1, 5).unwrap().slice(1, 3).unwrap();
    assert!(inner.is_sequence());
    assert_eq!(inner.into_vec(), vec![3, 4]);
}

#[test]
fn test_lazy_sequence_window_over_unbounded_source() {
    let pulled = Rc::new(Cell::new(0));
    let counter = Rc::clone(&pulled);
    let source = (0..).inspect(move |_| counter.set(counter.get() + 1));

    let window = Stream::sequence(LazySequence::new(source)).slice(2, 4).unwrap();
    assert_eq!(window.into_vec(), vec![2, 3]);
    assert_eq!(pulled.get(), 4);
}

// =============================================================================
// Offsets Passed to the Sequence
// =============================================================================

#[derive(Debug, PartialEq)]
enum Call {
    Subsequence(usize, Option<usize>),
    Compose(usize),
}

/// A sequence that records which native operations were requested.
struct Recording {
    items: Vec<i32>,
    calls: Rc<RefCell<Vec<Call>>>,
}

impl Sequence<'static, i32> for Recording {
    fn into_cursor(self: Box<Self>) -> Cursor<'static, i32> {
        Box::new(self.items.into_iter())
    }

    fn subsequence(
        self: Box<Self>,
        start: usize,
        length: Option<usize>,
    ) -> Box<dyn Sequence<'static, i32>> {
        self.calls.borrow_mut().push(Call::Subsequence(start, length));
        let skip = start - 1;
        let items = self
            .items
            .iter()
            .copied()
            .skip(skip)
            .take(length.unwrap_or(usize::MAX))
            .collect();
        Box::new(Recording {
            items,
            calls: Rc::clone(&self.calls),
        })
    }

    fn compose(self: Box<Self>, parts: Vec<Part<'static, i32>>) -> Box<dyn Sequence<'static, i32>> {
        self.calls.borrow_mut().push(Call::Compose(parts.len()));
        let mut items = self.items;
        items.extend(parts.into_iter().flatten());
        Box::new(Recording {
            items,
            calls: self.calls,
        })
    }
}

fn recording(items: Vec<i32>) -> (Stream<'static, i32>, Rc<RefCell<Vec<Call>>>) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let stream = Stream::sequence(Recording {
        items,
        calls: Rc::clone(&calls),
    });
    (stream, calls)
}

#[test]
fn test_slice_uses_one_based_start_and_length() {
    let (stream, calls) = recording(vec![1, 2, 3, 4, 5, 6]);
    let sliced = stream.slice(3, 5).unwrap();
    assert_eq!(*calls.borrow(), vec![Call::Subsequence(4, Some(2))]);
    assert_eq!(sliced.into_vec(), vec![4, 5]);
}

#[test]
fn test_slice_from_passes_no_length() {
    let (stream, calls) = recording(vec![1, 2, 3]);
    let sliced = stream.slice_from(0).unwrap();
    assert_eq!(*calls.borrow(), vec![Call::Subsequence(1, None)]);
    assert_eq!(sliced.into_vec(), vec![1, 2, 3]);
}

#[test]
fn test_slice_without_begin_does_not_call_sequence() {
    let (stream, calls) = recording(vec![1, 2, 3]);
    let same = stream.slice_bounds(None, Some(Offset::from(1))).unwrap();
    assert!(calls.borrow().is_empty());
    assert_eq!(same.into_vec(), vec![1, 2, 3]);
}

#[test]
fn test_rejected_slice_does_not_call_sequence() {
    let (stream, calls) = recording(vec![1, 2, 3]);
    assert!(stream.slice(2, 1).is_err());
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_concat_composes_natively() {
    let (stream, calls) = recording(vec![1, 2]);
    let all = stream.concat(parts![3, ..vec![4, 5]]);
    assert!(all.is_sequence());
    assert_eq!(*calls.borrow(), vec![Call::Compose(2)]);
    assert_eq!(all.into_vec(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_concat_nothing_returns_same_source() {
    let (stream, calls) = recording(vec![1, 2]);
    let same = stream.concat(parts![]);
    assert!(calls.borrow().is_empty());
    assert_eq!(same.into_vec(), vec![1, 2]);
}

// =============================================================================
// Species Preservation
// =============================================================================

#[test]
fn test_map_filter_stay_sequence_and_lazy() {
    let pulled = Rc::new(Cell::new(0));
    let counter = Rc::clone(&pulled);
    let source = (0..).inspect(move |_| counter.set(counter.get() + 1));

    let chain = Stream::sequence(LazySequence::new(source))
        .map(|x| x + 1)
        .filter(|x, _| x % 2 == 1);
    assert!(chain.is_sequence());
    assert_eq!(pulled.get(), 0);

    let window = chain.slice(0, 3).unwrap();
    assert!(window.is_sequence());
    assert_eq!(window.into_vec(), vec![1, 3, 5]);
}

#[test]
fn test_shared_sequence_copy() {
    let root = six();
    let copy = root.try_clone().unwrap().slice(4, 6).unwrap();
    assert_eq!(copy.into_vec(), vec![5, 6]);
    assert_eq!(root.into_vec(), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_lazy_sequence_cannot_be_copied() {
    let stream = Stream::sequence(LazySequence::new(0..3));
    assert!(stream.try_clone().is_none());
}

// =============================================================================
// Sort Warning
// =============================================================================

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<(Level, String)>>>);

struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

impl<S: Subscriber> Layer<S> for Captured {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor(String::new());
        event.record(&mut visitor);
        self.0
            .lock()
            .unwrap()
            .push((*event.metadata().level(), visitor.0));
    }
}

#[test]
fn test_sort_warns_then_materializes() {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::registry().with(captured.clone());

    let sorted = tracing::subscriber::with_default(subscriber, || {
        Stream::sequence(SharedSequence::from(vec![3, 1, 2])).sort()
    });

    assert!(sorted.is_array());
    assert_eq!(sorted.into_vec(), vec![1, 2, 3]);

    let events = captured.0.lock().unwrap();
    let warnings: Vec<_> = events
        .iter()
        .filter(|(level, _)| *level == Level::WARN)
        .collect();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].1.contains("materializes the entire sequence"));
}

#[test]
fn test_array_sort_does_not_warn() {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::registry().with(captured.clone());

    tracing::subscriber::with_default(subscriber, || {
        Stream::array(vec![3, 1, 2]).sort().into_vec()
    });

    let events = captured.0.lock().unwrap();
    assert!(events.iter().all(|(level, _)| *level != Level::WARN));
}
