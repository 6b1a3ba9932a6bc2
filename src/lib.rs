#![allow(clippy::crate_in_macro_def)]

// Feature flags handled:
// - detect: default, capability predicate macros
// - query: default, structural queries (serde, serde_json)

//! # seqwrap
//!
//! Chainable, specialization-preserving transformations over heterogeneous
//! sequence sources.
//!
//! **One wrapper, three species.**
//!
//! ## Architecture
//!
//! A [`Stream`] wraps a single source. Any value with the cursor capability
//! (anything [`IntoIterator`]) can be wrapped, and two kinds of source get a
//! specialized variant:
//!
//! ### 1. Species
//! The variant a stream belongs to is its [`Species`]. Chain methods dispatch
//! on it: a vector-backed stream uses native bulk operations, a
//! sequence-backed stream uses the sequence's bounded materialization and
//! composition, everything else is a lazy pipeline.
//!
//! ```text
//! Stream::new(iter)         -> Stream          (lazy cursor)
//! Stream::array(vec)        -> ArrayStream     (materialized)
//! Stream::sequence(seq)     -> SequenceStream  (external lazy sequence)
//! ```
//!
//! ### 2. Species Preservation
//! A lazy stage built on top of a specialized stream is handed back to the
//! species' own constructor, so `map` on an `ArrayStream` is an
//! `ArrayStream`, and `filter` on a `SequenceStream` is a `SequenceStream`.
//! Only `sort` (always an array) and `flat_map_path` (always generic) leave
//! their species.
//!
//! ### 3. Capability Detection
//! The `is_iterable!` predicate uses **autoref method priority** to decide at
//! the call site whether a value is cursor-producing, and `iterable_check!`
//! uses **inherent-const fallback** for the same question about a type.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Capability                                              |
//! |  - Cursor, Part, is_iterable!, iterable_check!                    |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Primitives                                              |
//! |  - pipeline (map, filter, slice, concat, reduce, sort_by)         |
//! |  - Sequence, LazySequence, SharedSequence                         |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Stream                                                  |
//! |  - Stream, Species, Offset                                        |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Structural Queries                                      |
//! |  - Query, Record, Path, Bindings, #[derive(Queryable)]            |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use seqwrap::prelude::*;
//!
//! let doubled = Stream::array(vec![3, 1, 2]).map(|x| x * 2);
//! assert!(doubled.is_array());
//! assert_eq!(doubled.sort().into_vec(), vec![2, 4, 6]);
//!
//! let sliced = Stream::new(0..).slice(2, 5).unwrap();
//! assert!(sliced.is_generic());
//! assert_eq!(sliced.into_vec(), vec![2, 3, 4]);
//!
//! let seq = Stream::sequence(SharedSequence::from(vec![1, 2, 3, 4, 5, 6]));
//! let window = seq.slice(3, 5).unwrap();
//! assert!(window.is_sequence());
//! assert_eq!(window.into_vec(), vec![4, 5]);
//!
//! let all = Stream::array(vec![1, 2]).concat(parts![3, ..vec![4, 5]]);
//! assert_eq!(all.into_vec(), vec![1, 2, 3, 4, 5]);
//! ```

// Allow `::seqwrap` to work inside the crate itself
extern crate self as seqwrap;

// Re-export paste for impl_fallback! and species_table!
pub use paste;

#[cfg(feature = "query")]
pub use serde;
#[cfg(feature = "query")]
pub use serde_json;

// =============================================================================
// Layer 0: Capability
// =============================================================================
pub mod capability;

#[cfg(feature = "detect")]
pub mod detect;

// =============================================================================
// Layer 1: Primitives
// =============================================================================
pub mod pipeline;
pub mod sequence;

// =============================================================================
// Layer 2: Stream
// =============================================================================
pub mod error;
pub mod stream;

// =============================================================================
// Layer 3: Structural Queries
// =============================================================================
#[cfg(feature = "query")]
pub mod query;

// Syntax macros (parts!)
pub mod syntax_macros;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use capability::{cursor, Cursor, Part};
pub use error::{Error, Result};
pub use pipeline::Offset;
pub use sequence::{LazySequence, Sequence, SharedSequence};
pub use stream::{Species, Stream};

#[cfg(feature = "query")]
pub use query::{Bindings, Path, Query, Record};

// Re-export proc-macros
#[cfg(feature = "query")]
pub use macros::Queryable;

/// Common items for building and chaining streams.
pub mod prelude {
    pub use crate::capability::{Cursor, Part};
    pub use crate::pipeline::Offset;
    pub use crate::sequence::{LazySequence, Sequence, SharedSequence};
    pub use crate::stream::{Species, Stream};
    pub use crate::parts;
    #[cfg(feature = "detect")]
    pub use crate::{is_iterable, iterable_check};
    #[cfg(feature = "query")]
    pub use crate::query::{Bindings, Path, Query, Record};
    #[cfg(feature = "query")]
    pub use macros::Queryable;
}
