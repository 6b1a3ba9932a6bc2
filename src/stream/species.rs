//! Species: which wrapper variant a stream is, and how each variant turns a
//! freshly built lazy stage back into a stream.
//!
//! | Species | Type name | Constructor for a lazy stage |
//! |---------|-----------|------------------------------|
//! | `Generic` | `Stream` | keep the cursor as is |
//! | `Array` | `ArrayStream` | collect into a vector |
//! | `Sequence` | `SequenceStream` | re-express as a [`LazySequence`] |

use std::fmt;

use crate::capability::Cursor;
use crate::sequence::LazySequence;

use super::Stream;

/// Generate the species enum, its name table and the `is_*` predicates on
/// [`Stream`].
macro_rules! species_table {
    ($( $(#[$meta:meta])* $variant:ident => $type_name:literal ),+ $(,)?) => {
        /// The wrapper variant a [`Stream`] belongs to.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Species {
            $( $(#[$meta])* $variant, )+
        }

        impl Species {
            pub const ALL: &'static [Species] = &[$(Species::$variant),+];

            /// Human-readable type name reported for debugging.
            pub const fn type_name(self) -> &'static str {
                match self {
                    $( Species::$variant => $type_name, )+
                }
            }
        }

        $crate::paste::paste! {
            impl<T> Stream<'_, T> {
                $(
                    #[doc = concat!("Whether this stream reports itself as `", $type_name, "`.")]
                    pub fn [<is_ $variant:snake>](&self) -> bool {
                        self.species() == Species::$variant
                    }
                )+
            }
        }
    };
}

species_table! {
    /// Backed by a lazy cursor.
    Generic => "Stream",
    /// Backed by a materialized vector.
    Array => "ArrayStream",
    /// Backed by an external lazy sequence.
    Sequence => "SequenceStream",
}

impl Species {
    /// Wrap a lazy stage in a stream of this species.
    pub fn construct<'a, T: 'a>(self, cursor: Cursor<'a, T>) -> Stream<'a, T> {
        tracing::trace!(species = self.type_name(), "constructing stage");
        match self {
            Species::Generic => Stream::lazy(cursor),
            Species::Array => Stream::array(cursor.collect()),
            Species::Sequence => Stream::sequence(LazySequence::new(cursor)),
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}
