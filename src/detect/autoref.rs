//! Inherent-const fallback detection for concrete types.
//!
//! ## How it works
//!
//! For each capability we want to detect:
//! 1. Define a fallback trait with `const IS_X: bool = false`
//! 2. Implement the fallback for `Detect<T>` for every `T`
//! 3. Implement an inherent const `IS_X = true` for the `Detect<T>` that qualify
//!
//! When resolving `Detect::<Concrete>::IS_X` the compiler prefers the inherent
//! const when it applies and otherwise finds the trait const.
//!
//! ## Limitation
//!
//! This only works for **concrete types** known at the call site.

use std::borrow::Cow;
use std::marker::PhantomData;

/// Detection wrapper type.
#[doc(hidden)]
pub struct Detect<T: ?Sized>(PhantomData<T>);

/// Generate the fallback trait for one detected capability.
macro_rules! impl_fallback {
    ($Cap:ident) => {
        $crate::paste::paste! {
            #[doc(hidden)]
            pub trait [<$Cap Fallback>] {
                const [<IS_ $Cap:upper>]: bool = false;
            }
            impl<T: ?Sized> [<$Cap Fallback>] for Detect<T> {}
        }
    };
}

impl_fallback!(Iterable);
impl_fallback!(Text);

// Anything that hands out a cursor.
impl<T: IntoIterator> Detect<T> {
    pub const IS_ITERABLE: bool = true;
}

// Character strings: cursor-producing, but callers may choose to ignore them.
impl Detect<str> {
    pub const IS_TEXT: bool = true;
}
impl Detect<String> {
    pub const IS_TEXT: bool = true;
}
impl Detect<&str> {
    pub const IS_TEXT: bool = true;
}
impl Detect<Box<str>> {
    pub const IS_TEXT: bool = true;
}
impl Detect<Cow<'_, str>> {
    pub const IS_TEXT: bool = true;
}
