//! Procedural macros for the seqwrap transformation layer
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Queryable)]` | struct | Structural-query capability for `flat_map_path` |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Serialize, Queryable)]
//! struct Entry {
//!     #[query(rename = "title")]
//!     name: String,
//!     #[query(skip)]
//!     cache: Vec<u8>,
//!     tags: Vec<String>,
//! }
//!
//! // "/title" and "/tags/*" now resolve against every Entry in a stream.
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (common / user)
// =============================================================================

mod common;
mod user;

// =============================================================================
// User-Facing Macros (user/)
// =============================================================================

/// Derive the structural-query capability for a struct.
///
/// Generates `seqwrap::query::Record` (an object view of the fields) and
/// `seqwrap::query::Query` (path evaluation over that view). Every field that
/// is not skipped must implement `serde::Serialize`.
///
/// # Field attributes
///
/// - `#[query(rename = "name")]` exposes the field under another name.
/// - `#[query(skip)]` leaves the field out of the object view.
///
/// Tuple struct fields are exposed as `"0"`, `"1"`, and so on.
#[proc_macro_derive(Queryable, attributes(query))]
pub fn derive_queryable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_queryable(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
