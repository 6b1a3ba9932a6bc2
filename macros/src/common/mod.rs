// Common utilities shared by the user-facing macros
//
// This module contains:
// - attrs: `#[query(...)]` field attribute parsing

mod attrs;

pub use attrs::*;
