//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Queryable)]` | on struct | Record view + structural queries |

mod queryable;

pub use queryable::expand_derive_queryable;
