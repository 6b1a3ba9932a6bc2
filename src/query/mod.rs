//! # Layer 3: Structural Queries
//!
//! Items in a stream may expose a structural-query capability: given a
//! [`Path`] and [`Bindings`], yield every matching node. The capability is the
//! [`Query`] trait, and `None` from [`Query::query`] means the item does not
//! have it, so [`Stream::flat_map_path`](crate::Stream::flat_map_path) skips it.
//!
//! ```text
//! serde_json::Value::{Object, Array}  -> queryable
//! serde_json::Value::{scalar, Null}   -> not queryable
//! #[derive(Queryable)] struct         -> queryable through its Record view
//! Option<Q>, Box<Q>, &Q               -> delegate
//! ```
//!
//! ```
//! use seqwrap::query::{Bindings, Path, Query};
//! use serde_json::json;
//!
//! let doc = json!({ "tags": [{ "name": "a" }, { "name": "b" }] });
//! let path = Path::parse("/tags/name").unwrap();
//! let names = doc.query(&path, &Bindings::new()).unwrap();
//! assert_eq!(names, vec![json!("a"), json!("b")]);
//! ```

mod bindings;
mod eval;
mod path;

pub use bindings::Bindings;
pub use eval::evaluate;
pub use path::{Path, Step};
pub use serde_json::{Map, Value};

/// The structural-query capability.
pub trait Query {
    /// All matches of `path`, or `None` when this value is not queryable.
    fn query(&self, path: &Path, bindings: &Bindings) -> Option<Vec<Value>>;
}

/// A value with named fields that can be viewed as a JSON object.
///
/// Usually derived with `#[derive(Queryable)]`, which also implements
/// [`Query`] through [`select`].
pub trait Record {
    /// Field names in declaration order.
    fn field_names(&self) -> &'static [&'static str];

    /// One field as a JSON value, `None` if absent or not serializable.
    fn field(&self, name: &str) -> Option<Value>;

    fn to_value(&self) -> Value {
        let map: Map<String, Value> = self
            .field_names()
            .iter()
            .filter_map(|name| Some(((*name).to_owned(), self.field(name)?)))
            .collect();
        Value::Object(map)
    }
}

/// Evaluate `path` against the object view of `record`.
pub fn select<R: Record + ?Sized>(record: &R, path: &Path, bindings: &Bindings) -> Vec<Value> {
    let root = record.to_value();
    evaluate(&root, path, bindings).into_iter().cloned().collect()
}

impl Query for Value {
    fn query(&self, path: &Path, bindings: &Bindings) -> Option<Vec<Value>> {
        match self {
            Value::Object(_) | Value::Array(_) => Some(
                evaluate(self, path, bindings)
                    .into_iter()
                    .cloned()
                    .collect(),
            ),
            _ => None,
        }
    }
}

impl<Q: Query> Query for Option<Q> {
    fn query(&self, path: &Path, bindings: &Bindings) -> Option<Vec<Value>> {
        self.as_ref()?.query(path, bindings)
    }
}

impl<Q: Query + ?Sized> Query for Box<Q> {
    fn query(&self, path: &Path, bindings: &Bindings) -> Option<Vec<Value>> {
        (**self).query(path, bindings)
    }
}

impl<Q: Query + ?Sized> Query for &Q {
    fn query(&self, path: &Path, bindings: &Bindings) -> Option<Vec<Value>> {
        (**self).query(path, bindings)
    }
}
