//! Variable bindings for path expressions.

use std::collections::BTreeMap;

use serde_json::Value;

use super::path::{Path, Step};
use crate::error::{Error, Result};

/// Variable name to value. Bound values must be strings (field names) or
/// non-negative integers (array indices).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings {
    values: BTreeMap<String, Value>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Bindings::insert`].
    pub fn bind(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check that every variable in `path` is bound to a usable value.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] on `"bindings"` naming the first unbound or
    /// ill-typed variable.
    pub fn check(&self, path: &Path) -> Result<()> {
        for name in path.variables() {
            match self.values.get(name) {
                None => {
                    return Err(Error::invalid(
                        "bindings",
                        format!("do not bind `${name}`"),
                    ));
                }
                Some(value) if resolve(value).is_none() => {
                    return Err(Error::invalid(
                        "bindings",
                        format!("bind `${name}` to {value}, expected a string or a non-negative integer"),
                    ));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// The concrete step a variable stands for.
    pub(crate) fn resolve(&self, name: &str) -> Option<Step> {
        self.values.get(name).and_then(resolve)
    }
}

fn resolve(value: &Value) -> Option<Step> {
    match value {
        Value::String(name) => Some(Step::Field(name.clone())),
        Value::Number(n) => n
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .map(Step::Index),
        _ => None,
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bindings = Bindings::new();
        for (name, value) in iter {
            bindings.insert(name, value);
        }
        bindings
    }
}
