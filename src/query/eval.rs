//! Path evaluation over JSON documents.

use serde_json::Value;

use super::bindings::Bindings;
use super::path::{Path, Step};

/// Every node of `root` that `path` reaches, in document order.
///
/// Variables that `bindings` cannot resolve match nothing; callers that want
/// an error run [`Bindings::check`] first.
pub fn evaluate<'v>(root: &'v Value, path: &Path, bindings: &Bindings) -> Vec<&'v Value> {
    let mut nodes = vec![root];
    for step in path.steps() {
        let resolved;
        let step = match step {
            Step::Variable(name) => match bindings.resolve(name) {
                Some(step) => {
                    resolved = step;
                    &resolved
                }
                None => return Vec::new(),
            },
            step => step,
        };
        nodes = nodes.into_iter().flat_map(|node| apply(node, step)).collect();
        if nodes.is_empty() {
            break;
        }
    }
    nodes
}

fn apply<'v>(node: &'v Value, step: &Step) -> Vec<&'v Value> {
    match (step, node) {
        (Step::Current, _) => vec![node],
        (Step::Wildcard, Value::Object(map)) => map.values().collect(),
        (Step::Wildcard, Value::Array(items)) => items.iter().collect(),
        (Step::Index(index), Value::Array(items)) => items.get(*index).into_iter().collect(),
        // Numeric keys, as exposed by tuple records.
        (Step::Index(index), Value::Object(map)) => map.get(&index.to_string()).into_iter().collect(),
        (Step::Field(name), Value::Object(map)) => map.get(name).into_iter().collect(),
        // Field steps distribute over array elements.
        (Step::Field(name), Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_object()?.get(name))
            .collect(),
        _ => Vec::new(),
    }
}
