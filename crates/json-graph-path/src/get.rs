//! Path lookup in a JSON document.

use serde_json::Value;

use crate::types::PathStep;

fn step_into<'a>(current: &'a Value, step: &PathStep) -> Option<&'a Value> {
    match current {
        Value::Array(arr) => arr.get(step.as_index()?),
        Value::Object(map) => map.get(step.as_key().as_ref()),
        _ => None,
    }
}

fn step_into_mut<'a>(current: &'a mut Value, step: &PathStep) -> Option<&'a mut Value> {
    match current {
        Value::Array(arr) => arr.get_mut(step.as_index()?),
        Value::Object(map) => map.get_mut(step.as_key().as_ref()),
        _ => None,
    }
}

/// Get a value from a JSON document by path.
///
/// Returns `None` if any step does not resolve.
///
/// # Example
///
/// ```
/// use json_graph_path::{get, PathStep};
/// use serde_json::json;
///
/// let doc = json!({"a": [10, {"b": true}]});
/// let path = vec![PathStep::from("a"), PathStep::Index(1), PathStep::from("b")];
/// assert_eq!(get(&doc, &path), Some(&json!(true)));
/// assert_eq!(get(&doc, &[PathStep::from("z")]), None);
/// ```
pub fn get<'a>(val: &'a Value, path: &[PathStep]) -> Option<&'a Value> {
    let mut current = val;
    for step in path {
        current = step_into(current, step)?;
    }
    Some(current)
}

/// Get a mutable reference to a value in a JSON document by path.
pub fn get_mut<'a>(val: &'a mut Value, path: &[PathStep]) -> Option<&'a mut Value> {
    let mut current = val;
    for step in path {
        current = step_into_mut(current, step)?;
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn k(key: &str) -> PathStep {
        PathStep::from(key)
    }

    #[test]
    fn get_scalar_root() {
        assert_eq!(get(&json!(123), &[]), Some(&json!(123)));
    }

    #[test]
    fn get_mixed() {
        let doc = json!({"a": {"b": [1, 2, 3]}});
        let path = vec![k("a"), k("b"), PathStep::Index(1)];
        assert_eq!(get(&doc, &path), Some(&json!(2)));
    }

    #[test]
    fn get_index_past_end() {
        let doc = json!([1, 2, 3]);
        assert_eq!(get(&doc, &[PathStep::Index(3)]), None);
    }

    #[test]
    fn get_index_on_object_uses_decimal_key() {
        let doc = json!({"0": "zero"});
        assert_eq!(get(&doc, &[PathStep::Index(0)]), Some(&json!("zero")));
    }

    #[test]
    fn get_into_scalar_is_none() {
        let doc = json!({"a": 1});
        assert_eq!(get(&doc, &vec![k("a"), k("b")]), None);
    }

    #[test]
    fn get_explicit_null() {
        let doc = json!({"foo": null});
        assert_eq!(get(&doc, &[k("foo")]), Some(&Value::Null));
    }

    #[test]
    fn get_mut_writes_through() {
        let mut doc = json!({"a": [1, 2]});
        *get_mut(&mut doc, &vec![k("a"), PathStep::Index(0)]).unwrap() = json!(9);
        assert_eq!(doc, json!({"a": [9, 2]}));
    }
}
