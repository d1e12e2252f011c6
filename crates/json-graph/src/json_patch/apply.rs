//! Subtree replacement at a path.

use json_graph_path::{get, get_mut, path_to_string, PathStep};
use serde_json::{Map, Value};

use super::types::{PatchError, SaveStrategy};

fn not_found(path: &[PathStep]) -> PatchError {
    PatchError::PathNotFound(path_to_string(Some(path)))
}

/// Replace the value at `path` with `replacement`.
///
/// Every step but the last must resolve to a container. The last step
/// overwrites a member of an object (appending the key if absent) or an
/// in-bounds element of an array. Everything outside the subtree at `path`
/// is left as is, including object key order.
///
/// # Errors
///
/// - `PatchError::InvalidPath` for the empty path.
/// - `PatchError::PathNotFound` when a step does not resolve, the parent is
///   a scalar, or the final index is out of bounds.
///
/// # Example
///
/// ```
/// use json_graph::json_patch::apply_patch;
/// use json_graph_path::PathStep;
/// use serde_json::json;
///
/// let doc = json!({"a": {"b": 1}, "z": true});
/// let out = apply_patch(doc, &[PathStep::from("a")], json!({"b": 99})).unwrap();
/// assert_eq!(out, json!({"a": {"b": 99}, "z": true}));
/// ```
pub fn apply_patch(
    mut doc: Value,
    path: &[PathStep],
    replacement: Value,
) -> Result<Value, PatchError> {
    let (last, parent_path) = path.split_last().ok_or(PatchError::InvalidPath)?;
    let parent = get_mut(&mut doc, parent_path).ok_or_else(|| not_found(path))?;
    match parent {
        Value::Object(map) => {
            map.insert(last.as_key().into_owned(), replacement);
        }
        Value::Array(arr) => {
            let slot = last
                .as_index()
                .and_then(|idx| arr.get_mut(idx))
                .ok_or_else(|| not_found(path))?;
            *slot = replacement;
        }
        _ => return Err(not_found(path)),
    }
    Ok(doc)
}

/// Like [`apply_patch`], but when both the current value and `replacement`
/// are objects, members of the current object that hold a container and are
/// absent from `replacement` survive in their original position.
///
/// Scalar members missing from `replacement` are dropped, same as a replace.
pub fn merge_patch(doc: Value, path: &[PathStep], replacement: Value) -> Result<Value, PatchError> {
    if path.is_empty() {
        return Err(PatchError::InvalidPath);
    }
    let merged = match (get(&doc, path), replacement) {
        (Some(Value::Object(current)), Value::Object(edited)) => {
            Value::Object(merge_objects(current, edited))
        }
        (_, replacement) => replacement,
    };
    apply_patch(doc, path, merged)
}

fn merge_objects(current: &Map<String, Value>, edited: Map<String, Value>) -> Map<String, Value> {
    let mut out = Map::new();
    for (key, value) in current {
        if let Some(new_value) = edited.get(key) {
            out.insert(key.clone(), new_value.clone());
        } else if value.is_object() || value.is_array() {
            out.insert(key.clone(), value.clone());
        }
    }
    for (key, value) in edited {
        if !current.contains_key(&key) {
            out.insert(key, value);
        }
    }
    out
}

/// Dispatch on `strategy`.
pub fn apply_with_strategy(
    doc: Value,
    path: &[PathStep],
    replacement: Value,
    strategy: SaveStrategy,
) -> Result<Value, PatchError> {
    match strategy {
        SaveStrategy::Replace => apply_patch(doc, path, replacement),
        SaveStrategy::MergeScalars => merge_patch(doc, path, replacement),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn key(k: &str) -> PathStep {
        PathStep::from(k)
    }

    #[test]
    fn replaces_scalar_member() {
        let out = apply_patch(json!({"x": 5}), &[key("x")], json!(6)).unwrap();
        assert_eq!(out, json!({"x": 6}));
    }

    #[test]
    fn replaces_whole_subtree() {
        let doc = json!({"a": {"b": 1, "c": [1, 2]}});
        let out = apply_patch(doc, &[key("a")], json!({"b": 99})).unwrap();
        assert_eq!(out, json!({"a": {"b": 99}}));
    }

    #[test]
    fn replaces_array_element() {
        let doc = json!({"list": [1, {"v": 2}, 3]});
        let out = apply_patch(doc, &[key("list"), PathStep::Index(1)], json!({"v": 20})).unwrap();
        assert_eq!(out, json!({"list": [1, {"v": 20}, 3]}));
    }

    #[test]
    fn inserts_missing_key_at_end() {
        let out = apply_patch(json!({"a": 1}), &[key("b")], json!(2)).unwrap();
        assert_eq!(serde_json::to_string(&out).unwrap(), r#"{"a":1,"b":2}"#);
    }

    #[test]
    fn keeps_key_position_on_overwrite() {
        let doc = json!({"first": 1, "mid": 2, "last": 3});
        let out = apply_patch(doc, &[key("mid")], json!("two")).unwrap();
        assert_eq!(serde_json::to_string(&out).unwrap(), r#"{"first":1,"mid":"two","last":3}"#);
    }

    #[test]
    fn empty_path_is_invalid() {
        assert_eq!(apply_patch(json!({}), &[], json!(1)), Err(PatchError::InvalidPath));
        assert_eq!(merge_patch(json!({}), &[], json!(1)), Err(PatchError::InvalidPath));
    }

    #[test]
    fn missing_intermediate_is_not_found() {
        let err = apply_patch(json!({"z": 1}), &[key("a"), key("b")], json!(1)).unwrap_err();
        assert_eq!(err, PatchError::PathNotFound(r#"$["a"]["b"]"#.into()));
    }

    #[test]
    fn descending_into_scalar_is_not_found() {
        let err = apply_patch(json!({"a": 1}), &[key("a"), key("b")], json!(1)).unwrap_err();
        assert!(matches!(err, PatchError::PathNotFound(_)));
    }

    #[test]
    fn index_past_end_is_not_found() {
        let err = apply_patch(json!([1, 2]), &[PathStep::Index(2)], json!(3)).unwrap_err();
        assert!(matches!(err, PatchError::PathNotFound(_)));
        let err = apply_patch(json!([[1]]), &[PathStep::Index(5), PathStep::Index(0)], json!(3))
            .unwrap_err();
        assert!(matches!(err, PatchError::PathNotFound(_)));
    }

    #[test]
    fn key_step_on_array_must_be_index() {
        let out = apply_patch(json!([1, 2]), &[key("1")], json!(9)).unwrap();
        assert_eq!(out, json!([1, 9]));
        let err = apply_patch(json!([1, 2]), &[key("x")], json!(9)).unwrap_err();
        assert!(matches!(err, PatchError::PathNotFound(_)));
    }

    #[test]
    fn merge_keeps_untouched_containers() {
        let doc = json!({"a": {"b": 1, "c": [1, 2], "d": "gone", "e": {"k": 0}}});
        let out = merge_patch(doc, &[key("a")], json!({"b": 99, "new": true})).unwrap();
        assert_eq!(
            serde_json::to_string(&out).unwrap(),
            r#"{"a":{"b":99,"c":[1,2],"e":{"k":0},"new":true}}"#
        );
    }

    #[test]
    fn merge_lets_edit_overwrite_container_key() {
        let doc = json!({"a": {"c": [1, 2]}});
        let out = merge_patch(doc, &[key("a")], json!({"c": "flat"})).unwrap();
        assert_eq!(out, json!({"a": {"c": "flat"}}));
    }

    #[test]
    fn merge_of_non_objects_replaces() {
        let out = merge_patch(json!({"x": 5}), &[key("x")], json!(6)).unwrap();
        assert_eq!(out, json!({"x": 6}));
        let out = merge_patch(json!({"x": {"a": 1}}), &[key("x")], json!([1])).unwrap();
        assert_eq!(out, json!({"x": [1]}));
    }

    #[test]
    fn strategy_dispatch() {
        let doc = json!({"a": {"b": 1, "c": [1]}});
        let replaced =
            apply_with_strategy(doc.clone(), &[key("a")], json!({"b": 2}), SaveStrategy::Replace)
                .unwrap();
        assert_eq!(replaced, json!({"a": {"b": 2}}));
        let merged =
            apply_with_strategy(doc, &[key("a")], json!({"b": 2}), SaveStrategy::MergeScalars)
                .unwrap();
        assert_eq!(merged, json!({"a": {"b": 2, "c": [1]}}));
    }
}
