//! Editable text projection of a node.
//!
//! A node's rows are flattened into JSON text the user can edit. Rows of
//! type object or array are left out: their content lives in child nodes,
//! so the projection never lets an edit overwrite a nested container
//! directly. Saving the projection back replaces the node's whole subtree,
//! which drops those containers unless the merge strategy is used.

use serde_json::{Map, Value};

use crate::json_graph::{Row, RowValue};

pub use json_graph_path::path_to_string;

/// Serialize with 2-space indentation, keeping key order.
pub fn to_pretty_json(value: &Value) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Project rows into editable JSON text.
///
/// - no rows: `{}`
/// - a single keyless row: that value's JSON text (`5`, `"text"`, `null`)
/// - otherwise: an object of the keyed scalar rows, in row order, pretty
///   printed
///
/// # Example
///
/// ```
/// use json_graph::json_graph::rows_of;
/// use json_graph::json_projection::normalize;
/// use serde_json::json;
///
/// let rows = rows_of(&json!({"b": 1, "c": [1, 2]}));
/// assert_eq!(normalize(&rows), "{\n  \"b\": 1\n}");
/// assert_eq!(normalize(&rows_of(&json!(5))), "5");
/// ```
pub fn normalize(rows: &[Row]) -> String {
    if let [row] = rows {
        if row.key.is_none() {
            return match &row.value {
                RowValue::Scalar(v) => v.to_string(),
                RowValue::Marker(_) => String::from("{}"),
            };
        }
    }
    to_pretty_json(&project(rows)).unwrap_or_default()
}

/// The object a multi-row node projects to.
pub fn project(rows: &[Row]) -> Value {
    let mut obj = Map::new();
    for row in rows {
        if row.ty.is_container() {
            continue;
        }
        if let (Some(key), RowValue::Scalar(value)) = (&row.key, &row.value) {
            obj.insert(key.clone(), value.clone());
        }
    }
    Value::Object(obj)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json_graph::{rows_of, RowType};
    use serde_json::json;

    #[test]
    fn empty_rows_are_empty_object() {
        assert_eq!(normalize(&[]), "{}");
    }

    #[test]
    fn scalar_leaf_renders_json_text() {
        assert_eq!(normalize(&rows_of(&json!(5))), "5");
        assert_eq!(normalize(&rows_of(&json!("hi"))), r#""hi""#);
        assert_eq!(normalize(&rows_of(&json!(null))), "null");
        assert_eq!(normalize(&rows_of(&json!(false))), "false");
    }

    #[test]
    fn containers_are_excluded() {
        let rows = rows_of(&json!({"b": 1, "c": [1, 2], "d": {"x": 1}, "e": "s"}));
        assert_eq!(normalize(&rows), "{\n  \"b\": 1,\n  \"e\": \"s\"\n}");
    }

    #[test]
    fn only_containers_project_to_empty_object() {
        let rows = rows_of(&json!({"c": [1], "d": {}}));
        assert_eq!(normalize(&rows), "{}");
    }

    #[test]
    fn keyless_rows_skipped_in_object_case() {
        let rows = vec![Row::new(None, &json!(1)), Row::new(Some("a".into()), &json!(2))];
        assert_eq!(normalize(&rows), "{\n  \"a\": 2\n}");
    }

    #[test]
    fn lone_keyless_container_row_projects_nothing() {
        let rows = vec![Row::new(None, &json!([1, 2]))];
        assert_eq!(rows[0].ty, RowType::Array);
        assert_eq!(normalize(&rows), "{}");
    }

    #[test]
    fn key_order_follows_rows() {
        let rows = rows_of(&json!({"z": 1, "a": 2}));
        assert_eq!(normalize(&rows), "{\n  \"z\": 1,\n  \"a\": 2\n}");
    }
}
