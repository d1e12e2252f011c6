//! Row model and node types for the decomposed document graph.

use serde::Serialize;
use serde_json::Value;

pub use json_graph_path::{Path, PathStep};

// ── Row ───────────────────────────────────────────────────────────────────

/// Type tag of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowType {
    String,
    Number,
    Boolean,
    Null,
    Object,
    Array,
}

impl RowType {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::String(_) => RowType::String,
            Value::Number(_) => RowType::Number,
            Value::Bool(_) => RowType::Boolean,
            Value::Null => RowType::Null,
            Value::Object(_) => RowType::Object,
            Value::Array(_) => RowType::Array,
        }
    }

    /// Containers are drawn as child nodes, never inlined.
    pub fn is_container(self) -> bool {
        matches!(self, RowType::Object | RowType::Array)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RowType::String => "string",
            RowType::Number => "number",
            RowType::Boolean => "boolean",
            RowType::Null => "null",
            RowType::Object => "object",
            RowType::Array => "array",
        }
    }
}

/// Value held by a row: a scalar, or a summary marker for a container.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RowValue {
    Scalar(Value),
    Marker(String),
}

/// One key/value/type entry of a node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub key: Option<String>,
    pub value: RowValue,
    #[serde(rename = "type")]
    pub ty: RowType,
}

impl Row {
    /// Build the row for `value`. Containers get a marker
    /// (`{N keys}` / `[N items]`) instead of their content.
    pub fn new(key: Option<String>, value: &Value) -> Self {
        let ty = RowType::of(value);
        let value = match value {
            Value::Object(map) => RowValue::Marker(format!("{{{} keys}}", map.len())),
            Value::Array(arr) => RowValue::Marker(format!("[{} items]", arr.len())),
            scalar => RowValue::Scalar(scalar.clone()),
        };
        Self { key, value, ty }
    }

    /// Text shown inside a graph node: strings and markers bare, other
    /// scalars as JSON.
    pub fn display_value(&self) -> String {
        match &self.value {
            RowValue::Scalar(Value::String(s)) => s.clone(),
            RowValue::Scalar(v) => v.to_string(),
            RowValue::Marker(m) => m.clone(),
        }
    }
}

/// Rows describing a single value.
///
/// - object: one keyed row per member, in document order
/// - array: one keyless row per element
/// - scalar: a single keyless row
pub fn rows_of(value: &Value) -> Vec<Row> {
    match value {
        Value::Object(map) => map.iter().map(|(k, v)| Row::new(Some(k.clone()), v)).collect(),
        Value::Array(arr) => arr.iter().map(|v| Row::new(None, v)).collect(),
        scalar => vec![Row::new(None, scalar)],
    }
}

// ── Node / Graph ──────────────────────────────────────────────────────────

pub type NodeId = String;

/// A read-only snapshot of one position in the document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub id: NodeId,
    #[serde(rename = "text")]
    pub rows: Vec<Row>,
    pub path: Path,
}

impl Node {
    /// A node whose single row has no key stands for a bare value.
    pub fn is_scalar_leaf(&self) -> bool {
        matches!(self.rows.as_slice(), [row] if row.key.is_none())
    }

    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub id: String,
    pub from: NodeId,
    pub to: NodeId,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_at(&self, path: &[PathStep]) -> Option<&Node> {
        self.nodes.iter().find(|n| n.path == path)
    }

    pub fn children(&self, id: &str) -> impl Iterator<Item = &Node> + '_ {
        let id = id.to_string();
        self.edges.iter().filter(move |e| e.from == id).filter_map(move |e| self.node(&e.to))
    }
}
