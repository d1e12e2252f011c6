//! Decomposition of a JSON document into a node graph.
//!
//! An object becomes one node holding a row per member; nested containers are
//! drawn as child nodes linked by edges. Arrays are not nodes themselves:
//! each element becomes a node hanging off the array's owner. A scalar that
//! stands alone (root scalar, array element) becomes a single keyless row.

pub mod types;

pub use types::{rows_of, Edge, Graph, Node, NodeId, Path, PathStep, Row, RowType, RowValue};

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Parse a serialized document and decompose it.
pub fn parse_graph(json: &str) -> Result<Graph, GraphError> {
    let doc: Value = serde_json::from_str(json)?;
    Ok(decompose(&doc))
}

/// Decompose a document into nodes and edges.
///
/// Node ids are sequential decimal strings starting at `"1"`, assigned in
/// depth-first document order.
pub fn decompose(doc: &Value) -> Graph {
    let mut builder = GraphBuilder::default();
    builder.visit(doc, Vec::new(), None);
    builder.graph
}

#[derive(Default)]
struct GraphBuilder {
    graph: Graph,
    next_id: usize,
}

impl GraphBuilder {
    fn visit(&mut self, value: &Value, path: Path, parent: Option<&NodeId>) {
        match value {
            Value::Object(map) => {
                let id = self.push_node(rows_of(value), path.clone(), parent);
                for (key, member) in map {
                    if member.is_object() || member.is_array() {
                        let mut child = path.clone();
                        child.push(PathStep::Key(key.clone()));
                        self.visit(member, child, Some(&id));
                    }
                }
            }
            Value::Array(items) => {
                for (idx, item) in items.iter().enumerate() {
                    let mut child = path.clone();
                    child.push(PathStep::Index(idx));
                    self.visit(item, child, parent);
                }
            }
            scalar => {
                self.push_node(vec![Row::new(None, scalar)], path, parent);
            }
        }
    }

    fn push_node(&mut self, rows: Vec<Row>, path: Path, parent: Option<&NodeId>) -> NodeId {
        self.next_id += 1;
        let id = self.next_id.to_string();
        if let Some(from) = parent {
            self.graph.edges.push(Edge {
                id: format!("e{from}-{id}"),
                from: from.clone(),
                to: id.clone(),
            });
        }
        self.graph.nodes.push(Node { id: id.clone(), rows, path });
        id
    }
}
