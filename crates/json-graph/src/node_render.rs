//! Render boundary between the layout engine and node drawing.
//!
//! The layout engine hands the render callback either its own positioned
//! shape or the stored node. Both are resolved once into a [`RenderNode`]
//! before any drawing decision is made.

use crate::json_graph::{Node, Path, Row};
use crate::json_projection::path_to_string;

#[derive(Debug, Clone, PartialEq)]
pub enum NodeShape {
    /// Positioned by the layout engine.
    Layout { properties: Node, x: f64, y: f64 },
    /// Not yet laid out; drawn at the origin.
    Stored(Node),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderNode {
    pub node: Node,
    pub x: f64,
    pub y: f64,
}

impl NodeShape {
    pub fn resolve(self) -> RenderNode {
        match self {
            NodeShape::Layout { properties, x, y } => RenderNode { node: properties, x, y },
            NodeShape::Stored(node) => RenderNode { node, x: 0.0, y: 0.0 },
        }
    }
}

/// What to draw for one node.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeElement {
    /// A bare value.
    Text { path: Path, x: f64, y: f64, text: String },
    /// Keyed rows, one line each.
    Object { path: Path, x: f64, y: f64, rows: Vec<Row> },
}

impl NodeElement {
    pub fn path_text(&self) -> String {
        match self {
            NodeElement::Text { path, .. } | NodeElement::Object { path, .. } => {
                path_to_string(Some(path))
            }
        }
    }
}

/// Pick the element for a resolved node. Positions pass through untouched.
pub fn render_node(node: &RenderNode) -> NodeElement {
    let RenderNode { node, x, y } = node;
    match node.rows.first() {
        Some(row) if row.key.is_none() => NodeElement::Text {
            path: node.path.clone(),
            x: *x,
            y: *y,
            text: row.display_value(),
        },
        _ => NodeElement::Object { path: node.path.clone(), x: *x, y: *y, rows: node.rows.clone() },
    }
}

// ── Styling ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeStyle {
    pub fill: &'static str,
    pub stroke: &'static str,
    pub hover_stroke: &'static str,
    pub stroke_width: f64,
}

impl NodeStyle {
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        let (fill, stroke) = match scheme {
            ColorScheme::Light => ("#ffffff", "#BCBEC0"),
            ColorScheme::Dark => ("#292929", "#424242"),
        };
        Self { fill, stroke, hover_stroke: "#3B82F6", stroke_width: 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json_graph::{decompose, PathStep};
    use serde_json::json;

    #[test]
    fn layout_and_stored_resolve_alike() {
        let graph = decompose(&json!({"a": 1}));
        let node = graph.nodes[0].clone();
        let laid_out = NodeShape::Layout { properties: node.clone(), x: 10.0, y: 20.0 }.resolve();
        let stored = NodeShape::Stored(node.clone()).resolve();
        assert_eq!(laid_out.node, stored.node);
        assert_eq!((laid_out.x, laid_out.y), (10.0, 20.0));
        assert_eq!((stored.x, stored.y), (0.0, 0.0));
    }

    #[test]
    fn keyless_first_row_renders_text() {
        let graph = decompose(&json!({"list": ["hello"]}));
        let leaf = graph.node_at(&[PathStep::from("list"), PathStep::Index(0)]).unwrap();
        let shape = NodeShape::Layout { properties: leaf.clone(), x: 1.0, y: 2.0 };
        match render_node(&shape.resolve()) {
            NodeElement::Text { text, x, y, .. } => {
                assert_eq!(text, "hello");
                assert_eq!((x, y), (1.0, 2.0));
            }
            other => panic!("expected text element, got {other:?}"),
        }
    }

    #[test]
    fn keyed_rows_render_object() {
        let graph = decompose(&json!({"a": 1, "b": [1]}));
        let element = render_node(&NodeShape::Stored(graph.nodes[0].clone()).resolve());
        assert!(matches!(&element, NodeElement::Object { rows, .. } if rows.len() == 2));
        assert_eq!(element.path_text(), "$");
    }

    #[test]
    fn empty_node_renders_object() {
        let graph = decompose(&json!({}));
        let element = render_node(&NodeShape::Stored(graph.nodes[0].clone()).resolve());
        assert!(matches!(element, NodeElement::Object { rows, .. } if rows.is_empty()));
    }

    #[test]
    fn styles() {
        assert_eq!(NodeStyle::for_scheme(ColorScheme::Dark).fill, "#292929");
        assert_eq!(NodeStyle::for_scheme(ColorScheme::Light).stroke, "#BCBEC0");
        assert_eq!(NodeStyle::for_scheme(ColorScheme::default()).hover_stroke, "#3B82F6");
    }
}
