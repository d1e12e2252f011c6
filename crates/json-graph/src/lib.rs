//! json-graph: edit a JSON document through its node graph.
//!
//! A document is decomposed into nodes of key/value/type rows, each tagged
//! with the path of the value it shows. Selecting a node opens a detail view
//! whose editable text is a flat projection of the node's rows; saving
//! patches the edited value back into the canonical document at that path,
//! leaving everything outside the subtree untouched.

pub mod json_graph;
pub mod json_projection;
pub mod json_patch;

pub mod selection;
pub mod host;
pub mod detail_view;
pub mod node_render;

pub mod json_cli;
