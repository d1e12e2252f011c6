//! `json-cli`: command-line front ends for the node graph.
//!
//! Provides the core logic used by the binary entry points:
//! - `json-graph-nodes` - list every node with its path and projection
//! - `json-graph-edit`  - edit the node at a path and print the new document

use std::fmt::Write;

use json_graph_path::{parse_path_string, PathError};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::detail_view::{open_node, DetailView, DetailViewError, DetailViewOptions};
use crate::host::{DocumentStore, MemoryDocument, ViewVisibility};
use crate::json_graph::{parse_graph, GraphError};
use crate::json_patch::SaveStrategy;
use crate::json_projection::{normalize, path_to_string};
use crate::selection::SelectionStore;

/// Environment variable holding the log filter for the binaries.
pub const LOG_ENV: &str = "JSON_GRAPH_LOG";

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Graph(#[from] GraphError),
    #[error("invalid path: {0}")]
    Path(#[from] PathError),
    #[error("no node at {0}")]
    NodeNotFound(String),
    #[error("{0}")]
    Edit(#[from] DetailViewError),
    #[error("usage: {0}")]
    Usage(String),
    #[error("output formatting failed")]
    Format(#[from] std::fmt::Error),
}

/// Install a stderr `tracing` subscriber filtered by `JSON_GRAPH_LOG`
/// (default `warn`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

// ── json-graph-nodes ──────────────────────────────────────────────────────

/// Render every node of a document as `#<id> <path>` followed by its
/// projection.
pub fn list_nodes(doc_json: &str) -> Result<String, CliError> {
    let graph = parse_graph(doc_json)?;
    let mut out = String::new();
    for node in &graph.nodes {
        writeln!(out, "#{} {}", node.id, path_to_string(Some(&node.path)))?;
        writeln!(out, "{}", normalize(&node.rows))?;
    }
    Ok(out)
}

// ── json-graph-edit ───────────────────────────────────────────────────────

/// Arguments of `json-graph-edit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditArgs {
    pub path: String,
    pub edited: String,
    pub strategy: SaveStrategy,
}

/// Parse `<path> <edited-json> [--merge | --strategy <name>]`.
pub fn parse_edit_args<I>(args: I) -> Result<EditArgs, CliError>
where
    I: IntoIterator<Item = String>,
{
    let usage = || CliError::Usage("json-graph-edit '<path>' '<edited-json>' [--merge]".into());
    let mut positional = Vec::new();
    let mut strategy = SaveStrategy::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--merge" => strategy = SaveStrategy::MergeScalars,
            "--strategy" => {
                let name = args.next().ok_or_else(usage)?;
                strategy = name.parse().map_err(|_| usage())?;
            }
            _ => positional.push(arg),
        }
    }
    let mut positional = positional.into_iter();
    match (positional.next(), positional.next(), positional.next()) {
        (Some(path), Some(edited), None) => Ok(EditArgs { path, edited, strategy }),
        _ => Err(usage()),
    }
}

/// Run the open → edit → save flow on the node at `path_text`.
///
/// Returns the committed document as pretty-printed JSON.
pub fn edit_node(
    doc_json: &str,
    path_text: &str,
    edited: &str,
    options: DetailViewOptions,
) -> Result<String, CliError> {
    let path = parse_path_string(path_text)?;
    let graph = parse_graph(doc_json)?;
    let node = graph
        .node_at(&path)
        .cloned()
        .ok_or_else(|| CliError::NodeNotFound(path_to_string(Some(&path))))?;

    let document = MemoryDocument::new(doc_json);
    let mut sink = document.clone();
    let selection = SelectionStore::new();
    let mut views = ViewVisibility::default();

    open_node(node, &selection, &mut views);
    let mut view = DetailView::new(selection.handle(), options);
    view.enter_edit()?;
    view.set_edit_buffer(edited)?;
    view.save(&document, &mut sink, &mut views)?;
    Ok(document.json())
}

// ── Tests ─────────────────────────────────────────────────────────────────
