//! Detail view controller.
//!
//! Drives the node detail view through its two modes:
//!
//! ```text
//! Viewing --enter_edit--> Editing --cancel--> Viewing
//!                         Editing --save----> closed
//! ```
//!
//! Saving parses the edit buffer, patches it into a fresh parse of the
//! canonical document at the selected node's path, and pushes the
//! re-serialized document to the contents sink. Every failure leaves the
//! buffer intact and the view in `Editing`, so the user can fix and retry.
//! All work is synchronous; two saves cannot interleave.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::host::{ContentsSink, ContentsUpdate, DocumentStore, VisibilityController, NODE_MODAL};
use crate::json_graph::Node;
use crate::json_patch::{apply_with_strategy, PatchError, SaveStrategy};
use crate::json_projection::{normalize, path_to_string, to_pretty_json};
use crate::selection::{SelectionHandle, SelectionStore};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DetailViewError {
    #[error("no node is selected")]
    NoSelection,
    #[error("the detail view is closed")]
    Closed,
    #[error("not in edit mode")]
    NotEditing,
    #[error("already in edit mode")]
    AlreadyEditing,
    #[error("the root node cannot be edited in place")]
    RootNotEditable,
    #[error("selection changed while editing; edit discarded")]
    SelectionChanged,
    #[error("edited text is not valid JSON: {0}")]
    EditParse(String),
    #[error("stored document is not valid JSON: {0}")]
    DocumentCorrupt(String),
    #[error("save failed: {0}")]
    SaveFailed(#[from] PatchError),
    #[error("could not serialize document: {0}")]
    Serialize(String),
}

impl DetailViewError {
    /// Errors after which the user can correct the buffer and save again.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, DetailViewError::EditParse(_) | DetailViewError::SaveFailed(_))
    }
}

/// Options for a [`DetailView`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DetailViewOptions {
    pub strategy: SaveStrategy,
}

#[derive(Debug, Clone, PartialEq)]
enum Mode {
    Viewing,
    /// `node` is the selection the buffer was created from.
    Editing { node: Node, buffer: String },
}

/// Select `node` and open the detail view. This is the graph's node-click
/// handler.
pub fn open_node(
    node: Node,
    selection: &SelectionStore,
    visibility: &mut dyn VisibilityController,
) {
    tracing::debug!(node = %node.id, path = %path_to_string(Some(&node.path)), "open node");
    selection.set_selected_node(Some(node));
    visibility.set_visible(NODE_MODAL, true);
}

pub struct DetailView {
    selection: SelectionHandle,
    options: DetailViewOptions,
    mode: Mode,
    open: bool,
    last_error: Option<DetailViewError>,
}

impl DetailView {
    pub fn new(selection: SelectionHandle, options: DetailViewOptions) -> Self {
        Self { selection, options, mode: Mode::Viewing, open: true, last_error: None }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, Mode::Editing { .. })
    }

    /// The error reported by the last failed transition, cleared by the next
    /// successful one.
    pub fn last_error(&self) -> Option<&DetailViewError> {
        self.last_error.as_ref()
    }

    /// Read-only projection of the selected node.
    pub fn content(&self) -> String {
        let node = self.selection.selected_node();
        normalize(node.as_ref().map(|n| n.rows.as_slice()).unwrap_or_default())
    }

    /// Bracket path of the selected node, `$` when nothing is selected.
    pub fn path_text(&self) -> String {
        let node = self.selection.selected_node();
        path_to_string(node.as_ref().map(|n| n.path.as_slice()))
    }

    pub fn edit_buffer(&self) -> Option<&str> {
        match &self.mode {
            Mode::Editing { buffer, .. } => Some(buffer),
            Mode::Viewing => None,
        }
    }

    /// Load the selected node's projection into the edit buffer.
    pub fn enter_edit(&mut self) -> Result<(), DetailViewError> {
        let result = self.try_enter_edit();
        self.record(result)
    }

    /// Replace the edit buffer with user input.
    pub fn set_edit_buffer(&mut self, text: impl Into<String>) -> Result<(), DetailViewError> {
        let result = self.checked_node().map(|_| ());
        let result = result.and_then(|()| match &mut self.mode {
            Mode::Editing { buffer, .. } => {
                *buffer = text.into();
                Ok(())
            }
            Mode::Viewing => Err(DetailViewError::NotEditing),
        });
        self.record(result)
    }

    /// Discard the edit buffer. The document is not touched.
    pub fn cancel(&mut self) -> Result<(), DetailViewError> {
        let result = self.checked_node().and_then(|_| match self.mode {
            Mode::Editing { .. } => {
                self.mode = Mode::Viewing;
                tracing::debug!("edit cancelled");
                Ok(())
            }
            Mode::Viewing => Err(DetailViewError::NotEditing),
        });
        self.record(result)
    }

    /// Commit the edit buffer and close the view.
    ///
    /// Returns the patched document. On error nothing is written and the view
    /// stays in `Editing` with the buffer intact.
    pub fn save(
        &mut self,
        store: &dyn DocumentStore,
        sink: &mut dyn ContentsSink,
        visibility: &mut dyn VisibilityController,
    ) -> Result<Value, DetailViewError> {
        let result = self.try_save(store, sink);
        if result.is_ok() {
            self.mode = Mode::Viewing;
            self.close(visibility);
        }
        self.record(result)
    }

    /// Close the view, discarding any edit in progress.
    pub fn close(&mut self, visibility: &mut dyn VisibilityController) {
        self.mode = Mode::Viewing;
        self.open = false;
        visibility.set_visible(NODE_MODAL, false);
    }

    fn try_enter_edit(&mut self) -> Result<(), DetailViewError> {
        let node = self.checked_node()?;
        if self.is_editing() {
            return Err(DetailViewError::AlreadyEditing);
        }
        if node.is_root() {
            return Err(DetailViewError::RootNotEditable);
        }
        let buffer = normalize(&node.rows);
        tracing::debug!(node = %node.id, "enter edit");
        self.mode = Mode::Editing { node, buffer };
        Ok(())
    }

    fn try_save(
        &mut self,
        store: &dyn DocumentStore,
        sink: &mut dyn ContentsSink,
    ) -> Result<Value, DetailViewError> {
        self.checked_node()?;
        let Mode::Editing { node, buffer } = &self.mode else {
            return Err(DetailViewError::NotEditing);
        };

        let edited: Value = serde_json::from_str(buffer).map_err(|e| {
            tracing::warn!(error = %e, "edited text is not valid JSON");
            DetailViewError::EditParse(e.to_string())
        })?;
        let document: Value = serde_json::from_str(&store.json()).map_err(|e| {
            tracing::error!(error = %e, "canonical document is corrupt");
            DetailViewError::DocumentCorrupt(e.to_string())
        })?;
        let patched = apply_with_strategy(document, &node.path, edited, self.options.strategy)
            .map_err(|e| {
                tracing::warn!(error = %e, node = %node.id, "patch failed");
                DetailViewError::from(e)
            })?;
        let contents =
            to_pretty_json(&patched).map_err(|e| DetailViewError::Serialize(e.to_string()))?;

        tracing::info!(
            node = %node.id,
            path = %path_to_string(Some(&node.path)),
            bytes = contents.len(),
            "node edit committed"
        );
        sink.set_contents(ContentsUpdate { contents, skip_update: false });
        Ok(patched)
    }

    /// Precondition shared by every transition: the view is open and a node
    /// is selected. A selection that moved away from the node being edited
    /// discards the buffer.
    fn checked_node(&mut self) -> Result<Node, DetailViewError> {
        if !self.open {
            return Err(DetailViewError::Closed);
        }
        let selected = self.selection.selected_node().ok_or(DetailViewError::NoSelection)?;
        if let Mode::Editing { node, .. } = &self.mode {
            if *node != selected {
                self.mode = Mode::Viewing;
                return Err(DetailViewError::SelectionChanged);
            }
        }
        Ok(selected)
    }

    fn record<T>(&mut self, result: Result<T, DetailViewError>) -> Result<T, DetailViewError> {
        match &result {
            Ok(_) => self.last_error = None,
            Err(e) => self.last_error = Some(e.clone()),
        }
        result
    }
}
