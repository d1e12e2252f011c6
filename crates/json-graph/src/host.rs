//! Collaborators the detail view talks to.
//!
//! The document store holds the canonical serialized document; the contents
//! sink receives every committed document so other panes (the source editor)
//! refresh; the visibility controller opens and closes views by id.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

/// View id of the node detail view.
pub const NODE_MODAL: &str = "NodeModal";

/// Read access to the canonical document.
pub trait DocumentStore {
    fn json(&self) -> String;
}

/// A committed document on its way to downstream consumers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentsUpdate {
    pub contents: String,
    /// `true` tells consumers they originated the change and may skip a
    /// refresh. Saves from the graph always send `false`.
    pub skip_update: bool,
}

/// Persistence sink for committed documents.
pub trait ContentsSink {
    fn set_contents(&mut self, update: ContentsUpdate);
}

pub trait VisibilityController {
    fn set_visible(&mut self, view_id: &str, visible: bool);
}

// ── In-memory implementations ─────────────────────────────────────────────

#[derive(Debug, Default)]
struct MemoryDocumentState {
    json: String,
    revision: u64,
    last_skip_update: Option<bool>,
}

/// In-memory document that is both the store and the sink: contents pushed
/// through the sink become the canonical document. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    state: Arc<RwLock<MemoryDocumentState>>,
}

impl MemoryDocument {
    pub fn new(json: impl Into<String>) -> Self {
        let state = MemoryDocumentState { json: json.into(), ..Default::default() };
        Self { state: Arc::new(RwLock::new(state)) }
    }

    /// Swap the document from outside the graph, as the source editor does.
    pub fn replace(&self, json: impl Into<String>) {
        let mut state = self.state.write();
        state.json = json.into();
        state.revision += 1;
        state.last_skip_update = None;
    }

    /// Number of writes since creation.
    pub fn revision(&self) -> u64 {
        self.state.read().revision
    }

    /// `skip_update` of the last sink write, if the last write came
    /// through the sink.
    pub fn last_skip_update(&self) -> Option<bool> {
        self.state.read().last_skip_update
    }
}

impl DocumentStore for MemoryDocument {
    fn json(&self) -> String {
        self.state.read().json.clone()
    }
}

impl ContentsSink for MemoryDocument {
    fn set_contents(&mut self, update: ContentsUpdate) {
        let mut state = self.state.write();
        state.json = update.contents;
        state.revision += 1;
        state.last_skip_update = Some(update.skip_update);
    }
}

/// Visibility flags keyed by view id.
#[derive(Debug, Clone, Default)]
pub struct ViewVisibility {
    visible: HashMap<String, bool>,
}

impl ViewVisibility {
    pub fn is_visible(&self, view_id: &str) -> bool {
        self.visible.get(view_id).copied().unwrap_or(false)
    }
}

impl VisibilityController for ViewVisibility {
    fn set_visible(&mut self, view_id: &str, visible: bool) {
        self.visible.insert(view_id.to_string(), visible);
    }
}
