//! Currently selected node.
//!
//! One [`SelectionStore`] per session owns the slot and is the only writer.
//! Views read it through cloneable [`SelectionHandle`]s and may subscribe to
//! changes; listeners run synchronously inside `set_selected_node`.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::json_graph::Node;

pub type Listener = Arc<dyn Fn(Option<&Node>) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct SelectionState {
    node: Option<Node>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

/// Owning, writable side of the selection.
#[derive(Default)]
pub struct SelectionStore {
    state: Arc<RwLock<SelectionState>>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A read-only handle onto this store.
    pub fn handle(&self) -> SelectionHandle {
        SelectionHandle { state: Arc::clone(&self.state) }
    }

    /// Replace the selection and notify every listener.
    pub fn set_selected_node(&self, node: Option<Node>) {
        let listeners: Vec<Listener> = {
            let mut state = self.state.write();
            state.node = node.clone();
            state.listeners.iter().map(|(_, l)| Arc::clone(l)).collect()
        };
        tracing::trace!(
            node = node.as_ref().map(|n| n.id.as_str()),
            listeners = listeners.len(),
            "selection changed"
        );
        for listener in listeners {
            listener(node.as_ref());
        }
    }

    pub fn selected_node(&self) -> Option<Node> {
        self.state.read().node.clone()
    }
}

/// Read-only view of the selection.
#[derive(Clone)]
pub struct SelectionHandle {
    state: Arc<RwLock<SelectionState>>,
}

impl SelectionHandle {
    pub fn selected_node(&self) -> Option<Node> {
        self.state.read().node.clone()
    }

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(Option<&Node>) + Send + Sync + 'static,
    {
        let mut state = self.state.write();
        state.next_subscription += 1;
        let id = SubscriptionId(state.next_subscription);
        state.listeners.push((id, Arc::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut state = self.state.write();
        let before = state.listeners.len();
        state.listeners.retain(|(sub, _)| *sub != id);
        state.listeners.len() != before
    }
}
