//! Type definitions for document paths.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A step in a document path.
///
/// Either an object key or an array index. Serializes untagged, so a path
/// reads as `["a", 0, "b"]` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathStep {
    Index(usize),
    Key(String),
}

impl PathStep {
    /// The step as an object key. Indices use their decimal form.
    pub fn as_key(&self) -> std::borrow::Cow<'_, str> {
        match self {
            PathStep::Key(k) => std::borrow::Cow::Borrowed(k.as_str()),
            PathStep::Index(i) => std::borrow::Cow::Owned(i.to_string()),
        }
    }

    /// The step as an array index. Keys resolve only when they are a
    /// canonical decimal index (`"0"`, `"12"`, never `"01"`).
    pub fn as_index(&self) -> Option<usize> {
        match self {
            PathStep::Index(i) => Some(*i),
            PathStep::Key(k) if crate::is_valid_index(k) => k.parse().ok(),
            PathStep::Key(_) => None,
        }
    }
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathStep::Index(i) => write!(f, "{i}"),
            PathStep::Key(k) => f.write_str(k),
        }
    }
}

impl From<usize> for PathStep {
    fn from(i: usize) -> Self {
        PathStep::Index(i)
    }
}

impl From<&str> for PathStep {
    fn from(k: &str) -> Self {
        PathStep::Key(k.to_string())
    }
}

impl From<String> for PathStep {
    fn from(k: String) -> Self {
        PathStep::Key(k)
    }
}

/// A document path. Empty means the root.
pub type Path = Vec<PathStep>;
