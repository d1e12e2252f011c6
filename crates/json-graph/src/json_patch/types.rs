//! Core types for the path-addressed patch engine.

use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

pub use json_graph_path::Path;

// ── Error ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatchError {
    /// The empty path addresses the whole document, which is not a partial
    /// update.
    #[error("INVALID_PATH")]
    InvalidPath,
    /// A step of the path does not resolve in the current document.
    #[error("PATH_NOT_FOUND: {0}")]
    PathNotFound(String),
    #[error("UNKNOWN_STRATEGY: {0}")]
    UnknownStrategy(String),
}

// ── Strategy ──────────────────────────────────────────────────────────────

/// How an edited projection is written back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveStrategy {
    /// Replace the whole subtree with the edited value.
    #[default]
    Replace,
    /// Keep nested containers the edited object does not mention.
    #[serde(rename = "merge")]
    MergeScalars,
}

impl FromStr for SaveStrategy {
    type Err = PatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "replace" => Ok(SaveStrategy::Replace),
            "merge" => Ok(SaveStrategy::MergeScalars),
            other => Err(PatchError::UnknownStrategy(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_from_str() {
        assert_eq!("replace".parse::<SaveStrategy>(), Ok(SaveStrategy::Replace));
        assert_eq!("merge".parse::<SaveStrategy>(), Ok(SaveStrategy::MergeScalars));
        assert_eq!(
            "upsert".parse::<SaveStrategy>(),
            Err(PatchError::UnknownStrategy("upsert".into()))
        );
    }

    #[test]
    fn strategy_deserializes() {
        let s: SaveStrategy = serde_json::from_str(r#""merge""#).unwrap();
        assert_eq!(s, SaveStrategy::MergeScalars);
        assert_eq!(SaveStrategy::default(), SaveStrategy::Replace);
    }
}
