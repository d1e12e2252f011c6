//! Document paths for json-graph.
//!
//! A path is an ordered list of steps (object keys and array indices) that
//! locates one value inside a JSON document. This crate formats paths as
//! bracket strings for display, parses them back, and resolves them against
//! a document.
//!
//! # Example
//!
//! ```
//! use json_graph_path::{get, parse_path_string, path_to_string};
//!
//! let path = parse_path_string(r#"$["foo"][1]"#).unwrap();
//! assert_eq!(path_to_string(Some(&path)), r#"$["foo"][1]"#);
//!
//! let doc = serde_json::json!({"foo": [41, 42]});
//! assert_eq!(get(&doc, &path), Some(&serde_json::json!(42)));
//! ```

use thiserror::Error;

pub mod types;
pub use types::{Path, PathStep};

mod display;
pub use display::{parse_path_string, path_to_string};

mod get;
pub use get::{get, get_mut};

pub mod validate;
pub use validate::validate_path;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("INVALID_INDEX")]
    InvalidIndex,
    #[error("path must start with '$'")]
    ExpectedRoot,
    #[error("unexpected character: {0}")]
    UnexpectedChar(char),
    #[error("unexpected end of path")]
    UnexpectedEnd,
    #[error("invalid key literal")]
    InvalidKey,
    #[error("path too long")]
    PathTooLong,
}

/// Check if a string is a canonical non-negative array index.
///
/// # Example
///
/// ```
/// use json_graph_path::is_valid_index;
///
/// assert!(is_valid_index("0"));
/// assert!(is_valid_index("123"));
/// assert!(!is_valid_index("01"));
/// assert!(!is_valid_index("-1"));
/// ```
pub fn is_valid_index(index: &str) -> bool {
    match index.as_bytes() {
        [] => false,
        [b'0'] => true,
        [b'0', ..] => false,
        digits => digits.iter().all(u8::is_ascii_digit),
    }
}
