//! Path-addressed patch engine.
//!
//! Given a full document, a path and a replacement value, produce a new
//! document where only the subtree at that path differs.
//!
//! # Strategies
//!
//! - `replace`: the subtree becomes the replacement, verbatim.
//! - `merge`: like `replace`, except nested containers of the old object that
//!   the replacement does not mention are kept.

pub mod types;
pub mod apply;

pub use types::{PatchError, SaveStrategy};
pub use apply::{apply_patch, apply_with_strategy, merge_patch};
pub use json_graph_path::get as get_value_at;
