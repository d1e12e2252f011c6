//! `json-graph-nodes`: list the nodes of a document.
//!
//! Usage:
//!   json-graph-nodes < document.json
//!
//! Prints every node as `#<id> <path>` followed by its editable projection.

use std::io::{self, Read, Write};

use json_graph::json_cli::{init_tracing, list_nodes};

fn main() {
    init_tracing();

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match list_nodes(buf.trim()) {
        Ok(result) => {
            if let Err(e) = io::stdout().write_all(result.as_bytes()) {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
