//! `json-graph-edit`: edit one node of a document.
//!
//! Usage:
//!   json-graph-edit '<path>' '<edited-json>' [--merge | --strategy <replace|merge>]
//!
//! The document is read from stdin. `<path>` is a bracket path as printed by
//! `json-graph-nodes`, e.g. `$["customer"][0]`. The updated document is
//! written to stdout.

use std::io::{self, Read, Write};

use json_graph::detail_view::DetailViewOptions;
use json_graph::json_cli::{edit_node, init_tracing, parse_edit_args};

fn main() {
    init_tracing();

    let args = match parse_edit_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    let options = DetailViewOptions { strategy: args.strategy };
    match edit_node(buf.trim(), &args.path, &args.edited, options) {
        Ok(result) => {
            if let Err(e) = writeln!(io::stdout(), "{result}") {
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
