//! `helpkit-get` - look up a dotted/bracket path in a JSON document.
//!
//! Usage:
//!   helpkit-get '<path>'
//!
//! The document is read from stdin. The path is the first argument.

use helpkit::cli::lookup_path;
use std::io::{self, Read};

fn main() {
    helpkit::logging::init();

    let path = match std::env::args().nth(1) {
        Some(p) => p,
        None => {
            eprintln!("First argument must be a path such as a.b[1].");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match lookup_path(buf.trim(), &path) {
        Ok(result) => println!("{result}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
