//! `helpkit-case` - convert identifier casing.
//!
//! Usage:
//!   helpkit-case <to-hyphen|to-camel|first-upper> <text>

use helpkit::cli::convert_case;

fn main() {
    helpkit::logging::init();

    let args: Vec<String> = std::env::args().collect();
    let (mode, text) = match (args.get(1), args.get(2)) {
        (Some(mode), Some(text)) => (mode, text),
        _ => {
            eprintln!("Usage: helpkit-case <to-hyphen|to-camel|first-upper> <text>");
            std::process::exit(1);
        }
    };

    match convert_case(mode, text) {
        Ok(out) => println!("{out}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
