//! `helpkit-date` - format a date with a token pattern.
//!
//! Usage:
//!   helpkit-date [date] [pattern]
//!
//! Without a date the current local time is used; the pattern defaults to
//! `yyyy-MM-dd`.

use helpkit::cli::format_date_arg;

fn main() {
    helpkit::logging::init();

    let args: Vec<String> = std::env::args().collect();
    match format_date_arg(args.get(1).map(String::as_str), args.get(2).map(String::as_str)) {
        Ok(out) => println!("{out}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
