//! `helpkit-money` - group the digits of an amount.
//!
//! Usage:
//!   helpkit-money <amount>
//!
//! With no argument the amount is read from stdin.

use helpkit::cli::group_money;
use std::io::{self, Read};

fn main() {
    helpkit::logging::init();

    let amount = match std::env::args().nth(1) {
        Some(a) => a,
        None => {
            let mut buf = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buf) {
                eprintln!("{e}");
                std::process::exit(1);
            }
            buf
        }
    };

    println!("{}", group_money(&amount));
}
