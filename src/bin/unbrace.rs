//! Command-line driver for unbrace
//!
//! Reads brace-delimited source text from standard input and writes the
//! converted, Python-style text to standard output. One-shot filter: the
//! whole input is read before the first line is processed. No flags, no
//! configuration.

use clap::Command;
use std::io::Read;

fn main() {
    Command::new("unbrace")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Best-effort converter from brace-delimited source to Python-style text")
        .get_matches();

    let mut source = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut source) {
        eprintln!("Error reading input: {}", e);
        std::process::exit(1);
    }

    print!("{}", unbrace::convert_source(&source));
}
