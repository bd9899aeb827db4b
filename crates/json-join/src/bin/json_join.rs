//! `json-join` — relational-style joins over JSON streams.
//!
//! Usage:
//!   json-join <inner|outer|left-outer|right-outer|symm-diff|subtract>
//!             -l <left> -r <right> (-u <key> | --left-key <key> --right-key <key>)
//!
//! Streams are files of whitespace-separated JSON documents; `-` reads a
//! side from stdin. Errors print to stderr and exit non-zero; zero joined
//! pairs is still success.

use clap::Parser;
use json_join::cli::{run, Cli};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
