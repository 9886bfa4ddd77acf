//! reviewhub CLI entry point
//!
//! Parses arguments and dispatches through `cli::run`. The JSON error
//! object is already on stdout when an error comes back here; this only
//! repeats it on stderr and exits non-zero.

use reviewhub::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
