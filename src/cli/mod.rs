//! CLI module for reviewhub
//!
//! Provides command-line interface for:
//! - init: Create the data directory and write the demo reviews
//! - list / stats / show / trend: Read-only queries
//! - respond: Attach a response to a review
//! - sync: Merge reviews from a JSON file
//!
//! Responses go to stdout as one JSON object; logs go to stderr.

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command, FilterArgs};
pub use commands::{init, list, respond, run, run_command, show, stats, sync, trend};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_reviews, write_error, write_response};
