//! JSON I/O handling for CLI
//!
//! - Output: single JSON object per command via stdout
//! - Input: review files for `sync`, a JSON array of reviews
//! - UTF-8 only

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde_json::Value;

use crate::review::Review;

use super::errors::{CliError, CliResult};

/// Read a JSON array of reviews from a file
pub fn read_reviews(path: &Path) -> CliResult<Vec<Review>> {
    let content = fs::read_to_string(path).map_err(|e| {
        CliError::io_error(format!("Failed to read {}: {}", path.display(), e))
    })?;

    if content.trim().is_empty() {
        return Err(CliError::io_error(format!("{} is empty", path.display())));
    }

    let reviews: Vec<Review> = serde_json::from_str(&content)?;
    Ok(reviews)
}

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "ok",
        "data": data
    });

    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, &response)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}

/// Write an error response to stdout
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    });

    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, &response)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}
