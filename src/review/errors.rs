//! Boundary parsing errors
//!
//! Raised when user-supplied strings (CLI flags, imported files) are turned
//! into typed values. The query engine itself never sees unparsed input.

use thiserror::Error;

/// Failure to parse a tag or timestamp at the input boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Unknown platform tag
    #[error("Unknown platform: '{0}'. Expected one of google, yelp, facebook, tripadvisor, other")]
    UnknownPlatform(String),

    /// Unknown sort option
    #[error("Unknown sort option: '{0}'. Expected one of date-desc, date-asc, rating-desc, rating-asc, platform")]
    UnknownSortOption(String),

    /// Unknown trend period
    #[error("Unknown period: '{0}'. Expected one of week, month, quarter, year")]
    UnknownPeriod(String),

    /// Date is neither RFC 3339 nor YYYY-MM-DD
    #[error("Invalid date: '{0}'. Expected RFC 3339 or YYYY-MM-DD")]
    InvalidDate(String),
}

impl ParseError {
    /// Returns the error code string
    pub fn code(&self) -> &'static str {
        "REVIEWHUB_PARSE_ERROR"
    }
}
