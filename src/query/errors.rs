//! Query engine error types
//!
//! Error codes:
//! - REVIEW_NOT_FOUND
//! - REVIEW_ALREADY_RESPONDED
//! - REVIEW_INVALID_RESPONSE

use thiserror::Error;

/// Failure of a review lookup or response.
///
/// Filtering, sorting and statistics never produce these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// No review with the given id exists in the collection
    #[error("Review not found: {0}")]
    NotFound(String),

    /// The review already carries a response
    #[error("Review already responded: {0}")]
    AlreadyResponded(String),

    /// Response text is empty after trimming
    #[error("Response text must not be empty")]
    EmptyResponse,

    /// Response text exceeds the character limit
    #[error("Response text is {len} characters (max: {max})")]
    ResponseTooLong { len: usize, max: usize },
}

impl QueryError {
    /// Returns the error code string
    pub fn code(&self) -> &'static str {
        match self {
            QueryError::NotFound(_) => "REVIEW_NOT_FOUND",
            QueryError::AlreadyResponded(_) => "REVIEW_ALREADY_RESPONDED",
            QueryError::EmptyResponse | QueryError::ResponseTooLong { .. } => {
                "REVIEW_INVALID_RESPONSE"
            }
        }
    }

    /// Returns true for conflicts with the review's current state
    pub fn is_conflict(&self) -> bool {
        matches!(self, QueryError::AlreadyResponded(_))
    }
}

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;
