//! Review lookup and the respond transition
//!
//! Respond is the only write the engine knows about. It is a one-way
//! `Unresponded -> Responded` transition: a second response is rejected
//! rather than overwriting the first.

use chrono::{DateTime, Utc};

use crate::review::{Review, ReviewResponse};

use super::errors::{QueryError, QueryResult};

/// Maximum response length in characters
pub const MAX_RESPONSE_LENGTH: usize = 500;

/// Looks up a review by id.
pub fn find_review<'a>(reviews: &'a [Review], id: &str) -> QueryResult<&'a Review> {
    reviews
        .iter()
        .find(|review| review.id == id)
        .ok_or_else(|| QueryError::NotFound(id.to_string()))
}

/// Checks response text: non-blank and within the character limit.
pub fn validate_response_text(text: &str) -> QueryResult<()> {
    if text.trim().is_empty() {
        return Err(QueryError::EmptyResponse);
    }

    let len = text.chars().count();
    if len > MAX_RESPONSE_LENGTH {
        return Err(QueryError::ResponseTooLong {
            len,
            max: MAX_RESPONSE_LENGTH,
        });
    }

    Ok(())
}

/// Attaches a response dated now.
///
/// See `respond_to_review_at`.
pub fn respond_to_review(
    reviews: &[Review],
    id: &str,
    response_text: &str,
) -> QueryResult<Vec<Review>> {
    respond_to_review_at(reviews, id, response_text, Utc::now())
}

/// Attaches a response with an explicit timestamp.
///
/// Returns a new collection in which only the target review differs.
/// On error the input is untouched and nothing is returned.
///
/// # Errors
///
/// - `NotFound` if no review has `id`
/// - `AlreadyResponded` if the review already has a response
/// - `EmptyResponse` / `ResponseTooLong` for invalid text
pub fn respond_to_review_at(
    reviews: &[Review],
    id: &str,
    response_text: &str,
    at: DateTime<Utc>,
) -> QueryResult<Vec<Review>> {
    let index = reviews
        .iter()
        .position(|review| review.id == id)
        .ok_or_else(|| QueryError::NotFound(id.to_string()))?;

    if reviews[index].responded() {
        return Err(QueryError::AlreadyResponded(id.to_string()));
    }

    validate_response_text(response_text)?;

    let mut updated = reviews.to_vec();
    updated[index].response = Some(ReviewResponse {
        text: response_text.to_string(),
        date: at,
    });

    Ok(updated)
}
