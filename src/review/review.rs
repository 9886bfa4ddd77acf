//! Review entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::platform::Platform;

/// Lowest valid star rating
pub const MIN_RATING: u8 = 1;
/// Highest valid star rating
pub const MAX_RATING: u8 = 5;

/// A business reply attached to a review.
///
/// Text and timestamp are always set together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewResponse {
    /// Reply text
    pub text: String,
    /// When the reply was submitted
    pub date: DateTime<Utc>,
}

/// A single customer review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Opaque unique identifier
    pub id: String,
    /// Customer display name
    pub customer_name: String,
    /// Optional avatar URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_avatar: Option<String>,
    /// Source platform
    pub platform: Platform,
    /// Star rating, 1..=5
    pub rating: u8,
    /// Creation time of the review
    pub date: DateTime<Utc>,
    /// Review text
    pub content: String,
    /// Business reply, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<ReviewResponse>,
}

impl Review {
    /// Creates an unresponded review with a fresh UUID.
    pub fn new(
        customer_name: impl Into<String>,
        platform: Platform,
        rating: u8,
        date: DateTime<Utc>,
        content: impl Into<String>,
    ) -> Self {
        Self::with_id(
            Uuid::new_v4().to_string(),
            customer_name,
            platform,
            rating,
            date,
            content,
        )
    }

    /// Creates an unresponded review with a caller-supplied id.
    pub fn with_id(
        id: impl Into<String>,
        customer_name: impl Into<String>,
        platform: Platform,
        rating: u8,
        date: DateTime<Utc>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            customer_name: customer_name.into(),
            customer_avatar: None,
            platform,
            rating,
            date,
            content: content.into(),
            response: None,
        }
    }

    /// Returns true once a response has been attached
    pub fn responded(&self) -> bool {
        self.response.is_some()
    }

    /// Returns the response text, if any
    pub fn response_text(&self) -> Option<&str> {
        self.response.as_ref().map(|r| r.text.as_str())
    }

    /// Returns the response timestamp, if any
    pub fn response_date(&self) -> Option<DateTime<Utc>> {
        self.response.as_ref().map(|r| r.date)
    }

    /// Returns true if the rating is within 1..=5
    pub fn has_valid_rating(&self) -> bool {
        (MIN_RATING..=MAX_RATING).contains(&self.rating)
    }
}
