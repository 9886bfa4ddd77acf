//! Review filtering
//!
//! All filter dimensions must match (AND semantics). No dimension can
//! fail: malformed bounds just yield an empty result.

use crate::review::Review;

use super::criteria::FilterSpec;

/// Evaluates a `FilterSpec` against reviews
pub struct ReviewFilter;

impl ReviewFilter {
    /// Checks if a review matches every dimension of the filter
    pub fn matches(review: &Review, spec: &FilterSpec) -> bool {
        Self::platform_match(review, spec)
            && spec.rating_range.contains(review.rating)
            && Self::date_match(review, spec)
            && Self::keyword_match(review, &spec.keyword)
    }

    /// Empty platform set means no restriction
    fn platform_match(review: &Review, spec: &FilterSpec) -> bool {
        spec.platforms.is_empty() || spec.platforms.contains(&review.platform)
    }

    fn date_match(review: &Review, spec: &FilterSpec) -> bool {
        match &spec.date_range {
            Some(range) => range.contains(&review.date),
            None => true,
        }
    }

    /// Case-insensitive substring match against content
    fn keyword_match(review: &Review, keyword: &str) -> bool {
        if keyword.is_empty() {
            return true;
        }
        review
            .content
            .to_lowercase()
            .contains(&keyword.to_lowercase())
    }
}

/// Returns the reviews matching `spec`, in input order.
pub fn filter_reviews(reviews: &[Review], spec: &FilterSpec) -> Vec<Review> {
    reviews
        .iter()
        .filter(|review| ReviewFilter::matches(review, spec))
        .cloned()
        .collect()
}
