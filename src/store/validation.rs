//! Record validation at the storage boundary

use std::collections::HashSet;

use crate::review::{Review, MAX_RATING, MIN_RATING};

use super::errors::{StoreError, StoreResult};

/// Checks every record: non-empty unique id, rating within 1..=5.
pub fn validate_reviews(reviews: &[Review]) -> StoreResult<()> {
    let mut seen = HashSet::with_capacity(reviews.len());

    for review in reviews {
        if review.id.trim().is_empty() {
            return Err(StoreError::invalid_record("<empty>", "id must not be empty"));
        }

        if !review.has_valid_rating() {
            return Err(StoreError::invalid_record(
                &review.id,
                format!(
                    "rating {} outside {}..={}",
                    review.rating, MIN_RATING, MAX_RATING
                ),
            ));
        }

        if !seen.insert(review.id.as_str()) {
            return Err(StoreError::invalid_record(&review.id, "duplicate id"));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::Platform;
    use chrono::{TimeZone, Utc};

    fn make_review(id: &str, rating: u8) -> Review {
        let date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Review::with_id(id, "C", Platform::Google, rating, date, "text")
    }

    #[test]
    fn test_valid_records_pass() {
        assert!(validate_reviews(&[make_review("a", 1), make_review("b", 5)]).is_ok());
        assert!(validate_reviews(&[]).is_ok());
    }

    #[test]
    fn test_rating_out_of_range() {
        let err = validate_reviews(&[make_review("a", 0)]).unwrap_err();
        assert!(matches!(err, StoreError::InvalidRecord { ref id, .. } if id == "a"));

        assert!(validate_reviews(&[make_review("b", 6)]).is_err());
    }

    #[test]
    fn test_duplicate_id() {
        let err = validate_reviews(&[make_review("a", 3), make_review("a", 4)]).unwrap_err();
        assert!(err.to_string().contains("duplicate id"));
    }

    #[test]
    fn test_empty_id() {
        assert!(validate_reviews(&[make_review("  ", 3)]).is_err());
    }
}
