//! In-memory review store

use crate::review::Review;

use super::errors::StoreResult;
use super::ReviewStore;

/// Review store backed by a `Vec`.
///
/// Counts saves so callers can check that failed operations wrote nothing.
#[derive(Debug, Clone, Default)]
pub struct MemoryReviewStore {
    reviews: Vec<Review>,
    save_count: usize,
}

impl MemoryReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with `reviews`
    pub fn with_reviews(reviews: Vec<Review>) -> Self {
        Self {
            reviews,
            save_count: 0,
        }
    }

    /// Number of successful `save` calls
    pub fn save_count(&self) -> usize {
        self.save_count
    }

    /// Current contents without cloning
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }
}

impl ReviewStore for MemoryReviewStore {
    fn load(&self) -> StoreResult<Vec<Review>> {
        Ok(self.reviews.clone())
    }

    fn save(&mut self, reviews: &[Review]) -> StoreResult<()> {
        self.reviews = reviews.to_vec();
        self.save_count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::Platform;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_save_replaces_contents() {
        let date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut store = MemoryReviewStore::new();
        assert!(store.load().unwrap().is_empty());

        let reviews = vec![Review::with_id("a", "C", Platform::Yelp, 4, date, "ok")];
        store.save(&reviews).unwrap();

        assert_eq!(store.load().unwrap(), reviews);
        assert_eq!(store.save_count(), 1);

        store.save(&[]).unwrap();
        assert!(store.reviews().is_empty());
        assert_eq!(store.save_count(), 2);
    }
}
