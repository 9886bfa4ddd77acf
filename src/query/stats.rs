//! Aggregate statistics over a review collection

use serde::Serialize;

use crate::review::{Platform, Review, MAX_RATING, MIN_RATING};

/// Review count for one platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlatformCount {
    pub platform: Platform,
    pub count: usize,
}

/// Dashboard summary of a review collection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewStats {
    /// Number of reviews
    pub total_reviews: usize,
    /// Mean rating, 0 for an empty collection
    pub average_rating: f64,
    /// Reviews with a response
    pub responded_count: usize,
    /// Percentage of reviews with a response, 0 for an empty collection
    pub response_rate: f64,
    /// Platforms present, in first-seen order
    pub platform_distribution: Vec<PlatformCount>,
    /// Review count per star, index 0 is one star
    pub rating_distribution: [usize; 5],
}

impl ReviewStats {
    /// Stats of an empty collection
    pub fn empty() -> Self {
        Self {
            total_reviews: 0,
            average_rating: 0.0,
            responded_count: 0,
            response_rate: 0.0,
            platform_distribution: Vec::new(),
            rating_distribution: [0; 5],
        }
    }

    /// Returns the count for a platform, 0 if absent
    pub fn platform_count(&self, platform: Platform) -> usize {
        self.platform_distribution
            .iter()
            .find(|entry| entry.platform == platform)
            .map_or(0, |entry| entry.count)
    }

    /// Returns the count for a star rating, 0 if out of range
    pub fn rating_count(&self, rating: u8) -> usize {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return 0;
        }
        self.rating_distribution[(rating - MIN_RATING) as usize]
    }
}

/// Computes summary statistics.
///
/// Pure and idempotent; never divides by zero.
pub fn compute_stats(reviews: &[Review]) -> ReviewStats {
    let total_reviews = reviews.len();
    if total_reviews == 0 {
        return ReviewStats::empty();
    }

    let responded_count = reviews.iter().filter(|r| r.responded()).count();

    let mut platform_distribution: Vec<PlatformCount> = Vec::new();
    let mut rating_distribution = [0usize; 5];

    for review in reviews {
        match platform_distribution
            .iter_mut()
            .find(|entry| entry.platform == review.platform)
        {
            Some(entry) => entry.count += 1,
            None => platform_distribution.push(PlatformCount {
                platform: review.platform,
                count: 1,
            }),
        }

        if review.has_valid_rating() {
            rating_distribution[(review.rating - MIN_RATING) as usize] += 1;
        }
    }

    ReviewStats {
        total_reviews,
        average_rating: mean_rating(reviews.iter()),
        responded_count,
        response_rate: responded_count as f64 / total_reviews as f64 * 100.0,
        platform_distribution,
        rating_distribution,
    }
}

/// Arithmetic mean of ratings, 0 when there are none
pub(crate) fn mean_rating<'a>(reviews: impl Iterator<Item = &'a Review>) -> f64 {
    let (count, sum) = reviews.fold((0usize, 0u64), |(count, sum), review| {
        (count + 1, sum + u64::from(review.rating))
    });

    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}
