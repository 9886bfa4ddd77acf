//! Review sorting
//!
//! Every ordering is stable: reviews comparing equal keep their original
//! relative order. `Platform` additionally breaks ties newest first.

use std::cmp::Ordering;

use crate::review::Review;

use super::criteria::SortOption;

/// Sorts reviews by a `SortOption`
pub struct ReviewSorter;

impl ReviewSorter {
    /// Sorts reviews in place.
    pub fn sort(reviews: &mut [Review], option: SortOption) {
        reviews.sort_by(|a, b| Self::compare(a, b, option));
    }

    /// Compares two reviews under the given ordering.
    pub fn compare(a: &Review, b: &Review, option: SortOption) -> Ordering {
        match option {
            SortOption::DateDesc => b.date.cmp(&a.date),
            SortOption::DateAsc => a.date.cmp(&b.date),
            SortOption::RatingDesc => b.rating.cmp(&a.rating),
            SortOption::RatingAsc => a.rating.cmp(&b.rating),
            SortOption::Platform => a
                .platform
                .as_str()
                .cmp(b.platform.as_str())
                .then_with(|| b.date.cmp(&a.date)),
        }
    }
}

/// Returns a sorted copy of `reviews`.
pub fn sort_reviews(reviews: &[Review], option: SortOption) -> Vec<Review> {
    let mut sorted = reviews.to_vec();
    ReviewSorter::sort(&mut sorted, option);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::criteria::parse_timestamp;
    use crate::review::Platform;

    fn make_review(id: &str, platform: Platform, rating: u8, date: &str) -> Review {
        Review::with_id(
            id,
            "Customer",
            platform,
            rating,
            parse_timestamp(date, false).unwrap(),
            "text",
        )
    }

    fn ids(reviews: &[Review]) -> Vec<&str> {
        reviews.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_sort_by_date() {
        let reviews = vec![
            make_review("b", Platform::Google, 3, "2024-02-01"),
            make_review("c", Platform::Google, 3, "2024-03-01"),
            make_review("a", Platform::Google, 3, "2024-01-01"),
        ];

        assert_eq!(
            ids(&sort_reviews(&reviews, SortOption::DateDesc)),
            vec!["c", "b", "a"]
        );
        assert_eq!(
            ids(&sort_reviews(&reviews, SortOption::DateAsc)),
            vec!["a", "b", "c"]
        );
    }

    #[test]
    fn test_rating_desc_stable() {
        // Same rating, original order preserved
        let reviews = vec![
            make_review("r3", Platform::Yelp, 3, "2024-01-01"),
            make_review("first5", Platform::Yelp, 5, "2024-01-02"),
            make_review("r1", Platform::Yelp, 1, "2024-01-03"),
            make_review("second5", Platform::Yelp, 5, "2024-01-04"),
        ];

        let sorted = sort_reviews(&reviews, SortOption::RatingDesc);
        assert_eq!(ids(&sorted), vec!["first5", "second5", "r3", "r1"]);
    }

    #[test]
    fn test_rating_asc() {
        let reviews = vec![
            make_review("a", Platform::Yelp, 4, "2024-01-01"),
            make_review("b", Platform::Yelp, 2, "2024-01-01"),
            make_review("c", Platform::Yelp, 5, "2024-01-01"),
        ];
        assert_eq!(
            ids(&sort_reviews(&reviews, SortOption::RatingAsc)),
            vec!["b", "a", "c"]
        );
    }

    #[test]
    fn test_platform_sort_lexicographic_then_newest() {
        let reviews = vec![
            make_review("yelp", Platform::Yelp, 3, "2024-01-01"),
            make_review("google-old", Platform::Google, 3, "2024-01-01"),
            make_review("trip", Platform::TripAdvisor, 3, "2024-01-01"),
            make_review("google-new", Platform::Google, 3, "2024-06-01"),
            make_review("fb", Platform::Facebook, 3, "2024-01-01"),
            make_review("other", Platform::Other, 3, "2024-01-01"),
        ];

        let sorted = sort_reviews(&reviews, SortOption::Platform);
        assert_eq!(
            ids(&sorted),
            vec!["fb", "google-new", "google-old", "other", "trip", "yelp"]
        );
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let reviews = vec![
            make_review("a", Platform::Yelp, 1, "2024-01-01"),
            make_review("b", Platform::Yelp, 5, "2024-01-01"),
        ];
        let before = reviews.clone();
        let _ = sort_reviews(&reviews, SortOption::RatingDesc);
        assert_eq!(reviews, before);
    }
}
