//! Review service implementation

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::observability::{log_event_with_fields, Event};
use crate::query::{
    compute_stats, filter_reviews, find_review, paginate, rating_change, rating_trend,
    respond_to_review_at, sort_reviews, FilterSpec, Page, QueryError, ReviewStats, SortOption,
    TrendPeriod, TrendPoint,
};
use crate::review::Review;
use crate::store::{validate_reviews, ReviewStore};

use super::errors::ServiceResult;

/// Reviews per page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A list request: filter, ordering and 1-based page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewQuery {
    pub filter: FilterSpec,
    pub sort: SortOption,
    pub page: usize,
}

impl ReviewQuery {
    pub fn new(filter: FilterSpec, sort: SortOption, page: usize) -> Self {
        Self { filter, sort, page }
    }
}

/// Trend buckets plus the change over the last period
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendReport {
    pub period: TrendPeriod,
    pub points: Vec<TrendPoint>,
    pub rating_change: f64,
}

/// Outcome of merging incoming reviews
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SyncSummary {
    /// New reviews appended
    pub added: usize,
    /// Incoming reviews whose id was already stored
    pub skipped: usize,
}

/// Single-writer front end over a review store
pub struct ReviewService<S: ReviewStore> {
    store: S,
    page_size: usize,
}

impl<S: ReviewStore> ReviewService<S> {
    /// Creates a service with the default page size
    pub fn new(store: S) -> Self {
        Self::with_page_size(store, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(store: S, page_size: usize) -> Self {
        Self { store, page_size }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn load(&self) -> ServiceResult<Vec<Review>> {
        match self.store.load() {
            Ok(reviews) => {
                let count = reviews.len().to_string();
                log_event_with_fields(Event::StoreLoaded, &[("count", count.as_str())]);
                Ok(reviews)
            }
            Err(e) => {
                if e.is_corruption() {
                    let message = e.to_string();
                    log_event_with_fields(
                        Event::StoreCorruption,
                        &[("code", e.code()), ("message", message.as_str())],
                    );
                }
                Err(e.into())
            }
        }
    }

    fn save(&mut self, reviews: &[Review]) -> ServiceResult<()> {
        self.store.save(reviews)?;
        let count = reviews.len().to_string();
        log_event_with_fields(Event::StoreSaved, &[("count", count.as_str())]);
        Ok(())
    }

    /// Filters, sorts and returns one page.
    pub fn list(&self, query: &ReviewQuery) -> ServiceResult<Page> {
        let reviews = self.load()?;
        let matched = filter_reviews(&reviews, &query.filter);
        let sorted = sort_reviews(&matched, query.sort);
        let page = paginate(&sorted, query.page, self.page_size);

        let matched = page.total_items.to_string();
        let page_number = page.page.to_string();
        log_event_with_fields(
            Event::QueryExecuted,
            &[
                ("matched", matched.as_str()),
                ("page", page_number.as_str()),
                ("sort", query.sort.as_str()),
            ],
        );

        Ok(page)
    }

    /// Returns one review by id.
    pub fn get(&self, id: &str) -> ServiceResult<Review> {
        let reviews = self.load()?;
        match find_review(&reviews, id) {
            Ok(review) => Ok(review.clone()),
            Err(e) => {
                log_event_with_fields(Event::ReviewNotFound, &[("review_id", id)]);
                Err(e.into())
            }
        }
    }

    /// Stats over the reviews matching `filter`.
    pub fn stats(&self, filter: &FilterSpec) -> ServiceResult<ReviewStats> {
        let reviews = self.load()?;
        let stats = compute_stats(&filter_reviews(&reviews, filter));

        let total = stats.total_reviews.to_string();
        log_event_with_fields(Event::StatsComputed, &[("total_reviews", total.as_str())]);

        Ok(stats)
    }

    /// Rating trend over every stored review.
    pub fn trend(&self, period: TrendPeriod, now: DateTime<Utc>) -> ServiceResult<TrendReport> {
        let reviews = self.load()?;
        let report = TrendReport {
            period,
            points: rating_trend(&reviews, period),
            rating_change: rating_change(&reviews, period, now),
        };

        let points = report.points.len().to_string();
        log_event_with_fields(
            Event::TrendComputed,
            &[("period", period.as_str()), ("points", points.as_str())],
        );

        Ok(report)
    }

    /// Responds to a review dated now.
    pub fn respond(&mut self, id: &str, response_text: &str) -> ServiceResult<Review> {
        self.respond_at(id, response_text, Utc::now())
    }

    /// Responds to a review and persists the result.
    ///
    /// Nothing is saved when the engine refuses the response.
    pub fn respond_at(
        &mut self,
        id: &str,
        response_text: &str,
        at: DateTime<Utc>,
    ) -> ServiceResult<Review> {
        let reviews = self.load()?;

        let updated = match respond_to_review_at(&reviews, id, response_text, at) {
            Ok(updated) => updated,
            Err(e) => {
                let event = match e {
                    QueryError::NotFound(_) => Event::ReviewNotFound,
                    _ => Event::ResponseRejected,
                };
                log_event_with_fields(event, &[("code", e.code()), ("review_id", id)]);
                return Err(e.into());
            }
        };

        self.save(&updated)?;
        log_event_with_fields(Event::ReviewResponded, &[("review_id", id)]);

        let review = find_review(&updated, id)?.clone();
        Ok(review)
    }

    /// Appends incoming reviews whose id is not stored yet.
    ///
    /// Stored reviews, responses included, are never replaced.
    pub fn sync(&mut self, incoming: Vec<Review>) -> ServiceResult<SyncSummary> {
        validate_reviews(&incoming)?;

        let mut reviews = self.load()?;
        let known: HashSet<String> = reviews.iter().map(|r| r.id.clone()).collect();

        let (skipped, fresh): (Vec<Review>, Vec<Review>) = incoming
            .into_iter()
            .partition(|r| known.contains(&r.id));

        let summary = SyncSummary {
            added: fresh.len(),
            skipped: skipped.len(),
        };

        if !fresh.is_empty() {
            reviews.extend(fresh);
            self.save(&reviews)?;
        }

        let added = summary.added.to_string();
        let skipped = summary.skipped.to_string();
        log_event_with_fields(
            Event::ReviewsSynced,
            &[("added", added.as_str()), ("skipped", skipped.as_str())],
        );

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::parse_timestamp;
    use crate::review::Platform;
    use crate::store::{seed_reviews, MemoryReviewStore};

    fn service() -> ReviewService<MemoryReviewStore> {
        ReviewService::with_page_size(MemoryReviewStore::with_reviews(seed_reviews()), 5)
    }

    fn at() -> DateTime<Utc> {
        parse_timestamp("2024-06-01T12:00:00Z", false).unwrap()
    }

    #[test]
    fn test_list_default_is_newest_first() {
        let page = service().list(&ReviewQuery::default()).unwrap();
        assert_eq!(page.total_items, 12);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.items[0].id, "rev-001");
        assert!(page.items.windows(2).all(|w| w[0].date >= w[1].date));
    }

    #[test]
    fn test_list_with_filter_and_sort() {
        let query = ReviewQuery::new(
            FilterSpec::new().with_platforms([Platform::Yelp]),
            SortOption::RatingAsc,
            1,
        );
        let page = service().list(&query).unwrap();
        let ratings: Vec<u8> = page.items.iter().map(|r| r.rating).collect();
        assert_eq!(ratings, vec![1, 2, 4]);
    }

    #[test]
    fn test_get_missing() {
        let err = service().get("nope").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_stats_respect_filter() {
        let stats = service()
            .stats(&FilterSpec::new().with_platforms([Platform::Google]))
            .unwrap();
        assert_eq!(stats.total_reviews, 4);
        assert_eq!(stats.platform_distribution.len(), 1);
    }

    #[test]
    fn test_respond_persists() {
        let mut svc = service();
        let review = svc.respond_at("rev-002", "Thanks for your patience!", at()).unwrap();
        assert!(review.responded());
        assert_eq!(svc.store().save_count(), 1);

        let stored = svc.get("rev-002").unwrap();
        assert_eq!(stored.response_date(), Some(at()));
    }

    #[test]
    fn test_rejected_response_saves_nothing() {
        let mut svc = service();

        // rev-001 already has a response in the seed
        let err = svc.respond_at("rev-001", "Again", at()).unwrap_err();
        assert_eq!(err.code(), "REVIEW_ALREADY_RESPONDED");

        let err = svc.respond_at("missing", "Hello", at()).unwrap_err();
        assert!(err.is_not_found());

        let err = svc.respond_at("rev-002", "  ", at()).unwrap_err();
        assert_eq!(err.code(), "REVIEW_INVALID_RESPONSE");

        assert_eq!(svc.store().save_count(), 0);
    }

    #[test]
    fn test_sync_appends_new_only() {
        let mut svc = service();
        let date = at();
        let mut existing = Review::with_id("rev-003", "X", Platform::Other, 5, date, "overwrite?");
        existing.customer_name = "Impostor".into();

        let incoming = vec![
            Review::with_id("new-1", "Nina", Platform::Google, 5, date, "Lovely"),
            existing,
        ];

        let summary = svc.sync(incoming).unwrap();
        assert_eq!(summary, SyncSummary { added: 1, skipped: 1 });
        assert_eq!(svc.get("rev-003").unwrap().customer_name, "Emily Rodriguez");
        assert_eq!(svc.get("new-1").unwrap().rating, 5);
    }

    #[test]
    fn test_sync_nothing_new_does_not_save() {
        let mut svc = service();
        let summary = svc.sync(seed_reviews()).unwrap();
        assert_eq!(summary.added, 0);
        assert_eq!(summary.skipped, 12);
        assert_eq!(svc.store().save_count(), 0);
    }

    #[test]
    fn test_sync_counts_with_duplicate_stored_ids() {
        let review = Review::with_id("dup", "Dana", Platform::Yelp, 4, at(), "Twice stored");
        let store = MemoryReviewStore::with_reviews(vec![review.clone(), review]);
        let mut svc = ReviewService::new(store);

        let summary = svc.sync(Vec::new()).unwrap();
        assert_eq!(summary, SyncSummary { added: 0, skipped: 0 });

        let incoming = vec![
            Review::with_id("dup", "Dana", Platform::Yelp, 4, at(), "Again"),
            Review::with_id("fresh", "Finn", Platform::Google, 5, at(), "New"),
        ];
        let summary = svc.sync(incoming).unwrap();
        assert_eq!(summary, SyncSummary { added: 1, skipped: 1 });
        assert_eq!(svc.store().reviews().len(), 3);
    }

    #[test]
    fn test_sync_rejects_invalid_incoming() {
        let mut svc = service();
        let bad = vec![Review::with_id("bad", "B", Platform::Yelp, 0, at(), "zero")];
        let err = svc.sync(bad).unwrap_err();
        assert_eq!(err.code(), "STORE_INVALID_RECORD");
    }

    #[test]
    fn test_trend_report() {
        let report = service().trend(TrendPeriod::Month, at()).unwrap();
        assert_eq!(report.period, TrendPeriod::Month);
        // Seed spans February to May 2024
        assert_eq!(report.points.len(), 4);
        let counted: usize = report.points.iter().map(|p| p.review_count).sum();
        assert_eq!(counted, 12);
    }
}
