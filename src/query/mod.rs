//! Review query engine for reviewhub
//!
//! Pure, synchronous transformations over an in-memory review collection.
//! Nothing here performs I/O or keeps state between calls: every operation
//! borrows its input and returns a freshly built result.
//!
//! # Operations
//!
//! 1. `filter_reviews` - conjunctive filter over platform, rating, date, keyword
//! 2. `sort_reviews` - stable ordering by one of the `SortOption`s
//! 3. `paginate` - 1-based page slicing
//! 4. `compute_stats` - totals, averages and distributions
//! 5. `rating_trend` / `rating_change` - per-period rating analytics
//! 6. `respond_to_review` - the only fallible operation
//!
//! # Invariants
//!
//! - filter, sort, paginate, stats and trend are total: they never fail
//! - Inputs are never mutated
//! - A review with a response is never modified again

mod criteria;
mod errors;
mod filters;
mod pagination;
mod respond;
mod sorter;
mod stats;
mod trend;

pub use criteria::{parse_timestamp, DateRange, FilterSpec, RatingRange, SortOption};
pub use errors::{QueryError, QueryResult};
pub use filters::{filter_reviews, ReviewFilter};
pub use pagination::{paginate, Page};
pub use respond::{
    find_review, respond_to_review, respond_to_review_at, validate_response_text,
    MAX_RESPONSE_LENGTH,
};
pub use sorter::{sort_reviews, ReviewSorter};
pub use stats::{compute_stats, PlatformCount, ReviewStats};
pub use trend::{rating_change, rating_trend, TrendPeriod, TrendPoint};
