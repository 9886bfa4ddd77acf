//! Review model for reviewhub
//!
//! A review is a single customer rating-plus-text record attributed to a
//! platform. Reviews are created by ingestion (seed list or sync import)
//! and mutated only by the one-way respond transition.
//!
//! # Invariants
//!
//! - `id` never changes after ingestion
//! - A response carries both its text and its timestamp
//! - Once a review has a response it stays responded

mod errors;
mod platform;
mod review;

pub use errors::ParseError;
pub use platform::Platform;
pub use review::{Review, ReviewResponse, MAX_RATING, MIN_RATING};
