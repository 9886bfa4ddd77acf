//! reviewhub - filtering, sorting and analytics for customer reviews
//!
//! Reviews collected from Google, Yelp, Facebook, TripAdvisor and other
//! platforms are held as one in-memory collection. The `query` engine
//! turns that collection into filtered, sorted pages, statistics and
//! rating trends; `service` wires the engine to a `store`.

pub mod cli;
pub mod observability;
pub mod query;
pub mod review;
pub mod service;
pub mod store;
