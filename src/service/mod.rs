//! Review service
//!
//! Owns a `ReviewStore` and runs each call as one unit:
//! load, apply the pure query engine, save if the collection changed.
//! The engine itself stays stateless.

mod errors;
mod service;

pub use errors::{ServiceError, ServiceResult};
pub use service::{ReviewQuery, ReviewService, SyncSummary, TrendReport, DEFAULT_PAGE_SIZE};
