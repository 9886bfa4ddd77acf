//! Review persistence for reviewhub
//!
//! The query engine never touches storage. Callers inject a `ReviewStore`
//! and hand the loaded collection to the engine, then save the collection
//! the engine returns.
//!
//! # Implementations
//!
//! - `MemoryReviewStore`: plain in-memory vector, for tests and embedding
//! - `FileReviewStore`: `reviews.json` plus a checksummed `manifest.json`
//!
//! # Invariants
//!
//! - Corruption is never ignored: a checksum, count or pairing mismatch
//!   fails the load
//! - Every loaded record has a valid rating and a unique id

mod checksum;
mod errors;
mod file;
mod manifest;
mod memory;
mod seed;
mod validation;

pub use checksum::{compute_checksum, format_checksum, parse_checksum};
pub use errors::{StoreError, StoreResult};
pub use file::{FileReviewStore, DATA_FILE, MANIFEST_FILE};
pub use manifest::{StoreManifest, FORMAT_VERSION};
pub use memory::MemoryReviewStore;
pub use seed::seed_reviews;
pub use validation::validate_reviews;

use crate::review::Review;

/// Read/write collaborator holding the review collection
pub trait ReviewStore {
    /// Loads the full collection
    fn load(&self) -> StoreResult<Vec<Review>>;

    /// Replaces the stored collection
    fn save(&mut self, reviews: &[Review]) -> StoreResult<()>;
}
