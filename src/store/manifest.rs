//! Store manifest
//!
//! `manifest.json` describes the current `reviews.json`:
//!
//! ```json
//! {
//!   "format_version": 1,
//!   "saved_at": "2024-06-01T09:30:00Z",
//!   "review_count": 12,
//!   "checksum": "crc32:deadbeef"
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::{StoreError, StoreResult};

/// Only manifest format understood by this build
pub const FORMAT_VERSION: u8 = 1;

/// Descriptor of the stored review file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreManifest {
    pub format_version: u8,
    pub saved_at: DateTime<Utc>,
    /// Number of reviews in the data file
    pub review_count: usize,
    /// CRC32 of the exact data file bytes, `crc32:xxxxxxxx`
    pub checksum: String,
}

impl StoreManifest {
    /// Creates a manifest at the current format version
    pub fn new(saved_at: DateTime<Utc>, review_count: usize, checksum: impl Into<String>) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            saved_at,
            review_count,
            checksum: checksum.into(),
        }
    }

    pub fn to_json(&self) -> StoreResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            StoreError::Serialization(format!("Failed to serialize manifest: {}", e))
        })
    }

    /// Parses a manifest; an unreadable manifest counts as corruption.
    pub fn from_json(json: &str) -> StoreResult<Self> {
        let manifest: StoreManifest = serde_json::from_str(json)
            .map_err(|e| StoreError::Corrupted(format!("Failed to parse manifest: {}", e)))?;

        if manifest.format_version != FORMAT_VERSION {
            return Err(StoreError::Corrupted(format!(
                "Unsupported manifest format_version {} (expected {})",
                manifest.format_version, FORMAT_VERSION
            )));
        }

        Ok(manifest)
    }
}
