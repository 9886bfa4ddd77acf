//! File-backed review store
//!
//! Layout of the data directory:
//!
//! ```text
//! <data_dir>/
//!   reviews.json    pretty-printed JSON array of reviews
//!   manifest.json   format version, count and CRC32 of reviews.json
//! ```
//!
//! Each file is written to a temporary sibling, fsynced and renamed into
//! place, data first. A crash between the two renames leaves a manifest
//! whose checksum no longer matches, which the next load reports.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::review::Review;

use super::checksum::{compute_checksum, format_checksum, parse_checksum};
use super::errors::{StoreError, StoreResult};
use super::manifest::StoreManifest;
use super::validation::validate_reviews;
use super::ReviewStore;

/// Review data file name
pub const DATA_FILE: &str = "reviews.json";
/// Manifest file name
pub const MANIFEST_FILE: &str = "manifest.json";

/// Review store rooted at a data directory
#[derive(Debug, Clone)]
pub struct FileReviewStore {
    data_dir: PathBuf,
}

impl FileReviewStore {
    /// Opens a store, creating the directory if needed.
    pub fn open(data_dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir).map_err(|e| StoreError::io(&data_dir, e))?;
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn data_path(&self) -> PathBuf {
        self.data_dir.join(DATA_FILE)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.data_dir.join(MANIFEST_FILE)
    }

    /// Returns true once a review file has been written
    pub fn is_initialized(&self) -> bool {
        self.data_path().exists()
    }

    /// Writes the initial collection; fails if already initialized.
    pub fn initialize(&mut self, reviews: &[Review]) -> StoreResult<()> {
        if self.is_initialized() {
            return Err(StoreError::AlreadyInitialized(self.data_dir.clone()));
        }
        self.save(reviews)
    }

    /// Reads and verifies the manifest.
    pub fn read_manifest(&self) -> StoreResult<StoreManifest> {
        let path = self.manifest_path();
        let content = fs::read_to_string(&path).map_err(|e| StoreError::io(&path, e))?;
        StoreManifest::from_json(&content)
    }

    fn verify(&self, data: &[u8], manifest: &StoreManifest) -> StoreResult<()> {
        let expected = parse_checksum(&manifest.checksum).ok_or_else(|| {
            StoreError::Corrupted(format!("Malformed checksum '{}'", manifest.checksum))
        })?;

        let actual = compute_checksum(data);
        if actual != expected {
            return Err(StoreError::Corrupted(format!(
                "Checksum mismatch for {}: manifest {}, file {}",
                DATA_FILE,
                manifest.checksum,
                format_checksum(actual)
            )));
        }

        Ok(())
    }
}

impl ReviewStore for FileReviewStore {
    fn load(&self) -> StoreResult<Vec<Review>> {
        let data_path = self.data_path();
        let manifest_path = self.manifest_path();

        match (data_path.exists(), manifest_path.exists()) {
            (false, false) => return Ok(Vec::new()),
            (true, false) => {
                return Err(StoreError::Corrupted(format!(
                    "{} present without {}",
                    DATA_FILE, MANIFEST_FILE
                )))
            }
            (false, true) => {
                return Err(StoreError::Corrupted(format!(
                    "{} present without {}",
                    MANIFEST_FILE, DATA_FILE
                )))
            }
            (true, true) => {}
        }

        let manifest = self.read_manifest()?;
        let data = fs::read(&data_path).map_err(|e| StoreError::io(&data_path, e))?;
        self.verify(&data, &manifest)?;

        let reviews: Vec<Review> = serde_json::from_slice(&data)
            .map_err(|e| StoreError::Corrupted(format!("Unreadable {}: {}", DATA_FILE, e)))?;

        if reviews.len() != manifest.review_count {
            return Err(StoreError::Corrupted(format!(
                "Manifest lists {} reviews, file holds {}",
                manifest.review_count,
                reviews.len()
            )));
        }

        validate_reviews(&reviews)?;
        Ok(reviews)
    }

    fn save(&mut self, reviews: &[Review]) -> StoreResult<()> {
        validate_reviews(reviews)?;

        let data = serde_json::to_vec_pretty(reviews)?;
        let manifest = StoreManifest::new(
            Utc::now(),
            reviews.len(),
            format_checksum(compute_checksum(&data)),
        );

        write_atomic(&self.data_path(), &data)?;
        write_atomic(&self.manifest_path(), manifest.to_json()?.as_bytes())?;

        Ok(())
    }
}

/// Writes to `<path>.tmp`, fsyncs, then renames over `path`.
fn write_atomic(path: &Path, bytes: &[u8]) -> StoreResult<()> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    let mut file = File::create(&tmp).map_err(|e| StoreError::io(&tmp, e))?;
    file.write_all(bytes).map_err(|e| StoreError::io(&tmp, e))?;
    file.sync_all().map_err(|e| StoreError::io(&tmp, e))?;
    drop(file);

    fs::rename(&tmp, path).map_err(|e| StoreError::io(path, e))?;

    // The rename is durable only once the directory entry is synced
    if let Some(parent) = path.parent() {
        let dir = File::open(parent).map_err(|e| StoreError::io(parent, e))?;
        dir.sync_all().map_err(|e| StoreError::io(parent, e))?;
    }

    Ok(())
}
