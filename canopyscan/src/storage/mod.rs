//! Result persistence.
//!
//! Surveys leave two artifacts behind: the mosaic JPEG and one row in
//! an append-only results log. Persistence is an injected collaborator
//! ([`ResultStore`]) rather than a hardcoded output directory, so the
//! pipeline can run with no storage at all (tests) or with a
//! different backend.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use image::{ImageFormat, RgbImage};

use crate::coord::GeoRect;

/// Filename of the append-only results log inside the store root.
const RESULTS_LOG: &str = "survey_results.csv";

/// Errors from the result store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

/// One row of the results log.
///
/// Column order is fixed for compatibility with existing logs:
/// `timestamp, lat1, lon1, lat2, lon2, zoom, count`.
#[derive(Debug, Clone)]
pub struct SurveyRecord {
    pub timestamp: DateTime<Local>,
    pub rect: GeoRect,
    pub zoom: u8,
    pub object_count: u64,
}

impl SurveyRecord {
    /// Creates a record stamped with the current local time.
    pub fn new(rect: GeoRect, zoom: u8, object_count: u64) -> Self {
        Self {
            timestamp: Local::now(),
            rect,
            zoom,
            object_count,
        }
    }

    /// Renders the record as one CSV row (no trailing newline).
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{},{}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.rect.a.lat,
            self.rect.a.lon,
            self.rect.b.lat,
            self.rect.b.lon,
            self.zoom,
            self.object_count
        )
    }
}

/// Trait for persisting survey outputs.
pub trait ResultStore: Send + Sync {
    /// Saves an image under the given filename stem, returning the
    /// path it was written to.
    fn save_image(&self, image: &RgbImage, stem: &str) -> Result<PathBuf, StoreError>;

    /// Appends one record to the results log.
    fn append_summary(&self, record: &SurveyRecord) -> Result<(), StoreError>;
}

/// Filesystem-backed result store.
///
/// Images are written as JPEG into the root directory; summaries are
/// appended to `survey_results.csv` alongside them.
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    /// Creates a store rooted at `root`, creating the directory if
    /// needed.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, StoreError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Path of the results log.
    pub fn log_path(&self) -> PathBuf {
        self.root.join(RESULTS_LOG)
    }
}

impl ResultStore for DirectoryStore {
    fn save_image(&self, image: &RgbImage, stem: &str) -> Result<PathBuf, StoreError> {
        let path = self.root.join(format!("{}.jpg", stem));
        image.save_with_format(&path, ImageFormat::Jpeg)?;
        Ok(path)
    }

    fn append_summary(&self, record: &SurveyRecord) -> Result<(), StoreError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.log_path())?;
        writeln!(file, "{}", record.to_csv_row())?;
        Ok(())
    }
}
