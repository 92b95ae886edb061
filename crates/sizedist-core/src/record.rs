//! File records and the scan inventory.

use std::path::PathBuf;
use std::time::SystemTime;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// A single file observed during traversal.
///
/// Records are created once by the scanner and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord {
    /// Full path as constructed during traversal.
    pub path: PathBuf,

    /// Size in bytes.
    pub size: u64,

    /// Lowercased extension including the leading dot (e.g. `.txt`), or
    /// the empty string for extensionless files.
    pub extension: CompactString,

    /// Filesystem-reported modification time.
    pub modified: SystemTime,
}

impl FileRecord {
    /// Create a new file record.
    pub fn new(
        path: impl Into<PathBuf>,
        size: u64,
        extension: impl Into<CompactString>,
        modified: SystemTime,
    ) -> Self {
        Self {
            path: path.into(),
            size,
            extension: extension.into(),
            modified,
        }
    }

    /// Whether this file has a suffix at all.
    pub fn has_extension(&self) -> bool {
        !self.extension.is_empty()
    }

    /// Derive the normalized extension from a file name.
    ///
    /// The extension is the last dot-suffix, lowercased. Names without a
    /// dot, and hidden names whose only dot is the leading one (`.bashrc`),
    /// yield the empty string.
    pub fn extension_of(file_name: &str) -> CompactString {
        match file_name.rfind('.') {
            Some(idx) if idx > 0 => file_name[idx..].to_lowercase().into(),
            _ => CompactString::default(),
        }
    }
}

/// The flat inventory produced by one scan.
///
/// Records appear in traversal discovery order, which is not sorted by any
/// key and is undefined across parallel walks. Files the walker saw but
/// could not stat are counted in `skipped` and appear nowhere else.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    /// Scanned files in discovery order.
    pub files: Vec<FileRecord>,

    /// Files dropped by the best-effort per-file policy.
    pub skipped: u64,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub fn push(&mut self, record: FileRecord) {
        self.files.push(record);
    }

    /// Count a file that could not be read.
    pub fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    /// Number of scanned files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether no files were scanned.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Total bytes across all records.
    pub fn total_size(&self) -> u64 {
        self.files.iter().map(|f| f.size).sum()
    }

    /// Size sample for the distribution and statistics engines.
    pub fn sizes(&self) -> Vec<u64> {
        self.files.iter().map(|f| f.size).collect()
    }

    /// Iterate over the records.
    pub fn iter(&self) -> impl Iterator<Item = &FileRecord> {
        self.files.iter()
    }
}
