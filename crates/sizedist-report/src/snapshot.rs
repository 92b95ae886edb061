//! The frozen JSON summary of one scan.

use std::env::consts;
use std::path::Path;

use chrono::Local;
use serde::{Deserialize, Serialize};

use sizedist_analyze::extensions::{self, NO_EXTENSION};
use sizedist_core::Inventory;

use crate::error::SnapshotError;

/// Ranking cap baked into the snapshot format.
pub const TOP_EXTENSIONS: usize = 20;

const BYTES_PER_KB: f64 = 1024.0;
const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Metadata about the machine that produced a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    pub os: String,
    pub platform: String,
    pub architecture: String,
    /// RFC 3339 timestamp of the scan.
    pub scan_date: String,
}

impl SystemInfo {
    /// Describe the current machine.
    pub fn current() -> Self {
        Self {
            os: consts::OS.to_string(),
            platform: format!("{}-{}", consts::OS, consts::ARCH),
            architecture: consts::ARCH.to_string(),
            scan_date: Local::now().to_rfc3339(),
        }
    }
}

/// Inventory-wide totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotSummary {
    pub total_files: u64,
    pub total_size_bytes: u64,
    pub total_size_gb: f64,
    /// Distinct extensions, not counting extensionless files.
    pub unique_extensions: usize,
    pub files_without_extension: u64,
}

/// One rank in the by-count table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtensionCountEntry {
    pub extension: String,
    pub file_count: u64,
    pub percentage: f64,
}

/// One rank in the by-size table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtensionSizeEntry {
    pub extension: String,
    pub total_size_bytes: u64,
    pub total_size_gb: f64,
    pub file_count: u64,
    pub percentage_of_disk: f64,
    pub avg_size_kb: f64,
}

/// The exported scan artifact.
///
/// Field names and the top-20 cap are the interchange contract consumed by
/// the comparison tooling; snapshots are immutable once written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSnapshot {
    pub system_info: SystemInfo,
    pub summary: SnapshotSummary,
    pub top_20_extensions_by_count: Vec<ExtensionCountEntry>,
    pub top_20_extensions_by_size: Vec<ExtensionSizeEntry>,
}

impl ScanSnapshot {
    /// Assemble a snapshot from an inventory.
    ///
    /// Pure with respect to the inventory; every derived number is rounded
    /// here, once. The by-count ranking covers named extensions only, while
    /// the by-size ranking includes the extensionless bucket.
    pub fn export(inventory: &Inventory) -> Self {
        let aggregates = extensions::by_extension(inventory);

        let files_without_extension = aggregates
            .get(NO_EXTENSION)
            .map(|a| a.file_count)
            .unwrap_or(0);
        let unique_extensions =
            aggregates.len() - usize::from(aggregates.contains_key(NO_EXTENSION));

        let total_size = inventory.total_size();
        let summary = SnapshotSummary {
            total_files: inventory.len() as u64,
            total_size_bytes: total_size,
            total_size_gb: round2(total_size as f64 / BYTES_PER_GB),
            unique_extensions,
            files_without_extension,
        };

        let top_20_extensions_by_count =
            extensions::top_n_by_count(&aggregates, aggregates.len())
                .into_iter()
                .filter(|a| a.extension != NO_EXTENSION)
                .take(TOP_EXTENSIONS)
                .map(|a| ExtensionCountEntry {
                    extension: a.extension.into(),
                    file_count: a.file_count,
                    percentage: round2(a.percentage_of_files),
                })
                .collect();

        let top_20_extensions_by_size = extensions::top_n_by_size(&aggregates, TOP_EXTENSIONS)
            .into_iter()
            .map(|a| ExtensionSizeEntry {
                extension: a.extension.into(),
                total_size_bytes: a.total_size_bytes,
                total_size_gb: round2(a.total_size_bytes as f64 / BYTES_PER_GB),
                file_count: a.file_count,
                percentage_of_disk: round2(a.percentage_of_disk),
                avg_size_kb: round2(a.avg_size_bytes / BYTES_PER_KB),
            })
            .collect();

        Self {
            system_info: SystemInfo::current(),
            summary,
            top_20_extensions_by_count,
            top_20_extensions_by_size,
        }
    }

    /// Write the snapshot as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), SnapshotError> {
        let json = serde_json::to_string_pretty(self).map_err(|e| SnapshotError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        std::fs::write(path, json).map_err(|e| SnapshotError::io(path, e))
    }

    /// Load a snapshot, distinguishing a missing artifact from a malformed
    /// one.
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| SnapshotError::io(path, e))?;
        serde_json::from_str(&contents).map_err(|e| SnapshotError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use sizedist_core::FileRecord;
    use std::time::SystemTime;
    use tempfile::TempDir;

    fn sample_inventory() -> Inventory {
        let now = SystemTime::now();
        let mut inventory = Inventory::new();
        inventory.push(FileRecord::new("/a/one.txt", 100, ".txt", now));
        inventory.push(FileRecord::new("/a/two.txt", 200, ".txt", now));
        inventory.push(FileRecord::new("/a/big.iso", 1_500_000_000, ".iso", now));
        inventory.push(FileRecord::new("/a/readme", 50, "", now));
        inventory
    }

    #[test]
    fn test_export_summary() {
        let snapshot = ScanSnapshot::export(&sample_inventory());

        assert_eq!(snapshot.summary.total_files, 4);
        assert_eq!(snapshot.summary.total_size_bytes, 1_500_000_350);
        assert_eq!(snapshot.summary.total_size_gb, 1.4);
        assert_eq!(snapshot.summary.unique_extensions, 2);
        assert_eq!(snapshot.summary.files_without_extension, 1);
    }

    #[test]
    fn test_export_count_ranking_skips_extensionless() {
        let snapshot = ScanSnapshot::export(&sample_inventory());

        let extensions: Vec<&str> = snapshot
            .top_20_extensions_by_count
            .iter()
            .map(|e| e.extension.as_str())
            .collect();
        assert_eq!(extensions, vec![".txt", ".iso"]);
        assert_eq!(snapshot.top_20_extensions_by_count[0].file_count, 2);
        assert_eq!(snapshot.top_20_extensions_by_count[0].percentage, 50.0);
    }

    #[test]
    fn test_export_size_ranking_includes_extensionless() {
        let snapshot = ScanSnapshot::export(&sample_inventory());

        let extensions: Vec<&str> = snapshot
            .top_20_extensions_by_size
            .iter()
            .map(|e| e.extension.as_str())
            .collect();
        assert_eq!(extensions, vec![".iso", ".txt", "no_ext"]);

        let iso = &snapshot.top_20_extensions_by_size[0];
        assert_eq!(iso.total_size_gb, 1.4);
        assert_eq!(iso.file_count, 1);
    }

    #[test]
    fn test_export_empty_inventory() {
        let snapshot = ScanSnapshot::export(&Inventory::new());

        assert_eq!(snapshot.summary.total_files, 0);
        assert_eq!(snapshot.summary.total_size_gb, 0.0);
        assert!(snapshot.top_20_extensions_by_count.is_empty());
        assert!(snapshot.top_20_extensions_by_size.is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("scan_results.json");

        let exported = ScanSnapshot::export(&sample_inventory());
        exported.save(&path).unwrap();

        let loaded = ScanSnapshot::load(&path).unwrap();
        assert_eq!(loaded.summary, exported.summary);
        assert_eq!(
            loaded.top_20_extensions_by_count,
            exported.top_20_extensions_by_count
        );
        assert_eq!(
            loaded.top_20_extensions_by_size,
            exported.top_20_extensions_by_size
        );
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = ScanSnapshot::load(&temp.path().join("absent.json"));
        assert!(matches!(result, Err(SnapshotError::NotFound { .. })));
    }

    #[test]
    fn test_load_malformed_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = ScanSnapshot::load(&path);
        assert!(matches!(result, Err(SnapshotError::Parse { .. })));
    }

    #[test]
    fn test_load_rejects_missing_fields() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("partial.json");
        std::fs::write(&path, r#"{"summary": {"total_files": 1}}"#).unwrap();

        let result = ScanSnapshot::load(&path);
        assert!(matches!(result, Err(SnapshotError::Parse { .. })));
    }
}
