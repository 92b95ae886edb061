//! Side-by-side comparison of two scan snapshots.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::snapshot::{
    ExtensionCountEntry, ExtensionSizeEntry, ScanSnapshot, SnapshotSummary, SystemInfo,
    TOP_EXTENSIONS,
};

/// Extension shown for ranks one side does not have.
pub const PLACEHOLDER: &str = "-";

/// One rank of the by-count comparison.
#[derive(Debug, Clone, Serialize)]
pub struct CountRow {
    pub rank: usize,
    pub left: ExtensionCountEntry,
    pub right: ExtensionCountEntry,
}

/// One rank of the by-size comparison.
#[derive(Debug, Clone, Serialize)]
pub struct SizeRow {
    pub rank: usize,
    pub left: ExtensionSizeEntry,
    pub right: ExtensionSizeEntry,
}

/// A fully assembled comparison between two snapshots.
///
/// Both ranking tables always hold exactly [`TOP_EXTENSIONS`] rows; when
/// either snapshot ranks fewer extensions, the missing side is padded with
/// a placeholder entry rather than failing.
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotComparison {
    pub left_system: SystemInfo,
    pub right_system: SystemInfo,
    pub left_summary: SnapshotSummary,
    pub right_summary: SnapshotSummary,
    pub count_rows: Vec<CountRow>,
    pub size_rows: Vec<SizeRow>,
    /// Extensions ranked by count on both sides, sorted.
    pub common_extensions: Vec<String>,
    /// Extensions ranked by count only on the left side, sorted.
    pub left_only: Vec<String>,
    /// Extensions ranked by count only on the right side, sorted.
    pub right_only: Vec<String>,
}

impl ExtensionCountEntry {
    fn placeholder() -> Self {
        Self {
            extension: PLACEHOLDER.to_string(),
            file_count: 0,
            percentage: 0.0,
        }
    }
}

impl ExtensionSizeEntry {
    fn placeholder() -> Self {
        Self {
            extension: PLACEHOLDER.to_string(),
            total_size_bytes: 0,
            total_size_gb: 0.0,
            file_count: 0,
            percentage_of_disk: 0.0,
            avg_size_kb: 0.0,
        }
    }
}

impl SnapshotComparison {
    /// Pair up two snapshots rank by rank.
    pub fn new(left: &ScanSnapshot, right: &ScanSnapshot) -> Self {
        let count_rows = (0..TOP_EXTENSIONS)
            .map(|i| CountRow {
                rank: i + 1,
                left: left
                    .top_20_extensions_by_count
                    .get(i)
                    .cloned()
                    .unwrap_or_else(ExtensionCountEntry::placeholder),
                right: right
                    .top_20_extensions_by_count
                    .get(i)
                    .cloned()
                    .unwrap_or_else(ExtensionCountEntry::placeholder),
            })
            .collect();

        let size_rows = (0..TOP_EXTENSIONS)
            .map(|i| SizeRow {
                rank: i + 1,
                left: left
                    .top_20_extensions_by_size
                    .get(i)
                    .cloned()
                    .unwrap_or_else(ExtensionSizeEntry::placeholder),
                right: right
                    .top_20_extensions_by_size
                    .get(i)
                    .cloned()
                    .unwrap_or_else(ExtensionSizeEntry::placeholder),
            })
            .collect();

        let left_set: BTreeSet<&str> = left
            .top_20_extensions_by_count
            .iter()
            .map(|e| e.extension.as_str())
            .collect();
        let right_set: BTreeSet<&str> = right
            .top_20_extensions_by_count
            .iter()
            .map(|e| e.extension.as_str())
            .collect();

        let common_extensions = left_set
            .intersection(&right_set)
            .map(|s| s.to_string())
            .collect();
        let left_only = left_set
            .difference(&right_set)
            .map(|s| s.to_string())
            .collect();
        let right_only = right_set
            .difference(&left_set)
            .map(|s| s.to_string())
            .collect();

        Self {
            left_system: left.system_info.clone(),
            right_system: right.system_info.clone(),
            left_summary: left.summary.clone(),
            right_summary: right.summary.clone(),
            count_rows,
            size_rows,
            common_extensions,
            left_only,
            right_only,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sizedist_core::{FileRecord, Inventory};
    use std::time::SystemTime;

    fn snapshot_of(records: &[(&str, u64, &str)]) -> ScanSnapshot {
        let now = SystemTime::now();
        let mut inventory = Inventory::new();
        for &(path, size, extension) in records {
            inventory.push(FileRecord::new(path, size, extension, now));
        }
        ScanSnapshot::export(&inventory)
    }

    #[test]
    fn test_short_rankings_are_padded() {
        let left = snapshot_of(&[("/a.txt", 100, ".txt"), ("/b.rs", 200, ".rs")]);
        let right = snapshot_of(&[("/c.md", 300, ".md")]);

        let comparison = SnapshotComparison::new(&left, &right);

        assert_eq!(comparison.count_rows.len(), TOP_EXTENSIONS);
        assert_eq!(comparison.size_rows.len(), TOP_EXTENSIONS);

        let row = &comparison.count_rows[1];
        assert_eq!(row.rank, 2);
        assert_ne!(row.left.extension, PLACEHOLDER);
        assert_eq!(row.right.extension, PLACEHOLDER);
        assert_eq!(row.right.file_count, 0);

        let last = &comparison.count_rows[TOP_EXTENSIONS - 1];
        assert_eq!(last.left.extension, PLACEHOLDER);
        assert_eq!(last.right.extension, PLACEHOLDER);
    }

    #[test]
    fn test_common_and_exclusive_extensions() {
        let left = snapshot_of(&[("/a.txt", 1, ".txt"), ("/b.rs", 1, ".rs")]);
        let right = snapshot_of(&[("/c.txt", 1, ".txt"), ("/d.md", 1, ".md")]);

        let comparison = SnapshotComparison::new(&left, &right);

        assert_eq!(comparison.common_extensions, vec![".txt"]);
        assert_eq!(comparison.left_only, vec![".rs"]);
        assert_eq!(comparison.right_only, vec![".md"]);
    }

    #[test]
    fn test_summaries_carried_over() {
        let left = snapshot_of(&[("/a.txt", 100, ".txt")]);
        let right = snapshot_of(&[("/b.md", 300, ".md"), ("/c.md", 50, ".md")]);

        let comparison = SnapshotComparison::new(&left, &right);

        assert_eq!(comparison.left_summary.total_files, 1);
        assert_eq!(comparison.right_summary.total_files, 2);
        assert_eq!(comparison.right_summary.total_size_bytes, 350);
    }
}
