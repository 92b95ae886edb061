//! Extension-based aggregation and rankings.

use compact_str::CompactString;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use sizedist_core::{FileRecord, Inventory};

/// Grouping key for files without a suffix.
///
/// Distinct from the raw empty-string extension so display and export can
/// never confuse the two.
pub const NO_EXTENSION: &str = "no_ext";

/// Extension aggregates keyed by extension, in first-seen order.
pub type ExtensionMap = IndexMap<CompactString, ExtensionAggregate>;

/// Count and disk usage for one distinct extension.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtensionAggregate {
    /// Extension key (lowercased, leading dot) or [`NO_EXTENSION`].
    pub extension: CompactString,
    /// Number of files with this extension.
    pub file_count: u64,
    /// Total bytes across those files.
    pub total_size_bytes: u64,
    /// Share of all files, in percent.
    pub percentage_of_files: f64,
    /// Share of all bytes, in percent.
    pub percentage_of_disk: f64,
    /// Mean file size in bytes.
    pub avg_size_bytes: f64,
}

/// Group the inventory by extension, in first-seen order.
///
/// Extensionless records are grouped under [`NO_EXTENSION`]. Percentages are
/// relative to the whole inventory and are 0.0 when the respective total is
/// zero; an empty inventory yields an empty map.
pub fn by_extension(inventory: &Inventory) -> ExtensionMap {
    let mut tallies: IndexMap<CompactString, (u64, u64)> = IndexMap::new();
    for record in inventory.iter() {
        let key = if record.has_extension() {
            record.extension.clone()
        } else {
            CompactString::const_new(NO_EXTENSION)
        };
        let tally = tallies.entry(key).or_insert((0, 0));
        tally.0 += 1;
        tally.1 += record.size;
    }

    let total_files = inventory.len() as u64;
    let total_size = inventory.total_size();

    tallies
        .into_iter()
        .map(|(extension, (file_count, total_size_bytes))| {
            let aggregate = ExtensionAggregate {
                extension: extension.clone(),
                file_count,
                total_size_bytes,
                percentage_of_files: percent(file_count, total_files),
                percentage_of_disk: percent(total_size_bytes, total_size),
                avg_size_bytes: total_size_bytes as f64 / file_count as f64,
            };
            (extension, aggregate)
        })
        .collect()
}

fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Rank aggregates by file count, descending; ties keep first-seen order.
pub fn top_n_by_count(aggregates: &ExtensionMap, n: usize) -> Vec<ExtensionAggregate> {
    let mut ranked: Vec<ExtensionAggregate> = aggregates.values().cloned().collect();
    ranked.sort_by(|a, b| b.file_count.cmp(&a.file_count));
    ranked.truncate(n);
    ranked
}

/// Rank aggregates by total bytes, descending; ties keep first-seen order.
pub fn top_n_by_size(aggregates: &ExtensionMap, n: usize) -> Vec<ExtensionAggregate> {
    let mut ranked: Vec<ExtensionAggregate> = aggregates.values().cloned().collect();
    ranked.sort_by(|a, b| b.total_size_bytes.cmp(&a.total_size_bytes));
    ranked.truncate(n);
    ranked
}

/// Files strictly above `threshold_bytes`, largest first, capped at `limit`.
pub fn largest_files(inventory: &Inventory, threshold_bytes: u64, limit: usize) -> Vec<FileRecord> {
    let mut large: Vec<FileRecord> = inventory
        .iter()
        .filter(|r| r.size > threshold_bytes)
        .cloned()
        .collect();
    large.sort_by(|a, b| b.size.cmp(&a.size));
    large.truncate(limit);
    large
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::SystemTime;

    fn inventory(records: &[(&str, u64, &str)]) -> Inventory {
        let now = SystemTime::now();
        let mut inventory = Inventory::new();
        for &(path, size, extension) in records {
            inventory.push(FileRecord::new(path, size, extension, now));
        }
        inventory
    }

    #[test]
    fn test_by_extension_scenario() {
        let inventory = inventory(&[
            ("/a/one.txt", 100, ".txt"),
            ("/a/two.txt", 200, ".txt"),
            ("/a/readme", 50, ""),
        ]);

        let aggregates = by_extension(&inventory);
        assert_eq!(aggregates.len(), 2);

        let txt = &aggregates[".txt"];
        assert_eq!(txt.file_count, 2);
        assert_eq!(txt.total_size_bytes, 300);
        assert_eq!(txt.avg_size_bytes, 150.0);

        let no_ext = &aggregates[NO_EXTENSION];
        assert_eq!(no_ext.file_count, 1);
        assert_eq!(no_ext.total_size_bytes, 50);
    }

    #[test]
    fn test_counts_sum_to_inventory_len() {
        let inventory = inventory(&[
            ("/a", 1, ".rs"),
            ("/b", 2, ".rs"),
            ("/c", 3, ".toml"),
            ("/d", 4, ""),
            ("/e", 5, ".md"),
        ]);

        let aggregates = by_extension(&inventory);
        let total: u64 = aggregates.values().map(|a| a.file_count).sum();
        assert_eq!(total, inventory.len() as u64);

        let bytes: u64 = aggregates.values().map(|a| a.total_size_bytes).sum();
        assert_eq!(bytes, inventory.total_size());
    }

    #[test]
    fn test_percentages() {
        let inventory = inventory(&[("/a", 75, ".log"), ("/b", 25, ".txt")]);

        let aggregates = by_extension(&inventory);
        assert_eq!(aggregates[".log"].percentage_of_files, 50.0);
        assert_eq!(aggregates[".log"].percentage_of_disk, 75.0);
    }

    #[test]
    fn test_empty_inventory_has_no_aggregates() {
        let aggregates = by_extension(&Inventory::new());
        assert!(aggregates.is_empty());
    }

    #[test]
    fn test_ranking_by_count_with_stable_ties() {
        let inventory = inventory(&[
            ("/1", 10, ".a"),
            ("/2", 10, ".b"),
            ("/3", 10, ".b"),
            ("/4", 10, ".c"),
        ]);

        let aggregates = by_extension(&inventory);
        let ranked = top_n_by_count(&aggregates, 3);

        assert_eq!(ranked[0].extension, ".b");
        // .a and .c tie at one file each; first-seen wins.
        assert_eq!(ranked[1].extension, ".a");
        assert_eq!(ranked[2].extension, ".c");
    }

    #[test]
    fn test_ranking_by_size() {
        let inventory = inventory(&[
            ("/1", 10, ".small"),
            ("/2", 1000, ".big"),
            ("/3", 100, ".mid"),
        ]);

        let aggregates = by_extension(&inventory);
        let ranked = top_n_by_size(&aggregates, 2);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].extension, ".big");
        assert_eq!(ranked[1].extension, ".mid");
    }

    #[test]
    fn test_largest_files() {
        let inventory = inventory(&[
            ("/tiny", 10, ".a"),
            ("/huge", 5000, ".b"),
            ("/large", 2000, ".c"),
            ("/edge", 100, ".d"),
        ]);

        let large = largest_files(&inventory, 100, 10);
        assert_eq!(large.len(), 2);
        assert_eq!(large[0].size, 5000);
        assert_eq!(large[1].size, 2000);

        let capped = largest_files(&inventory, 0, 1);
        assert_eq!(capped.len(), 1);
        assert_eq!(capped[0].size, 5000);
    }
}
