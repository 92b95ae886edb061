use std::time::SystemTime;

use sizedist_analyze::{
    DEFAULT_BIN_COUNT, distribution, extensions, stats,
};
use sizedist_core::{FileRecord, Inventory};

fn build_inventory(records: &[(&str, u64, &str)]) -> Inventory {
    let now = SystemTime::now();
    let mut inventory = Inventory::new();
    for &(path, size, extension) in records {
        inventory.push(FileRecord::new(path, size, extension, now));
    }
    inventory
}

#[test]
fn test_extension_counts_partition_the_inventory() {
    let inventory = build_inventory(&[
        ("/docs/a.pdf", 1200, ".pdf"),
        ("/docs/b.pdf", 800, ".pdf"),
        ("/src/main.rs", 300, ".rs"),
        ("/LICENSE", 100, ""),
        ("/notes.txt", 50, ".txt"),
    ]);

    let aggregates = extensions::by_extension(&inventory);

    let file_total: u64 = aggregates.values().map(|a| a.file_count).sum();
    let byte_total: u64 = aggregates.values().map(|a| a.total_size_bytes).sum();

    assert_eq!(file_total, inventory.len() as u64);
    assert_eq!(byte_total, inventory.total_size());
}

#[test]
fn test_cdf_terminates_at_one() {
    let inventory = build_inventory(&[
        ("/a", 5, ".a"),
        ("/b", 50, ".b"),
        ("/c", 500, ".c"),
        ("/d", 50, ".d"),
    ]);

    let cdf = distribution::empirical_cdf(&inventory.sizes()).unwrap();

    assert_eq!(*cdf.probabilities.last().unwrap(), 1.0);
    for window in cdf.probabilities.windows(2) {
        assert!(window[0] <= window[1]);
    }
    assert_eq!(cdf.sizes.len(), inventory.len());
}

#[test]
fn test_percentile_50_equals_median() {
    let sizes: Vec<u64> = vec![13, 2, 7, 99, 41, 8, 8, 1000, 3];
    let mut sorted = sizes.clone();
    sorted.sort_unstable();

    let summary = stats::summarize(&sizes).unwrap();
    let p50 = stats::percentile(&sorted, 50.0).unwrap();

    assert_eq!(summary.median, p50);
    assert_eq!(summary.p50, p50);
}

#[test]
fn test_degenerate_histogram_has_one_bin() {
    let hist = distribution::histogram(&[5, 5, 5, 5], DEFAULT_BIN_COUNT).unwrap();

    assert_eq!(hist.counts, vec![4]);
    assert_eq!(hist.edges.len(), 2);
}

#[test]
fn test_extension_scenario_from_mixed_inventory() {
    let inventory = build_inventory(&[
        ("/x/one.txt", 100, ".txt"),
        ("/x/two.txt", 200, ".txt"),
        ("/x/plain", 50, ""),
    ]);

    let aggregates = extensions::by_extension(&inventory);

    assert_eq!(aggregates[".txt"].file_count, 2);
    assert_eq!(aggregates[".txt"].total_size_bytes, 300);
    assert_eq!(aggregates[extensions::NO_EXTENSION].file_count, 1);
    assert_eq!(aggregates[extensions::NO_EXTENSION].total_size_bytes, 50);

    assert_eq!(inventory.len(), 3);
    assert_eq!(inventory.total_size(), 350);
}

#[test]
fn test_engines_refuse_empty_samples() {
    let empty: Vec<u64> = Vec::new();

    assert!(distribution::histogram(&empty, DEFAULT_BIN_COUNT).is_err());
    assert!(distribution::empirical_cdf(&empty).is_err());
    assert!(stats::summarize(&empty).is_err());
}
