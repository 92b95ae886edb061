//! Analysis engines for sizedist.
//!
//! This crate derives everything the reports need from a scanned
//! [`Inventory`]:
//!
//! - **Distributions** - equal-width size histogram and empirical CDF
//! - **Statistics** - mean, median, std, percentiles over the size sample
//! - **Aggregation** - per-extension counts and disk usage, year buckets,
//!   large-file listings
//!
//! All engines are pure functions over the inventory; none perform I/O.
//! The distribution and statistics engines refuse empty samples with
//! [`AnalyzeError::EmptyInput`] rather than inventing a zero answer, so
//! orchestrators must check `Inventory::is_empty` first.
//!
//! ```rust,ignore
//! use sizedist_analyze::{distribution, extensions, stats};
//! use sizedist_scan::{ScanConfig, Scanner};
//!
//! let inventory = Scanner::new().scan(&ScanConfig::new("/path")).unwrap();
//! let sizes = inventory.sizes();
//!
//! let summary = stats::summarize(&sizes).unwrap();
//! let cdf = distribution::empirical_cdf(&sizes).unwrap();
//! let by_ext = extensions::by_extension(&inventory);
//!
//! println!("median: {} bytes", summary.median);
//! println!("CDF(100KB): {:.2}", cdf.probability_at(100 * 1024));
//! println!("{} distinct extensions", by_ext.len());
//! ```

pub mod distribution;
pub mod extensions;
pub mod stats;
pub mod years;

mod error;

pub use distribution::{DEFAULT_BIN_COUNT, EmpiricalCdf, SizeHistogram, empirical_cdf, histogram};
pub use error::AnalyzeError;
pub use extensions::{
    ExtensionAggregate, ExtensionMap, NO_EXTENSION, by_extension, largest_files, top_n_by_count,
    top_n_by_size,
};
pub use stats::{SizeSummary, percentile, summarize};
pub use years::by_year;

// Re-export core types
pub use sizedist_core::{FileRecord, Inventory};
