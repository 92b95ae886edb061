//! Directory traversal engine for sizedist.
//!
//! This crate walks a directory tree and produces the flat [`Inventory`]
//! consumed by the analysis engines. Key behaviors:
//!
//! - **Parallel traversal** via jwalk/rayon
//! - **Subtree pruning** by path-substring exclusion
//! - **Best-effort collection**: unreadable files are skipped, never fatal
//! - **Early exit** once an optional file cap is reached
//! - **Progress updates** via broadcast channels
//!
//! # Example
//!
//! ```rust,no_run
//! use sizedist_scan::{ScanConfig, Scanner};
//!
//! let config = ScanConfig::new("/path/to/scan");
//! let scanner = Scanner::new();
//! let inventory = scanner.scan(&config).unwrap();
//!
//! println!("Total files: {}", inventory.len());
//! println!("Total size: {} bytes", inventory.total_size());
//! ```
//!
//! # Progress Monitoring
//!
//! Subscribe before scanning to receive an update every few thousand files:
//!
//! ```rust,no_run
//! use sizedist_scan::{ScanConfig, Scanner};
//!
//! let scanner = Scanner::new();
//! let mut progress_rx = scanner.subscribe();
//!
//! std::thread::spawn(move || {
//!     while let Ok(progress) = progress_rx.blocking_recv() {
//!         eprintln!("Scanned {} files", progress.files_scanned);
//!     }
//! });
//! ```

mod progress;
mod scanner;

pub use progress::ScanProgress;
pub use scanner::Scanner;

// Re-export core types for convenience
pub use sizedist_core::{FileRecord, Inventory, ScanConfig, ScanError};
