//! JWalk-based parallel directory scanner.

use std::sync::Arc;
use std::time::Instant;

use jwalk::{Parallelism, WalkDir};
use tokio::sync::broadcast;
use tracing::{debug, info};

use sizedist_core::{FileRecord, Inventory, ScanConfig, ScanError};

use crate::progress::ScanProgress;

/// A progress update is emitted once per this many collected files.
const PROGRESS_INTERVAL: u64 = 5000;

/// Directory scanner producing a flat file inventory.
pub struct Scanner {
    progress_tx: broadcast::Sender<ScanProgress>,
}

impl Scanner {
    /// Create a new scanner.
    pub fn new() -> Self {
        let (progress_tx, _) = broadcast::channel(100);
        Self { progress_tx }
    }

    /// Subscribe to scan progress updates.
    pub fn subscribe(&self) -> broadcast::Receiver<ScanProgress> {
        self.progress_tx.subscribe()
    }

    /// Scan the configured root, collecting one record per readable file.
    ///
    /// Subdirectories whose full path contains any configured exclusion
    /// substring are pruned before descent. Files whose metadata cannot be
    /// read are counted as skipped and contribute to no statistics. When
    /// `max_files` is set, traversal stops as soon as the inventory reaches
    /// that length, mid-directory if need be.
    pub fn scan(&self, config: &ScanConfig) -> Result<Inventory, ScanError> {
        let start = Instant::now();
        let root = config
            .root
            .canonicalize()
            .map_err(|e| ScanError::io(&config.root, e))?;

        if !root.is_dir() {
            return Err(ScanError::NotADirectory { path: root });
        }

        let parallelism = match config.threads {
            0 => Parallelism::RayonDefaultPool {
                busy_timeout: std::time::Duration::from_millis(100),
            },
            n => Parallelism::RayonNewPool(n),
        };

        let prune_config = Arc::new(config.clone());
        let walker = WalkDir::new(&root)
            .parallelism(parallelism)
            .skip_hidden(false)
            .follow_links(false)
            .process_read_dir(move |_depth, _path, _state, children| {
                children.retain(|entry| match entry {
                    Ok(e) => !(e.file_type.is_dir() && prune_config.should_prune(&e.path())),
                    // Surfaced as a skip in the collection loop below.
                    Err(_) => true,
                });
            });

        let mut inventory = Inventory::new();
        let mut bytes_scanned: u64 = 0;

        for entry_result in walker {
            let entry = match entry_result {
                Ok(e) => e,
                Err(_) => {
                    inventory.record_skipped();
                    continue;
                }
            };

            if !entry.file_type.is_file() {
                continue;
            }

            let metadata = match entry.metadata() {
                Ok(m) => m,
                Err(_) => {
                    inventory.record_skipped();
                    continue;
                }
            };
            let modified = match metadata.modified() {
                Ok(t) => t,
                Err(_) => {
                    inventory.record_skipped();
                    continue;
                }
            };

            let path = entry.path();
            let extension = FileRecord::extension_of(&entry.file_name.to_string_lossy());
            bytes_scanned += metadata.len();
            inventory.push(FileRecord::new(path.clone(), metadata.len(), extension, modified));

            let count = inventory.len() as u64;
            if count % PROGRESS_INTERVAL == 0 {
                info!(files = count, "scan in progress");
                let _ = self.progress_tx.send(ScanProgress {
                    files_scanned: count,
                    files_skipped: inventory.skipped,
                    bytes_scanned,
                    current_path: path,
                    elapsed: start.elapsed(),
                });
            }

            if let Some(cap) = config.max_files {
                if count >= cap {
                    info!(limit = cap, "file cap reached, stopping scan");
                    break;
                }
            }
        }

        debug!(
            files = inventory.len(),
            skipped = inventory.skipped,
            bytes = bytes_scanned,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "scan complete"
        );

        Ok(inventory)
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}
