//! Scan configuration types.

use std::path::{Path, PathBuf};

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Configuration for scanning operations.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ScanConfig {
    /// Root path to scan.
    pub root: PathBuf,

    /// Stop the scan once this many files have been collected.
    #[builder(default, setter(strip_option))]
    #[serde(default)]
    pub max_files: Option<u64>,

    /// Path substrings that prune a subdirectory from traversal.
    ///
    /// A directory is skipped when any of these occurs anywhere in its
    /// full constructed path, not just as an exact segment. A directory
    /// named e.g. `node_modules_backup` is therefore pruned too; the
    /// coarse match is intentional.
    #[builder(default = "default_excludes()")]
    #[serde(default = "default_excludes")]
    pub exclude: Vec<String>,

    /// Number of threads for scanning (0 = auto-detect).
    #[builder(default = "0")]
    #[serde(default)]
    pub threads: usize,
}

fn default_excludes() -> Vec<String> {
    [
        ".git",
        "node_modules",
        "__pycache__",
        ".Trash",
        "$RECYCLE.BIN",
        "Library/Caches",
        "target/debug",
        "target/release",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl ScanConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref root) = self.root {
            if root.as_os_str().is_empty() {
                return Err("Root path cannot be empty".to_string());
            }
        } else {
            return Err("Root path is required".to_string());
        }
        if let Some(Some(0)) = self.max_files {
            return Err("max_files must be positive".to_string());
        }
        Ok(())
    }
}

impl ScanConfig {
    /// Create a new scan config builder.
    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::default()
    }

    /// Create a simple config for scanning a path.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            max_files: None,
            exclude: default_excludes(),
            threads: 0,
        }
    }

    /// Check whether a directory path should be pruned.
    pub fn should_prune(&self, path: &Path) -> bool {
        let path = path.to_string_lossy();
        self.exclude.iter().any(|needle| path.contains(needle.as_str()))
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new(".")
    }
}
