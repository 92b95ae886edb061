//! Scan progress reporting.

use std::path::PathBuf;
use std::time::Duration;

/// Progress information during a scan.
///
/// Observability only; the inventory returned by the scanner is the data
/// contract.
#[derive(Debug, Clone)]
pub struct ScanProgress {
    /// Number of files collected so far.
    pub files_scanned: u64,
    /// Number of files skipped as unreadable so far.
    pub files_skipped: u64,
    /// Total bytes collected so far.
    pub bytes_scanned: u64,
    /// Most recently collected path.
    pub current_path: PathBuf,
    /// Time elapsed since the scan started.
    pub elapsed: Duration,
}

impl ScanProgress {
    /// Create initial progress state.
    pub fn new() -> Self {
        Self {
            files_scanned: 0,
            files_skipped: 0,
            bytes_scanned: 0,
            current_path: PathBuf::new(),
            elapsed: Duration::ZERO,
        }
    }

    /// Calculate scan rate in files per second.
    pub fn files_per_second(&self) -> f64 {
        if self.elapsed.as_secs_f64() > 0.0 {
            self.files_scanned as f64 / self.elapsed.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Calculate scan rate in bytes per second.
    pub fn bytes_per_second(&self) -> f64 {
        if self.elapsed.as_secs_f64() > 0.0 {
            self.bytes_scanned as f64 / self.elapsed.as_secs_f64()
        } else {
            0.0
        }
    }
}

impl Default for ScanProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rates_with_zero_elapsed() {
        let progress = ScanProgress::new();
        assert_eq!(progress.files_per_second(), 0.0);
        assert_eq!(progress.bytes_per_second(), 0.0);
    }

    #[test]
    fn test_rates() {
        let progress = ScanProgress {
            files_scanned: 100,
            files_skipped: 0,
            bytes_scanned: 2048,
            current_path: PathBuf::new(),
            elapsed: Duration::from_secs(2),
        };
        assert_eq!(progress.files_per_second(), 50.0);
        assert_eq!(progress.bytes_per_second(), 1024.0);
    }
}
