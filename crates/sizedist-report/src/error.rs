//! Error types for snapshot persistence.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while saving or loading a snapshot artifact.
///
/// All of these are recoverable at the caller: a missing or malformed
/// snapshot aborts only the comparison that needed it.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The snapshot file does not exist.
    #[error("Snapshot not found: {path}")]
    NotFound { path: PathBuf },

    /// The file exists but is not a valid snapshot.
    #[error("Malformed snapshot {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Other I/O failure reading or writing the artifact.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SnapshotError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }
}
