//! Error types for analysis computations.

use thiserror::Error;

/// Errors from the distribution and statistics engines.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// The computation needs at least one sample.
    #[error("{what} requires at least one sample")]
    EmptyInput { what: &'static str },
}
