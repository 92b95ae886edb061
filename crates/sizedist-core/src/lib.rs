//! Core types for sizedist.
//!
//! This crate provides the fundamental data structures shared across
//! the sizedist workspace: the flat file inventory produced by scanning,
//! the scan configuration, and the scan error taxonomy.

mod config;
mod error;
mod record;

pub use config::{ScanConfig, ScanConfigBuilder};
pub use error::ScanError;
pub use record::{FileRecord, Inventory};
