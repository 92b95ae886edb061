//! Snapshot export, loading, and comparison for sizedist.
//!
//! A [`ScanSnapshot`] is the frozen JSON summary of one scan: system
//! metadata, totals, and the top-20 extension rankings by count and by
//! size. All derived numbers (percentages, GB/KB conversions) are rounded
//! and embedded at export time; loading a snapshot never recomputes them.
//!
//! Snapshots produced on different machines are compared with
//! [`SnapshotComparison`], which pads short ranking lists with placeholder
//! rows so independently produced artifacts always line up rank by rank.

mod compare;
mod error;
mod snapshot;

pub use compare::{CountRow, SizeRow, SnapshotComparison, PLACEHOLDER};
pub use error::SnapshotError;
pub use snapshot::{
    ExtensionCountEntry, ExtensionSizeEntry, ScanSnapshot, SnapshotSummary, SystemInfo,
    TOP_EXTENSIONS,
};
