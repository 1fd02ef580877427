//! Error types for the store layer.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur when reading the content store.
///
/// Per-type query failures are deliberately *not* represented here: an
/// adapter absorbs them and contributes an empty row list, so one broken
/// collection never aborts a registry rebuild.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store cannot be opened at all.
    #[error("content store unavailable at {}: {reason}", path.display())]
    Unavailable {
        /// Location of the store that failed to open.
        path: PathBuf,
        /// Why the open failed.
        reason: String,
    },
}
