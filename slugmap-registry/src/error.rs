//! Error types for the registry.

use slugmap_store::StoreError;
use thiserror::Error;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors that can escape a registry lookup.
///
/// A missing slug is not an error: lookups return `Ok(None)`. The only
/// failure a caller can observe is the backing store being unreachable
/// when that caller happened to trigger a rebuild.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The content store could not be opened for a rebuild.
    #[error("store unavailable: {0}")]
    Store(#[from] StoreError),
}
