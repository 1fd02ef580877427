//! Read-only content store adapters for the slugmap registry.
//!
//! Each content type lives in its own table of the platform's content
//! database. The registry asks a [`SlugSource`] for one read session per
//! rebuild and fetches each configured type's `(slug, category)` rows
//! through it.
//!
//! # Failure contract
//!
//! - Opening the store at all can fail ([`StoreError::Unavailable`]); that
//!   is the only error this crate surfaces.
//! - A per-type read failure (missing table, schema drift) is absorbed:
//!   logged and turned into an empty row list, so the rebuild continues
//!   for the remaining types.

mod error;
mod sqlite;

pub use error::{StoreError, StoreResult};
pub use sqlite::SqliteSource;

use slugmap_types::{ContentType, RawEntry};

/// A backing store the registry can rebuild from.
pub trait SlugSource: Send + Sync {
    /// Opens one read session over the store.
    ///
    /// Called once per rebuild. Fails only when the store as a whole is
    /// unreachable.
    fn connect(&self) -> StoreResult<Box<dyn SourceReader + '_>>;
}

/// One read session produced by [`SlugSource::connect`].
pub trait SourceReader {
    /// Returns every row of `ty` that has a non-empty slug.
    ///
    /// Read failures for this one type are absorbed and yield an empty
    /// list; they must never abort the caller's rebuild.
    fn rows(&self, ty: &ContentType) -> Vec<RawEntry>;
}
