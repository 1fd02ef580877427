//! SQLite adapter over the platform's content database.
//!
//! One table per content type, each with at least a `slug` column plus the
//! type's configured category column. The database is opened read-only:
//! the registry is a derived view and must never write back.

use crate::error::{StoreError, StoreResult};
use crate::{SlugSource, SourceReader};
use rusqlite::{Connection, OpenFlags};
use slugmap_types::{ContentType, RawEntry};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Read-only SQLite content source.
pub struct SqliteSource {
    path: PathBuf,
}

impl SqliteSource {
    /// Creates a source backed by the database file at `path`.
    ///
    /// The file is not touched until [`SlugSource::connect`] is called, so
    /// constructing a source against a missing database is fine.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the database path this source reads from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SlugSource for SqliteSource {
    fn connect(&self) -> StoreResult<Box<dyn SourceReader + '_>> {
        if !self.path.exists() {
            return Err(StoreError::Unavailable {
                path: self.path.clone(),
                reason: "file does not exist".into(),
            });
        }
        let conn = Connection::open_with_flags(&self.path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .map_err(|e| StoreError::Unavailable {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;
        Ok(Box::new(SqliteReader { conn }))
    }
}

/// One read session over the content database.
struct SqliteReader {
    conn: Connection,
}

impl SourceReader for SqliteReader {
    fn rows(&self, ty: &ContentType) -> Vec<RawEntry> {
        match self.query_type(ty) {
            Ok(rows) => {
                if rows.is_empty() {
                    // Distinct from the failure case below: the table is
                    // readable but holds nothing.
                    debug!(type_id = %ty.id, "content type has no entries");
                }
                rows
            }
            Err(e) => {
                warn!(type_id = %ty.id, error = %e, "content type query failed, contributing no entries");
                Vec::new()
            }
        }
    }
}

impl SqliteReader {
    fn query_type(&self, ty: &ContentType) -> Result<Vec<RawEntry>, rusqlite::Error> {
        // Table and column names come from the fixed type configuration,
        // never from request input.
        let sql = format!(
            "SELECT slug, {column} FROM {table} WHERE slug IS NOT NULL AND slug != ''",
            column = ty.category_field.column(),
            table = ty.id,
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], |row| {
            Ok(RawEntry {
                slug: row.get(0)?,
                category: row.get(1)?,
            })
        })?;
        rows.collect()
    }
}
