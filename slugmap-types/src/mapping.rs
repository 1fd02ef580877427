//! Raw store rows and the slug→path mappings derived from them.

use crate::config::UNCATEGORIZED;
use serde::{Deserialize, Serialize};

/// One raw row fetched from a content type's store.
///
/// Ephemeral: produced fresh for each registry rebuild and discarded once
/// mappings are extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    /// The entry's slug. Adapters only emit rows with a non-empty slug.
    pub slug: String,
    /// The category segment source (category or its configured substitute).
    /// `None` or empty falls back to [`UNCATEGORIZED`].
    pub category: Option<String>,
}

impl RawEntry {
    /// Creates a raw entry.
    pub fn new(slug: impl Into<String>, category: Option<String>) -> Self {
        Self {
            slug: slug.into(),
            category,
        }
    }

    /// Returns the category segment for this entry, applying the fallback.
    #[must_use]
    pub fn category_segment(&self) -> &str {
        match self.category.as_deref() {
            Some(category) if !category.is_empty() => category,
            _ => UNCATEGORIZED,
        }
    }
}

/// A resolved slug: which type and category claim it, and the canonical
/// path the slug redirects to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlugMapping {
    /// The bare slug.
    pub slug: String,
    /// The content type that owns the slug.
    pub content_type: String,
    /// The category segment used in the path.
    pub category: String,
    /// The canonical `/type/category/slug` path.
    pub path: String,
}

impl SlugMapping {
    /// Creates a mapping, deriving the canonical path from the fixed
    /// `/type/category/slug` template.
    pub fn new(
        content_type: impl Into<String>,
        category: impl Into<String>,
        slug: impl Into<String>,
    ) -> Self {
        let content_type = content_type.into();
        let category = category.into();
        let slug = slug.into();
        let path = format!("/{content_type}/{category}/{slug}");
        Self {
            slug,
            content_type,
            category,
            path,
        }
    }
}

/// A slug claimed by more than one content type.
///
/// Only the slug and the number of claimants are retained; the losing
/// mappings themselves are not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionRecord {
    /// The contested slug.
    pub slug: String,
    /// Total number of content types that claimed the slug.
    pub claims: usize,
}
