//! Content-type configuration.
//!
//! The registry works off a fixed, priority-ordered list of content types.
//! Priority order is externally visible (it decides which type wins a slug
//! collision, i.e. where existing links redirect), so the default list must
//! not be reordered casually.

use serde::{Deserialize, Serialize};

/// Fallback category segment for entries with no category of their own.
pub const UNCATEGORIZED: &str = "uncategorized";

/// Where a content type's category segment is sourced from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryField {
    /// The standard `category_slug` column.
    Category,
    /// A named column that stands in for the category (e.g. `verse_type`).
    Alternate(String),
}

impl CategoryField {
    /// Returns the column name this field reads from.
    #[must_use]
    pub fn column(&self) -> &str {
        match self {
            Self::Category => "category_slug",
            Self::Alternate(column) => column,
        }
    }
}

/// One content type: an independently curated collection with its own
/// slug namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentType {
    /// Type identifier, also the store table name and the first path segment.
    pub id: String,
    /// Source of the category segment for this type's entries.
    pub category_field: CategoryField,
}

impl ContentType {
    /// Creates a content type using the standard category column.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category_field: CategoryField::Category,
        }
    }

    /// Creates a content type whose category segment comes from an
    /// alternate column.
    pub fn with_alternate(id: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category_field: CategoryField::Alternate(column.into()),
        }
    }
}

/// The platform's supported content types, in collision-priority order.
///
/// `verse` is the one exception: its URL segment comes from `verse_type`
/// rather than `category_slug`.
#[must_use]
pub fn default_content_types() -> Vec<ContentType> {
    vec![
        ContentType::new("blog"),
        ContentType::new("essays"),
        ContentType::new("fiction"),
        ContentType::new("news"),
        ContentType::new("notes"),
        ContentType::new("ocs"),
        ContentType::new("papers"),
        ContentType::new("progymnasmata"),
        ContentType::new("reviews"),
        ContentType::with_alternate("verse", "verse_type"),
    ]
}
