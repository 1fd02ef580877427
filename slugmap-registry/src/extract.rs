//! Mapping extraction for a single content type.

use slugmap_types::{ContentType, RawEntry, SlugMapping};
use std::collections::HashMap;

/// Turns one content type's raw rows into a slug→mapping table, deriving
/// each canonical path from the `/type/category/slug` template.
///
/// Duplicate slugs *within* the type keep the first row and silently drop
/// the rest. That is an intra-type data problem, not a cross-type
/// collision, so nothing is recorded for it.
#[must_use]
pub fn extract_mappings(ty: &ContentType, rows: Vec<RawEntry>) -> HashMap<String, SlugMapping> {
    let mut mappings = HashMap::with_capacity(rows.len());
    for entry in rows {
        let category = entry.category_segment().to_string();
        let slug = entry.slug;
        mappings
            .entry(slug.clone())
            .or_insert_with(|| SlugMapping::new(&ty.id, category, slug));
    }
    mappings
}
