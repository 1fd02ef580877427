//! Cross-type collision resolution.

use slugmap_types::{CollisionRecord, SlugMapping};
use std::collections::HashMap;

/// Outcome of merging all content types' extraction results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The resolved global slug→mapping table.
    pub forward: HashMap<String, SlugMapping>,
    /// Slugs claimed by more than one type, sorted by slug.
    pub collisions: Vec<CollisionRecord>,
}

/// Merges per-type mapping tables, given in priority order.
///
/// The first (highest-priority) type to claim a slug keeps it; every later
/// claim only bumps that slug's collision record. Same priority order plus
/// same input always yields the same forward map and the same collision
/// list; redirect destinations must be stable across rebuilds.
#[must_use]
pub fn resolve_collisions(per_type: Vec<HashMap<String, SlugMapping>>) -> Resolution {
    let mut forward: HashMap<String, SlugMapping> = HashMap::new();
    let mut claims: HashMap<String, usize> = HashMap::new();

    for type_map in per_type {
        for (slug, mapping) in type_map {
            *claims.entry(slug.clone()).or_insert(0) += 1;
            forward.entry(slug).or_insert(mapping);
        }
    }

    let mut collisions: Vec<CollisionRecord> = claims
        .into_iter()
        .filter(|(_, claims)| *claims > 1)
        .map(|(slug, claims)| CollisionRecord { slug, claims })
        .collect();
    collisions.sort_by(|a, b| a.slug.cmp(&b.slug));

    Resolution {
        forward,
        collisions,
    }
}
