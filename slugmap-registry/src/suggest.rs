//! Closest-slug suggestions for missed lookups.
//!
//! Backs the 404 page's "did you mean" link: a mistyped bare slug is
//! matched against every known slug by edit distance.

use crate::registry::RegistrySnapshot;
use strsim::levenshtein;

/// A near-miss match for an unknown slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// The known slug closest to the input.
    pub slug: String,
    /// That slug's canonical path.
    pub path: String,
    /// Edit distance from the input.
    pub distance: usize,
}

/// Finds the known slug closest to `input`, if any is within
/// `max_distance` edits.
///
/// Ties on distance break toward the lexicographically smaller slug so the
/// suggestion is stable across rebuilds.
pub(crate) fn closest_slug(
    snapshot: &RegistrySnapshot,
    input: &str,
    max_distance: usize,
) -> Option<Suggestion> {
    let mut best: Option<Suggestion> = None;

    for (slug, mapping) in snapshot.forward() {
        let distance = levenshtein(input, slug);
        if distance > max_distance {
            continue;
        }
        let better = match &best {
            None => true,
            Some(current) => {
                distance < current.distance
                    || (distance == current.distance && slug.as_str() < current.slug.as_str())
            }
        };
        if better {
            best = Some(Suggestion {
                slug: slug.clone(),
                path: mapping.path.clone(),
                distance,
            });
        }
    }

    best
}
