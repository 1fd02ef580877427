//! Property-based tests for the collision resolver.
//!
//! Slugs are drawn from a tiny alphabet so cross-type collisions are
//! common. The properties checked are the ones the routing layer depends
//! on: determinism, first-type-wins, exact forward/reverse inversion.

use proptest::prelude::*;
use slugmap_registry::{extract_mappings, resolve_collisions};
use slugmap_types::{ContentType, RawEntry, SlugMapping};
use std::collections::HashMap;

fn row_strategy() -> impl Strategy<Value = RawEntry> {
    (
        prop::string::string_regex("[a-d]{1,3}").unwrap(),
        prop::option::of(prop::string::string_regex("[a-c]{1,2}").unwrap()),
    )
        .prop_map(|(slug, category)| RawEntry::new(slug, category))
}

fn per_type_strategy() -> impl Strategy<Value = Vec<Vec<RawEntry>>> {
    prop::collection::vec(prop::collection::vec(row_strategy(), 0..10), 1..4)
}

fn extract_all(per_type_rows: &[Vec<RawEntry>]) -> Vec<HashMap<String, SlugMapping>> {
    per_type_rows
        .iter()
        .enumerate()
        .map(|(i, rows)| extract_mappings(&ContentType::new(format!("type{i}")), rows.clone()))
        .collect()
}

proptest! {
    /// Same priority list + same data ⇒ same resolved map and collisions.
    #[test]
    fn resolution_is_deterministic(per_type_rows in per_type_strategy()) {
        let first = resolve_collisions(extract_all(&per_type_rows));
        let second = resolve_collisions(extract_all(&per_type_rows));
        prop_assert_eq!(first.forward, second.forward);
        prop_assert_eq!(first.collisions, second.collisions);
    }

    /// Every claimed slug resolves, and always to the earliest claiming type.
    #[test]
    fn first_claiming_type_wins(per_type_rows in per_type_strategy()) {
        let per_type = extract_all(&per_type_rows);
        let resolution = resolve_collisions(per_type.clone());

        for (i, type_map) in per_type.iter().enumerate() {
            for slug in type_map.keys() {
                let winner = &resolution.forward[slug];
                let first_claimant = per_type
                    .iter()
                    .position(|m| m.contains_key(slug))
                    .unwrap();
                prop_assert_eq!(&winner.content_type, &format!("type{first_claimant}"));
                // A later type never steals the slug.
                prop_assert!(first_claimant <= i);
            }
        }
    }

    /// A slug collides iff at least two types claim it, with an exact count.
    #[test]
    fn collision_counts_match_claims(per_type_rows in per_type_strategy()) {
        let per_type = extract_all(&per_type_rows);
        let resolution = resolve_collisions(per_type.clone());

        for slug in resolution.forward.keys() {
            let claims = per_type.iter().filter(|m| m.contains_key(slug)).count();
            let record = resolution.collisions.iter().find(|c| &c.slug == slug);
            if claims > 1 {
                prop_assert_eq!(record.map(|c| c.claims), Some(claims));
            } else {
                prop_assert!(record.is_none());
            }
        }
    }

    /// Canonical paths embed type+category+slug, so inverting the forward
    /// map never loses entries.
    #[test]
    fn reverse_is_exact_inverse(per_type_rows in per_type_strategy()) {
        let resolution = resolve_collisions(extract_all(&per_type_rows));

        let reverse: HashMap<&str, &str> = resolution
            .forward
            .iter()
            .map(|(slug, mapping)| (mapping.path.as_str(), slug.as_str()))
            .collect();

        prop_assert_eq!(reverse.len(), resolution.forward.len());
        for (slug, mapping) in &resolution.forward {
            prop_assert_eq!(reverse[mapping.path.as_str()], slug.as_str());
        }
    }
}
