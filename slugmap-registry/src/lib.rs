//! Global slug registry for the content platform.
//!
//! Slugs are unique only within their own content type, yet authors want
//! to link by bare slug alone. This crate builds the one global
//! slug→canonical-path index that makes that work:
//!
//! - **Extraction**: each configured type's `(slug, category)` rows become
//!   `/type/category/slug` mappings
//! - **Collision resolution**: types are merged in a fixed priority order;
//!   the first type to claim a slug wins, deterministically
//! - **Caching**: the resolved index is published as an immutable
//!   snapshot, served lock-light for a TTL, and rebuilt on demand with
//!   single-flight semantics under concurrent lookups
//!
//! The routing layer holds one [`SlugRegistry`] and calls
//! [`resolve`](SlugRegistry::resolve) on candidate bare-slug URL segments;
//! a hit becomes a redirect to the canonical path, a miss falls through to
//! normal not-found handling (optionally via
//! [`suggest`](SlugRegistry::suggest)).

mod error;
mod extract;
mod registry;
mod resolve;
mod suggest;

pub use error::{RegistryError, RegistryResult};
pub use extract::extract_mappings;
pub use registry::{RegistryConfig, RegistrySnapshot, SlugRegistry};
pub use resolve::{resolve_collisions, Resolution};
pub use suggest::Suggestion;
