//! The registry cache: rebuild orchestration, TTL staleness, single-flight.

use crate::error::RegistryResult;
use crate::extract::extract_mappings;
use crate::resolve::{resolve_collisions, Resolution};
use crate::suggest::{closest_slug, Suggestion};
use slugmap_store::SlugSource;
use slugmap_types::{default_content_types, CollisionRecord, ContentType, SlugMapping};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Configuration for the registry cache.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// How long a published snapshot stays fresh.
    pub ttl: Duration,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60),
        }
    }
}

/// The complete, immutable result of one registry rebuild.
///
/// Shared as `Arc<RegistrySnapshot>`; readers never need further
/// synchronization.
#[derive(Debug)]
pub struct RegistrySnapshot {
    pub(crate) built_at: Instant,
    pub(crate) forward: HashMap<String, SlugMapping>,
    pub(crate) reverse: HashMap<String, String>,
    pub(crate) collisions: Vec<CollisionRecord>,
}

impl RegistrySnapshot {
    fn empty() -> Self {
        Self {
            built_at: Instant::now(),
            forward: HashMap::new(),
            reverse: HashMap::new(),
            collisions: Vec::new(),
        }
    }

    /// When this snapshot was built.
    #[must_use]
    pub fn built_at(&self) -> Instant {
        self.built_at
    }

    /// The resolved slug→mapping table.
    #[must_use]
    pub fn forward(&self) -> &HashMap<String, SlugMapping> {
        &self.forward
    }

    /// The canonical-path→slug table (exact inverse of [`forward`](Self::forward)).
    #[must_use]
    pub fn reverse(&self) -> &HashMap<String, String> {
        &self.reverse
    }

    /// Slugs claimed by more than one content type, sorted by slug.
    #[must_use]
    pub fn collisions(&self) -> &[CollisionRecord] {
        &self.collisions
    }

    /// Number of resolved mappings.
    #[must_use]
    pub fn mapping_count(&self) -> usize {
        self.forward.len()
    }

    /// Number of colliding slugs.
    #[must_use]
    pub fn collision_count(&self) -> usize {
        self.collisions.len()
    }
}

/// A published snapshot plus its staleness override.
struct Published {
    snapshot: Arc<RegistrySnapshot>,
    /// Set by [`SlugRegistry::invalidate`]; makes the next freshness check
    /// fail regardless of TTL.
    invalidated: bool,
}

/// The global slug registry.
///
/// Resolves bare slugs to canonical `/type/category/slug` paths from a
/// TTL-cached snapshot, rebuilding on demand from the content store.
/// Construct one instance and share it by reference with the routing
/// layer; all methods take `&self` and are safe under concurrent use.
pub struct SlugRegistry {
    source: Arc<dyn SlugSource>,
    types: Vec<ContentType>,
    config: RegistryConfig,
    /// Static vanity overlay, consulted before the snapshot and kept out
    /// of the collision machinery.
    aliases: HashMap<String, SlugMapping>,
    published: RwLock<Option<Published>>,
    /// Guards the Empty/Building transition. Fresh reads never touch it.
    rebuild_lock: Mutex<()>,
}

impl SlugRegistry {
    /// Creates a registry over `source` with an explicit type list
    /// (priority order) and configuration.
    pub fn new(source: Arc<dyn SlugSource>, types: Vec<ContentType>, config: RegistryConfig) -> Self {
        Self {
            source,
            types,
            config,
            aliases: HashMap::new(),
            published: RwLock::new(None),
            rebuild_lock: Mutex::new(()),
        }
    }

    /// Creates a registry with the platform's default content types and
    /// configuration.
    pub fn with_defaults(source: Arc<dyn SlugSource>) -> Self {
        Self::new(source, default_content_types(), RegistryConfig::default())
    }

    /// Registers a vanity alias: `alias` resolves to `target`'s canonical
    /// path ahead of anything in the store.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>, target: SlugMapping) -> Self {
        self.aliases.insert(alias.into(), target);
        self
    }

    /// Returns the configured content types in priority order.
    #[must_use]
    pub fn types(&self) -> &[ContentType] {
        &self.types
    }

    // ── Lookup API ───────────────────────────────────────────────

    /// Resolves a bare slug to its canonical path.
    ///
    /// `Ok(None)` means the slug is unknown; that is a normal outcome, not
    /// an error.
    pub async fn resolve(&self, slug: &str) -> RegistryResult<Option<String>> {
        if let Some(target) = self.aliases.get(slug) {
            return Ok(Some(target.path.clone()));
        }
        let snapshot = self.current().await?;
        Ok(snapshot.forward.get(slug).map(|m| m.path.clone()))
    }

    /// Resolves a canonical path back to its bare slug.
    pub async fn reverse_resolve(&self, path: &str) -> RegistryResult<Option<String>> {
        let snapshot = self.current().await?;
        Ok(snapshot.reverse.get(path).cloned())
    }

    /// Returns the current snapshot, rebuilding first if it is absent or
    /// stale.
    pub async fn snapshot(&self) -> RegistryResult<Arc<RegistrySnapshot>> {
        self.current().await
    }

    /// Marks the published snapshot stale without discarding it.
    ///
    /// Nothing is rebuilt eagerly: the next lookup observes the staleness
    /// and rebuilds before answering, even if the TTL has not elapsed.
    pub async fn invalidate(&self) {
        let mut published = self.published.write().await;
        if let Some(published) = published.as_mut() {
            published.invalidated = true;
        }
    }

    /// Returns the known slug closest to `input` within `max_distance`
    /// edits, for "did you mean" handling on missed lookups.
    pub async fn suggest(
        &self,
        input: &str,
        max_distance: usize,
    ) -> RegistryResult<Option<Suggestion>> {
        let snapshot = self.current().await?;
        Ok(closest_slug(&snapshot, input, max_distance))
    }

    // ── Rebuild orchestration ────────────────────────────────────

    /// Returns the published snapshot if it is fresh.
    async fn fresh(&self) -> Option<Arc<RegistrySnapshot>> {
        let published = self.published.read().await;
        published
            .as_ref()
            .filter(|p| !p.invalidated && p.snapshot.built_at.elapsed() < self.config.ttl)
            .map(|p| Arc::clone(&p.snapshot))
    }

    async fn current(&self) -> RegistryResult<Arc<RegistrySnapshot>> {
        if let Some(snapshot) = self.fresh().await {
            return Ok(snapshot);
        }
        // Single-flight: the first caller to get the lock rebuilds; late
        // arrivals block here, then find the snapshot it published on the
        // re-check and return it without touching the store.
        let _guard = self.rebuild_lock.lock().await;
        if let Some(snapshot) = self.fresh().await {
            return Ok(snapshot);
        }
        self.rebuild().await
    }

    /// Runs a full rebuild and publishes the result. Caller must hold the
    /// rebuild lock.
    async fn rebuild(&self) -> RegistryResult<Arc<RegistrySnapshot>> {
        let snapshot = match self.build() {
            Ok(snapshot) => Arc::new(snapshot),
            Err(e) => {
                // Store unreachable: publish an empty snapshot so other
                // callers get clean not-found answers until the next
                // rebuild window, and surface the error to whoever
                // triggered this rebuild.
                warn!(error = %e, "registry rebuild failed, publishing empty snapshot");
                let empty = Arc::new(RegistrySnapshot::empty());
                *self.published.write().await = Some(Published {
                    snapshot: empty,
                    invalidated: false,
                });
                return Err(e);
            }
        };
        info!(
            mappings = snapshot.mapping_count(),
            collisions = snapshot.collision_count(),
            "published registry snapshot"
        );
        *self.published.write().await = Some(Published {
            snapshot: Arc::clone(&snapshot),
            invalidated: false,
        });
        Ok(snapshot)
    }

    /// One full pass over every configured type: fetch, extract, resolve.
    fn build(&self) -> RegistryResult<RegistrySnapshot> {
        let reader = self.source.connect()?;

        let mut per_type = Vec::with_capacity(self.types.len());
        for ty in &self.types {
            let rows = reader.rows(ty);
            debug!(type_id = %ty.id, rows = rows.len(), "scanned content type");
            per_type.push(extract_mappings(ty, rows));
        }

        let Resolution {
            forward,
            collisions,
        } = resolve_collisions(per_type);

        // Paths embed type+category+slug, so this inversion cannot lose
        // entries.
        let reverse = forward
            .iter()
            .map(|(slug, mapping)| (mapping.path.clone(), slug.clone()))
            .collect();

        Ok(RegistrySnapshot {
            built_at: Instant::now(),
            forward,
            reverse,
            collisions,
        })
    }
}
