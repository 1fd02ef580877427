//! Core type definitions for the slugmap registry.
//!
//! This crate defines the plain data the registry pipeline passes around:
//! - Content-type configuration: which collections exist, in what priority
//!   order, and where each one's category segment comes from
//! - Raw store rows and the slug→path mappings derived from them
//! - Collision records for slugs claimed by more than one content type
//!
//! Everything here is I/O-free and synchronous. Store access lives in
//! `slugmap-store`, caching and resolution in `slugmap-registry`.

mod config;
mod mapping;

pub use config::{default_content_types, CategoryField, ContentType, UNCATEGORIZED};
pub use mapping::{CollisionRecord, RawEntry, SlugMapping};
