//! In-memory authoritative catalog and its default seed.

/// Default two-book seed catalog.
pub mod seed;
/// Authoritative ordered book collection.
pub mod store;
