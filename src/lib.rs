//! Single-user book catalog kept in memory and persisted as a JSON file.
//!
//! # Examples
//!
//! In-memory usage with [`core::store::Catalog`]:
//! ```
//! use bookshelf::{
//!     book::BookDraft,
//!     core::store::Catalog,
//!     query::{search::search, stats::stats},
//!     types::SearchField,
//! };
//!
//! let mut catalog = Catalog::seeded();
//! let draft = BookDraft {
//!     title: "Dune".to_string(),
//!     author: "Frank Herbert".to_string(),
//!     year: 1965,
//!     genre: "Science Fiction".to_string(),
//!     read: true,
//! };
//! draft.validate().expect("valid draft");
//! catalog.insert(draft);
//!
//! assert_eq!(catalog.delete_by_title("1984"), 1);
//! assert_eq!(search(&catalog, SearchField::Author, "herbert").len(), 1);
//! assert_eq!(stats(&catalog).read_count, 2);
//! ```
//!
//! File-backed usage with [`persist::json::JsonFileBackend`]:
//! ```no_run
//! use bookshelf::persist::json::JsonFileBackend;
//!
//! let mut backend = JsonFileBackend::open("library.json");
//! let mut catalog = backend.load().into_catalog();
//! catalog.delete_by_title("1984");
//! if backend.save(&mut catalog).is_err() {
//!     eprintln!("changes not saved");
//! }
//! ```
#![deny(missing_docs)]

/// Book records, drafts, and insert-time validation.
pub mod book;
/// Catalog file location and limits.
pub mod config;
/// In-memory catalog store and default seed.
pub mod core;
/// Pending mutation records.
pub mod op;
/// Catalog persistence.
pub mod persist;
/// Search and statistics over a catalog.
pub mod query;
/// Shared primitive types and enums.
pub mod types;

use crate::{
    config::CatalogConfig,
    core::store::Catalog,
    persist::{LoadOutcome, SaveResult, json::JsonFileBackend},
};

/// Loads `library.json` from the working directory, or the seed catalog.
pub fn load() -> LoadOutcome {
    JsonFileBackend::new(&CatalogConfig::default()).load()
}

/// Rewrites `library.json` in the working directory with `catalog`.
pub fn save(catalog: &mut Catalog) -> SaveResult {
    JsonFileBackend::new(&CatalogConfig::default()).save(catalog)
}
