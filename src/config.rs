//! Catalog location and insert-time limits.

use std::path::PathBuf;

use crate::{
    book::{BookDraft, MIN_YEAR, ValidationError, current_year},
    types::Year,
};

/// Well-known catalog file name, relative to the working directory.
pub const DEFAULT_LIBRARY_PATH: &str = "library.json";

/// Settings for a catalog file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Location of the JSON catalog.
    pub path: PathBuf,
    /// Earliest publication year accepted for new books.
    pub min_year: Year,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_LIBRARY_PATH),
            min_year: MIN_YEAR,
        }
    }
}

impl CatalogConfig {
    /// Default settings pointing at `path`.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Validates `draft` against `min_year..=current year`.
    pub fn validate(&self, draft: &BookDraft) -> Result<(), ValidationError> {
        draft.validate_range(self.min_year, current_year())
    }
}
