//! Whole-file JSON catalog storage.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{book::BookRecord, config::CatalogConfig, core::store::Catalog};

use super::{
    CatalogBackend, LoadOutcome, PersistError, PersistResult, SaveResult, load_from, save_to,
};

/// JSON array of book objects stored in a single file.
///
/// Every save rewrites the file in place; there is no temp file, rename, or
/// locking, so concurrent writers race and the last write wins.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    /// Backend for the file at `path`. The file need not exist.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backend for the file named in `config`.
    pub fn new(config: &CatalogConfig) -> Self {
        Self::open(config.path.clone())
    }

    /// Location of the catalog file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the file, falling back to the seed catalog.
    pub fn load(&self) -> LoadOutcome {
        load_from(self)
    }

    /// Rewrites the file with `catalog`.
    pub fn save(&mut self, catalog: &mut Catalog) -> SaveResult {
        save_to(self, catalog)
    }
}

impl CatalogBackend for JsonFileBackend {
    fn read_records(&self) -> PersistResult<Option<Vec<BookRecord>>> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "catalog file absent");
                return Ok(None);
            }
            Err(err) => return Err(PersistError::io(&self.path, err)),
        };

        let records = serde_json::from_slice::<Vec<BookRecord>>(&bytes)
            .map_err(|err| PersistError::json(&self.path, err))?;
        debug!(path = %self.path.display(), records = records.len(), "catalog file read");
        Ok(Some(records))
    }

    fn write_records(&mut self, records: &[BookRecord]) -> PersistResult<()> {
        let payload = serde_json::to_vec_pretty(records)
            .map_err(|err| PersistError::json(&self.path, err))?;
        std::fs::write(&self.path, payload).map_err(|err| PersistError::io(&self.path, err))?;
        debug!(path = %self.path.display(), records = records.len(), "catalog file written");
        Ok(())
    }
}
