//! Catalog persistence behind a backend trait.

/// `library.json` backend.
pub mod json;

use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    book::BookRecord,
    core::store::Catalog,
    op::CatalogOp,
};

/// Failure reading or writing stored records.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Filesystem read or write failed.
    #[error("io error at {path}: {source}")]
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// Stored bytes are not a JSON array of books.
    #[error("malformed catalog at {path}: {source}")]
    Json {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },
}

impl PersistError {
    /// Builds [`PersistError::Io`] for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Builds [`PersistError::Json`] for `path`.
    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}

/// Result of a persistence call.
pub type PersistResult<T> = Result<T, PersistError>;

/// Outcome of a save. `is_ok()` is the plain success flag.
pub type SaveResult = PersistResult<()>;

/// Durable home of a catalog's records.
pub trait CatalogBackend {
    /// Reads all records, or `None` when nothing has been stored yet.
    fn read_records(&self) -> PersistResult<Option<Vec<BookRecord>>>;
    /// Replaces everything stored with `records`.
    fn write_records(&mut self, records: &[BookRecord]) -> PersistResult<()>;
}

/// Why the default seed was used instead of stored data.
#[derive(Debug)]
pub enum SeedReason {
    /// Nothing stored yet.
    Missing,
    /// Stored data could not be read or parsed.
    Unreadable(PersistError),
}

/// Result of loading a catalog. Never an error: bad or missing data falls
/// back to the seed catalog.
#[derive(Debug)]
pub enum LoadOutcome {
    /// Stored records were loaded.
    Loaded(Catalog),
    /// The default seed catalog was substituted.
    Seeded {
        /// Seed catalog.
        catalog: Catalog,
        /// Why stored data was not used.
        reason: SeedReason,
    },
}

impl LoadOutcome {
    /// The catalog, loaded or seeded.
    pub fn catalog(&self) -> &Catalog {
        match self {
            Self::Loaded(catalog) | Self::Seeded { catalog, .. } => catalog,
        }
    }

    /// Consumes the outcome, returning the catalog.
    pub fn into_catalog(self) -> Catalog {
        match self {
            Self::Loaded(catalog) | Self::Seeded { catalog, .. } => catalog,
        }
    }

    /// True when the seed was substituted.
    pub fn is_seeded(&self) -> bool {
        matches!(self, Self::Seeded { .. })
    }
}

/// Loads a catalog from `backend`, substituting the seed when nothing is
/// stored or the data cannot be read or parsed.
///
/// Records that parse are always kept; repeated ids are reassigned.
pub fn load_from<B: CatalogBackend + ?Sized>(backend: &B) -> LoadOutcome {
    let reason = match read_catalog(backend) {
        Ok(Some(catalog)) => {
            for op in catalog.pending_ops() {
                if let CatalogOp::Reassigned { old, new } = op {
                    warn!(%old, %new, "repeated book id reassigned");
                }
            }
            debug!(records = catalog.len(), "catalog loaded");
            return LoadOutcome::Loaded(catalog);
        }
        Ok(None) => {
            debug!("no stored catalog, using seed");
            SeedReason::Missing
        }
        Err(err) => {
            warn!(error = %err, "stored catalog unusable, using seed");
            SeedReason::Unreadable(err)
        }
    };

    LoadOutcome::Seeded {
        catalog: Catalog::seeded(),
        reason,
    }
}

/// Writes the whole catalog to `backend`.
///
/// Pending ops are cleared only when the write succeeds.
pub fn save_to<B: CatalogBackend + ?Sized>(backend: &mut B, catalog: &mut Catalog) -> SaveResult {
    match backend.write_records(catalog.records()) {
        Ok(()) => {
            let ops = catalog.drain_pending_ops();
            debug!(records = catalog.len(), ops = ops.len(), "catalog saved");
            Ok(())
        }
        Err(err) => {
            warn!(error = %err, "catalog save failed");
            Err(err)
        }
    }
}

fn read_catalog<B: CatalogBackend + ?Sized>(backend: &B) -> PersistResult<Option<Catalog>> {
    let Some(records) = backend.read_records()? else {
        return Ok(None);
    };
    Ok(Some(Catalog::from_records_repairing(records)))
}
