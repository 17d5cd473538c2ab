//! Mutation records kept until the catalog is persisted.

use crate::types::BookId;

/// One in-memory mutation not yet written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogOp {
    /// A record was appended.
    Inserted {
        /// Appended record id.
        id: BookId,
    },
    /// A repeated id was replaced with a fresh one.
    Reassigned {
        /// Id the record was loaded with.
        old: BookId,
        /// Id it carries now.
        new: BookId,
    },
    /// Records were removed.
    Removed {
        /// Ids of removed records, in former catalog order.
        ids: Vec<BookId>,
    },
}

impl CatalogOp {
    /// Number of records this op touched.
    pub fn affected(&self) -> usize {
        match self {
            Self::Inserted { .. } | Self::Reassigned { .. } => 1,
            Self::Removed { ids } => ids.len(),
        }
    }
}
