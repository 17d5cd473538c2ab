use hashbrown::HashSet;
use thiserror::Error;
use uuid::Uuid;

use crate::{
    book::{BookDraft, BookRecord, title_from_label},
    op::CatalogOp,
    types::BookId,
};

use super::seed::seed_records;

/// Catalog invariant violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A record with this id is already in the catalog.
    #[error("book {0} already exists")]
    AlreadyExists(BookId),
    /// The same id appears more than once in the given records.
    #[error("duplicate book id {0}")]
    DuplicateId(BookId),
}

/// Ordered collection of books for the current session.
///
/// Insertion order is preserved and every id is unique. Mutations are
/// tracked as pending ops until [`Catalog::drain_pending_ops`] is called
/// after a successful save.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<BookRecord>,
    pending_ops: Vec<CatalogOp>,
}

impl Catalog {
    /// Empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The two-record default catalog.
    pub fn seeded() -> Self {
        Self {
            records: seed_records(),
            pending_ops: Vec::new(),
        }
    }

    /// Catalog over `records` in the given order. Rejects repeated ids.
    pub fn from_records(records: Vec<BookRecord>) -> Result<Self, StoreError> {
        if let Some(id) = first_duplicate_id(&records) {
            return Err(StoreError::DuplicateId(id));
        }

        Ok(Self {
            records,
            pending_ops: Vec::new(),
        })
    }

    /// Catalog over `records`, giving every repeat of an earlier id a fresh
    /// one. No record is dropped; each change is kept as a pending
    /// [`CatalogOp::Reassigned`] so the next save writes the repaired ids.
    pub fn from_records_repairing(mut records: Vec<BookRecord>) -> Self {
        let mut seen: HashSet<BookId> = HashSet::with_capacity(records.len());
        let mut pending_ops = Vec::new();

        for rec in &mut records {
            if seen.contains(&rec.id) {
                let fresh = Uuid::now_v7().to_string();
                let old = std::mem::replace(&mut rec.id, fresh.clone());
                pending_ops.push(CatalogOp::Reassigned { old, new: fresh });
            }
            seen.insert(rec.id.clone());
        }

        Self {
            records,
            pending_ops,
        }
    }

    /// Appends a new record built from `draft` and returns its fresh id.
    pub fn insert(&mut self, draft: BookDraft) -> BookId {
        let id = Uuid::now_v7().to_string();
        self.push(draft.into_record(id.clone()));
        id
    }

    /// Appends a record carrying its own id.
    pub fn insert_record(&mut self, rec: BookRecord) -> Result<BookId, StoreError> {
        if self.get(&rec.id).is_some() {
            return Err(StoreError::AlreadyExists(rec.id));
        }
        let id = rec.id.clone();
        self.push(rec);
        Ok(id)
    }

    /// Removes every record whose title equals `title` exactly.
    ///
    /// Returns how many records were removed; zero is not an error.
    pub fn delete_by_title(&mut self, title: &str) -> usize {
        self.remove_where(|rec| rec.title == title)
    }

    /// Removes by the title part of a `"<title> by <author>"` label.
    pub fn delete_by_label(&mut self, label: &str) -> usize {
        self.delete_by_title(title_from_label(label))
    }

    /// Removes the single record with `id`.
    pub fn remove_by_id(&mut self, id: &str) -> Option<BookRecord> {
        let pos = self.records.iter().position(|rec| rec.id == id)?;
        let rec = self.records.remove(pos);
        self.pending_ops.push(CatalogOp::Removed {
            ids: vec![rec.id.clone()],
        });
        Some(rec)
    }

    /// Record with `id`, if present.
    pub fn get(&self, id: &str) -> Option<&BookRecord> {
        self.records.iter().find(|rec| rec.id == id)
    }

    /// All records in catalog order.
    pub fn records(&self) -> &[BookRecord] {
        &self.records
    }

    /// Iterates records in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, BookRecord> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consumes the catalog, returning its records.
    pub fn into_records(self) -> Vec<BookRecord> {
        self.records
    }

    /// Mutations made since the last successful save.
    pub fn pending_ops(&self) -> &[CatalogOp] {
        &self.pending_ops
    }

    /// True when [`Catalog::pending_ops`] is non-empty.
    pub fn has_unsaved_changes(&self) -> bool {
        !self.pending_ops.is_empty()
    }

    /// Takes and clears the pending mutations.
    pub fn drain_pending_ops(&mut self) -> Vec<CatalogOp> {
        std::mem::take(&mut self.pending_ops)
    }

    fn push(&mut self, rec: BookRecord) {
        self.pending_ops.push(CatalogOp::Inserted { id: rec.id.clone() });
        self.records.push(rec);
    }

    fn remove_where(&mut self, pred: impl Fn(&BookRecord) -> bool) -> usize {
        let mut removed = Vec::new();
        self.records.retain(|rec| {
            if pred(rec) {
                removed.push(rec.id.clone());
                false
            } else {
                true
            }
        });

        let count = removed.len();
        if count > 0 {
            self.pending_ops.push(CatalogOp::Removed { ids: removed });
        }
        count
    }
}

fn first_duplicate_id(records: &[BookRecord]) -> Option<BookId> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(records.len());
    records
        .iter()
        .find(|rec| !seen.insert(rec.id.as_str()))
        .map(|rec| rec.id.clone())
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a BookRecord;
    type IntoIter = std::slice::Iter<'a, BookRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
