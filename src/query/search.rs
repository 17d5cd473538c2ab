use crate::{book::BookRecord, core::store::Catalog, types::SearchField};

impl SearchField {
    /// The record text this field selects.
    pub fn value_of<'a>(&self, rec: &'a BookRecord) -> &'a str {
        match self {
            Self::Title => &rec.title,
            Self::Author => &rec.author,
        }
    }
}

/// Records whose `field` contains `term`, ignoring case, in catalog order.
///
/// An empty term matches nothing.
pub fn search<'a>(catalog: &'a Catalog, field: SearchField, term: &str) -> Vec<&'a BookRecord> {
    if term.is_empty() {
        return Vec::new();
    }

    let needle = term.to_lowercase();
    catalog
        .iter()
        .filter(|rec| field.value_of(rec).to_lowercase().contains(&needle))
        .collect()
}

/// Owned copies of [`search`] hits.
pub fn search_cloned(catalog: &Catalog, field: SearchField, term: &str) -> Vec<BookRecord> {
    search(catalog, field, term).into_iter().cloned().collect()
}
