use std::cmp::Reverse;

use hashbrown::HashMap;

use crate::{book::BookRecord, core::store::Catalog};

/// Number of books sharing one genre.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreCount {
    /// Genre text, as stored.
    pub genre: String,
    /// Books with this genre.
    pub count: usize,
}

/// Genre to count mapping, kept in first-encountered genre order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenreHistogram {
    entries: Vec<GenreCount>,
}

impl GenreHistogram {
    /// Counts genres over `records`.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a BookRecord>) -> Self {
        let mut slot: HashMap<&str, usize> = HashMap::new();
        let mut entries: Vec<GenreCount> = Vec::new();

        for rec in records {
            match slot.get(rec.genre.as_str()) {
                Some(&idx) => entries[idx].count += 1,
                None => {
                    slot.insert(rec.genre.as_str(), entries.len());
                    entries.push(GenreCount {
                        genre: rec.genre.clone(),
                        count: 1,
                    });
                }
            }
        }

        Self { entries }
    }

    /// Count for `genre`, if any book has it.
    pub fn get(&self, genre: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|e| e.genre == genre)
            .map(|e| e.count)
    }

    /// Entries in first-encountered order.
    pub fn iter(&self) -> std::slice::Iter<'_, GenreCount> {
        self.entries.iter()
    }

    /// Number of distinct genres.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no genre was counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts; equals the number of records counted.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Entries by count descending. Ties keep first-encountered order.
    pub fn sorted_by_count(&self) -> Vec<GenreCount> {
        let mut sorted = self.entries.clone();
        sorted.sort_by_key(|e| Reverse(e.count));
        sorted
    }
}

/// Aggregate figures over a catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogStats {
    /// Number of books.
    pub total: usize,
    /// Books marked read.
    pub read_count: usize,
    /// `read_count / total * 100`, or `0.0` for an empty catalog.
    pub percent_read: f64,
    /// Books per genre.
    pub genre_histogram: GenreHistogram,
}

impl CatalogStats {
    /// Books not marked read.
    pub fn unread_count(&self) -> usize {
        self.total - self.read_count
    }

    /// Share of books read, in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        self.percent_read / 100.0
    }

    /// e.g. `"50.0% of books read"`.
    pub fn percent_read_label(&self) -> String {
        format!("{:.1}% of books read", self.percent_read)
    }
}

/// Totals, read share, and genre histogram for `catalog`.
pub fn stats(catalog: &Catalog) -> CatalogStats {
    let total = catalog.len();
    let read_count = catalog.iter().filter(|rec| rec.read).count();
    let percent_read = if total == 0 {
        0.0
    } else {
        read_count as f64 / total as f64 * 100.0
    };

    CatalogStats {
        total,
        read_count,
        percent_read,
        genre_histogram: GenreHistogram::from_records(catalog),
    }
}
