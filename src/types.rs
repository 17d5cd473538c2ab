//! Shared primitive aliases and small catalog enums.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique book identifier within one catalog.
pub type BookId = String;
/// Publication year.
pub type Year = i32;

/// Genres offered to callers when entering a book. Not enforced.
pub const SUGGESTED_GENRES: [&str; 11] = [
    "Fiction",
    "Non-Fiction",
    "Mystery",
    "Science Fiction",
    "Fantasy",
    "Romance",
    "Horror",
    "Thriller",
    "Biography",
    "History",
    "Other",
];

/// Text field a search matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    /// Book title.
    Title,
    /// Book author.
    Author,
}

/// Whether a book has been read, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadStatus {
    /// Book was read.
    Read,
    /// Book was not read yet.
    Unread,
}

impl From<bool> for ReadStatus {
    fn from(read: bool) -> Self {
        if read { Self::Read } else { Self::Unread }
    }
}

impl fmt::Display for ReadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => f.write_str("Read"),
            Self::Unread => f.write_str("Unread"),
        }
    }
}
