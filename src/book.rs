//! Book domain record, insert draft, and boundary validation.

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{BookId, ReadStatus, Year};

/// Earliest publication year accepted at insert time by default.
pub const MIN_YEAR: Year = 1000;

/// Separator between title and author in a selection label.
const LABEL_SEPARATOR: &str = " by ";

/// Fully materialized catalog entry, as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    /// Unique identifier within the catalog.
    pub id: BookId,
    /// Book title.
    pub title: String,
    /// Book author.
    pub author: String,
    /// Publication year. Range-checked only when drafted.
    pub year: Year,
    /// Freeform genre.
    pub genre: String,
    /// True once the book has been read.
    pub read: bool,
}

impl BookRecord {
    /// Read/unread status for display.
    pub fn status(&self) -> ReadStatus {
        ReadStatus::from(self.read)
    }

    /// Selection label in the form `"<title> by <author>"`.
    pub fn label(&self) -> String {
        format!("{}{}{}", self.title, LABEL_SEPARATOR, self.author)
    }
}

/// Extracts the title part of a label built by [`BookRecord::label`].
///
/// Splits at the first `" by "`, so a title that itself contains `" by "`
/// comes back truncated. A label without the separator is returned whole.
pub fn title_from_label(label: &str) -> &str {
    label
        .split_once(LABEL_SEPARATOR)
        .map_or(label, |(title, _)| title)
}

/// Rejected draft field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Title is empty or whitespace.
    #[error("title is required")]
    EmptyTitle,
    /// Author is empty or whitespace.
    #[error("author is required")]
    EmptyAuthor,
    /// Year outside the accepted range.
    #[error("year {year} is outside {min}..={max}")]
    YearOutOfRange {
        /// Offending year.
        year: Year,
        /// Lowest accepted year.
        min: Year,
        /// Highest accepted year.
        max: Year,
    },
}

/// Insert payload used to create a new [`BookRecord`].
///
/// The store assigns the id and does not validate; callers run
/// [`BookDraft::validate`] before inserting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDraft {
    /// Book title.
    pub title: String,
    /// Book author.
    pub author: String,
    /// Publication year.
    pub year: Year,
    /// Freeform genre.
    pub genre: String,
    /// True once the book has been read.
    pub read: bool,
}

impl BookDraft {
    /// Checks required fields and the year against `MIN_YEAR..=current year`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validate_range(MIN_YEAR, current_year())
    }

    /// Same as [`BookDraft::validate`] with an explicit upper year bound.
    pub fn validate_for_year(&self, current_year: Year) -> Result<(), ValidationError> {
        self.validate_range(MIN_YEAR, current_year)
    }

    /// Checks required fields and that `min <= year <= max`.
    pub fn validate_range(&self, min: Year, max: Year) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.author.trim().is_empty() {
            return Err(ValidationError::EmptyAuthor);
        }
        if !(min..=max).contains(&self.year) {
            return Err(ValidationError::YearOutOfRange {
                year: self.year,
                min,
                max,
            });
        }
        Ok(())
    }

    pub(crate) fn into_record(self, id: BookId) -> BookRecord {
        BookRecord {
            id,
            title: self.title,
            author: self.author,
            year: self.year,
            genre: self.genre,
            read: self.read,
        }
    }
}

/// Current calendar year in local time.
pub fn current_year() -> Year {
    Local::now().year()
}
