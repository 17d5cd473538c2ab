use crate::book::BookRecord;

/// Records used when no valid catalog file exists.
pub fn seed_records() -> Vec<BookRecord> {
    vec![
        BookRecord {
            id: "1".to_string(),
            title: "The Great Gatsby".to_string(),
            author: "F. Scott Fitzgerald".to_string(),
            year: 1925,
            genre: "Fiction".to_string(),
            read: true,
        },
        BookRecord {
            id: "2".to_string(),
            title: "1984".to_string(),
            author: "George Orwell".to_string(),
            year: 1949,
            genre: "Dystopian".to_string(),
            read: false,
        },
    ]
}
