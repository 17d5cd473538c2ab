use bookshelf::{
    book::BookDraft,
    core::store::Catalog,
    query::{
        search::{search, search_cloned},
        stats::{GenreCount, GenreHistogram, stats},
    },
    types::{SUGGESTED_GENRES, SearchField},
};

fn add(catalog: &mut Catalog, title: &str, author: &str, genre: &str, read: bool) {
    catalog.insert(BookDraft {
        title: title.to_string(),
        author: author.to_string(),
        year: 1990,
        genre: genre.to_string(),
        read,
    });
}

#[test]
fn title_search_is_case_insensitive_substring() {
    let catalog = Catalog::seeded();
    let hits = search(&catalog, SearchField::Title, "great");

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "The Great Gatsby");
    assert_eq!(search(&catalog, SearchField::Title, "GATSBY").len(), 1);
    assert!(search(&catalog, SearchField::Title, "orwell").is_empty());
}

#[test]
fn author_search_preserves_catalog_order() {
    let mut catalog = Catalog::seeded();
    add(&mut catalog, "Animal Farm", "George Orwell", "Satire", true);
    add(&mut catalog, "Homage to Catalonia", "george orwell", "Memoir", false);

    let titles: Vec<String> = search_cloned(&catalog, SearchField::Author, "Orwell")
        .into_iter()
        .map(|r| r.title)
        .collect();
    assert_eq!(titles, vec!["1984", "Animal Farm", "Homage to Catalonia"]);
}

#[test]
fn empty_term_matches_nothing() {
    let catalog = Catalog::seeded();
    assert!(search(&catalog, SearchField::Title, "").is_empty());
    assert!(search(&catalog, SearchField::Author, "").is_empty());
}

#[test]
fn stats_on_empty_catalog_are_zero() {
    let s = stats(&Catalog::new());

    assert_eq!(s.total, 0);
    assert_eq!(s.read_count, 0);
    assert_eq!(s.percent_read, 0.0);
    assert!(s.genre_histogram.is_empty());
    assert_eq!(s.percent_read_label(), "0.0% of books read");
}

#[test]
fn stats_on_seed_catalog() {
    let s = stats(&Catalog::seeded());

    assert_eq!(s.total, 2);
    assert_eq!(s.read_count, 1);
    assert_eq!(s.unread_count(), 1);
    assert_eq!(s.percent_read, 50.0);
    assert_eq!(s.progress(), 0.5);
    assert_eq!(s.percent_read_label(), "50.0% of books read");
    assert_eq!(s.genre_histogram.get("Fiction"), Some(1));
    assert_eq!(s.genre_histogram.get("Dystopian"), Some(1));
    assert_eq!(s.genre_histogram.get("Horror"), None);
}

#[test]
fn histogram_sorts_by_count_with_first_seen_ties() {
    let mut catalog = Catalog::new();
    add(&mut catalog, "a", "x", "Mystery", false);
    add(&mut catalog, "b", "x", "Fantasy", false);
    add(&mut catalog, "c", "x", "Horror", false);
    add(&mut catalog, "d", "x", "Fantasy", true);
    add(&mut catalog, "e", "x", "Horror", false);
    add(&mut catalog, "f", "x", "Romance", false);

    let hist = GenreHistogram::from_records(&catalog);
    let first_seen: Vec<&str> = hist.iter().map(|e| e.genre.as_str()).collect();
    assert_eq!(first_seen, vec!["Mystery", "Fantasy", "Horror", "Romance"]);

    let sorted = hist.sorted_by_count();
    let expected = [("Fantasy", 2), ("Horror", 2), ("Mystery", 1), ("Romance", 1)];
    assert_eq!(
        sorted,
        expected
            .iter()
            .map(|(genre, count)| GenreCount {
                genre: genre.to_string(),
                count: *count,
            })
            .collect::<Vec<_>>()
    );
    assert_eq!(hist.total(), catalog.len());
}

#[test]
fn one_third_read_rounds_in_label_only() {
    let mut catalog = Catalog::new();
    add(&mut catalog, "a", "x", "Other", true);
    add(&mut catalog, "b", "x", "Other", false);
    add(&mut catalog, "c", "x", "Other", false);

    let s = stats(&catalog);
    assert!((s.percent_read - 100.0 / 3.0).abs() < 1e-9);
    assert_eq!(s.percent_read_label(), "33.3% of books read");
    assert_eq!(s.genre_histogram.len(), 1);
}

#[test]
fn genres_are_freeform() {
    assert!(!SUGGESTED_GENRES.contains(&"Dystopian"));

    let mut catalog = Catalog::new();
    add(&mut catalog, "a", "x", "Cozy Solarpunk", false);
    assert_eq!(stats(&catalog).genre_histogram.get("Cozy Solarpunk"), Some(1));
}
