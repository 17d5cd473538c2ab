use proptest::prelude::*;

use bookshelf::{
    book::{BookDraft, BookRecord},
    core::store::Catalog,
    query::{search::search, stats::stats},
    types::SearchField,
};

const TITLES: [&str; 5] = ["Dune", "Emma", "Ubik", "Beloved", "Solaris"];
const GENRES: [&str; 4] = ["Fiction", "Horror", "History", "Other"];

#[derive(Debug, Clone)]
enum Action {
    Insert { title: u8, genre: u8, read: bool },
    DeleteTitle { title: u8 },
    RemoveAt { target: u8 },
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => (0u8..5, 0u8..4, any::<bool>())
            .prop_map(|(title, genre, read)| Action::Insert { title, genre, read }),
        1 => (0u8..5).prop_map(|title| Action::DeleteTitle { title }),
        1 => any::<u8>().prop_map(|target| Action::RemoveAt { target }),
    ]
}

fn draft(title: u8, genre: u8, read: bool) -> BookDraft {
    BookDraft {
        title: TITLES[usize::from(title)].to_string(),
        author: "Anon".to_string(),
        year: 1950,
        genre: GENRES[usize::from(genre)].to_string(),
        read,
    }
}

fn snapshot(catalog: &Catalog) -> Vec<BookRecord> {
    catalog.records().to_vec()
}

proptest! {
    #[test]
    fn random_mutations_keep_catalog_invariants(actions in prop::collection::vec(action_strategy(), 1..120)) {
        let mut catalog = Catalog::seeded();

        for action in actions {
            let before = snapshot(&catalog);
            match action {
                Action::Insert { title, genre, read } => {
                    let id = catalog.insert(draft(title, genre, read));
                    prop_assert_eq!(&catalog.records()[..before.len()], &before[..]);
                    prop_assert_eq!(catalog.records().last().map(|r| r.id.clone()), Some(id));
                }
                Action::DeleteTitle { title } => {
                    let title = TITLES[usize::from(title)];
                    let removed = catalog.delete_by_title(title);
                    let expected: Vec<BookRecord> =
                        before.iter().filter(|r| r.title != title).cloned().collect();
                    prop_assert_eq!(removed, before.len() - expected.len());
                    prop_assert_eq!(snapshot(&catalog), expected);
                }
                Action::RemoveAt { target } => {
                    if before.is_empty() {
                        continue;
                    }
                    let id = before[usize::from(target) % before.len()].id.clone();
                    prop_assert!(catalog.remove_by_id(&id).is_some());
                    prop_assert_eq!(catalog.len(), before.len() - 1);
                }
            }

            let ids: std::collections::BTreeSet<&str> =
                catalog.iter().map(|r| r.id.as_str()).collect();
            prop_assert_eq!(ids.len(), catalog.len());

            let s = stats(&catalog);
            prop_assert_eq!(s.genre_histogram.total(), s.total);
            prop_assert!(s.read_count <= s.total);
            prop_assert!((0.0..=100.0).contains(&s.percent_read));
        }
    }

    #[test]
    fn search_hits_are_an_ordered_subsequence(term in "[a-zA-Z]{1,3}") {
        let mut catalog = Catalog::seeded();
        for (i, title) in TITLES.iter().enumerate() {
            catalog.insert(BookDraft {
                title: title.to_string(),
                author: format!("Author {i}"),
                year: 2000,
                genre: "Other".to_string(),
                read: false,
            });
        }

        let hits = search(&catalog, SearchField::Title, &term);
        let expected: Vec<&BookRecord> = catalog
            .iter()
            .filter(|r| r.title.to_lowercase().contains(&term.to_lowercase()))
            .collect();
        prop_assert_eq!(hits, expected);
    }
}
