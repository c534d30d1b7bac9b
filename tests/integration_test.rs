//! Integration tests for bookr
//!
//! These tests write catalogs to temporary files and drive the complete
//! load → filter → paginate → favorite workflow through the public API.

use bookr::{
    BookrError,
    browse::{BrowseSession, Event},
    catalog::{Catalog, CatalogError, IdentityPolicy},
    commands,
    filters::{Century, FilterCriteria, PageRange},
    search::{PAGE_SIZE, by_criteria, page},
};
use std::collections::BTreeSet;
use std::io::Write;
use tempfile::NamedTempFile;

const BOOKS_JSON: &str = r#"[
  {
    "author": "Chinua Achebe",
    "country": "Nigeria",
    "imageLink": "images/things-fall-apart.jpg",
    "language": "English",
    "link": "https://en.wikipedia.org/wiki/Things_Fall_Apart\n",
    "pages": 209,
    "title": "Things Fall Apart",
    "year": 1958
  },
  {
    "author": "Hans Christian Andersen",
    "country": "Denmark",
    "imageLink": "images/fairy-tales.jpg",
    "language": "Danish",
    "link": "https://en.wikipedia.org/wiki/Fairy_Tales_Told_for_Children._First_Collection.\n",
    "pages": 784,
    "title": "Fairy tales",
    "year": 1836
  },
  {
    "author": "Dante Alighieri",
    "country": "Italy",
    "imageLink": "images/the-divine-comedy.jpg",
    "language": "Italian",
    "link": "https://en.wikipedia.org/wiki/Divine_Comedy\n",
    "pages": 928,
    "title": "The Divine Comedy",
    "year": 1315
  },
  {
    "author": "George Orwell",
    "country": "United Kingdom",
    "imageLink": "images/animal-farm.jpg",
    "language": "English",
    "link": "https://en.wikipedia.org/wiki/Animal_Farm\n",
    "pages": 112,
    "title": "Animal Farm",
    "year": 1945
  },
  {
    "author": "Jane Austen",
    "country": "United Kingdom",
    "imageLink": "images/pride-and-prejudice.jpg",
    "language": "English",
    "link": "https://en.wikipedia.org/wiki/Pride_and_Prejudice\n",
    "pages": 226,
    "title": "Pride and Prejudice",
    "year": 1813
  },
  {
    "author": "Gustave Flaubert",
    "country": "France",
    "imageLink": "images/madame-bovary.jpg",
    "language": "French",
    "link": "https://en.wikipedia.org/wiki/Madame_Bovary\n",
    "pages": 528,
    "title": "Madame Bovary",
    "year": 1857
  }
]"#;

/// Helper function to write a catalog file with the given extension
fn write_catalog(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn titles(books: &[&bookr::Book]) -> Vec<String> {
    books.iter().map(|book| book.title.clone()).collect()
}

#[test]
fn test_load_json_catalog_preserves_order() {
    let file = write_catalog(".json", BOOKS_JSON);
    let catalog = Catalog::load(file.path()).unwrap();

    assert_eq!(catalog.len(), 6);
    assert_eq!(catalog.books()[0].title, "Things Fall Apart");
    assert_eq!(catalog.books()[5].title, "Madame Bovary");
    assert_eq!(catalog.books()[1].image_link, "images/fairy-tales.jpg");
}

#[test]
fn test_load_csv_catalog() {
    let csv = "\
title,author,language,country,year,pages,imageLink,link
Animal Farm,George Orwell,English,United Kingdom,1945,112,images/animal-farm.jpg,https://en.wikipedia.org/wiki/Animal_Farm
Candide,Voltaire,French,France,1759,94,images/candide.jpg,https://en.wikipedia.org/wiki/Candide
";
    let file = write_catalog(".csv", csv);
    let catalog = Catalog::load(file.path()).unwrap();

    assert_eq!(catalog.len(), 2);
    let candide = catalog.find("Candide").unwrap();
    assert_eq!(candide.year, 1759);
    assert_eq!(candide.pages, 94);
}

#[test]
fn test_unsupported_extension_is_rejected() {
    let file = write_catalog(".yaml", "- title: Emma\n");
    let result = Catalog::load(file.path());
    assert!(matches!(result, Err(CatalogError::UnsupportedFormat(_))));
}

#[test]
fn test_malformed_json_is_an_error() {
    let file = write_catalog(".json", "[{\"title\": ");
    assert!(matches!(
        Catalog::load(file.path()),
        Err(CatalogError::Json(_))
    ));
}

#[test]
fn test_strict_identity_rejects_duplicate_titles() {
    let json = r#"[
        {"title": "Poems", "author": "Emily Dickinson"},
        {"title": "Poems", "author": "Sylvia Plath"}
    ]"#;
    let file = write_catalog(".json", json);

    let lenient = Catalog::load_with(file.path(), IdentityPolicy::Warn).unwrap();
    assert_eq!(lenient.duplicate_identities(), vec!["Poems".to_string()]);

    let strict = Catalog::load_with(file.path(), IdentityPolicy::Strict);
    assert!(matches!(strict, Err(CatalogError::DuplicateIdentity(_))));
}

#[test]
fn test_language_set_is_a_disjunction() {
    let file = write_catalog(".json", BOOKS_JSON);
    let catalog = Catalog::load(file.path()).unwrap();

    let criteria = FilterCriteria::builder()
        .languages(["Danish", "Italian"])
        .build();
    assert_eq!(
        titles(&by_criteria(catalog.books(), &criteria)),
        vec!["Fairy tales", "The Divine Comedy"]
    );
}

#[test]
fn test_filters_conjoin_across_facets() {
    let file = write_catalog(".json", BOOKS_JSON);
    let catalog = Catalog::load(file.path()).unwrap();

    let criteria = FilterCriteria::builder()
        .language("English")
        .country("United Kingdom")
        .century(Century::Nineteenth)
        .page_range(PageRange::From201To300)
        .build();
    assert_eq!(
        titles(&by_criteria(catalog.books(), &criteria)),
        vec!["Pride and Prejudice"]
    );
}

#[test]
fn test_fourteenth_century_record_matches_no_century() {
    let file = write_catalog(".json", BOOKS_JSON);
    let catalog = Catalog::load(file.path()).unwrap();

    let matched: usize = Century::ALL
        .iter()
        .map(|&century| {
            let criteria = FilterCriteria::builder().century(century).build();
            by_criteria(catalog.books(), &criteria)
                .iter()
                .filter(|book| book.title == "The Divine Comedy")
                .count()
        })
        .sum();
    assert_eq!(matched, 0);
}

#[test]
fn test_session_end_to_end() {
    let file = write_catalog(".json", BOOKS_JSON);
    let catalog = Catalog::load(file.path()).unwrap();
    let mut session = BrowseSession::with_cache(catalog, 16);

    session.dispatch(Event::SetLanguageFilter(BTreeSet::from([
        "English".to_string(),
    ])));
    session.dispatch(Event::SetSearchQuery("ANIMAL".into()));
    session.dispatch(Event::ToggleFavorite("Animal Farm".into()));

    let view = session.view();
    assert_eq!(view.total_matches, 1);
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.items[0].book.title, "Animal Farm");
    assert!(view.items[0].favorite);
    assert_eq!(view.facets.languages, vec!["English", "Danish", "Italian", "French"]);

    session.dispatch(Event::ToggleFavorite("Animal Farm".into()));
    assert!(session.favorites().is_empty());
}

#[test]
fn test_pagination_over_large_catalog() {
    let books: Vec<String> = (1..=45)
        .map(|i| format!(r#"{{"title": "Volume {i}", "language": "English", "pages": {i}}}"#))
        .collect();
    let file = write_catalog(".json", &format!("[{}]", books.join(",")));
    let catalog = Catalog::load(file.path()).unwrap();

    let everything = by_criteria(catalog.books(), &FilterCriteria::default());
    let third = page(&everything, 3);
    assert_eq!(third.total_pages, 3);
    assert_eq!(third.items.len(), 45 - 2 * PAGE_SIZE);
    assert_eq!(third.items[0].title, "Volume 41");

    let beyond = page(&everything, 4);
    assert!(beyond.items.is_empty());
    assert!(beyond.is_past_end());
}

#[test]
fn test_list_command_json_output() {
    let file = write_catalog(".json", BOOKS_JSON);
    let catalog = Catalog::load(file.path()).unwrap();

    let mut out = Vec::new();
    commands::list(
        catalog,
        FilterCriteria::builder().country("France").build(),
        1,
        &[],
        true,
        false,
        &mut out,
    )
    .unwrap();

    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["total_matches"], 1);
    assert_eq!(json["items"][0]["title"], "Madame Bovary");
    assert_eq!(json["items"][0]["imageLink"], "images/madame-bovary.jpg");
    assert_eq!(json["past_end"], false);
}

#[test]
fn test_shell_script_over_loaded_catalog() {
    let file = write_catalog(".json", BOOKS_JSON);
    let catalog = Catalog::load(file.path()).unwrap();
    let mut session = BrowseSession::new(catalog);

    let script = "lang English\npages 201-300\nfav #1\nfavs\n";
    let mut out = Vec::new();
    commands::shell(&mut session, script.as_bytes(), &mut out, true).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(
        text.lines().collect::<Vec<_>>(),
        vec![
            "Things Fall Apart",
            "Animal Farm",
            "Pride and Prejudice",
            "Things Fall Apart",
            "Pride and Prejudice",
            "Things Fall Apart",
            "Pride and Prejudice",
            "Things Fall Apart",
        ]
    );
}

#[test]
fn test_check_command_fails_on_duplicates() {
    let json = r#"[{"title": "Poems"}, {"title": "Poems"}, {"title": "Odes"}]"#;
    let file = write_catalog(".json", json);
    let catalog = Catalog::load(file.path()).unwrap();

    let mut out = Vec::new();
    let result = commands::check(&catalog, true, &mut out);
    assert!(matches!(result, Err(BookrError::CatalogError(_))));
    assert_eq!(String::from_utf8(out).unwrap(), "Poems\n");
}
