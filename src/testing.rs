//! Testing utilities for bookr
//!
//! Fixture builders for records and small catalogs.
//!
//! Only available when compiled with `cfg(test)`.

use crate::Book;
use crate::catalog::Catalog;

/// Build a record with the fields filters look at
///
/// Links are derived from the title so fixtures stay distinguishable.
pub fn book(
    title: &str,
    author: &str,
    language: &str,
    country: &str,
    year: i64,
    pages: i64,
) -> Book {
    let slug = title.to_lowercase().replace(' ', "-");
    Book {
        title: title.to_string(),
        author: author.to_string(),
        language: language.to_string(),
        country: country.to_string(),
        year,
        pages,
        image_link: format!("images/{slug}.jpg"),
        link: format!("https://en.wikipedia.org/wiki/{slug}"),
    }
}

/// A small, varied catalog with unique titles
pub fn sample_books() -> Vec<Book> {
    vec![
        book("Animal Farm", "George Orwell", "English", "United Kingdom", 1945, 112),
        book("Don Quixote", "Miguel de Cervantes", "Spanish", "Spain", 1610, 1056),
        book("Hamlet", "William Shakespeare", "English", "United Kingdom", 1603, 432),
        book("The Iliad", "Homer", "Greek", "Greece", -735, 608),
        book("Things Fall Apart", "Chinua Achebe", "English", "Nigeria", 1958, 209),
        book("Madame Bovary", "Gustave Flaubert", "French", "France", 1857, 528),
        book("The Stranger", "Albert Camus", "French", "Algeria", 1942, 185),
        book("Faust", "Johann Wolfgang von Goethe", "German", "Germany", 1832, 158),
        book("Candide", "Voltaire", "French", "France", 1759, 94),
        book("Gulliver's Travels", "Jonathan Swift", "English", "Ireland", 1726, 178),
        book("The Old Man and the Sea", "Ernest Hemingway", "English", "United States", 1952, 128),
        book("Essays", "Michel de Montaigne", "French", "France", 1595, 404),
        book("Never Let Me Go", "Kazuo Ishiguro", "English", "United Kingdom", 2005, 288),
        book("Metamorphoses", "Ovid", "Classical Latin", "Roman Empire", 8, 80),
    ]
}

/// `sample_books` wrapped in a catalog
pub fn sample_catalog() -> Catalog {
    Catalog::new(sample_books())
}

/// A catalog of `n` generated records, all in English
pub fn numbered_catalog(n: usize) -> Catalog {
    Catalog::new(
        (1..=n)
            .map(|i| book(&format!("Book {i}"), "Anon", "English", "Nowhere", 1950, 150))
            .collect(),
    )
}
