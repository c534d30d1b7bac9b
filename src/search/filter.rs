//! Record filtering used by list, shell and session views
//!
//! A record matches when every predicate holds:
//!
//! ```text
//! match = (title ∋ query ∨ author ∋ query)
//!       ∧ language ∈ languages
//!       ∧ country = country
//!       ∧ pages ∈ page_range
//!       ∧ year ∈ century
//! ```
//!
//! Each predicate is a wildcard when its criterion is empty or absent. Text
//! matching is a case-insensitive substring test.
//!
//! # Iterator Adapters
//!
//! [`BookFilterExt`] adds fluent filtering to any iterator of `&Book`:
//!
//! ```
//! use bookr::filters::FilterCriteria;
//! use bookr::search::filter::BookFilterExt;
//! # let books: Vec<bookr::Book> = Vec::new();
//!
//! let criteria = FilterCriteria::builder().search_query("orwell").build();
//! let hits = books.iter().matching(&criteria);
//! # assert!(hits.is_empty());
//! ```

use crate::Book;
use crate::filters::{Century, FilterCriteria, PageRange};
use std::collections::BTreeSet;

/// Criteria prepared for repeated evaluation
///
/// Lowercases the search query once instead of once per record.
#[derive(Debug, Clone)]
pub struct Matcher<'c> {
    query: String,
    criteria: &'c FilterCriteria,
}

impl<'c> Matcher<'c> {
    /// Prepare `criteria` for matching
    #[must_use]
    pub fn new(criteria: &'c FilterCriteria) -> Self {
        Self {
            query: criteria.search_query.to_lowercase(),
            criteria,
        }
    }

    /// Check a record against every active predicate
    #[must_use]
    pub fn matches(&self, book: &Book) -> bool {
        matches_text(book, &self.query)
            && matches_language(book, &self.criteria.languages)
            && matches_country(book, self.criteria.country.as_deref())
            && matches_page_range(book, self.criteria.page_range)
            && matches_century(book, self.criteria.century)
    }
}

/// Title or author contains `query_lower`
///
/// `query_lower` must already be lowercase; an empty query matches every record.
#[must_use]
pub fn matches_text(book: &Book, query_lower: &str) -> bool {
    query_lower.is_empty()
        || book.title.to_lowercase().contains(query_lower)
        || book.author.to_lowercase().contains(query_lower)
}

/// Record language is one of `languages`; an empty set matches every record
#[must_use]
pub fn matches_language(book: &Book, languages: &BTreeSet<String>) -> bool {
    languages.is_empty() || (!book.language.is_empty() && languages.contains(&book.language))
}

/// Record country equals `country`; `None` or empty matches every record
#[must_use]
pub fn matches_country(book: &Book, country: Option<&str>) -> bool {
    match country {
        None | Some("") => true,
        Some(country) => book.country == country,
    }
}

/// Record page count lies in `range`; `None` matches every record
#[must_use]
pub fn matches_page_range(book: &Book, range: Option<PageRange>) -> bool {
    range.is_none_or(|range| range.matches(book.pages))
}

/// Record year lies in `century`; `None` matches every record
#[must_use]
pub fn matches_century(book: &Book, century: Option<Century>) -> bool {
    century.is_none_or(|century| century.matches(book.year))
}

/// Filter records by criteria, preserving their order
///
/// # Arguments
/// * `books` - Records to filter, typically the whole catalog
/// * `criteria` - Active filters
///
/// # Returns
/// The matching records as a fully materialized vector
#[must_use]
pub fn by_criteria<'a>(
    books: impl IntoIterator<Item = &'a Book>,
    criteria: &FilterCriteria,
) -> Vec<&'a Book> {
    let matcher = Matcher::new(criteria);
    let result: Vec<&Book> = books
        .into_iter()
        .filter(|book| matcher.matches(book))
        .collect();
    tracing::debug!(matches = result.len(), "filtered records");
    result
}

/// Positions of matching records within `books`
#[must_use]
pub fn matching_indices(books: &[Book], criteria: &FilterCriteria) -> Vec<usize> {
    let matcher = Matcher::new(criteria);
    books
        .iter()
        .enumerate()
        .filter(|(_, book)| matcher.matches(book))
        .map(|(index, _)| index)
        .collect()
}

/// Extension trait for filtering iterators of `&Book`
pub trait BookFilterExt<'a>: IntoIterator<Item = &'a Book> + Sized {
    /// Keep records matching every active criterion
    fn matching(self, criteria: &FilterCriteria) -> Vec<&'a Book> {
        by_criteria(self, criteria)
    }
}

impl<'a, I> BookFilterExt<'a> for I where I: IntoIterator<Item = &'a Book> {}
