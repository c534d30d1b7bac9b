//! Facet extraction
//!
//! Derives the option lists offered for the categorical filters. Language and
//! country options come from the catalog itself; page-range and century
//! options are the fixed bucket lists.

use crate::Book;
use crate::filters::{Century, PageRange};
use serde::Serialize;
use std::collections::HashSet;

/// A categorical record field offered as a filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    Language,
    Country,
}

impl Facet {
    /// Read this facet's value from a record
    #[must_use]
    pub fn value(self, book: &Book) -> &str {
        match self {
            Self::Language => &book.language,
            Self::Country => &book.country,
        }
    }
}

/// Distinct values of `facet` in first-occurrence order
///
/// Empty values are skipped: they are data defects, not selectable options.
#[must_use]
pub fn distinct_values(books: &[Book], facet: Facet) -> Vec<String> {
    let mut seen = HashSet::new();
    books
        .iter()
        .map(|book| facet.value(book))
        .filter(|value| !value.is_empty() && seen.insert(*value))
        .map(str::to_string)
        .collect()
}

/// Render-ready option lists for every filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOptions {
    pub languages: Vec<String>,
    pub countries: Vec<String>,
    pub page_ranges: Vec<PageRange>,
    pub centuries: Vec<Century>,
}

impl FacetOptions {
    /// Derive options from a slice of records
    #[must_use]
    pub fn from_books(books: &[Book]) -> Self {
        Self {
            languages: distinct_values(books, Facet::Language),
            countries: distinct_values(books, Facet::Country),
            page_ranges: PageRange::ALL.to_vec(),
            centuries: Century::ALL.to_vec(),
        }
    }

    /// Derive options from a catalog
    #[must_use]
    pub fn from_catalog(catalog: &super::Catalog) -> Self {
        Self::from_books(catalog.books())
    }
}
