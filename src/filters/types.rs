//! Filter data structures and types
//!
//! This module defines the value types describing what the user is currently
//! looking at:
//! - `FilterCriteria`: the search query and the four categorical/range filters
//! - `FilterState`: criteria plus the current page number
//!
//! Every field is a permissive wildcard when empty or absent. Both types are
//! plain values: changing a filter produces a new value rather than mutating
//! shared state.

use super::buckets::{Century, PageRange};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Filter criteria applied to the catalog
///
/// `Hash + Eq` so it can key the filter result cache.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct FilterCriteria {
    /// Free-text query matched against title and author; empty matches all
    #[serde(default)]
    pub search_query: String,

    /// Accepted languages (OR-membership); empty matches all
    #[serde(default)]
    pub languages: BTreeSet<String>,

    /// Exact country; `None` matches all
    #[serde(default)]
    pub country: Option<String>,

    /// Page-count bucket; `None` matches all
    #[serde(default)]
    pub page_range: Option<PageRange>,

    /// Publication-century bucket; `None` matches all
    #[serde(default)]
    pub century: Option<Century>,
}

impl FilterCriteria {
    /// Create a new filter criteria builder
    #[must_use]
    pub fn builder() -> FilterCriteriaBuilder {
        FilterCriteriaBuilder::default()
    }

    /// Create criteria that match every record
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no filter narrows the catalog
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.search_query.is_empty()
            && self.languages.is_empty()
            && self.country.is_none()
            && self.page_range.is_none()
            && self.century.is_none()
    }

    /// Replace the search query
    #[must_use]
    pub fn with_search_query(self, query: impl Into<String>) -> Self {
        Self {
            search_query: query.into(),
            ..self
        }
    }

    /// Replace the language set
    #[must_use]
    pub fn with_languages(self, languages: BTreeSet<String>) -> Self {
        Self { languages, ..self }
    }

    /// Replace the country filter
    ///
    /// An empty string clears the filter, matching the "None" option.
    #[must_use]
    pub fn with_country(self, country: Option<String>) -> Self {
        Self {
            country: country.filter(|c| !c.is_empty()),
            ..self
        }
    }

    /// Replace the page-range filter
    #[must_use]
    pub fn with_page_range(self, page_range: Option<PageRange>) -> Self {
        Self { page_range, ..self }
    }

    /// Replace the century filter
    #[must_use]
    pub fn with_century(self, century: Option<Century>) -> Self {
        Self { century, ..self }
    }
}

/// Builder for `FilterCriteria`
#[derive(Debug, Clone, Default)]
pub struct FilterCriteriaBuilder {
    search_query: String,
    languages: BTreeSet<String>,
    country: Option<String>,
    page_range: Option<PageRange>,
    century: Option<Century>,
}

impl FilterCriteriaBuilder {
    /// Set the free-text query
    #[must_use]
    pub fn search_query(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    /// Add a single accepted language
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.languages.insert(language.into());
        self
    }

    /// Set the accepted languages
    #[must_use]
    pub fn languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }

    /// Set the country
    #[must_use]
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Set the page-range bucket
    #[must_use]
    pub const fn page_range(mut self, range: PageRange) -> Self {
        self.page_range = Some(range);
        self
    }

    /// Set the century bucket
    #[must_use]
    pub const fn century(mut self, century: Century) -> Self {
        self.century = Some(century);
        self
    }

    /// Build the criteria
    #[must_use]
    pub fn build(self) -> FilterCriteria {
        FilterCriteria::new()
            .with_search_query(self.search_query)
            .with_languages(self.languages)
            .with_country(self.country)
            .with_page_range(self.page_range)
            .with_century(self.century)
    }
}

/// Complete set of current selections: criteria plus the page being viewed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct FilterState {
    #[serde(flatten)]
    pub criteria: FilterCriteria,

    /// 1-based page number; never clamped when the filtered set shrinks
    pub current_page: usize,
}

impl FilterState {
    /// Unfiltered state on the first page
    #[must_use]
    pub fn new() -> Self {
        Self {
            criteria: FilterCriteria::default(),
            current_page: 1,
        }
    }

    /// Replace the criteria, keeping the current page
    #[must_use]
    pub fn with_criteria(self, criteria: FilterCriteria) -> Self {
        Self { criteria, ..self }
    }

    /// Replace the current page
    #[must_use]
    pub fn with_current_page(self, current_page: usize) -> Self {
        Self {
            current_page,
            ..self
        }
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

impl From<FilterCriteria> for FilterState {
    fn from(criteria: FilterCriteria) -> Self {
        Self::new().with_criteria(criteria)
    }
}
