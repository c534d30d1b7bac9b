//! Browse session state and event dispatch
//!
//! A `BrowseSession` owns everything a user can change while browsing: the
//! filter state and the favorite map. The catalog is shared and read-only.
//!
//! # Architecture
//!
//! - **`Event`**: one discrete user input; each replaces exactly one value
//! - **`BrowseSession::dispatch`**: applies an event by swapping in a new value
//! - **`BrowseSession::view`**: runs the pipeline and returns what to render
//!
//! # Workflow
//!
//! ```text
//! Session Created (unfiltered, page 1, no favorites)
//!     ↓
//! ┌─→ view(): facets + filter(catalog, criteria) → page(results, current_page)
//! │       ↓
//! │   Display layer renders, waits for input
//! │       ↓
//! │   dispatch(Event)
//! │   ├─ Set*Filter / SetSearchQuery → new FilterCriteria
//! │   ├─ SetCurrentPage → new FilterState
//! │   └─ ToggleFavorite → new FavoriteMap
//! └───────┘
//! ```
//!
//! Filter changes never reset the current page. When a narrower filter leaves
//! the current page past the end, the view is empty and `past_end` is set so
//! the display layer can point the user back.

use super::BrowseError;
use crate::Book;
use crate::catalog::{Catalog, FacetOptions};
use crate::favorites::FavoriteMap;
use crate::filters::{Century, FilterCriteria, FilterState, PageRange};
use crate::search::{FilterCache, by_criteria, page};
use serde::Serialize;
use std::collections::BTreeSet;

/// Browse session result type
pub type Result<T> = std::result::Result<T, BrowseError>;

/// A discrete input from the display layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SetSearchQuery(String),
    SetLanguageFilter(BTreeSet<String>),
    SetCountryFilter(Option<String>),
    SetPageRangeFilter(Option<PageRange>),
    SetCenturyFilter(Option<Century>),
    SetCurrentPage(usize),
    ToggleFavorite(String),
}

/// A record on the current page with its favorite flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewItem<'a> {
    #[serde(flatten)]
    pub book: &'a Book,
    pub favorite: bool,
}

/// Everything the display layer needs to render one screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View<'a> {
    pub facets: &'a FacetOptions,
    pub filters: &'a FilterState,
    pub items: Vec<ViewItem<'a>>,
    pub page_number: usize,
    pub total_pages: usize,
    pub total_matches: usize,
    /// Current page lies beyond the last page of results
    pub past_end: bool,
    pub has_next: bool,
    pub has_previous: bool,
    pub favorites: &'a FavoriteMap,
}

/// Browse session - caller-owned filter and favorite state over a catalog
pub struct BrowseSession {
    catalog: Catalog,
    facets: FacetOptions,
    filters: FilterState,
    favorites: FavoriteMap,
    cache: Option<FilterCache>,
}

impl BrowseSession {
    /// Create an unfiltered session without result caching
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            facets: FacetOptions::from_catalog(&catalog),
            catalog,
            filters: FilterState::new(),
            favorites: FavoriteMap::new(),
            cache: None,
        }
    }

    /// Create an unfiltered session that memoizes up to `capacity` filter results
    #[must_use]
    pub fn with_cache(catalog: Catalog, capacity: u64) -> Self {
        let mut session = Self::new(catalog);
        session.cache =
            (capacity > 0).then(|| FilterCache::with_capacity(session.catalog.clone(), capacity));
        session
    }

    /// Create a new builder for constructing a `BrowseSession`
    #[must_use]
    pub fn builder() -> BrowseSessionBuilder {
        BrowseSessionBuilder::new()
    }

    /// Apply one event, replacing exactly one piece of state
    pub fn dispatch(&mut self, event: Event) {
        tracing::debug!(?event, "dispatch");
        let criteria = self.filters.criteria.clone();
        match event {
            Event::SetSearchQuery(query) => {
                self.replace_criteria(criteria.with_search_query(query));
            }
            Event::SetLanguageFilter(languages) => {
                self.replace_criteria(criteria.with_languages(languages));
            }
            Event::SetCountryFilter(country) => {
                self.replace_criteria(criteria.with_country(country));
            }
            Event::SetPageRangeFilter(range) => {
                self.replace_criteria(criteria.with_page_range(range));
            }
            Event::SetCenturyFilter(century) => {
                self.replace_criteria(criteria.with_century(century));
            }
            Event::SetCurrentPage(current_page) => {
                self.filters = self.filters.clone().with_current_page(current_page);
            }
            Event::ToggleFavorite(identity) => {
                self.favorites = self.favorites.toggle(&identity);
            }
        }
    }

    fn replace_criteria(&mut self, criteria: FilterCriteria) {
        self.filters = self.filters.clone().with_criteria(criteria);
    }

    /// All records matching the current criteria, in catalog order
    #[must_use]
    pub fn filtered(&self) -> Vec<&Book> {
        match &self.cache {
            Some(cache) => cache.filter(&self.filters.criteria),
            None => by_criteria(self.catalog.books(), &self.filters.criteria),
        }
    }

    /// Build the current view: facets, page slice and favorite flags
    #[must_use]
    pub fn view(&self) -> View<'_> {
        let filtered = self.filtered();
        let current = page(&filtered, self.filters.current_page);

        let items = current
            .items
            .iter()
            .map(|&book| ViewItem {
                book,
                favorite: self.favorites.is_favorite(book.identity()),
            })
            .collect();

        View {
            facets: &self.facets,
            filters: &self.filters,
            items,
            page_number: current.page_number,
            total_pages: current.total_pages,
            total_matches: current.total_items,
            past_end: current.is_past_end(),
            has_next: current.has_next(),
            has_previous: current.has_previous(),
            favorites: &self.favorites,
        }
    }

    /// Record at 1-based `position` on the current page
    #[must_use]
    pub fn item_on_page(&self, position: usize) -> Option<&Book> {
        let filtered = self.filtered();
        let current = page(&filtered, self.filters.current_page);
        position
            .checked_sub(1)
            .and_then(|index| current.items.get(index).copied())
    }

    /// The shared catalog
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Option lists for every filter
    #[must_use]
    pub const fn facets(&self) -> &FacetOptions {
        &self.facets
    }

    /// Current filter state
    #[must_use]
    pub const fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Current favorites
    #[must_use]
    pub const fn favorites(&self) -> &FavoriteMap {
        &self.favorites
    }
}

/// Builder for `BrowseSession`
///
/// ```
/// use bookr::browse::BrowseSession;
/// use bookr::catalog::Catalog;
///
/// let session = BrowseSession::builder()
///     .catalog(Catalog::default())
///     .cache_capacity(32)
///     .build()
///     .unwrap();
/// assert_eq!(session.filters().current_page, 1);
/// ```
#[derive(Default)]
pub struct BrowseSessionBuilder {
    catalog: Option<Catalog>,
    filters: FilterState,
    favorites: FavoriteMap,
    cache_capacity: u64,
}

impl BrowseSessionBuilder {
    /// Create a new builder with default settings (no cache)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the catalog (required)
    #[must_use]
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Start from an existing filter state
    #[must_use]
    pub fn filters(mut self, filters: FilterState) -> Self {
        self.filters = filters;
        self
    }

    /// Start from an existing favorite map
    #[must_use]
    pub fn favorites(mut self, favorites: FavoriteMap) -> Self {
        self.favorites = favorites;
        self
    }

    /// Memoize up to `capacity` filter results; zero disables caching
    #[must_use]
    pub const fn cache_capacity(mut self, capacity: u64) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Build the `BrowseSession`
    ///
    /// # Errors
    ///
    /// Returns `BrowseError::BuildError` if no catalog was provided.
    pub fn build(self) -> Result<BrowseSession> {
        let catalog = self
            .catalog
            .ok_or_else(|| BrowseError::BuildError("Catalog is required".to_string()))?;

        let cache = (self.cache_capacity > 0)
            .then(|| FilterCache::with_capacity(catalog.clone(), self.cache_capacity));

        Ok(BrowseSession {
            facets: FacetOptions::from_catalog(&catalog),
            catalog,
            filters: self.filters,
            favorites: self.favorites,
            cache,
        })
    }
}
