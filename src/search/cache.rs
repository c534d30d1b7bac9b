//! Memoized filter results
//!
//! The catalog never changes after load, so a set of criteria always selects
//! the same records. This cache maps criteria to the matching catalog
//! positions so repeated views (paging back and forth, toggling favorites)
//! skip re-evaluating every predicate.

use super::filter::matching_indices;
use crate::Book;
use crate::catalog::Catalog;
use crate::filters::FilterCriteria;
use moka::sync::Cache;
use std::sync::Arc;

/// Default number of distinct criteria kept
pub const DEFAULT_CAPACITY: u64 = 64;

/// Filter result cache bound to one catalog
pub struct FilterCache {
    catalog: Catalog,
    cache: Cache<FilterCriteria, Arc<[usize]>>,
}

impl FilterCache {
    /// Create a cache with [`DEFAULT_CAPACITY`]
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self::with_capacity(catalog, DEFAULT_CAPACITY)
    }

    /// Create a cache holding at most `max_capacity` criteria
    #[must_use]
    pub fn with_capacity(catalog: Catalog, max_capacity: u64) -> Self {
        let cache = Cache::builder().max_capacity(max_capacity).build();
        Self { catalog, cache }
    }

    /// Catalog positions of records matching `criteria`
    pub fn indices(&self, criteria: &FilterCriteria) -> Arc<[usize]> {
        if let Some(hit) = self.cache.get(criteria) {
            tracing::trace!(matches = hit.len(), "filter cache hit");
            return hit;
        }

        let indices: Arc<[usize]> = matching_indices(self.catalog.books(), criteria).into();
        self.cache.insert(criteria.clone(), Arc::clone(&indices));
        indices
    }

    /// Records matching `criteria`, in catalog order
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&Book> {
        let books = self.catalog.books();
        self.indices(criteria).iter().map(|&i| &books[i]).collect()
    }

    /// Number of cached criteria
    ///
    /// moka applies writes lazily, so pending work is flushed first.
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }
}

impl std::fmt::Debug for FilterCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterCache")
            .field("catalog_len", &self.catalog.len())
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}
