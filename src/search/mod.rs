//! Filtering and pagination over the catalog
//!
//! Provides the query pipeline used by every view:
//! 1. Evaluate filter criteria against the catalog (optionally memoized)
//! 2. Slice the result into fixed-size pages

pub mod cache;
pub mod filter;
pub mod pagination;

pub use cache::FilterCache;
pub use filter::{BookFilterExt, Matcher, by_criteria};
pub use pagination::{PAGE_SIZE, Page, page, paginate, total_pages};
