//! Filter value types
//!
//! This module holds the values that describe the current selection: the
//! search query, the language/country facets, the page-range and century
//! buckets, and the page being viewed.
//!
//! # Examples
//!
//! ```
//! use bookr::filters::{Century, FilterCriteria, FilterState, PageRange};
//!
//! let criteria = FilterCriteria::builder()
//!     .search_query("anim")
//!     .century(Century::Twentieth)
//!     .page_range(PageRange::From101To200)
//!     .build();
//!
//! let state = FilterState::from(criteria);
//! assert_eq!(state.current_page, 1);
//! ```

pub mod buckets;
pub mod types;

pub use buckets::{Bounds, Century, PageRange, ParseBucketError};
pub use types::{FilterCriteria, FilterCriteriaBuilder, FilterState};
