//! Page slicing for filtered results
//!
//! Pages are 1-based and [`PAGE_SIZE`] records long. Requesting a page past the
//! end is not an error: it yields an empty slice. Callers decide whether to
//! move the user back into range.

use serde::Serialize;

/// Records per page
pub const PAGE_SIZE: usize = 20;

/// One page of a result list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page<'a, T> {
    /// Records on this page, in result order
    pub items: &'a [T],
    /// The requested page number
    pub page_number: usize,
    /// `ceil(total_items / page_size)`; zero when there are no results
    pub total_pages: usize,
    /// Length of the whole result list
    pub total_items: usize,
}

impl<T> Page<'_, T> {
    /// True when the requested page lies beyond the last page
    ///
    /// An empty result list has no pages, so any page other than the first
    /// counts as past the end.
    #[must_use]
    pub const fn is_past_end(&self) -> bool {
        if self.total_pages == 0 {
            self.page_number > 1
        } else {
            self.page_number > self.total_pages
        }
    }

    /// True when a later page exists
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page_number < self.total_pages
    }

    /// True when an earlier page exists
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page_number > 1
    }
}

/// Number of pages needed for `total_items`
///
/// A zero `page_size` yields zero pages.
#[must_use]
pub const fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        total_items.div_ceil(page_size)
    }
}

/// Slice page `page_number` out of `items`
///
/// The slice is `[(page_number - 1) * page_size, page_number * page_size)`
/// intersected with the list. Page zero and pages past the end are empty.
#[must_use]
pub fn paginate<T>(items: &[T], page_number: usize, page_size: usize) -> Page<'_, T> {
    let total_items = items.len();
    let start = page_number
        .checked_sub(1)
        .and_then(|index| index.checked_mul(page_size))
        .unwrap_or(usize::MAX)
        .min(total_items);
    let end = start.saturating_add(page_size).min(total_items);

    Page {
        items: &items[start..end],
        page_number,
        total_pages: total_pages(total_items, page_size),
        total_items,
    }
}

/// Slice a page of [`PAGE_SIZE`] records
#[must_use]
pub fn page<T>(items: &[T], page_number: usize) -> Page<'_, T> {
    paginate(items, page_number, PAGE_SIZE)
}
