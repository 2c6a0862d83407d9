//! Pagination arithmetic: visible slice and page-control derivation.
//!
//! Everything here is a pure function of (current page, dataset length);
//! the reducer and the renderer both build on these.

use std::ops::Range;

/// Rows shown per page.
pub const PAGE_SIZE: usize = 5;

/// Maximum numbered page buttons shown at once.
pub const WINDOW: usize = 5;

/// One element of the pagination row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    Previous { enabled: bool },
    /// Non-interactive marker for omitted page numbers.
    Ellipsis,
    Number { page: usize, active: bool },
    Next { enabled: bool },
}

pub fn total_pages(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// Index range of the rows visible on `current` (1-based), clipped to the
/// dataset bounds.
pub fn visible_range(current: usize, len: usize) -> Range<usize> {
    let start = (current.saturating_sub(1) * PAGE_SIZE).min(len);
    let end = (start + PAGE_SIZE).min(len);
    start..end
}

/// The numbered-button window: up to [`WINDOW`] consecutive pages starting
/// at `max(current - 2, 1)`, truncated at `total`.
pub fn window_pages(current: usize, total: usize) -> impl Iterator<Item = usize> {
    let first = current.saturating_sub(2).max(1);
    (first..).take(WINDOW).take_while(move |page| *page <= total)
}

/// Derive the full pagination row. Empty when there is nothing to paginate.
///
/// A leading ellipsis appears when the window no longer starts at page 1,
/// a trailing one when it does not reach the last page.
pub fn page_controls(current: usize, total: usize) -> Vec<PageControl> {
    if total <= 1 {
        return Vec::new();
    }

    let mut controls = vec![PageControl::Previous {
        enabled: current > 1,
    }];
    if current > 3 {
        controls.push(PageControl::Ellipsis);
    }
    for page in window_pages(current, total) {
        controls.push(PageControl::Number {
            page,
            active: page == current,
        });
    }
    if current + 2 < total {
        controls.push(PageControl::Ellipsis);
    }
    controls.push(PageControl::Next {
        enabled: current < total,
    });
    controls
}
