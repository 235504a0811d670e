//! Page math for paginated collections.
//!
//! These helpers turn an item count into the `total` fed to the window
//! calculator and map a 1-based page back to a slice of items.

use std::ops::Range;

/// Compute the number of pages for `item_count` items.
///
/// An empty collection still has one (empty) page.
pub fn total_pages(item_count: usize, per_page: usize) -> usize {
    item_count.div_ceil(per_page.max(1)).max(1)
}

/// Clamp a requested page into `1..=total_pages`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Item indices covered by a 1-based page.
///
/// Pages past the end yield an empty range at `total_items`.
pub fn item_range(total_items: usize, per_page: usize, page: usize) -> Range<usize> {
    let per_page = per_page.max(1);
    let start = page
        .saturating_sub(1)
        .saturating_mul(per_page)
        .min(total_items);
    let end = start.saturating_add(per_page).min(total_items);
    start..end
}

/// Parse a one-based page argument.
///
/// A missing value means the first page. Returns `None` for anything that
/// is not an integer `>= 1`.
pub fn parse_one_based_page(raw: Option<&str>) -> Option<usize> {
    match raw {
        Some(value) => value.trim().parse::<usize>().ok().filter(|page| *page >= 1),
        None => Some(1),
    }
}
