//! Client-side pagination: page slicing plus the page-button layout.

use serde::Serialize;

/// Computes the page buttons to render. `Some(n)` is a clickable page,
/// `None` an ellipsis. The first and last pages are always present, with a
/// window of pages around the current one; a gap of exactly one page is
/// rendered as that page instead of an ellipsis.
fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    match mid_start - left_end {
        0 => {}
        1 => pages.push(Some(left_end)),
        _ => pages.push(None),
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    match right_start - mid_end {
        0 => {}
        1 => pages.push(Some(mid_end)),
        _ => pages.push(None),
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// Number of pages needed for `total` records; `0` for an empty collection.
pub fn page_count(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}

/// Clamps a requested page into `[1, total_pages]` (`1` when there are no
/// pages at all).
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Returns the records visible on `page`. A page past the end yields an
/// empty slice, never an error.
pub fn slice_page<T: Clone>(items: &[T], page: usize, per_page: usize) -> Vec<T> {
    if per_page == 0 {
        return Vec::new();
    }
    let page = page.max(1);
    let start = (page - 1).saturating_mul(per_page).min(items.len());
    let end = start.saturating_add(per_page).min(items.len());
    items[start..end].to_vec()
}

/// One page of records plus the button layout for the pagination controls.
#[derive(Debug, Serialize, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub total: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize, total: usize) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };

        let pages = get_pages(total_pages, current_page, 1, 2, 2, 1);

        Self {
            items,
            pages,
            page: current_page,
            total,
        }
    }
}

impl<T: Clone> Paginated<T> {
    /// Slices the filtered collection down to the requested page, clamping
    /// the page number to the collection bounds first.
    pub fn from_records(records: &[T], current_page: usize, per_page: usize) -> Self {
        let total_pages = page_count(records.len(), per_page);
        let page = clamp_page(current_page, total_pages);
        Self::new(
            slice_page(records, page, per_page),
            page,
            total_pages,
            records.len(),
        )
    }
}
