use std::ops::RangeInclusive;

use crate::domain::product::value_objects::Category;

use super::filter::Selector;

/// Page size while the category selector is "all".
pub const ALL_PRODUCTS_PAGE_SIZE: usize = 24;
/// Page size while a single category is selected.
pub const CATEGORY_PAGE_SIZE: usize = 20;
/// Most page numbers offered by the pagination controls at once.
pub const PAGE_WINDOW_SIZE: usize = 5;

pub fn page_size_for(category: &Selector<Category>) -> usize {
    if category.is_all() {
        ALL_PRODUCTS_PAGE_SIZE
    } else {
        CATEGORY_PAGE_SIZE
    }
}

/// `ceil(total_items / page_size)`; zero for an empty list.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// The 1-based `page` of `items`, clipped to bounds.
///
/// Out-of-range pages (including page 0) yield an empty slice.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    items.get(start..end).unwrap_or(&[])
}

/// Page numbers to offer around `current_page`, at most five of them.
pub fn page_window(total_pages: usize, current_page: usize) -> RangeInclusive<usize> {
    if total_pages <= PAGE_WINDOW_SIZE {
        1..=total_pages
    } else if current_page <= 3 {
        1..=PAGE_WINDOW_SIZE
    } else if current_page >= total_pages - 2 {
        (total_pages - PAGE_WINDOW_SIZE + 1)..=total_pages
    } else {
        (current_page - 2)..=(current_page + 2)
    }
}
