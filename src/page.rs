//! Deterministic pagination over ordered sequences

/// A bounded view into an ordered sequence
///
/// Derived on demand, never stored: the slice borrows the underlying
/// sequence.
#[derive(Debug)]
pub struct Page<'a, T> {
    /// Items belonging to the served page
    pub items:        &'a [T],
    /// Page number actually served (1-indexed, clamped into range)
    pub current_page: usize,
    /// Total number of pages, at least 1 even for an empty sequence
    pub total_pages:  usize,
    /// Total number of items across all pages
    pub total_items:  usize,
}

/// Slice one page out of an ordered sequence
///
/// Pages are 1-indexed. A requested page outside [1, total] is clamped into
/// range, and an empty sequence still reports page 1 of 1 so downstream
/// formatting never sees "page 1 of 0". Does not mutate or copy the input.
///
/// # Panics
/// Panics if `page_size` is zero.
#[must_use]
pub fn paginate<T>(items: &[T], requested_page: i64, page_size: usize) -> Page<'_, T> {
    assert!(page_size >= 1, "Page size must be at least 1");

    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size).max(1);

    // Requests below page 1 land on page 1; requests past the end land on
    // the last page
    let current_page =
        usize::try_from(requested_page.max(1)).unwrap_or(usize::MAX).min(total_pages);

    let start = (current_page - 1) * page_size;
    let end = start.saturating_add(page_size).min(total_items);
    assert!(start <= end, "Page window must lie within the sequence");

    Page { items: &items[start..end], current_page, total_pages, total_items }
}
