//! Leptos Pagination Utilities
//!
//! Client-local paging over an already-loaded list.
//! Pure window arithmetic plus a signal bundle for pager components.

use leptos::prelude::*;

/// Number of pages needed to show `item_count` items, `page_size` per page.
///
/// Returns 0 for an empty list; callers treat 0 as "nothing to display",
/// not as an error. A zero `page_size` also yields 0 rather than panicking.
pub fn total_pages(item_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    item_count.div_ceil(page_size)
}

/// Clamp a 1-indexed page number into `[1, total]`.
///
/// When `total` is 0 there is nothing to page over and the pager rests on 1.
pub fn clamp_page(page: usize, total: usize) -> usize {
    if total == 0 {
        1
    } else {
        page.clamp(1, total)
    }
}

/// The window of `items` covered by 1-indexed `page`.
///
/// Half-open range `[(page-1)*page_size, page*page_size)`, clipped to the
/// list. Page 0 and any page past the end yield an empty slice. Borrows the
/// list and never reorders it, so repeated calls return identical windows.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = match (page - 1).checked_mul(page_size) {
        Some(start) if start < items.len() => start,
        _ => return &[],
    };
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Pager state signals
///
/// `current_page` stays in range even when the underlying list changes
/// length under the pager: it re-clamps against the live page count.
#[derive(Clone, Copy)]
pub struct PagerSignals {
    set_requested_page: WriteSignal<usize>,
    /// Page actually rendered, clamped into `[1, total_pages]` (1 when empty)
    pub current_page: Memo<usize>,
    /// Derived page count for the current list length
    pub total_pages: Memo<usize>,
    page_size: usize,
}

/// Create pager signals over a reactive item count.
pub fn create_pager(item_count: Signal<usize>, page_size: usize) -> PagerSignals {
    let (requested_page, set_requested_page) = signal(1usize);
    let total = Memo::new(move |_| total_pages(item_count.get(), page_size));
    let current = Memo::new(move |_| clamp_page(requested_page.get(), total.get()));
    PagerSignals {
        set_requested_page,
        current_page: current,
        total_pages: total,
        page_size,
    }
}

impl PagerSignals {
    /// Accept a page-change event from a navigation control.
    ///
    /// The control is not trusted to bounds-check: out-of-range requests
    /// are clamped here rather than raised.
    pub fn go_to(&self, page: usize) {
        let total = self.total_pages.get_untracked();
        self.set_requested_page.set(clamp_page(page, total));
    }

    /// Slice of `items` covered by the current page.
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        page_slice(items, self.current_page.get(), self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_ceiling() {
        assert_eq!(total_pages(0, 4), 0);
        assert_eq!(total_pages(1, 4), 1);
        assert_eq!(total_pages(4, 4), 1);
        assert_eq!(total_pages(5, 4), 2);
        assert_eq!(total_pages(8, 4), 2);
        assert_eq!(total_pages(12, 4), 3);
        assert_eq!(total_pages(13, 4), 4);
        assert_eq!(total_pages(7, 1), 7);
    }

    #[test]
    fn test_total_pages_zero_page_size() {
        assert_eq!(total_pages(10, 0), 0);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(1, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(3, 3), 3);
        assert_eq!(clamp_page(99, 3), 3);
        // Empty list: the pager rests on page 1
        assert_eq!(clamp_page(0, 0), 1);
        assert_eq!(clamp_page(7, 0), 1);
    }

    #[test]
    fn test_page_slice_exact_windows() {
        let items: Vec<u32> = (0..10).collect();

        assert_eq!(page_slice(&items, 1, 4), &[0, 1, 2, 3]);
        assert_eq!(page_slice(&items, 2, 4), &[4, 5, 6, 7]);
        // Last page holds the remainder
        assert_eq!(page_slice(&items, 3, 4), &[8, 9]);
    }

    #[test]
    fn test_page_slice_out_of_range_is_empty() {
        let items: Vec<u32> = (0..10).collect();

        assert_eq!(page_slice(&items, 4, 4), &[] as &[u32]);
        assert_eq!(page_slice(&items, 99, 4), &[] as &[u32]);
        // Pages are 1-indexed; 0 is out of range, not an alias for 1
        assert_eq!(page_slice(&items, 0, 4), &[] as &[u32]);
        assert_eq!(page_slice(&items, 1, 0), &[] as &[u32]);
        assert_eq!(page_slice(&[] as &[u32], 1, 4), &[] as &[u32]);
    }

    #[test]
    fn test_page_slice_is_idempotent() {
        let items: Vec<u32> = (0..9).collect();

        let first = page_slice(&items, 2, 4).to_vec();
        let second = page_slice(&items, 2, 4).to_vec();
        assert_eq!(first, second);
        // Source list untouched
        assert_eq!(items, (0..9).collect::<Vec<u32>>());
    }

    #[test]
    fn test_page_slice_covers_whole_list() {
        let items: Vec<u32> = (0..11).collect();
        let total = total_pages(items.len(), 3);

        let mut seen = Vec::new();
        for page in 1..=total {
            seen.extend_from_slice(page_slice(&items, page, 3));
        }
        assert_eq!(seen, items);
    }
}
