// src/domain/pagination.rs
//
// Fixed-size pagination over an in-memory list.

use serde::{Deserialize, Serialize};

/// One page of a filtered list. Page numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_count: usize,
    pub page_size: usize,
    pub total: usize,
}

impl<T: Clone> Page<T> {
    /// Slice `items` into the requested page.
    ///
    /// There is always at least one page, even for an empty list, and the
    /// requested page is clamped into `1..=page_count`.
    pub fn slice(items: &[T], page: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let total = items.len();
        let page_count = Self::page_count_for(total, page_size);
        let page = page.clamp(1, page_count);

        let start = (page - 1) * page_size;
        let end = (start + page_size).min(total);

        Self {
            items: items[start.min(total)..end].to_vec(),
            page,
            page_count,
            page_size,
            total,
        }
    }
}

impl<T> Page<T> {
    pub fn page_count_for(total: usize, page_size: usize) -> usize {
        total.div_ceil(page_size.max(1)).max(1)
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Transform items while keeping page metadata
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_count: self.page_count,
            page_size: self.page_size,
            total: self.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_middle_and_last_page() {
        let items: Vec<u32> = (1..=32).collect();

        let page = Page::slice(&items, 2, 15);
        assert_eq!(page.items, (16..=30).collect::<Vec<_>>());
        assert_eq!(page.page_count, 3);
        assert!(page.has_next());
        assert!(page.has_previous());

        let last = Page::slice(&items, 3, 15);
        assert_eq!(last.items, vec![31, 32]);
        assert!(!last.has_next());
    }

    #[test]
    fn test_empty_list_has_one_page() {
        let items: Vec<u32> = Vec::new();
        let page = Page::slice(&items, 1, 6);
        assert!(page.items.is_empty());
        assert_eq!(page.page_count, 1);
        assert_eq!(page.page, 1);
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        let items: Vec<u32> = (1..=7).collect();
        assert_eq!(Page::slice(&items, 9, 6).page, 2);
        assert_eq!(Page::slice(&items, 0, 6).page, 1);
    }
}
