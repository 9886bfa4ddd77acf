//! Page slicing for review lists

use serde::Serialize;

use crate::review::Review;

/// One page of an ordered review list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    /// Reviews on this page
    pub items: Vec<Review>,
    /// 1-based page number
    pub page: usize,
    /// Requested page size
    pub page_size: usize,
    /// Reviews across all pages
    pub total_items: usize,
    /// Number of pages, `ceil(total_items / page_size)`
    pub total_pages: usize,
}

impl Page {
    /// Returns true if no reviews are on this page
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if a later page exists
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Returns true if an earlier page exists
    pub fn has_previous(&self) -> bool {
        self.page > 1 && self.total_pages > 0
    }
}

/// Slices out one 1-based page.
///
/// Page 0 is read as page 1. Pages past the end are empty, as is every
/// page when `page_size` is 0.
pub fn paginate(reviews: &[Review], page: usize, page_size: usize) -> Page {
    let page = page.max(1);
    let total_items = reviews.len();

    if page_size == 0 {
        return Page {
            items: Vec::new(),
            page,
            page_size,
            total_items,
            total_pages: 0,
        };
    }

    let total_pages = total_items.div_ceil(page_size);
    let start = (page - 1).saturating_mul(page_size);
    let items = reviews
        .iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    Page {
        items,
        page,
        page_size,
        total_items,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::Platform;
    use chrono::{TimeZone, Utc};

    fn make_reviews(n: usize) -> Vec<Review> {
        let date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        (1..=n)
            .map(|i| Review::with_id(format!("r{}", i), "C", Platform::Google, 4, date, "ok"))
            .collect()
    }

    #[test]
    fn test_first_and_last_page() {
        let reviews = make_reviews(23);

        let first = paginate(&reviews, 1, 10);
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.items[0].id, "r1");
        assert_eq!(first.total_pages, 3);
        assert!(first.has_next());
        assert!(!first.has_previous());

        let last = paginate(&reviews, 3, 10);
        assert_eq!(last.items.len(), 3);
        assert_eq!(last.items[0].id, "r21");
        assert!(!last.has_next());
        assert!(last.has_previous());
    }

    #[test]
    fn test_page_zero_is_first_page() {
        let reviews = make_reviews(5);
        assert_eq!(paginate(&reviews, 0, 2), paginate(&reviews, 1, 2));
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let page = paginate(&make_reviews(5), 4, 2);
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_items, 5);
    }

    #[test]
    fn test_zero_page_size() {
        let page = paginate(&make_reviews(5), 1, 0);
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_empty_input() {
        let page = paginate(&[], 1, 10);
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_next());
    }

    #[test]
    fn test_huge_page_number_does_not_overflow() {
        let page = paginate(&make_reviews(3), usize::MAX, 10);
        assert!(page.is_empty());
    }
}
