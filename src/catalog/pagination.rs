/// Fixed page size for every listing surface.
pub const PAGE_SIZE: u32 = 48;

/// Width of the page-number window rendered by the pager.
pub const PAGE_WINDOW: u32 = 7;

/// `max(1, ceil(total / limit))`. A zero `limit` is treated as one
/// so a misconfigured caller still gets a valid page count.
pub fn total_pages(total: u64, limit: u32) -> u32 {
    let limit = limit.max(1) as u64;
    let pages = total.div_ceil(limit).max(1);
    pages.min(u32::MAX as u64) as u32
}

/// Page number to request before the total is known: invalid and
/// non-positive URL values fall back to 1. The upper clamp happens in
/// [`Pager::new`] once the backend has reported the total.
pub fn requested_page(raw: Option<&str>) -> u32 {
    raw.map(str::trim)
        .and_then(|s| s.parse::<u32>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1)
}

/// Pagination state over a single integer `page in [1, total_pages]`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Pager {
    pub page: u32,
    pub total_pages: u32,
    pub total: u64,
}

impl Pager {
    /// Clamps the requested page into range. Out-of-range and garbage
    /// URL values therefore never produce an invalid state.
    pub fn new(requested: u32, total: u64) -> Pager {
        let total_pages = total_pages(total, PAGE_SIZE);
        Pager {
            page: requested.clamp(1, total_pages),
            total_pages,
            total,
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn prev(&self) -> u32 {
        self.page.saturating_sub(1).max(1)
    }

    pub fn next(&self) -> u32 {
        (self.page + 1).min(self.total_pages)
    }

    /// Page to fetch again when the first fetch used an out-of-range
    /// number. The backend answers those with an empty page, so the
    /// handler re-runs the query at the clamped page and the viewer
    /// sees the last page's items instead of an empty grid.
    pub fn corrected_page(&self, requested: u32) -> Option<u32> {
        (self.page != requested).then_some(self.page)
    }

    /// The page numbers to render: a window of up to [`PAGE_WINDOW`]
    /// numbers centered on the current page, shifted to stay within
    /// `[1, total_pages]`.
    pub fn numbers(&self) -> Vec<u32> {
        let span = PAGE_WINDOW.min(self.total_pages);
        let half = PAGE_WINDOW / 2;
        let start = self
            .page
            .saturating_sub(half)
            .max(1)
            .min(self.total_pages.saturating_sub(span) + 1);
        (start..start + span).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_formula() {
        assert_eq!(total_pages(0, PAGE_SIZE), 1);
        assert_eq!(total_pages(1, PAGE_SIZE), 1);
        assert_eq!(total_pages(48, PAGE_SIZE), 1);
        assert_eq!(total_pages(49, PAGE_SIZE), 2);
        assert_eq!(total_pages(88, PAGE_SIZE), 2);
        assert_eq!(total_pages(961, PAGE_SIZE), 21);
    }

    #[test]
    fn page_clamps_into_range() {
        let pager = Pager::new(0, 88);
        assert_eq!(pager.page, 1);

        let pager = Pager::new(99, 88);
        assert_eq!(pager.page, 2);

        let pager = Pager::new(2, 88);
        assert_eq!(pager.page, 2);
        assert!(pager.has_prev());
        assert!(!pager.has_next());
    }

    #[test]
    fn out_of_range_request_yields_a_corrected_fetch_page() {
        // ?page=99 with 88 items: the first fetch goes out at 99, the
        // pager clamps to 2, and the handler must fetch page 2 so the
        // rendered grid matches the "Page 2 of 2" label.
        let requested = requested_page(Some("99"));
        assert_eq!(requested, 99);
        let pager = Pager::new(requested, 88);
        assert_eq!(pager.page, 2);
        assert_eq!(pager.corrected_page(requested), Some(2));
    }

    #[test]
    fn in_range_request_needs_no_second_fetch() {
        assert_eq!(Pager::new(2, 88).corrected_page(2), None);
        assert_eq!(Pager::new(1, 0).corrected_page(1), None);
        // Garbage input parses to 1, which is always in range.
        let requested = requested_page(Some("abc"));
        assert_eq!(Pager::new(requested, 500).corrected_page(requested), None);
    }

    #[test]
    fn window_is_centered_and_shifted_at_edges() {
        let pager = Pager::new(10, 48 * 20);
        assert_eq!(pager.numbers(), vec![7, 8, 9, 10, 11, 12, 13]);

        let pager = Pager::new(1, 48 * 20);
        assert_eq!(pager.numbers(), vec![1, 2, 3, 4, 5, 6, 7]);

        let pager = Pager::new(20, 48 * 20);
        assert_eq!(pager.numbers(), vec![14, 15, 16, 17, 18, 19, 20]);
    }

    #[test]
    fn window_shrinks_when_few_pages() {
        let pager = Pager::new(1, 88);
        assert_eq!(pager.numbers(), vec![1, 2]);

        let pager = Pager::new(1, 10);
        assert_eq!(pager.numbers(), vec![1]);
    }
}
