//! Fixed-size, 1-based pages.

use std::ops::Range;

/// Rows per page.
pub const PAGE_SIZE: usize = 13;

/// Number of pages for `total` rows. An empty table still has one (empty) page.
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Clamps `page` into `1..=page_count(total)`.
pub fn clamp_page(page: usize, total: usize, page_size: usize) -> usize {
    page.clamp(1, page_count(total, page_size))
}

/// Indices of the rows shown on `page` (clamped first).
pub fn page_range(total: usize, page: usize, page_size: usize) -> Range<usize> {
    let page_size = page_size.max(1);
    let page = clamp_page(page, total, page_size);
    let start = ((page - 1) * page_size).min(total);
    let end = (start + page_size).min(total);
    start..end
}

/// Current page of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Moves to `page`, clamped against `total` rows.
    pub fn go_to(&mut self, page: usize, total: usize) {
        self.page = clamp_page(page, total, self.page_size);
    }

    pub fn next(&mut self, total: usize) {
        self.go_to(self.page.saturating_add(1), total);
    }

    pub fn previous(&mut self, total: usize) {
        self.go_to(self.page.saturating_sub(1), total);
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    pub fn range(&self, total: usize) -> Range<usize> {
        page_range(total, self.page, self.page_size)
    }

    pub fn page_count(&self, total: usize) -> usize {
        page_count(total, self.page_size)
    }
}
