use crate::errors::PaginationError;

use super::source::PageSource;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Pages over a countable, randomly accessible source and exposes the slice
/// plus the page bookkeeping for one requested page.
///
/// The source is counted once at construction; the snapshot size drives all
/// arithmetic afterwards. `limit`/`offset` record a window the upstream query
/// already applied — they never change what the paginator reads, they only
/// let callers map source-relative keys back to unwindowed row numbers.
pub struct Paginator<S: PageSource> {
    source: S,
    source_size: usize,
    current_page: usize,
    items_per_page: usize,
    limit: usize,
    offset: usize,
}

impl<S: PageSource> Paginator<S> {
    /// Paginator with the default configuration: page 1, 10 items per page,
    /// no upstream window.
    pub fn new(source: S) -> Self {
        Self::with_window(source, 1, DEFAULT_ITEMS_PER_PAGE as i64, 0, 0)
    }

    /// Fully configured paginator. Out-of-range construction inputs are
    /// normalized, never rejected: `items_per_page <= 0` falls back to the
    /// default, `current_page < 1` becomes 1 and a page past the end clamps
    /// to the last page. Only the explicit setter is strict.
    pub fn with_window(
        source: S,
        current_page: i64,
        items_per_page: i64,
        limit: usize,
        offset: usize,
    ) -> Self {
        let items_per_page = if items_per_page <= 0 {
            DEFAULT_ITEMS_PER_PAGE
        } else {
            items_per_page as usize
        };
        let source_size = source.count();

        let mut paginator = Self {
            source,
            source_size,
            current_page: 1,
            items_per_page,
            limit,
            offset,
        };
        paginator.current_page = paginator.clamp_page(current_page.max(1) as usize);
        paginator
    }

    /// Items of the current page, in source order. Empty when the source
    /// holds nothing.
    pub fn paginated_items(&self) -> Vec<S::Item> {
        if self.source_size == 0 {
            return Vec::new();
        }

        self.source.read_range(
            self.key_of_first_paginated_item(),
            self.key_of_last_paginated_item(),
        )
    }

    /// Total page count, at least 1 even for an empty source.
    pub fn number_of_pages(&self) -> usize {
        self.source_size.div_ceil(self.items_per_page).max(1)
    }

    /// 0-based key of the first item on the current page, relative to the
    /// (already windowed) source. 0 for an empty source.
    pub fn key_of_first_paginated_item(&self) -> usize {
        if self.source_size == 0 {
            return 0;
        }

        (self.current_page - 1) * self.items_per_page
    }

    /// 0-based key of the last item on the current page, capped at the final
    /// source key. 0 for an empty source.
    pub fn key_of_last_paginated_item(&self) -> usize {
        if self.source_size == 0 {
            return 0;
        }

        let last_of_page = self.key_of_first_paginated_item() + self.items_per_page - 1;
        last_of_page.min(self.source_size - 1)
    }

    /// The clamped page number, never the raw constructor input.
    pub fn current_page_number(&self) -> usize {
        self.current_page
    }

    /// Moves to another page. Below 1 is an error carrying the stable code
    /// and leaves the paginator untouched; past the last page clamps
    /// silently, mirroring construction.
    pub fn set_current_page_number(&mut self, page: i64) -> Result<(), PaginationError> {
        if page < 1 {
            return Err(PaginationError::page_number_too_low(page));
        }

        self.current_page = self.clamp_page(page as usize);
        Ok(())
    }

    /// Upstream limit already applied to the source query (0 = none).
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Upstream offset already applied to the source query.
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn clamp_page(&self, page: usize) -> usize {
        page.min(self.number_of_pages())
    }
}
