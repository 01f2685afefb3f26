/// Window-based pagination over a listing
///
/// The pager only knows the current page and the window size; the listing
/// length is passed in, so the same pager works over any listing and any
/// window size (the UI uses 3).

use thiserror::Error;

/// Why a page change was rejected. The display text is user-facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("Already on the first page")]
    BeforeStart,
    #[error("No more wallpapers")]
    PastEnd,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    window_size: usize,
}

impl Pager {
    pub fn new(window_size: usize) -> Self {
        assert!(window_size > 0, "window size must be at least 1");
        Pager {
            page: 0,
            window_size,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Back to the first page (used when the source changes).
    pub fn reset(&mut self) {
        self.page = 0;
    }

    /// Move to `page`, given the current listing length.
    ///
    /// Rejected (state unchanged) when `page` is negative, or when the
    /// window would start at or past the end of a non-empty listing. An
    /// empty listing accepts any non-negative page; its window is empty.
    pub fn try_goto(&mut self, page: i64, listing_len: usize) -> Result<(), PageError> {
        if page < 0 {
            return Err(PageError::BeforeStart);
        }

        let page = page as usize;
        if listing_len > 0 && page * self.window_size >= listing_len {
            return Err(PageError::PastEnd);
        }

        self.page = page;
        Ok(())
    }

    /// Start/end indices of the current window, clamped to the listing.
    pub fn window_bounds(&self, listing_len: usize) -> (usize, usize) {
        let start = (self.page * self.window_size).min(listing_len);
        let end = (start + self.window_size).min(listing_len);
        (start, end)
    }
}
