//! Pagination
//!
//! Fixed-size pages over a filtered sequence. The pager is a pure slice
//! calculator: it knows a page size (fixed at construction) and derives the
//! page count, the clamped page index and the visible bounds from a
//! collection length. Resetting the index when the filter or sort changes is
//! the view's job, not the pager's.

use std::{num::NonZeroUsize, ops::Range};

/// Fixed page size pager.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pager {
    size: NonZeroUsize,
}

/// Ten rows per page, the size every dashboard table uses.
pub const DEFAULT_PAGE_SIZE: usize = 10;

impl Pager {
    /// Creates a pager with the given page size.
    #[must_use]
    pub const fn new(size: NonZeroUsize) -> Self {
        Self { size }
    }

    /// The page size.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size.get()
    }

    /// Number of pages needed for `len` rows: `ceil(len / size)`.
    ///
    /// An empty collection has zero pages.
    #[must_use]
    pub const fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.size.get())
    }

    /// Clamps a page index to `[0, page_count - 1]`.
    ///
    /// For an empty collection the only valid index is 0.
    #[must_use]
    pub const fn clamp(&self, index: usize, len: usize) -> usize {
        let last = self.page_count(len).saturating_sub(1);

        if index > last { last } else { index }
    }

    /// Visible slice bounds for a page: `[index*size, min((index+1)*size, len))`.
    ///
    /// The index is clamped first, so the range is always within `0..len`.
    #[must_use]
    pub fn bounds(&self, index: usize, len: usize) -> Range<usize> {
        let index = self.clamp(index, len);
        let start = index * self.size.get();
        let end = (index + 1) * self.size.get();

        // start can only exceed len when the collection is empty.
        let start = if start > len { len } else { start };
        let end = if end > len { len } else { end };

        start..end
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            size: NonZeroUsize::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroUsize::MIN),
        }
    }
}
