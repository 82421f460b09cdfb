//! Table views
//!
//! A [`TableView`] owns an immutable collection snapshot plus the
//! interaction state of one dashboard table: free-text query, status tab,
//! optional sort and page index. Every read derives a fresh result from the
//! snapshot through the pure filter/sort/page modules; nothing is cached and
//! no shared state is mutated in place. Changing the filter or the sort
//! resets the page index to 0, so a stale out-of-range page is never shown.

use rusty_money::iso::Currency;

use crate::{
    filter::{TabFilter, filter_records},
    page::Pager,
    records::{Monetary, Record, Searchable},
    sort::{SortState, Sortable, sort_records},
    summary::{StatusCounts, Summary, SummaryError, count_by_status, summarize},
};

/// The visible page of a view plus the numbers rendered around it.
#[derive(Debug)]
pub struct ViewPage<'v, R> {
    rows: Vec<&'v R>,
    page_index: usize,
    page_count: usize,
    filtered_len: usize,
    total_len: usize,
}

impl<'v, R> ViewPage<'v, R> {
    /// The rows visible on this page, in display order.
    pub fn rows(&self) -> &[&'v R] {
        &self.rows
    }

    /// Zero-based index of this page.
    #[must_use]
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Total number of pages for the filtered collection.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Number of records matching the active filters.
    #[must_use]
    pub fn filtered_len(&self) -> usize {
        self.filtered_len
    }

    /// Number of records in the unfiltered collection.
    #[must_use]
    pub fn total_len(&self) -> usize {
        self.total_len
    }

    /// Whether the filtered collection is empty (the empty-state message).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filtered_len == 0
    }
}

/// One dashboard table: a collection snapshot and its interaction state.
#[derive(Debug)]
pub struct TableView<R: Record + Searchable + Sortable> {
    records: Vec<R>,
    query: String,
    tab: TabFilter<R::Status>,
    sort: Option<SortState<R::Key>>,
    page_index: usize,
    pager: Pager,
}

impl<R: Record + Searchable + Sortable> TableView<R> {
    /// Creates a view over the given collection snapshot.
    ///
    /// Starts unfiltered ("All" tab, empty query), unsorted, on page 0.
    pub fn new(records: impl Into<Vec<R>>, pager: Pager) -> Self {
        Self {
            records: records.into(),
            query: String::new(),
            tab: TabFilter::All,
            sort: None,
            page_index: 0,
            pager,
        }
    }

    /// The unfiltered collection snapshot.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// The active free-text query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The active status tab.
    pub fn tab(&self) -> TabFilter<R::Status> {
        self.tab
    }

    /// The active sort, if any.
    pub fn sort(&self) -> Option<SortState<R::Key>> {
        self.sort
    }

    /// The current page index.
    #[must_use]
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// The pager (fixed page size).
    #[must_use]
    pub fn pager(&self) -> Pager {
        self.pager
    }

    /// Sets the free-text query and resets to page 0.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page_index = 0;
    }

    /// Sets the status tab and resets to page 0.
    pub fn set_tab(&mut self, tab: TabFilter<R::Status>) {
        self.tab = tab;
        self.page_index = 0;
    }

    /// Applies a column-header click and resets to page 0.
    ///
    /// Clicking the active column flips the direction; clicking a new column
    /// selects it ascending.
    pub fn toggle_sort(&mut self, key: R::Key) {
        self.sort = Some(SortState::toggled(self.sort, key));
        self.page_index = 0;
    }

    /// Clears the sort (back to input order) and resets to page 0.
    pub fn clear_sort(&mut self) {
        self.sort = None;
        self.page_index = 0;
    }

    /// Jumps to the given page, clamped to the valid range.
    ///
    /// Navigating past either end is a no-op.
    pub fn set_page(&mut self, index: usize) {
        let len = self.filtered().len();

        self.page_index = self.pager.clamp(index, len);
    }

    /// Advances one page, if there is one.
    pub fn next_page(&mut self) {
        self.set_page(self.page_index.saturating_add(1));
    }

    /// Goes back one page, if there is one.
    pub fn prev_page(&mut self) {
        self.set_page(self.page_index.saturating_sub(1));
    }

    /// Replaces the collection snapshot, e.g. after a backend reload.
    ///
    /// Filter and sort state survive; the page index resets to 0.
    pub fn replace_records(&mut self, records: impl Into<Vec<R>>) {
        self.records = records.into();
        self.page_index = 0;
    }

    /// The filtered, sorted rows (all pages).
    pub fn filtered(&self) -> Vec<&R> {
        let mut rows = filter_records(&self.records, &self.query, self.tab);

        if let Some(sort) = self.sort {
            sort_records(&mut rows, sort);
        }

        rows
    }

    /// Derives the visible page: filter, sort, then paginate.
    pub fn snapshot(&self) -> ViewPage<'_, R> {
        let filtered = self.filtered();
        let filtered_len = filtered.len();

        let page_index = self.pager.clamp(self.page_index, filtered_len);
        let bounds = self.pager.bounds(page_index, filtered_len);

        let rows: Vec<&R> = filtered
            .into_iter()
            .skip(bounds.start)
            .take(bounds.len())
            .collect();

        ViewPage {
            rows,
            page_index,
            page_count: self.pager.page_count(filtered_len),
            filtered_len,
            total_len: self.records.len(),
        }
    }

    /// Per-status counts for the tab row.
    ///
    /// Counts the query-filtered collection, ignoring the active tab, so
    /// switching tabs never changes the numbers shown on the tabs.
    pub fn tab_counts(&self) -> StatusCounts<R::Status> {
        let rows = filter_records(&self.records, &self.query, TabFilter::All);

        count_by_status(rows.into_iter())
    }

    /// Aggregates over the currently filtered collection.
    ///
    /// # Errors
    ///
    /// Returns a [`SummaryError`] if a record's amount is in a different
    /// currency than `currency`.
    pub fn summary(&self, currency: &'static Currency) -> Result<Summary<R::Status>, SummaryError>
    where
        R: Monetary,
    {
        summarize(self.filtered().into_iter(), currency)
    }
}
