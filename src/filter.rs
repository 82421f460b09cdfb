//! Record filtering
//!
//! The two dashboard filters: a categorical tab selector (exact status
//! match, with a distinguished "all" value) and a case-insensitive free-text
//! query over a record's searchable fields. Both are pure; an unmatched
//! collection yields an empty sequence, not an error.

use crate::{
    records::{Record, Searchable},
    status::Status,
};

/// Categorical tab selector over a record's status field.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TabFilter<S> {
    /// Matches every record.
    #[default]
    All,

    /// Matches records whose status equals the given variant exactly.
    Only(S),
}

impl<S: Status> TabFilter<S> {
    /// Whether this tab admits the given status.
    pub fn matches(&self, status: S) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == status,
        }
    }

    /// Tab label ("All" or the status label).
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(status) => status.label(),
        }
    }

    /// Every tab in display order: "All" first, then one per status variant.
    pub fn all_tabs() -> impl Iterator<Item = Self> {
        std::iter::once(Self::All).chain(S::ALL.iter().copied().map(Self::Only))
    }
}

/// Whether the record matches the free-text query.
///
/// `needle` must already be trimmed and lowercased; an empty needle matches
/// everything.
fn matches_query<R: Searchable>(record: &R, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Filters a collection by tab and free-text query.
///
/// Keeps the records where the tab matches the status and the query
/// (case-insensitive) is a substring of at least one searchable field, in
/// their original order. An empty or whitespace-only query matches every
/// record.
pub fn filter_records<'c, R>(
    records: &'c [R],
    query: &str,
    tab: TabFilter<R::Status>,
) -> Vec<&'c R>
where
    R: Record + Searchable,
{
    let needle = query.trim().to_lowercase();

    records
        .iter()
        .filter(|record| tab.matches(record.status()) && matches_query(*record, &needle))
        .collect()
}
