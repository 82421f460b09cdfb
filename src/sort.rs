//! Sorting
//!
//! Comparator-based ordering by a typed column key. Each record kind defines
//! its own column enumeration, so "sort by a field" is a total `match`
//! rather than a stringly-typed lookup. Sorting is stable: rows with equal
//! keys keep their relative input order.

use std::cmp::Ordering;

/// Direction of an active sort.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest first. The default when a column is first selected.
    #[default]
    Ascending,

    /// Largest first.
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Ordering by a typed column key.
///
/// `compare_by` must be a total order for every key: lexicographic for text
/// columns, numeric for amounts, chronological for dates.
pub trait Sortable {
    /// Column keys this record kind can be ordered by.
    type Key: Copy + Eq + std::fmt::Debug;

    /// Compares two records on the given column, ascending.
    fn compare_by(&self, other: &Self, key: Self::Key) -> Ordering;
}

/// The active sort column and direction of a table view.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SortState<K> {
    /// Column the view is ordered by.
    pub key: K,

    /// Current direction.
    pub direction: SortDirection,
}

impl<K: Copy + Eq> SortState<K> {
    /// Ascending sort on the given column.
    #[must_use]
    pub fn ascending(key: K) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    /// The state after clicking a column header.
    ///
    /// Clicking the already-active column flips the direction; clicking a
    /// new column selects it ascending.
    #[must_use]
    pub fn toggled(current: Option<Self>, key: K) -> Self {
        match current {
            Some(state) if state.key == key => Self {
                key,
                direction: state.direction.flipped(),
            },
            _ => Self::ascending(key),
        }
    }
}

/// Sorts the rows in place according to the given state.
///
/// Uses a stable sort, so rows comparing equal on the active column keep
/// their relative input order in both directions.
pub fn sort_records<R: Sortable>(rows: &mut [&R], state: SortState<R::Key>) {
    rows.sort_by(|a, b| {
        let ordering = a.compare_by(b, state.key);

        match state.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}
