//! Records
//!
//! Contracts shared by every record kind a table view can display. A record
//! has a stable identifier and a closed status enumeration; the optional
//! traits mark what else a kind supports (free-text search, money sums).

use std::hash::Hash;

use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;

use crate::status::Status;

/// One row of domain data with a stable identifier and a closed status set.
pub trait Record {
    /// Stable identifier, unique within a collection and immutable.
    type Id: Copy + Eq + Hash;

    /// Closed status enumeration for this record kind.
    type Status: Status;

    /// The record's identifier.
    fn id(&self) -> Self::Id;

    /// The record's current status.
    fn status(&self) -> Self::Status;
}

/// Free-text search over designated fields.
pub trait Searchable {
    /// The fields the free-text query is matched against.
    ///
    /// Order does not matter; a record matches when the lowercased query is
    /// a substring of at least one field.
    fn search_fields(&self) -> SmallVec<[&str; 4]>;
}

/// A record carrying a primary monetary amount.
///
/// Aggregate sums ([`crate::summary::summarize`]) are defined over this
/// amount; kinds without money (suspended users) simply don't implement it.
pub trait Monetary {
    /// The record's primary amount.
    fn amount(&self) -> &Money<'static, Currency>;
}
