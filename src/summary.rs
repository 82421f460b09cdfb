//! Summaries
//!
//! Derived aggregates for the stat cards above a table: record counts,
//! per-status counts, money totals and per-status conditional totals.
//! Aggregates are recomputed from the collection snapshot on every call and
//! never cached, so the same input always yields the same output.

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, prelude::FromPrimitive};
use rustc_hash::FxHashMap;
use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::{
    records::{Monetary, Record},
    status::Status,
};

/// Errors that can occur while aggregating money amounts.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Record counts partitioned by status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCounts<S: Status> {
    total: usize,
    by_status: FxHashMap<S, usize>,
}

impl<S: Status> StatusCounts<S> {
    /// Total number of records counted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of records with the given status.
    #[must_use]
    pub fn count_for(&self, status: S) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }

    /// Fraction of records with the given status.
    ///
    /// Zero when the collection is empty.
    #[must_use]
    pub fn share_of(&self, status: S) -> Percentage {
        ratio(self.count_for(status), self.total)
    }
}

/// Counts records by status.
///
/// The result is total over the status enumeration: statuses with no
/// records report a count of zero.
pub fn count_by_status<'r, R, I>(records: I) -> StatusCounts<R::Status>
where
    R: Record + 'r,
    I: IntoIterator<Item = &'r R>,
{
    let mut total = 0;
    let mut by_status = FxHashMap::default();

    for record in records {
        total += 1;
        *by_status.entry(record.status()).or_insert(0) += 1;
    }

    StatusCounts { total, by_status }
}

/// Counts plus money totals for a collection of monetary records.
#[derive(Debug, Clone)]
pub struct Summary<S: Status> {
    counts: StatusCounts<S>,
    total: Money<'static, Currency>,
    total_by_status: FxHashMap<S, Money<'static, Currency>>,
    currency: &'static Currency,
}

impl<S: Status> Summary<S> {
    /// Total number of records summarized.
    #[must_use]
    pub fn count(&self) -> usize {
        self.counts.total()
    }

    /// Number of records with the given status.
    #[must_use]
    pub fn count_for(&self, status: S) -> usize {
        self.counts.count_for(status)
    }

    /// Fraction of records with the given status.
    #[must_use]
    pub fn share_of(&self, status: S) -> Percentage {
        self.counts.share_of(status)
    }

    /// Sum of amounts over the whole collection.
    #[must_use]
    pub fn total(&self) -> Money<'static, Currency> {
        self.total
    }

    /// Sum of amounts over records with the given status.
    ///
    /// Zero for statuses with no records (a conditional sum, e.g. "total
    /// where paid").
    #[must_use]
    pub fn total_for(&self, status: S) -> Money<'static, Currency> {
        self.total_by_status
            .get(&status)
            .copied()
            .unwrap_or_else(|| Money::from_minor(0, self.currency))
    }

    /// The currency all totals are denominated in.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

/// Summarizes a collection of monetary records.
///
/// `currency` seeds the zero accumulators, so an empty collection yields
/// zero totals rather than an error.
///
/// # Errors
///
/// Returns a [`SummaryError`] if a record's amount is in a different
/// currency than the accumulator.
pub fn summarize<'r, R, I>(
    records: I,
    currency: &'static Currency,
) -> Result<Summary<R::Status>, SummaryError>
where
    R: Record + Monetary + 'r,
    I: IntoIterator<Item = &'r R>,
{
    let mut total = Money::from_minor(0, currency);
    let mut total_by_status: FxHashMap<R::Status, Money<'static, Currency>> = FxHashMap::default();

    let mut count_total = 0;
    let mut count_by = FxHashMap::default();

    for record in records {
        let amount = *record.amount();
        let status = record.status();

        total = total.add(amount)?;

        let slot = total_by_status
            .entry(status)
            .or_insert_with(|| Money::from_minor(0, currency));
        *slot = slot.add(amount)?;

        count_total += 1;
        *count_by.entry(status).or_insert(0) += 1;
    }

    Ok(Summary {
        counts: StatusCounts {
            total: count_total,
            by_status: count_by,
        },
        total,
        total_by_status,
        currency,
    })
}

/// `part / whole` as a decimal fraction, zero when `whole` is zero.
fn ratio(part: usize, whole: usize) -> Percentage {
    if whole == 0 {
        return Percentage::from(0.0);
    }

    let part = u64::try_from(part)
        .ok()
        .and_then(Decimal::from_u64)
        .unwrap_or(Decimal::ZERO);

    let whole = u64::try_from(whole)
        .ok()
        .and_then(Decimal::from_u64)
        .unwrap_or(Decimal::ONE);

    Percentage::from(part / whole)
}
