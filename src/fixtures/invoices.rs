//! Invoice Fixtures

use rusty_money::{Money, iso::Currency};
use serde::Deserialize;

use crate::{
    domain::{Invoice, InvoiceKey, InvoiceStatus},
    fixtures::{FixtureError, parse_date},
};

/// Wrapper for invoices in YAML
#[derive(Debug, Deserialize)]
pub struct InvoicesFixture {
    /// Invoice rows, in display order
    pub invoices: Vec<InvoiceFixture>,
}

/// Invoice fixture from YAML
#[derive(Debug, Deserialize)]
pub struct InvoiceFixture {
    /// Display reference, e.g. `INV-0042`
    pub reference: String,

    /// Billed client's name
    pub client: String,

    /// Invoiced amount, e.g. `480.00 GBP`
    pub amount: String,

    /// Lifecycle status (`draft`, `sent`, `pending`, `paid`, `overdue`)
    pub status: String,

    /// Payment due date, `YYYY-MM-DD`
    pub due_date: String,
}

impl InvoiceFixture {
    /// Convert to an [`Invoice`] with a pre-parsed amount.
    ///
    /// # Errors
    ///
    /// Returns an error if the status string is unknown or the due date is
    /// invalid.
    pub(super) fn into_invoice(
        self,
        key: InvoiceKey,
        amount: Money<'static, Currency>,
    ) -> Result<Invoice, FixtureError> {
        Ok(Invoice {
            key,
            reference: self.reference,
            client: self.client,
            amount,
            status: parse_status(&self.status)?,
            due_date: parse_date(&self.due_date)?,
        })
    }
}

fn parse_status(raw: &str) -> Result<InvoiceStatus, FixtureError> {
    match raw {
        "draft" => Ok(InvoiceStatus::Draft),
        "sent" => Ok(InvoiceStatus::Sent),
        "pending" => Ok(InvoiceStatus::Pending),
        "paid" => Ok(InvoiceStatus::Paid),
        "overdue" => Ok(InvoiceStatus::Overdue),
        other => Err(FixtureError::UnknownStatus(other.to_string())),
    }
}
