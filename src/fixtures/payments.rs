//! Payment Fixtures

use rusty_money::{Money, iso::Currency};
use serde::Deserialize;

use crate::{
    domain::{Payment, PaymentKey, PaymentMethod, PaymentStatus},
    fixtures::{FixtureError, parse_date},
};

/// Wrapper for payments in YAML
#[derive(Debug, Deserialize)]
pub struct PaymentsFixture {
    /// Payment rows, in display order
    pub payments: Vec<PaymentFixture>,
}

/// Payment fixture from YAML
#[derive(Debug, Deserialize)]
pub struct PaymentFixture {
    /// Display reference, e.g. `PAY-0042`
    pub reference: String,

    /// Paying client's name
    pub client: String,

    /// Paid amount, e.g. `480.00 GBP`
    pub amount: String,

    /// Processing status (`completed`, `pending`, `processing`, `failed`,
    /// `refunded`)
    pub status: String,

    /// Payment method (`card`, `bank_transfer`, `wallet`, `cash`)
    pub method: String,

    /// Date received, `YYYY-MM-DD`
    pub date: String,
}

impl PaymentFixture {
    /// Convert to a [`Payment`] with a pre-parsed amount.
    ///
    /// # Errors
    ///
    /// Returns an error if the status or method string is unknown, or the
    /// date is invalid.
    pub(super) fn into_payment(
        self,
        key: PaymentKey,
        amount: Money<'static, Currency>,
    ) -> Result<Payment, FixtureError> {
        Ok(Payment {
            key,
            reference: self.reference,
            client: self.client,
            amount,
            status: parse_status(&self.status)?,
            method: parse_method(&self.method)?,
            date: parse_date(&self.date)?,
        })
    }
}

fn parse_status(raw: &str) -> Result<PaymentStatus, FixtureError> {
    match raw {
        "completed" => Ok(PaymentStatus::Completed),
        "pending" => Ok(PaymentStatus::Pending),
        "processing" => Ok(PaymentStatus::Processing),
        "failed" => Ok(PaymentStatus::Failed),
        "refunded" => Ok(PaymentStatus::Refunded),
        other => Err(FixtureError::UnknownStatus(other.to_string())),
    }
}

fn parse_method(raw: &str) -> Result<PaymentMethod, FixtureError> {
    match raw {
        "card" => Ok(PaymentMethod::Card),
        "bank_transfer" => Ok(PaymentMethod::BankTransfer),
        "wallet" => Ok(PaymentMethod::Wallet),
        "cash" => Ok(PaymentMethod::Cash),
        other => Err(FixtureError::UnknownStatus(other.to_string())),
    }
}
