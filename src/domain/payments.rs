//! Payments

use std::cmp::Ordering;

use rusty_money::{Money, iso::Currency};
use slotmap::new_key_type;
use smallvec::{SmallVec, smallvec};
use time::Date;

use crate::{
    records::{Monetary, Record, Searchable},
    render::TableRow,
    sort::Sortable,
    status::{Status, Tone},
};

new_key_type! {
    /// Payment Key
    pub struct PaymentKey;
}

/// Payment processing status.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PaymentStatus {
    /// Settled.
    Completed,

    /// Accepted, awaiting processing.
    Pending,

    /// In flight at the payment provider.
    Processing,

    /// Rejected or errored.
    Failed,

    /// Returned to the payer.
    Refunded,
}

impl Status for PaymentStatus {
    const ALL: &'static [Self] = &[
        Self::Completed,
        Self::Pending,
        Self::Processing,
        Self::Failed,
        Self::Refunded,
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::Failed => "Failed",
            Self::Refunded => "Refunded",
        }
    }

    fn tone(&self) -> Tone {
        match self {
            Self::Completed => Tone::Positive,
            Self::Pending | Self::Processing => Tone::Info,
            Self::Failed => Tone::Critical,
            Self::Refunded => Tone::Neutral,
        }
    }
}

/// How a payment was made.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PaymentMethod {
    /// Credit or debit card.
    Card,

    /// Direct bank transfer.
    BankTransfer,

    /// Hosted wallet (PayPal and the like).
    Wallet,

    /// Cash on delivery.
    Cash,
}

impl PaymentMethod {
    /// Display label for the method column.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Card => "Card",
            Self::BankTransfer => "Bank transfer",
            Self::Wallet => "Wallet",
            Self::Cash => "Cash",
        }
    }
}

/// A payment row.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    /// Collection key.
    pub key: PaymentKey,

    /// Display reference, e.g. `PAY-0042`.
    pub reference: String,

    /// Paying client's name.
    pub client: String,

    /// Paid amount.
    pub amount: Money<'static, Currency>,

    /// Processing status.
    pub status: PaymentStatus,

    /// How the payment was made.
    pub method: PaymentMethod,

    /// Date the payment was received.
    pub date: Date,
}

impl Record for Payment {
    type Id = PaymentKey;
    type Status = PaymentStatus;

    fn id(&self) -> PaymentKey {
        self.key
    }

    fn status(&self) -> PaymentStatus {
        self.status
    }
}

impl Searchable for Payment {
    fn search_fields(&self) -> SmallVec<[&str; 4]> {
        smallvec![
            self.reference.as_str(),
            self.client.as_str(),
            self.method.label(),
        ]
    }
}

impl Monetary for Payment {
    fn amount(&self) -> &Money<'static, Currency> {
        &self.amount
    }
}

/// Sortable payment columns.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PaymentColumn {
    /// Display reference.
    Reference,

    /// Paying client's name.
    Client,

    /// Paid amount.
    Amount,

    /// Processing status.
    Status,

    /// Payment method.
    Method,

    /// Date received.
    Date,
}

impl Sortable for Payment {
    type Key = PaymentColumn;

    fn compare_by(&self, other: &Self, key: PaymentColumn) -> Ordering {
        match key {
            PaymentColumn::Reference => self.reference.cmp(&other.reference),
            PaymentColumn::Client => self.client.cmp(&other.client),
            PaymentColumn::Amount => self
                .amount
                .to_minor_units()
                .cmp(&other.amount.to_minor_units()),
            PaymentColumn::Status => self.status.cmp(&other.status),
            PaymentColumn::Method => self.method.cmp(&other.method),
            PaymentColumn::Date => self.date.cmp(&other.date),
        }
    }
}

impl TableRow for Payment {
    const HEADERS: &'static [&'static str] =
        &["Reference", "Client", "Amount", "Status", "Method", "Date"];

    const STATUS_COLUMN: usize = 3;

    const RIGHT_ALIGNED: &'static [usize] = &[2];

    fn cells(&self) -> Vec<String> {
        vec![
            self.reference.clone(),
            self.client.clone(),
            format!("{}", self.amount),
            self.status.label().to_string(),
            self.method.label().to_string(),
            self.date.to_string(),
        ]
    }
}
