//! Invoices

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
    /// Invoice Key
    pub struct InvoiceKey;
}

/// Invoice lifecycle status.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InvoiceStatus {
    /// Not yet sent to the client.
    Draft,

    /// Sent, not yet due.
    Sent,

    /// Awaiting payment.
    Pending,

    /// Paid in full.
    Paid,

    /// Past its due date and unpaid.
    Overdue,
}

impl Status for InvoiceStatus {
    const ALL: &'static [Self] = &[
        Self::Draft,
        Self::Sent,
        Self::Pending,
        Self::Paid,
        Self::Overdue,
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Sent => "Sent",
            Self::Pending => "Pending",
            Self::Paid => "Paid",
            Self::Overdue => "Overdue",
        }
    }

    fn tone(&self) -> Tone {
        match self {
            Self::Draft => Tone::Neutral,
            Self::Sent | Self::Pending => Tone::Info,
            Self::Paid => Tone::Positive,
            Self::Overdue => Tone::Warning,
        }
    }
}

/// An invoice row.
#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    /// Collection key.
    pub key: InvoiceKey,

    /// Display reference, e.g. `INV-0042`.
    pub reference: String,

    /// Billed client's name.
    pub client: String,

    /// Invoiced amount.
    pub amount: Money<'static, Currency>,

    /// Lifecycle status.
    pub status: InvoiceStatus,

    /// Payment due date.
    pub due_date: Date,
}

impl Record for Invoice {
    type Id = InvoiceKey;
    type Status = InvoiceStatus;

    fn id(&self) -> InvoiceKey {
        self.key
    }

    fn status(&self) -> InvoiceStatus {
        self.status
    }
}

impl Searchable for Invoice {
    fn search_fields(&self) -> SmallVec<[&str; 4]> {
        smallvec![self.reference.as_str(), self.client.as_str()]
    }
}

impl Monetary for Invoice {
    fn amount(&self) -> &Money<'static, Currency> {
        &self.amount
    }
}

/// Sortable invoice columns.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InvoiceColumn {
    /// Display reference.
    Reference,

    /// Billed client's name.
    Client,

    /// Invoiced amount.
    Amount,

    /// Lifecycle status.
    Status,

    /// Payment due date.
    DueDate,
}

impl Sortable for Invoice {
    type Key = InvoiceColumn;

    fn compare_by(&self, other: &Self, key: InvoiceColumn) -> Ordering {
        match key {
            InvoiceColumn::Reference => self.reference.cmp(&other.reference),
            InvoiceColumn::Client => self.client.cmp(&other.client),
            InvoiceColumn::Amount => self
                .amount
                .to_minor_units()
                .cmp(&other.amount.to_minor_units()),
            InvoiceColumn::Status => self.status.cmp(&other.status),
            InvoiceColumn::DueDate => self.due_date.cmp(&other.due_date),
        }
    }
}

impl TableRow for Invoice {
    const HEADERS: &'static [&'static str] =
        &["Reference", "Client", "Amount", "Status", "Due"];

    const STATUS_COLUMN: usize = 3;

    const RIGHT_ALIGNED: &'static [usize] = &[2];

    fn cells(&self) -> Vec<String> {
        vec![
            self.reference.clone(),
            self.client.clone(),
            format!("{}", self.amount),
            self.status.label().to_string(),
            self.due_date.to_string(),
        ]
    }
}
