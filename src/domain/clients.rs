//! Clients

use std::cmp::Ordering;

use rusty_money::{Money, iso::Currency};
use slotmap::new_key_type;
use smallvec::{SmallVec, smallvec};

use crate::{
    records::{Monetary, Record, Searchable},
    render::TableRow,
    sort::Sortable,
    status::{Status, Tone},
};

new_key_type! {
    /// Client Key
    pub struct ClientKey;
}

/// Client account status.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClientStatus {
    /// In good standing with recent activity.
    Active,

    /// No recent activity; kept for history.
    Inactive,

    /// Has at least one invoice past its due date.
    Overdue,
}

impl Status for ClientStatus {
    const ALL: &'static [Self] = &[Self::Active, Self::Inactive, Self::Overdue];

    fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Overdue => "Overdue",
        }
    }

    fn tone(&self) -> Tone {
        match self {
            Self::Active => Tone::Positive,
            Self::Inactive => Tone::Neutral,
            Self::Overdue => Tone::Warning,
        }
    }
}

/// A client account row.
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    /// Collection key.
    pub key: ClientKey,

    /// Display reference, e.g. `CLI-001`.
    pub reference: String,

    /// Contact name.
    pub name: String,

    /// Company name.
    pub company: String,

    /// Billing email.
    pub email: String,

    /// Account status.
    pub status: ClientStatus,

    /// Lifetime billed amount.
    pub total_amount: Money<'static, Currency>,

    /// Amount currently awaiting payment.
    pub pending_amount: Money<'static, Currency>,
}

impl Record for Client {
    type Id = ClientKey;
    type Status = ClientStatus;

    fn id(&self) -> ClientKey {
        self.key
    }

    fn status(&self) -> ClientStatus {
        self.status
    }
}

impl Searchable for Client {
    fn search_fields(&self) -> SmallVec<[&str; 4]> {
        smallvec![
            self.reference.as_str(),
            self.name.as_str(),
            self.company.as_str(),
            self.email.as_str(),
        ]
    }
}

impl Monetary for Client {
    fn amount(&self) -> &Money<'static, Currency> {
        &self.total_amount
    }
}

/// Sortable client columns.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClientColumn {
    /// Display reference.
    Reference,

    /// Contact name.
    Name,

    /// Company name.
    Company,

    /// Billing email.
    Email,

    /// Account status (tab order).
    Status,

    /// Lifetime billed amount.
    TotalAmount,

    /// Amount awaiting payment.
    PendingAmount,
}

impl Sortable for Client {
    type Key = ClientColumn;

    fn compare_by(&self, other: &Self, key: ClientColumn) -> Ordering {
        match key {
            ClientColumn::Reference => self.reference.cmp(&other.reference),
            ClientColumn::Name => self.name.cmp(&other.name),
            ClientColumn::Company => self.company.cmp(&other.company),
            ClientColumn::Email => self.email.cmp(&other.email),
            ClientColumn::Status => self.status.cmp(&other.status),
            ClientColumn::TotalAmount => self
                .total_amount
                .to_minor_units()
                .cmp(&other.total_amount.to_minor_units()),
            ClientColumn::PendingAmount => self
                .pending_amount
                .to_minor_units()
                .cmp(&other.pending_amount.to_minor_units()),
        }
    }
}

impl TableRow for Client {
    const HEADERS: &'static [&'static str] = &[
        "Reference", "Name", "Company", "Email", "Status", "Total", "Pending",
    ];

    const STATUS_COLUMN: usize = 4;

    const RIGHT_ALIGNED: &'static [usize] = &[5, 6];

    fn cells(&self) -> Vec<String> {
        vec![
            self.reference.clone(),
            self.name.clone(),
            self.company.clone(),
            self.email.clone(),
            self.status.label().to_string(),
            format!("{}", self.total_amount),
            format!("{}", self.pending_amount),
        ]
    }
}
