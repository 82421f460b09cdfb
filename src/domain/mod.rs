//! Domain records
//!
//! The record kinds the dashboard displays, one module per kind. Each kind
//! implements the table-view contracts: [`crate::records::Record`],
//! [`crate::records::Searchable`], [`crate::sort::Sortable`] with a typed
//! column enumeration, [`crate::render::TableRow`], and
//! [`crate::records::Monetary`] where the kind carries an amount.

pub mod clients;
pub mod invoices;
pub mod payments;
pub mod users;

pub use clients::{Client, ClientColumn, ClientKey, ClientStatus};
pub use invoices::{Invoice, InvoiceColumn, InvoiceKey, InvoiceStatus};
pub use payments::{Payment, PaymentColumn, PaymentKey, PaymentMethod, PaymentStatus};
pub use users::{SuspendedUser, SuspensionType, UserColumn, UserKey, Violation};
