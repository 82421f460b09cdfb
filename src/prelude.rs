//! Ledgerview prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    actions::{RowAction, RowActions},
    domain::{
        Client, ClientColumn, ClientKey, ClientStatus, Invoice, InvoiceColumn, InvoiceKey,
        InvoiceStatus, Payment, PaymentColumn, PaymentKey, PaymentMethod, PaymentStatus,
        SuspendedUser, SuspensionType, UserColumn, UserKey, Violation,
    },
    filter::{TabFilter, filter_records},
    fixtures::{Fixture, FixtureError},
    page::{DEFAULT_PAGE_SIZE, Pager},
    records::{Monetary, Record, Searchable},
    render::{RenderError, TableRow, write_summary, write_table},
    sort::{SortDirection, SortState, Sortable, sort_records},
    status::{Status, Tone},
    summary::{StatusCounts, Summary, SummaryError, count_by_status, summarize},
    view::{TableView, ViewPage},
};
