//! Utils

use clap::Parser;

/// Arguments for the dashboard demo
#[derive(Debug, Parser)]
pub struct DemoArgs {
    /// Fixture set to load
    #[clap(short, long, default_value = "demo")]
    pub fixture: String,

    /// Record kind to display (clients, invoices, payments, users)
    #[clap(short, long, default_value = "invoices")]
    pub kind: String,

    /// Free-text query to filter by
    #[clap(short, long)]
    pub query: Option<String>,

    /// Status tab to filter by (snake_case status name)
    #[clap(short, long)]
    pub tab: Option<String>,

    /// Rows per page
    #[clap(short = 's', long, default_value_t = crate::page::DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    /// Zero-based page index to show
    #[clap(short, long, default_value_t = 0)]
    pub page: usize,
}
