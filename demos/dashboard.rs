//! Dashboard Example
//!
//! This example renders one dashboard table from a YAML fixture set.
//!
//! Use `-f` to load a fixture set by name
//! Use `-k` to pick the record kind (clients, invoices, payments, users)
//! Use `-q` to filter rows by a free-text query
//! Use `-t` to filter rows by a status tab
//! Use `-s` and `-p` to control the page size and page index

use std::{io, num::NonZeroUsize};

use anyhow::{Context, Result, bail};
use clap::Parser;
use ledgerview::{
    filter::TabFilter,
    fixtures::Fixture,
    page::Pager,
    records::{Monetary, Searchable},
    render::{TableRow, write_summary, write_table},
    sort::Sortable,
    status::Status,
    utils::DemoArgs,
    view::TableView,
};
use rusty_money::iso::Currency;

/// Dashboard Example
pub fn main() -> Result<()> {
    let args = DemoArgs::parse();

    let fixture = Fixture::from_set(&args.fixture)?;
    let currency = fixture.currency()?;

    let size = NonZeroUsize::new(args.page_size).context("page size must be at least 1")?;
    let pager = Pager::new(size);

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match args.kind.as_str() {
        "clients" => {
            let view = configure(fixture.client_view(pager), &args)?;

            show(&mut handle, &view)?;
            show_summary(&mut handle, &view, currency)?;
        }
        "invoices" => {
            let view = configure(fixture.invoice_view(pager), &args)?;

            show(&mut handle, &view)?;
            show_summary(&mut handle, &view, currency)?;
        }
        "payments" => {
            let view = configure(fixture.payment_view(pager), &args)?;

            show(&mut handle, &view)?;
            show_summary(&mut handle, &view, currency)?;
        }
        "users" => {
            let view = configure(fixture.user_view(pager), &args)?;

            show(&mut handle, &view)?;
        }
        other => bail!("unknown record kind: {other}"),
    }

    Ok(())
}

/// Applies the query, tab and page arguments to a fresh view.
fn configure<R: TableRow + Searchable + Sortable>(
    mut view: TableView<R>,
    args: &DemoArgs,
) -> Result<TableView<R>> {
    if let Some(query) = args.query.as_deref() {
        view.set_query(query);
    }

    if let Some(tab) = args.tab.as_deref() {
        view.set_tab(TabFilter::Only(status_for(tab)?));
    }

    view.set_page(args.page);

    Ok(view)
}

/// Matches a tab argument against a status label, case-insensitively.
fn status_for<S: Status>(raw: &str) -> Result<S> {
    S::ALL
        .iter()
        .copied()
        .find(|status| status.label().eq_ignore_ascii_case(raw))
        .with_context(|| format!("unknown tab: {raw}"))
}

/// Writes the tab row and the current page of one view.
fn show<R: TableRow + Searchable + Sortable>(
    out: &mut impl io::Write,
    view: &TableView<R>,
) -> Result<()> {
    let counts = view.tab_counts();
    let mut tabs = format!("All ({})", counts.total());

    for status in <R::Status as Status>::ALL {
        tabs.push_str(&format!(
            "  {} ({})",
            status.label(),
            counts.count_for(*status)
        ));
    }

    writeln!(out, "\n {tabs}")?;
    write_table(&mut *out, &view.snapshot())?;

    Ok(())
}

/// Writes the per-status totals under a monetary view.
fn show_summary<R: TableRow + Searchable + Sortable + Monetary>(
    out: &mut impl io::Write,
    view: &TableView<R>,
    currency: &'static Currency,
) -> Result<()> {
    writeln!(out)?;
    write_summary(out, &view.summary(currency)?)?;

    Ok(())
}
