//! Integration test for the demo fixture set, end to end.
//!
//! Loads the `demo` YAML set and drives every record kind through the full
//! pipeline: fixture -> view -> filter/sort/page -> summary -> rendered
//! table. The demo set contains:
//!
//! - 5 clients (3 active, 1 inactive, 1 overdue)
//! - 8 invoices totalling £8,220.00 (2 paid, 2 pending, 2 sent, 1 draft,
//!   1 overdue)
//! - 6 payments totalling £3,615.00
//! - 3 suspended users (2 temporary, 1 permanent)

use rusty_money::{Money, iso::GBP};
use testresult::TestResult;

use ledgerview::{
    domain::{ClientStatus, InvoiceColumn, InvoiceStatus, PaymentStatus, SuspensionType},
    filter::TabFilter,
    fixtures::Fixture,
    page::Pager,
    render::{write_summary, write_table},
};

#[test]
fn invoice_view_filters_sorts_and_summarizes() -> TestResult {
    let fixture = Fixture::from_set("demo")?;
    let mut view = fixture.invoice_view(Pager::default());

    let counts = view.tab_counts();

    assert_eq!(counts.total(), 8);
    assert_eq!(counts.count_for(InvoiceStatus::Paid), 2);
    assert_eq!(counts.count_for(InvoiceStatus::Pending), 2);
    assert_eq!(counts.count_for(InvoiceStatus::Sent), 2);
    assert_eq!(counts.count_for(InvoiceStatus::Draft), 1);
    assert_eq!(counts.count_for(InvoiceStatus::Overdue), 1);

    // "acme" matches the client name on two invoices.
    view.set_query("acme");

    assert_eq!(view.snapshot().filtered_len(), 2);

    view.set_query("");
    view.toggle_sort(InvoiceColumn::Amount);

    let cheapest = view
        .snapshot()
        .rows()
        .first()
        .map(|invoice| invoice.reference.clone());

    assert_eq!(cheapest.as_deref(), Some("INV-0008"));

    view.toggle_sort(InvoiceColumn::Amount);

    let priciest = view
        .snapshot()
        .rows()
        .first()
        .map(|invoice| invoice.reference.clone());

    assert_eq!(priciest.as_deref(), Some("INV-0003"));

    let summary = view.summary(fixture.currency()?)?;

    assert_eq!(summary.count(), 8);
    assert_eq!(summary.total(), Money::from_minor(822_000, GBP));
    assert_eq!(
        summary.total_for(InvoiceStatus::Pending),
        Money::from_minor(216_000, GBP)
    );
    assert_eq!(
        summary.total_for(InvoiceStatus::Overdue),
        Money::from_minor(231_000, GBP)
    );

    Ok(())
}

#[test]
fn client_view_counts_statuses_and_finds_by_query() -> TestResult {
    let fixture = Fixture::from_set("demo")?;
    let mut view = fixture.client_view(Pager::default());

    let counts = view.tab_counts();

    assert_eq!(counts.count_for(ClientStatus::Active), 3);
    assert_eq!(counts.count_for(ClientStatus::Inactive), 1);
    assert_eq!(counts.count_for(ClientStatus::Overdue), 1);

    view.set_query("cardinal");
    view.set_tab(TabFilter::Only(ClientStatus::Overdue));

    let page = view.snapshot();

    assert_eq!(page.filtered_len(), 1);
    assert_eq!(
        page.rows().first().map(|client| client.name.as_str()),
        Some("Marcus Webb")
    );

    Ok(())
}

#[test]
fn payment_view_summarizes_every_processing_state() -> TestResult {
    let fixture = Fixture::from_set("demo")?;
    let view = fixture.payment_view(Pager::default());

    let summary = view.summary(fixture.currency()?)?;

    assert_eq!(summary.count(), 6);
    assert_eq!(summary.total(), Money::from_minor(361_500, GBP));
    assert_eq!(summary.count_for(PaymentStatus::Completed), 2);
    assert_eq!(summary.count_for(PaymentStatus::Failed), 1);
    assert_eq!(summary.count_for(PaymentStatus::Refunded), 1);

    Ok(())
}

#[test]
fn user_view_filters_by_suspension_tab() -> TestResult {
    let fixture = Fixture::from_set("demo")?;
    let mut view = fixture.user_view(Pager::default());

    let counts = view.tab_counts();

    assert_eq!(counts.total(), 3);
    assert_eq!(counts.count_for(SuspensionType::Temporary), 2);
    assert_eq!(counts.count_for(SuspensionType::Permanent), 1);

    view.set_tab(TabFilter::Only(SuspensionType::Permanent));

    let page = view.snapshot();

    assert_eq!(page.filtered_len(), 1);
    assert_eq!(
        page.rows().first().map(|user| user.name.as_str()),
        Some("Victor Hale")
    );

    Ok(())
}

#[test]
fn rendered_invoice_table_carries_rows_and_footer() -> TestResult {
    let fixture = Fixture::from_set("demo")?;
    let view = fixture.invoice_view(Pager::default());

    let mut buf = Vec::new();

    write_table(&mut buf, &view.snapshot())?;
    write_summary(&mut buf, &view.summary(fixture.currency()?)?)?;

    let output = String::from_utf8(buf)?;

    assert!(output.contains("INV-0001"), "first data row");
    assert!(output.contains("Cardinal Freight"), "client column");
    assert!(output.contains("8 of 8 records"), "footer");
    assert!(output.contains("Total"), "summary total line");

    Ok(())
}

#[test]
fn rendered_user_table_handles_missing_violations() -> TestResult {
    let fixture = Fixture::from_set("demo")?;
    let view = fixture.user_view(Pager::default());

    let mut buf = Vec::new();

    write_table(&mut buf, &view.snapshot())?;

    let output = String::from_utf8(buf)?;

    // Iris Novak has no recorded violations; the last-violation cell is a
    // placeholder dash rather than a date.
    assert!(output.contains("Iris Novak"), "user row");
    assert!(output.contains('\u{2014}'), "placeholder for no violations");

    Ok(())
}
