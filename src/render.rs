//! Rendering
//!
//! Terminal rendering for a view page and its summary, in the style of the
//! dashboard tables: bold headers, a tone-colored status column, grey
//! borders and a page footer. Rendering is the only place a [`Tone`] turns
//! into a concrete color, so the status enumerations stay presentation-free.

use std::{fmt::Write as _, io};

use smallvec::SmallVec;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    records::Record,
    status::{Status, Tone},
    summary::Summary,
    view::ViewPage,
};

/// Errors that can occur while writing a table.
#[derive(Debug, Error)]
pub enum RenderError {
    /// IO error
    #[error("IO error")]
    IO,
}

/// Column headers and cell projection for one record kind.
pub trait TableRow: Record {
    /// Header labels, one per cell.
    const HEADERS: &'static [&'static str];

    /// Index of the status column within [`Self::HEADERS`].
    const STATUS_COLUMN: usize;

    /// Indexes of right-aligned columns (amounts, counts).
    const RIGHT_ALIGNED: &'static [usize];

    /// The record's cells, matching [`Self::HEADERS`] in length and order.
    fn cells(&self) -> Vec<String>;
}

/// Terminal color for a status tone.
fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Positive => Color::FG_GREEN,
        Tone::Info => Color::FG_CYAN,
        Tone::Warning => Color::FG_YELLOW,
        Tone::Critical => Color::FG_RED,
        Tone::Neutral => Color::FG_WHITE,
    }
}

/// Writes one view page as a table followed by a page footer.
///
/// An empty filtered set renders an empty-state line instead of a table;
/// this is the "no results" presentation, not an error.
///
/// # Errors
///
/// Returns a [`RenderError`] if the sink cannot be written to.
pub fn write_table<R: TableRow>(
    mut out: impl io::Write,
    page: &ViewPage<'_, R>,
) -> Result<(), RenderError> {
    if page.is_empty() {
        writeln!(out, "\nNo matching records.").map_err(|_err| RenderError::IO)?;

        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record(R::HEADERS.iter().map(ToString::to_string));

    let mut color_ops: SmallVec<[(usize, usize, Color); 16]> = SmallVec::new();

    for (row_idx, record) in page.rows().iter().enumerate() {
        builder.push_record(record.cells());

        color_ops.push((
            row_idx + 1,
            R::STATUS_COLUMN,
            tone_color(record.status().tone()),
        ));
    }

    let mut table = builder.build();

    table.with(Theme::from(Style::modern_rounded()));
    table.modify(Rows::first(), Color::BOLD);

    for &col in R::RIGHT_ALIGNED {
        table.modify(Columns::new(col..col + 1), Alignment::right());
    }

    for (row, col, color) in color_ops {
        table.modify((row, col), color);
    }

    let table_str = colorize_borders(&table.to_string());

    writeln!(out, "\n{table_str}").map_err(|_err| RenderError::IO)?;

    writeln!(
        out,
        "Page {} of {} \u{2014} {} of {} records",
        page.page_index() + 1,
        page.page_count(),
        page.filtered_len(),
        page.total_len(),
    )
    .map_err(|_err| RenderError::IO)
}

/// Writes the summary lines under a table: one per status, then the total.
///
/// # Errors
///
/// Returns a [`RenderError`] if the sink cannot be written to.
pub fn write_summary<S: Status>(
    mut out: impl io::Write,
    summary: &Summary<S>,
) -> Result<(), RenderError> {
    let label_width = S::ALL
        .iter()
        .map(|status| status.label().len())
        .max()
        .unwrap_or(0)
        .max("Total".len());

    for status in S::ALL {
        writeln!(
            out,
            " {label:<label_width$}  {count:>4}  {total}",
            label = status.label(),
            count = summary.count_for(*status),
            total = summary.total_for(*status),
        )
        .map_err(|_err| RenderError::IO)?;
    }

    writeln!(
        out,
        " \x1b[1m{label:<label_width$}  {count:>4}  {total}\x1b[0m",
        label = "Total",
        count = summary.count(),
        total = summary.total(),
    )
    .map_err(|_err| RenderError::IO)
}

/// Wraps runs of UTF-8 box-drawing characters in ANSI dark-grey escape codes.
///
/// Box-drawing characters occupy the Unicode range U+2500..U+257F. This
/// function scans each character, grouping consecutive border characters and
/// emitting a single grey escape sequence around each run, leaving cell
/// content untouched.
fn colorize_borders(table: &str) -> String {
    let mut out = String::with_capacity(table.len() + 256);
    let mut in_run = false;

    for ch in table.chars() {
        let box_char = ('\u{2500}'..='\u{257F}').contains(&ch);

        if box_char && !in_run {
            _ = out.write_str("\x1b[90m");
            in_run = true;
        } else if !box_char && in_run {
            _ = out.write_str("\x1b[0m");
            in_run = false;
        }

        out.push(ch);
    }

    if in_run {
        _ = out.write_str("\x1b[0m");
    }

    out
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use rusty_money::{Money, iso::GBP};
    use testresult::TestResult;
    use time::macros::date;

    use crate::{
        domain::{Payment, PaymentKey, PaymentMethod, PaymentStatus},
        page::Pager,
        summary::summarize,
        view::TableView,
    };

    use super::*;

    fn payment(reference: &str, minor: i64, status: PaymentStatus) -> Payment {
        Payment {
            key: PaymentKey::default(),
            reference: reference.to_string(),
            client: "Acme Ltd".to_string(),
            amount: Money::from_minor(minor, GBP),
            status,
            method: PaymentMethod::Card,
            date: date!(2026 - 08 - 01),
        }
    }

    fn pager() -> Result<Pager, std::num::TryFromIntError> {
        Ok(Pager::new(NonZeroUsize::try_from(10)?))
    }

    #[test]
    fn table_output_contains_headers_rows_and_footer() -> TestResult {
        let payments = vec![
            payment("PAY-001", 12_000, PaymentStatus::Completed),
            payment("PAY-002", 3_300, PaymentStatus::Failed),
        ];

        let view = TableView::new(payments, pager()?);
        let page = view.snapshot();

        let mut buf = Vec::new();
        write_table(&mut buf, &page)?;

        let output = String::from_utf8(buf)?;

        assert!(output.contains("Reference"), "header row");
        assert!(output.contains("PAY-001"), "data row");
        assert!(output.contains("Completed"), "status label");
        assert!(output.contains("Page 1 of 1"), "footer");

        Ok(())
    }

    #[test]
    fn empty_page_renders_the_empty_state() -> TestResult {
        let view: TableView<Payment> = TableView::new(Vec::new(), pager()?);
        let page = view.snapshot();

        let mut buf = Vec::new();
        write_table(&mut buf, &page)?;

        let output = String::from_utf8(buf)?;

        assert!(output.contains("No matching records."), "output: {output}");
        assert!(!output.contains("Reference"), "no table for no rows");

        Ok(())
    }

    #[test]
    fn summary_lists_every_status_and_a_total_line() -> TestResult {
        let payments = vec![
            payment("PAY-001", 500, PaymentStatus::Completed),
            payment("PAY-002", 300, PaymentStatus::Refunded),
        ];

        let summary = summarize(&payments, GBP)?;

        let mut buf = Vec::new();
        write_summary(&mut buf, &summary)?;

        let output = String::from_utf8(buf)?;

        for label in ["Completed", "Pending", "Processing", "Failed", "Refunded", "Total"] {
            assert!(output.contains(label), "missing {label} in: {output}");
        }

        Ok(())
    }

    #[test]
    fn borders_are_wrapped_in_grey_escapes() {
        let colored = colorize_borders("─a─");

        assert_eq!(colored, "\x1b[90m─\x1b[0ma\x1b[90m─\x1b[0m");
    }
}
