//! Text renderings of the transaction list and the monthly bar chart.

use crate::core::services::MonthlyReport;
use crate::currency::CurrencyFormatter;
use crate::ledger::Transaction;

pub const NO_DATA: &str = "No data to display";
pub const NO_TRANSACTIONS: &str = "No transactions yet";

const POSITIVE_BAR: char = '█';
const NEGATIVE_BAR: char = '░';
const SHORT_ID_LEN: usize = 8;

/// One line per month: label, a bar scaled to the largest magnitude, total.
pub fn render_chart(
    report: &MonthlyReport,
    formatter: &CurrencyFormatter,
    width: usize,
) -> Vec<String> {
    if report.is_empty() {
        return vec![NO_DATA.to_string()];
    }

    let scale = report.largest_magnitude();
    let label_width = report
        .rows
        .iter()
        .map(|row| row.label.chars().count())
        .max()
        .unwrap_or(0);

    report
        .rows
        .iter()
        .map(|row| {
            let length = bar_length(row.total, scale, width);
            let fill = if row.total < 0.0 {
                NEGATIVE_BAR
            } else {
                POSITIVE_BAR
            };
            let bar: String = std::iter::repeat(fill).take(length).collect();
            format!(
                "{:<label_width$} | {:<width$} {}",
                row.label,
                bar,
                formatter.format(row.total),
            )
        })
        .collect()
}

fn bar_length(total: f64, scale: f64, width: usize) -> usize {
    if scale <= 0.0 || total == 0.0 {
        return 0;
    }
    // A month whose sum overflowed fills the row.
    if !total.is_finite() {
        return width;
    }
    let length = (total.abs() / scale * width as f64).round() as usize;
    // Non-zero months always get at least one cell.
    length.clamp(1, width)
}

/// Table of transactions in list order with their 1-based positions.
pub fn render_table(transactions: &[Transaction], formatter: &CurrencyFormatter) -> Vec<String> {
    if transactions.is_empty() {
        return vec![NO_TRANSACTIONS.to_string()];
    }

    let header = ["#", "ID", "Date", "Description", "Amount"];
    let rows: Vec<[String; 5]> = transactions
        .iter()
        .enumerate()
        .map(|(index, transaction)| {
            let id = transaction.id.to_string();
            [
                (index + 1).to_string(),
                id.chars().take(SHORT_ID_LEN).collect(),
                transaction.date.format("%Y-%m-%d").to_string(),
                transaction.description.clone(),
                formatter.format(transaction.amount),
            ]
        })
        .collect();

    let mut widths = header.map(|title| title.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: [&str; 5]| {
        let mut line = String::new();
        for (column, cell) in cells.iter().enumerate() {
            if column > 0 {
                line.push_str("  ");
            }
            let padding = widths[column].saturating_sub(cell.chars().count());
            // Amounts are right-aligned, everything else left-aligned.
            if column == 4 {
                line.push_str(&" ".repeat(padding));
                line.push_str(cell);
            } else {
                line.push_str(cell);
                line.push_str(&" ".repeat(padding));
            }
        }
        line.trim_end().to_string()
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(header));
    lines.push(
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in &rows {
        lines.push(format_row([
            row[0].as_str(),
            row[1].as_str(),
            row[2].as_str(),
            row[3].as_str(),
            row[4].as_str(),
        ]));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::{SummaryService, TransactionService};
    use crate::ledger::{RawTransactionInput, TransactionStore};

    fn store() -> TransactionStore {
        let mut store = TransactionStore::new();
        for (amount, description, date) in [
            ("100", "Salary", "2024-12-05"),
            ("50", "Gift", "2025-01-10"),
            ("-20", "Dinner", "2024-12-20"),
            ("-200", "Rent", "2025-02-01"),
        ] {
            TransactionService::submit_new(
                &mut store,
                &RawTransactionInput::new(amount, description, date),
            )
            .unwrap();
        }
        store
    }

    #[test]
    fn empty_report_renders_no_data_state() {
        let report = SummaryService::monthly_report(&TransactionStore::new());
        assert_eq!(
            render_chart(&report, &CurrencyFormatter::default(), 20),
            vec![NO_DATA.to_string()]
        );
    }

    #[test]
    fn bars_scale_to_largest_month() {
        let report = SummaryService::monthly_report(&store());
        let lines = render_chart(&report, &CurrencyFormatter::default(), 20);

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Dec 2024 | "));
        assert!(lines[0].ends_with("$80.00"));
        assert_eq!(lines[0].matches(POSITIVE_BAR).count(), 8);
        assert_eq!(lines[1].matches(POSITIVE_BAR).count(), 5);
        assert_eq!(lines[2].matches(NEGATIVE_BAR).count(), 20);
        assert!(lines[2].ends_with("-$200.00"));
    }

    #[test]
    fn bar_length_keeps_small_months_visible() {
        assert_eq!(bar_length(0.01, 1000.0, 40), 1);
        assert_eq!(bar_length(0.0, 1000.0, 40), 0);
        assert_eq!(bar_length(5.0, 0.0, 40), 0);
    }

    #[test]
    fn overflowed_month_fills_the_bar() {
        let mut store = TransactionStore::new();
        for (amount, date) in [
            ("1e308", "2024-01-01"),
            ("1e308", "2024-01-02"),
            ("5", "2024-02-01"),
        ] {
            TransactionService::submit_new(
                &mut store,
                &RawTransactionInput::new(amount, "Huge", date),
            )
            .unwrap();
        }
        let report = SummaryService::monthly_report(&store);
        assert!(report.rows[0].total.is_infinite());

        let lines = render_chart(&report, &CurrencyFormatter::default(), 10);
        assert_eq!(lines[0].matches(POSITIVE_BAR).count(), 10);
        assert_eq!(lines[1].matches(POSITIVE_BAR).count(), 1);
    }

    #[test]
    fn table_lists_rows_in_store_order() {
        let store = store();
        let lines = render_table(store.list(), &CurrencyFormatter::default());

        assert_eq!(lines.len(), store.len() + 2);
        assert!(lines[0].starts_with("#  ID"));
        assert!(lines[2].contains("Salary"));
        assert!(lines[2].trim_end().ends_with("$100.00"));
        assert!(lines[5].contains("Rent"));
        assert!(lines[5].ends_with("-$200.00"));
    }

    #[test]
    fn empty_table_renders_placeholder() {
        assert_eq!(
            render_table(&[], &CurrencyFormatter::default()),
            vec![NO_TRANSACTIONS.to_string()]
        );
    }
}
