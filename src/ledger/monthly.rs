//! Monthly aggregation of transaction amounts for charting.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::transaction::Transaction;

/// Calendar month used as the grouping key. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Human readable label such as `Dec 2024`.
    pub fn label(&self) -> String {
        match NaiveDate::from_ymd_opt(self.year, self.month, 1) {
            Some(first) => first.format("%b %Y").to_string(),
            None => format!("{:04}-{:02}", self.year, self.month),
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// One chart bar: the signed sum of a month's amounts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTotal {
    pub month: MonthKey,
    pub label: String,
    pub total: f64,
}

/// Groups `transactions` by calendar month and sums their signed amounts.
///
/// Rows are ordered by `(year, month)`; an empty input gives an empty result.
pub fn aggregate_by_month(transactions: &[Transaction]) -> Vec<MonthlyTotal> {
    let mut totals: BTreeMap<MonthKey, f64> = BTreeMap::new();

    for transaction in transactions {
        *totals.entry(MonthKey::of(transaction.date)).or_insert(0.0) += transaction.amount;
    }

    totals
        .into_iter()
        .map(|(month, total)| MonthlyTotal {
            month,
            label: month.label(),
            total,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::transaction::TransactionId;

    fn txn(amount: f64, year: i32, month: u32, day: u32) -> Transaction {
        Transaction {
            id: TransactionId::new(),
            amount,
            description: "test".into(),
            date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        }
    }

    fn rows(totals: &[MonthlyTotal]) -> Vec<(&str, f64)> {
        totals
            .iter()
            .map(|row| (row.label.as_str(), row.total))
            .collect()
    }

    #[test]
    fn groups_across_year_boundary_in_chronological_order() {
        let transactions = vec![
            txn(100.0, 2024, 12, 5),
            txn(50.0, 2025, 1, 10),
            txn(-20.0, 2024, 12, 20),
        ];
        let totals = aggregate_by_month(&transactions);
        assert_eq!(rows(&totals), vec![("Dec 2024", 80.0), ("Jan 2025", 50.0)]);
    }

    #[test]
    fn empty_input_yields_no_rows() {
        assert!(aggregate_by_month(&[]).is_empty());
    }

    #[test]
    fn same_month_in_different_years_stays_separate() {
        let transactions = vec![txn(5.0, 2025, 3, 1), txn(7.0, 2024, 3, 31)];
        let totals = aggregate_by_month(&transactions);
        assert_eq!(rows(&totals), vec![("Mar 2024", 7.0), ("Mar 2025", 5.0)]);
        assert_eq!(totals[0].month, MonthKey { year: 2024, month: 3 });
    }

    #[test]
    fn ordering_is_chronological_not_lexical() {
        let transactions = vec![
            txn(1.0, 2024, 4, 1),
            txn(2.0, 2024, 8, 1),
            txn(3.0, 2024, 2, 1),
        ];
        let labels: Vec<String> = aggregate_by_month(&transactions)
            .into_iter()
            .map(|row| row.label)
            .collect();
        assert_eq!(labels, vec!["Feb 2024", "Apr 2024", "Aug 2024"]);
    }

    #[test]
    fn offsetting_amounts_sum_to_zero_row() {
        let transactions = vec![txn(30.0, 2024, 6, 1), txn(-30.0, 2024, 6, 2)];
        assert_eq!(rows(&aggregate_by_month(&transactions)), vec![("Jun 2024", 0.0)]);
    }

    #[test]
    fn result_does_not_depend_on_input_order() {
        let mut transactions = vec![
            txn(10.0, 2023, 11, 3),
            txn(20.0, 2024, 1, 3),
            txn(5.0, 2023, 11, 30),
        ];
        let forward = aggregate_by_month(&transactions);
        transactions.reverse();
        assert_eq!(aggregate_by_month(&transactions), forward);
    }
}
