use serde::Serialize;

use crate::ledger::{aggregate_by_month, MonthlyTotal, TransactionStore};

/// Monthly totals derived from the current contents of a store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyReport {
    pub rows: Vec<MonthlyTotal>,
}

impl MonthlyReport {
    /// `true` when there is nothing to chart.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn grand_total(&self) -> f64 {
        self.rows.iter().map(|row| row.total).sum()
    }

    /// Largest absolute monthly total, used to scale chart bars.
    pub fn largest_magnitude(&self) -> f64 {
        self.rows
            .iter()
            .map(|row| row.total.abs())
            .fold(0.0, f64::max)
    }
}

pub struct SummaryService;

impl SummaryService {
    /// Recomputes the monthly report from the store's current list.
    pub fn monthly_report(store: &TransactionStore) -> MonthlyReport {
        let rows = aggregate_by_month(store.list());
        tracing::debug!(months = rows.len(), "monthly report computed");
        MonthlyReport { rows }
    }
}
