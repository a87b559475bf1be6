#![allow(dead_code)]

use finance_tracker::{
    core::services::TransactionService,
    ledger::{RawTransactionInput, Transaction, TransactionStore},
};

/// Builds a store from `(amount, description, date)` form triples.
pub fn store_with(entries: &[(&str, &str, &str)]) -> TransactionStore {
    let mut store = TransactionStore::new();
    for (amount, description, date) in entries {
        TransactionService::submit_new(
            &mut store,
            &RawTransactionInput::new(*amount, *description, *date),
        )
        .expect("fixture input must be valid");
    }
    store
}

/// Field values of every stored record, ignoring identifiers.
pub fn fields(store: &TransactionStore) -> Vec<(f64, String, String)> {
    store
        .list()
        .iter()
        .map(|t: &Transaction| (t.amount, t.description.clone(), t.date.to_string()))
        .collect()
}
