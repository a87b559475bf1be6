use serde::Serialize;

use super::transaction::{Transaction, TransactionId, ValidatedTransaction};

/// Session-scoped owner of the transaction sequence.
///
/// Records stay in insertion order; edits replace a record in place and only
/// [`TransactionStore::add`] appends.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `input` under a fresh identifier at the end of the sequence.
    pub fn add(&mut self, input: ValidatedTransaction) -> Transaction {
        let mut id = TransactionId::new();
        while self.position(id).is_some() {
            id = TransactionId::new();
        }
        let transaction = Transaction::from_validated(id, input);
        self.transactions.push(transaction.clone());
        tracing::debug!(%id, count = self.transactions.len(), "transaction added");
        transaction
    }

    /// Replaces the record stored under `id`, keeping its position.
    ///
    /// Unknown identifiers are ignored; the return value reports whether a
    /// record was replaced.
    pub fn update(&mut self, id: TransactionId, input: ValidatedTransaction) -> bool {
        match self.position(id) {
            Some(index) => {
                self.transactions[index] = Transaction::from_validated(id, input);
                tracing::debug!(%id, index, "transaction updated");
                true
            }
            None => {
                tracing::debug!(%id, "update ignored for unknown transaction");
                false
            }
        }
    }

    /// Removes the record stored under `id`; unknown identifiers are ignored.
    pub fn remove(&mut self, id: TransactionId) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|transaction| transaction.id != id);
        let removed = self.transactions.len() != before;
        if removed {
            tracing::debug!(%id, count = self.transactions.len(), "transaction removed");
        } else {
            tracing::debug!(%id, "remove ignored for unknown transaction");
        }
        removed
    }

    pub fn list(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions
            .iter()
            .find(|transaction| transaction.id == id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Resolves a user-facing selector: `#N` (1-based list position), a full
    /// identifier, or an identifier prefix matching exactly one record.
    pub fn resolve(&self, selector: &str) -> Option<TransactionId> {
        let selector = selector.trim();
        if let Some(position) = selector.strip_prefix('#') {
            let index = position.parse::<usize>().ok()?.checked_sub(1)?;
            return self.transactions.get(index).map(|transaction| transaction.id);
        }
        if selector.is_empty() {
            return None;
        }
        if let Ok(id) = selector.parse::<TransactionId>() {
            return self.get(id).map(|transaction| transaction.id);
        }

        let needle = selector.to_ascii_lowercase();
        let mut matches = self
            .transactions
            .iter()
            .filter(|transaction| transaction.id.to_string().starts_with(&needle));
        match (matches.next(), matches.next()) {
            (Some(only), None) => Some(only.id),
            _ => None,
        }
    }

    fn position(&self, id: TransactionId) -> Option<usize> {
        self.transactions
            .iter()
            .position(|transaction| transaction.id == id)
    }
}
