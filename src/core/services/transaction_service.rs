//! Form-to-store flows for managing transactions.

use crate::core::services::ServiceResult;
use crate::ledger::{RawTransactionInput, Transaction, TransactionId, TransactionStore};

/// Validates raw form input before handing it to the store.
pub struct TransactionService;

impl TransactionService {
    /// Validates `input` and appends it as a new transaction.
    pub fn submit_new(
        store: &mut TransactionStore,
        input: &RawTransactionInput,
    ) -> ServiceResult<Transaction> {
        let validated = input.validate().map_err(|errors| {
            tracing::debug!(%errors, "new transaction rejected");
            errors
        })?;
        Ok(store.add(validated))
    }

    /// Validates `input` and replaces the transaction stored under `id`.
    ///
    /// Returns `Ok(false)` when `id` is no longer present; that is not an error.
    pub fn submit_edit(
        store: &mut TransactionStore,
        id: TransactionId,
        input: &RawTransactionInput,
    ) -> ServiceResult<bool> {
        let validated = input.validate().map_err(|errors| {
            tracing::debug!(%id, %errors, "transaction edit rejected");
            errors
        })?;
        Ok(store.update(id, validated))
    }

    /// Removes the transaction stored under `id`, if any.
    pub fn delete(store: &mut TransactionStore, id: TransactionId) -> bool {
        store.remove(id)
    }

    /// Form values to pre-fill when editing the transaction stored under `id`.
    pub fn prefill(store: &TransactionStore, id: TransactionId) -> Option<RawTransactionInput> {
        store.get(id).map(RawTransactionInput::from)
    }

    /// Returns the store's transactions in insertion order.
    pub fn list(store: &TransactionStore) -> &[Transaction] {
        store.list()
    }
}
