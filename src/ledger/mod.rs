//! Transaction domain model, the in-memory store, form validation, and monthly
//! aggregation.

pub mod form;
pub mod monthly;
pub mod store;
pub mod transaction;

pub use form::{parse_amount, parse_date, parse_description, RawTransactionInput};
pub use monthly::{aggregate_by_month, MonthKey, MonthlyTotal};
pub use store::TransactionStore;
pub use transaction::{Transaction, TransactionId, ValidatedTransaction};
