use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque store-assigned identifier of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(Uuid);

impl TransactionId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for TransactionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Typed transaction fields produced by form validation, not yet stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedTransaction {
    pub amount: f64,
    pub description: String,
    pub date: NaiveDate,
}

/// A stored financial record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub amount: f64,
    pub description: String,
    pub date: NaiveDate,
}

impl Transaction {
    pub(crate) fn from_validated(id: TransactionId, input: ValidatedTransaction) -> Self {
        Self {
            id,
            amount: input.amount,
            description: input.description,
            date: input.date,
        }
    }

    /// Copies the record's field values back into validated form.
    pub fn to_validated(&self) -> ValidatedTransaction {
        ValidatedTransaction {
            amount: self.amount,
            description: self.description.clone(),
            date: self.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_round_trips_through_its_display_form() {
        let id = TransactionId::new();
        let parsed: TransactionId = id.to_string().parse().expect("valid uuid");
        assert_eq!(parsed, id);
    }

    #[test]
    fn fresh_ids_differ() {
        assert_ne!(TransactionId::new(), TransactionId::new());
    }
}
