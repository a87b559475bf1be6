//! Raw transaction form input and the field validators that turn it into a
//! [`ValidatedTransaction`].

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::errors::{FieldIssue, FormErrors, ValidationError};

use super::transaction::{Transaction, ValidatedTransaction};

const DATE_FORMAT: &str = "%Y-%m-%d";
const NAIVE_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// The three text fields of the transaction form, exactly as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTransactionInput {
    pub amount: String,
    pub description: String,
    pub date: String,
}

impl RawTransactionInput {
    pub fn new(
        amount: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            description: description.into(),
            date: date.into(),
        }
    }

    /// A new-transaction form whose date is pre-filled with today's local date.
    pub fn dated_today(amount: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(amount, description, today())
    }

    /// Validates every field, collecting all failures in field order.
    pub fn validate(&self) -> Result<ValidatedTransaction, FormErrors> {
        let amount = parse_amount(&self.amount);
        let description = parse_description(&self.description);
        let date = parse_date(&self.date);

        match (amount, description, date) {
            (Ok(amount), Ok(description), Ok(date)) => Ok(ValidatedTransaction {
                amount,
                description,
                date,
            }),
            (amount, description, date) => Err(FormErrors::new(
                [amount.err(), description.err(), date.err()]
                    .into_iter()
                    .flatten()
                    .collect(),
            )),
        }
    }
}

impl From<&Transaction> for RawTransactionInput {
    /// Pre-fills the edit form with the record's current values.
    fn from(transaction: &Transaction) -> Self {
        Self {
            amount: transaction.amount.to_string(),
            description: transaction.description.clone(),
            date: transaction.date.format(DATE_FORMAT).to_string(),
        }
    }
}

/// Today's local date as form text.
pub fn today() -> String {
    Local::now().date_naive().format(DATE_FORMAT).to_string()
}

/// Parses a signed decimal amount. Surrounding whitespace is ignored and only
/// finite values are accepted.
pub fn parse_amount(raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::InvalidAmount(FieldIssue::Missing));
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or(ValidationError::InvalidAmount(FieldIssue::Malformed))
}

/// Accepts any non-empty description verbatim; whitespace is not trimmed.
pub fn parse_description(raw: &str) -> Result<String, ValidationError> {
    if raw.is_empty() {
        Err(ValidationError::EmptyDescription)
    } else {
        Ok(raw.to_string())
    }
}

/// Parses a calendar date. Date-times are accepted and their time of day is
/// dropped.
pub fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::InvalidDate(FieldIssue::Missing));
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Ok(date);
    }
    if let Ok(date_time) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(date_time.date_naive());
    }
    NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|date_time| date_time.date())
        .ok_or(ValidationError::InvalidDate(FieldIssue::Malformed))
}
