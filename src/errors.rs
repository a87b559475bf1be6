use std::fmt;

use thiserror::Error;

/// Why a required form field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldIssue {
    /// Nothing was entered.
    Missing,
    /// Something was entered but it could not be parsed.
    Malformed,
}

/// Field-level validation failure for transaction form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", amount_message(.0))]
    InvalidAmount(FieldIssue),
    #[error("Description is required")]
    EmptyDescription,
    #[error("{}", date_message(.0))]
    InvalidDate(FieldIssue),
}

impl ValidationError {
    /// Name of the form field the error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidAmount(_) => "amount",
            ValidationError::EmptyDescription => "description",
            ValidationError::InvalidDate(_) => "date",
        }
    }
}

fn amount_message(issue: &FieldIssue) -> &'static str {
    match issue {
        FieldIssue::Missing => "Amount is required",
        FieldIssue::Malformed => "Amount must be a valid number",
    }
}

fn date_message(issue: &FieldIssue) -> &'static str {
    match issue {
        FieldIssue::Missing => "Date is required",
        FieldIssue::Malformed => "Invalid date format",
    }
}

/// Every field error produced by one form submission, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormErrors {
    errors: Vec<ValidationError>,
}

impl FormErrors {
    pub(crate) fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    /// The first failing field in form order (amount, description, date).
    pub fn first(&self) -> Option<ValidationError> {
        self.errors.first().copied()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn for_field(&self, field: &str) -> Option<ValidationError> {
        self.errors.iter().copied().find(|err| err.field() == field)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.errors.iter().map(ToString::to_string).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for FormErrors {}

impl From<ValidationError> for FormErrors {
    fn from(err: ValidationError) -> Self {
        Self { errors: vec![err] }
    }
}

/// Errors raised outside form validation: preference files and I/O.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}
