//! Display formatting for amounts. Formatting never changes stored values.

use serde::{Deserialize, Serialize};

const DISPLAY_PRECISION: usize = 2;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum NegativeStyle {
    #[default]
    Sign,
    Parentheses,
}

/// Renders amounts as two-decimal currency strings such as `$80.00`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormatter {
    symbol: String,
    negative_style: NegativeStyle,
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::new("$", NegativeStyle::Sign)
    }
}

impl CurrencyFormatter {
    pub fn new(symbol: impl Into<String>, negative_style: NegativeStyle) -> Self {
        Self {
            symbol: symbol.into(),
            negative_style,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn format(&self, amount: f64) -> String {
        let body = format!("{:.*}", DISPLAY_PRECISION, amount.abs());
        // Values that round to zero never carry a sign.
        let negative = amount < 0.0 && body.bytes().any(|b| b.is_ascii_digit() && b != b'0');
        if !negative {
            return format!("{}{}", self.symbol, body);
        }
        match self.negative_style {
            NegativeStyle::Sign => format!("-{}{}", self.symbol, body),
            NegativeStyle::Parentheses => format!("({}{})", self.symbol, body),
        }
    }
}
