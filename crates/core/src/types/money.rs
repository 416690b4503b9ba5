//! Monetary amounts as supplied by the catalog services.
//!
//! Upstream payloads carry prices as decimal strings (`"180.00"`) alongside
//! an ISO 4217 currency code. The string form is preserved end to end; it is
//! only parsed when arithmetic (cart subtotals) or display formatting needs
//! a numeric value.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monetary amount with currency code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    /// Decimal amount as string (preserves upstream precision).
    pub amount: String,
    /// ISO 4217 currency code.
    pub currency_code: String,
}

impl Money {
    /// Create a new monetary amount.
    pub fn new(amount: impl Into<String>, currency_code: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            currency_code: currency_code.into(),
        }
    }

    /// Parse the amount as a decimal.
    ///
    /// An unparseable amount is treated as zero so that price arithmetic
    /// stays total; the catalog never validates upstream values.
    #[must_use]
    pub fn amount_decimal(&self) -> Decimal {
        self.amount.trim().parse().unwrap_or(Decimal::ZERO)
    }

    /// Format for display, e.g. `"KES 180.00"`.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} {:.2}", self.currency_code, self.amount_decimal())
    }
}
