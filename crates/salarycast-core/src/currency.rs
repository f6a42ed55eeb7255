//! Display-currency conversion for predicted salaries.
//!
//! Predictions come out of the model in its training currency (USD). The
//! converter applies one fixed linear rate for display in INR; it is not a
//! live FX feed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default USD to INR conversion rate.
pub const DEFAULT_USD_TO_INR: f64 = 83.0;

/// Display currency for a predicted salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    /// United States dollars, the model's training currency.
    Usd,
    /// Indian rupees.
    Inr,
}

impl Currency {
    /// Currency symbol for display.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Inr => "₹",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usd => f.write_str("USD"),
            Self::Inr => f.write_str("INR"),
        }
    }
}

/// Fixed-rate converter from USD amounts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CurrencyConverter {
    usd_to_inr: f64,
}

impl Default for CurrencyConverter {
    fn default() -> Self {
        Self {
            usd_to_inr: DEFAULT_USD_TO_INR,
        }
    }
}

impl CurrencyConverter {
    /// Create a converter with an explicit USD to INR rate.
    pub fn new(usd_to_inr: f64) -> Self {
        Self { usd_to_inr }
    }

    /// The USD to INR rate in effect.
    pub fn usd_to_inr(&self) -> f64 {
        self.usd_to_inr
    }

    /// Convert a USD amount into the target currency.
    pub fn convert(&self, amount_usd: f64, to: Currency) -> f64 {
        match to {
            Currency::Usd => amount_usd,
            Currency::Inr => amount_usd * self.usd_to_inr,
        }
    }
}

/// Format an amount with its currency symbol and thousands separators,
/// rounded to whole units, e.g. `$120,500` or `₹9,999,000`.
pub fn format_amount(amount: f64, currency: Currency) -> String {
    format!("{}{}", currency.symbol(), group_thousands(amount))
}

fn group_thousands(amount: f64) -> String {
    let rounded = amount.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}
