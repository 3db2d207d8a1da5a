//! Money type for displaying monetary values.
//!
//! Storefront prices are decimal currency amounts. Arithmetic is carried
//! out at full `f64` precision and only rounded when formatted, so a
//! percentage discount never drifts from `subtotal * percent / 100`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
    CAD,
    AUD,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
            Currency::CAD => "CA$",
            Currency::AUD => "A$",
        }
    }

    /// Number of decimal places shown for this currency.
    pub fn decimal_places(&self) -> usize {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in major currency units (e.g., dollars).
    pub amount: f64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    pub fn new(amount: f64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// A value in the default currency.
    pub fn usd(amount: f64) -> Self {
        Self::new(amount, Currency::USD)
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format without the symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places();
        format!("{:.places$}", self.amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display() {
        assert_eq!(Money::usd(49.99).display(), "$49.99");
        assert_eq!(Money::usd(100.0).display(), "$100.00");
        assert_eq!(Money::new(100.0, Currency::JPY).display(), "\u{00a5}100");
        assert_eq!(Money::new(12.5, Currency::EUR).to_string(), "\u{20ac}12.50");
    }

    #[test]
    fn test_display_rounds_only_at_format_time() {
        let m = Money::usd(19.995 * 0.15);
        assert!((m.amount - 2.99925).abs() < 1e-12);
        assert_eq!(m.display(), "$3.00");
        assert_eq!(m.display_amount(), "3.00");
    }

    #[test]
    fn test_currency_serde_uses_code() {
        let json = serde_json::to_string(&Currency::GBP).unwrap();
        assert_eq!(json, "\"GBP\"");
        assert_eq!(Currency::GBP.to_string(), Currency::GBP.code());
        assert_eq!(Currency::JPY.decimal_places(), 0);
    }
}
