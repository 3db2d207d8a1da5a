//! Cart totals.

use crate::cart::Cart;
use crate::money::{Currency, Money};

/// Monetary figures derived from a cart.
///
/// Computed on demand and never stored on the cart. Amounts are unrounded;
/// use [`CartTotals::display`] or [`Money::display`] to format them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CartTotals {
    /// Total units across all lines.
    pub item_count: u64,
    /// Sum of `price * quantity`.
    pub subtotal: f64,
    /// Active discount percentage, 0 without a discount.
    pub discount_percent: u8,
    /// `subtotal * discount_percent / 100`.
    pub discount_amount: f64,
    /// `subtotal - discount_amount`.
    pub total: f64,
}

impl CartTotals {
    pub fn from_cart(cart: &Cart) -> Self {
        let subtotal = cart.subtotal();
        let discount_amount = cart
            .discount()
            .map(|d| d.amount_off(subtotal))
            .unwrap_or(0.0);
        Self {
            item_count: cart.item_count(),
            subtotal,
            discount_percent: cart.discount_percent(),
            discount_amount,
            total: subtotal - discount_amount,
        }
    }

    pub fn has_discount(&self) -> bool {
        self.discount_percent > 0
    }

    /// Formatted figures for a summary panel.
    pub fn display(&self, currency: Currency) -> TotalsDisplay {
        TotalsDisplay {
            subtotal: Money::new(self.subtotal, currency).display(),
            discount: Money::new(self.discount_amount, currency).display(),
            total: Money::new(self.total, currency).display(),
        }
    }
}

/// Display strings for cart totals, rounded to the currency's precision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalsDisplay {
    pub subtotal: String,
    pub discount: String,
    pub total: String,
}
