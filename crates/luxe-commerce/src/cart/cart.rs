//! Cart state and its transition function.

use crate::cart::{AppliedDiscount, CartAction, CartTotals};
use crate::catalog::Product;
use crate::ids::ProductId;
use std::sync::Arc;

/// One product/quantity pairing in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    /// Shared catalog product.
    pub product: Arc<Product>,
    /// Always at least 1; a line that would drop to 0 is removed instead.
    pub quantity: u32,
}

impl CartLine {
    pub fn product_id(&self) -> &ProductId {
        &self.product.id
    }

    /// `price * quantity`, unrounded.
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

/// A shopping cart.
///
/// Holds at most one line per product id, in the order products were first
/// added, and at most one discount. Changes go through [`Cart::reduce`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    discount: Option<AppliedDiscount>,
}

impl Cart {
    /// An empty cart with no discount.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one action and return the resulting cart.
    ///
    /// Total over all inputs: every action either applies fully or leaves
    /// the cart unchanged.
    pub fn reduce(mut self, action: CartAction) -> Cart {
        match action {
            CartAction::AddItem { product, quantity } => {
                let quantity = quantity.get();
                if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
                    line.quantity = line.quantity.saturating_add(quantity);
                } else {
                    self.lines.push(CartLine { product, quantity });
                }
            }
            CartAction::RemoveItem { product_id } => {
                self.lines.retain(|l| l.product.id != product_id);
            }
            CartAction::UpdateQuantity {
                product_id,
                quantity,
            } => {
                // Zero or negative means delete; it must never be stored.
                if quantity <= 0 {
                    self.lines.retain(|l| l.product.id != product_id);
                } else if let Some(line) =
                    self.lines.iter_mut().find(|l| l.product.id == product_id)
                {
                    line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
                }
            }
            CartAction::ApplyDiscount(discount) => {
                self.discount = Some(discount);
            }
            CartAction::ClearDiscount => {
                self.discount = None;
            }
            CartAction::ClearCart => {
                return Cart::new();
            }
        }
        self
    }

    /// In-place form of [`Cart::reduce`], for callers holding `&mut Cart`.
    pub fn dispatch(&mut self, action: CartAction) {
        *self = std::mem::take(self).reduce(action);
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the line for a product.
    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    /// Quantity of a product in the cart, 0 if absent.
    pub fn quantity_of(&self, product_id: &str) -> u32 {
        self.line(product_id).map(|l| l.quantity).unwrap_or(0)
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.line(product_id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.lines.len()
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of `price * quantity`, before discount.
    pub fn subtotal(&self) -> f64 {
        // fold from +0.0: an empty cart must not format as "-0.00"
        self.lines.iter().fold(0.0, |acc, l| acc + l.line_total())
    }

    pub fn discount(&self) -> Option<&AppliedDiscount> {
        self.discount.as_ref()
    }

    pub fn discount_code(&self) -> Option<&str> {
        self.discount.as_ref().map(AppliedDiscount::code)
    }

    /// Active percentage, 0 without a discount.
    pub fn discount_percent(&self) -> u8 {
        self.discount.as_ref().map(AppliedDiscount::percent).unwrap_or(0)
    }

    pub fn has_discount(&self) -> bool {
        self.discount.is_some()
    }

    pub fn discount_amount(&self) -> f64 {
        self.totals().discount_amount
    }

    pub fn total(&self) -> f64 {
        self.totals().total
    }

    /// Derive every monetary figure at once.
    pub fn totals(&self) -> CartTotals {
        CartTotals::from_cart(self)
    }
}
