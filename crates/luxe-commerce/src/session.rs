//! Session-scoped cart ownership.
//!
//! A [`CartSession`] is created empty when a shopper's session begins and
//! dropped when it ends. It is the single owner of the cart: presentation
//! code holds the session (usually inside a reactive signal), issues
//! commands, and re-renders from the read-only views.

use crate::cart::{Cart, CartAction, CartTotals, DiscountTable};
use crate::catalog::Product;
use crate::ids::ProductId;
use std::sync::Arc;

/// Cart state plus the discount table it resolves codes against.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartSession {
    cart: Cart,
    discounts: DiscountTable,
}

impl CartSession {
    /// Start a session with an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a raw action.
    pub fn dispatch(&mut self, action: CartAction) {
        let kind = action.kind();
        let product_id = action.product_id().map(ProductId::to_string);
        self.cart.dispatch(action);
        tracing::debug!(
            action = kind,
            product_id = product_id.as_deref().unwrap_or(""),
            lines = self.cart.unique_item_count(),
            items = self.cart.item_count(),
            "cart updated"
        );
    }

    /// Add `quantity` units (0 is treated as 1).
    pub fn add_item(&mut self, product: Arc<Product>, quantity: u32) {
        self.dispatch(CartAction::add_quantity(product, quantity));
    }

    pub fn remove_item(&mut self, product_id: &str) {
        self.dispatch(CartAction::remove(product_id));
    }

    /// Set a line's quantity; zero or negative removes the line.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) {
        self.dispatch(CartAction::update_quantity(product_id, quantity));
    }

    /// Try to attach a discount code.
    ///
    /// Returns `false` and leaves the cart untouched when the code is unknown.
    pub fn apply_discount(&mut self, code: &str) -> bool {
        match self.discounts.lookup(code) {
            Some(discount) => {
                tracing::info!(code = discount.code(), percent = discount.percent(), "discount applied");
                self.dispatch(CartAction::ApplyDiscount(discount));
                true
            }
            None => {
                tracing::info!(code, "discount code rejected");
                false
            }
        }
    }

    pub fn clear_discount(&mut self) {
        self.dispatch(CartAction::ClearDiscount);
    }

    /// Empty the cart, e.g. after checkout.
    pub fn clear_cart(&mut self) {
        tracing::info!(items = self.cart.item_count(), "cart cleared");
        self.dispatch(CartAction::ClearCart);
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn totals(&self) -> CartTotals {
        self.cart.totals()
    }

    pub fn item_count(&self) -> u64 {
        self.cart.item_count()
    }

    pub fn discount_code(&self) -> Option<&str> {
        self.cart.discount_code()
    }
}

/// Confirmation text the caller may surface as a toast.
///
/// The cart engine has no side effects; presentation code builds one of
/// these after issuing a command and decides how to show it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub is_error: bool,
}

impl Notice {
    fn info(title: &str, description: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            description: description.into(),
            is_error: false,
        }
    }

    pub fn added_to_cart(product: &Product) -> Self {
        Self::info("Added to cart", product.name.clone())
    }

    /// `saved` is the wishlist membership after the toggle.
    pub fn wishlist_toggled(product: &Product, saved: bool) -> Self {
        let title = if saved {
            "Added to wishlist"
        } else {
            "Removed from wishlist"
        };
        Self::info(title, product.name.clone())
    }

    pub fn discount_result(code: &str, applied: bool) -> Self {
        if applied {
            Self::info("Discount applied", code.to_ascii_uppercase())
        } else {
            Self {
                title: "Invalid discount code".to_string(),
                description: format!("\"{code}\" is not a valid code"),
                is_error: true,
            }
        }
    }

    pub fn subscribed(store_name: &str) -> Self {
        Self::info("Subscribed!", format!("Welcome to the {store_name} community."))
    }
}
