//! Cart commands.

use crate::cart::AppliedDiscount;
use crate::catalog::Product;
use crate::ids::ProductId;
use std::num::NonZeroU32;
use std::sync::Arc;

/// A state transition request for a [`Cart`](crate::cart::Cart).
///
/// Presentation code never edits cart lines itself; it builds one of these
/// and hands it to [`Cart::reduce`](crate::cart::Cart::reduce).
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Add `quantity` of a product, merging into an existing line.
    AddItem {
        product: Arc<Product>,
        quantity: NonZeroU32,
    },
    /// Delete the line for a product, if there is one.
    RemoveItem { product_id: ProductId },
    /// Set a line's quantity. Zero or negative deletes the line.
    UpdateQuantity { product_id: ProductId, quantity: i64 },
    /// Attach a discount, replacing any current one.
    ApplyDiscount(AppliedDiscount),
    /// Detach the discount.
    ClearDiscount,
    /// Reset to an empty cart with no discount.
    ClearCart,
}

impl CartAction {
    /// Add a single unit of a product.
    pub fn add(product: Arc<Product>) -> Self {
        Self::add_quantity(product, 1)
    }

    /// Add `quantity` units. A quantity of zero means "unspecified" and adds one.
    pub fn add_quantity(product: Arc<Product>, quantity: u32) -> Self {
        CartAction::AddItem {
            product,
            quantity: NonZeroU32::new(quantity).unwrap_or(NonZeroU32::MIN),
        }
    }

    pub fn remove(product_id: impl Into<ProductId>) -> Self {
        CartAction::RemoveItem {
            product_id: product_id.into(),
        }
    }

    pub fn update_quantity(product_id: impl Into<ProductId>, quantity: i64) -> Self {
        CartAction::UpdateQuantity {
            product_id: product_id.into(),
            quantity,
        }
    }

    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            CartAction::AddItem { .. } => "add_item",
            CartAction::RemoveItem { .. } => "remove_item",
            CartAction::UpdateQuantity { .. } => "update_quantity",
            CartAction::ApplyDiscount(_) => "apply_discount",
            CartAction::ClearDiscount => "clear_discount",
            CartAction::ClearCart => "clear_cart",
        }
    }

    /// Product the action targets, if any.
    pub fn product_id(&self) -> Option<&ProductId> {
        match self {
            CartAction::AddItem { product, .. } => Some(&product.id),
            CartAction::RemoveItem { product_id } => Some(product_id),
            CartAction::UpdateQuantity { product_id, .. } => Some(product_id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_defaults_to_one() {
        let product = Arc::new(Product::new("p1", "Scarf", 30.0, "Fashion"));
        match CartAction::add(product.clone()) {
            CartAction::AddItem { quantity, .. } => assert_eq!(quantity.get(), 1),
            other => panic!("unexpected action {other:?}"),
        }
        match CartAction::add_quantity(product, 0) {
            CartAction::AddItem { quantity, .. } => assert_eq!(quantity.get(), 1),
            other => panic!("unexpected action {other:?}"),
        }
    }

    #[test]
    fn test_kind_and_product_id() {
        let action = CartAction::update_quantity("p9", 3);
        assert_eq!(action.kind(), "update_quantity");
        assert_eq!(action.product_id().map(ProductId::as_str), Some("p9"));
        assert_eq!(CartAction::ClearCart.product_id(), None);
    }
}
