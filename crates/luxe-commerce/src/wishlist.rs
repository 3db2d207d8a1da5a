//! Wishlist of saved product ids.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A set of product ids, kept in the order they were saved.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Wishlist {
    items: Vec<ProductId>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the id if absent, remove it if present.
    ///
    /// Returns `true` when the id is in the wishlist afterwards.
    pub fn toggle(&mut self, product_id: impl Into<ProductId>) -> bool {
        let product_id = product_id.into();
        if let Some(pos) = self.items.iter().position(|id| *id == product_id) {
            self.items.remove(pos);
            false
        } else {
            self.items.push(product_id);
            true
        }
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.items.iter().any(|id| id == product_id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn ids(&self) -> &[ProductId] {
        &self.items
    }
}
