//! Category type for the "shop by category" grid.

use crate::catalog::encode_query_value;
use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Category name, also the product `category` value.
    pub name: String,
    /// Tile image URL.
    pub image: String,
    /// Number of products shown on the tile.
    pub product_count: u32,
}

impl Category {
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: image.into(),
            product_count: 0,
        }
    }

    /// Shop link filtered to this category.
    pub fn shop_href(&self) -> String {
        format!("/shop?category={}", encode_query_value(&self.name))
    }
}
