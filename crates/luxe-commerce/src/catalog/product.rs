//! Product type.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are immutable for the lifetime of a session. The catalog and
/// every cart line share one allocation through `Arc<Product>`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Current selling price.
    pub price: f64,
    /// Compare-at price, shown struck through when the product is on sale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    pub brand: String,
    /// Image URLs, primary first.
    #[serde(default)]
    pub images: Vec<String>,
    pub in_stock: bool,
    pub rating: f32,
    pub review_count: u32,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub best_seller: bool,
    /// Category name (e.g., "Electronics").
    pub category: String,
}

impl Product {
    /// Create an in-stock product with no flags set.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            original_price: None,
            brand: String::new(),
            images: Vec::new(),
            in_stock: true,
            rating: 0.0,
            review_count: 0,
            is_new: false,
            featured: false,
            best_seller: false,
            category: category.into(),
        }
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn with_original_price(mut self, original_price: f64) -> Self {
        self.original_price = Some(original_price);
        self
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.images.push(url.into());
        self
    }

    pub fn out_of_stock(mut self) -> Self {
        self.in_stock = false;
        self
    }

    /// Percent saved against the original price, rounded to a whole number.
    ///
    /// Zero when there is no original price or it is not above the price.
    pub fn sale_percent(&self) -> u32 {
        match self.original_price {
            Some(original) if original > 0.0 && original > self.price => {
                (((original - self.price) / original) * 100.0).round() as u32
            }
            _ => 0,
        }
    }

    /// Check if the product is discounted against its original price.
    pub fn is_on_sale(&self) -> bool {
        self.sale_percent() > 0
    }

    /// First image, used for cards and thumbnails.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Case-insensitive substring match on the product name.
    pub fn name_matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}
