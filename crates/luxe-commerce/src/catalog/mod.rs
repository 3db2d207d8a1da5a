//! Product catalog module.
//!
//! The catalog is read-only for the whole session: products are loaded
//! once and handed out as shared `Arc<Product>` references.

mod category;
mod product;

pub use category::Category;
pub use product::Product;

use crate::config::SearchConfig;
use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::Arc;

/// Immutable product catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Arc<Product>>,
    categories: Vec<Category>,
}

/// On-disk catalog layout.
#[derive(Debug, Deserialize)]
struct CatalogData {
    products: Vec<Product>,
    #[serde(default)]
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog. Product order is preserved for every listing.
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products: products.into_iter().map(Arc::new).collect(),
            categories,
        }
    }

    /// Parse and validate a catalog from JSON
    /// (`{"products": [...], "categories": [...]}`).
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let data: CatalogData = serde_json::from_str(json)?;
        let catalog = Self::new(data.products, data.categories);
        catalog.validate()?;
        tracing::debug!(
            products = catalog.products.len(),
            categories = catalog.categories.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Check the rules the cart relies on: product ids are unique and
    /// prices are finite and non-negative.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let mut seen = HashSet::new();
        for product in &self.products {
            if !seen.insert(product.id.as_str()) {
                return Err(CommerceError::InvalidCatalog(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
            let prices = std::iter::once(product.price).chain(product.original_price);
            for price in prices {
                if !price.is_finite() || price < 0.0 {
                    return Err(CommerceError::InvalidCatalog(format!(
                        "product {} has invalid price {}",
                        product.id, price
                    )));
                }
            }
        }
        Ok(())
    }

    /// Look up a product by id.
    pub fn get(&self, id: &str) -> Option<Arc<Product>> {
        self.products.iter().find(|p| p.id == id).cloned()
    }

    /// Look up a product by id, failing if it does not exist.
    pub fn require(&self, id: &str) -> Result<Arc<Product>, CommerceError> {
        self.get(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    pub fn products(&self) -> &[Arc<Product>] {
        &self.products
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn featured(&self, limit: usize) -> Vec<Arc<Product>> {
        self.select(|p| p.featured, limit)
    }

    pub fn best_sellers(&self, limit: usize) -> Vec<Arc<Product>> {
        self.select(|p| p.best_seller, limit)
    }

    pub fn new_arrivals(&self, limit: usize) -> Vec<Arc<Product>> {
        self.select(|p| p.is_new, limit)
    }

    /// Products whose category name equals `name`.
    pub fn by_category(&self, name: &str) -> Vec<Arc<Product>> {
        self.select(|p| p.category == name, usize::MAX)
    }

    /// Quick search by product name.
    ///
    /// Queries shorter than `min_query_len` characters return nothing so the
    /// header dropdown stays closed while the user starts typing.
    pub fn search(&self, query: &str, config: &SearchConfig) -> Vec<Arc<Product>> {
        if query.chars().count() < config.min_query_len {
            return Vec::new();
        }
        self.select(|p| p.name_matches(query), config.max_results)
    }

    /// Shop listing: optional exact category, then optional name filter.
    ///
    /// Unlike [`Catalog::search`] there is no minimum length or result cap.
    pub fn browse(&self, category: Option<&str>, query: Option<&str>) -> Vec<Arc<Product>> {
        let query = query.map(str::trim).filter(|q| !q.is_empty());
        self.select(
            |p| {
                category.map_or(true, |c| p.category == c)
                    && query.map_or(true, |q| p.name_matches(q))
            },
            usize::MAX,
        )
    }

    /// Products for the given ids, in id order, skipping unknown ids.
    pub fn resolve(&self, ids: &[ProductId]) -> Vec<Arc<Product>> {
        ids.iter().filter_map(|id| self.get(id.as_str())).collect()
    }

    fn select(&self, pred: impl Fn(&Product) -> bool, limit: usize) -> Vec<Arc<Product>> {
        self.products
            .iter()
            .filter(|p| pred(p))
            .take(limit)
            .cloned()
            .collect()
    }
}

/// Shop link for a submitted header search.
pub fn search_href(query: &str) -> String {
    format!("/shop?search={}", encode_query_value(query.trim()))
}

/// Percent-encode a query string value.
pub(crate) fn encode_query_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for b in value.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        let mut products = Vec::new();
        for i in 0..10 {
            let mut p = Product::new(
                format!("p{i}"),
                format!("Item {i}"),
                10.0 * f64::from(i + 1),
                if i % 2 == 0 { "Electronics" } else { "Fashion" },
            );
            p.featured = i < 6;
            p.best_seller = i % 3 == 0;
            p.is_new = i == 9;
            products.push(p);
        }
        products.push(Product::new("hp", "Wireless Headphones", 199.0, "Electronics"));
        Catalog::new(products, vec![Category::new("c1", "Electronics", "e.jpg")])
    }

    #[test]
    fn test_get_shares_allocation() {
        let catalog = sample();
        let a = catalog.get("p3").unwrap();
        let b = catalog.get("p3").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_require_missing_product() {
        let catalog = sample();
        let err = catalog.require("nope").unwrap_err();
        assert!(matches!(err, CommerceError::ProductNotFound(id) if id == "nope"));
    }

    #[test]
    fn test_listings_respect_limit_and_order() {
        let catalog = sample();
        let featured: Vec<_> = catalog.featured(4).iter().map(|p| p.id.to_string()).collect();
        assert_eq!(featured, vec!["p0", "p1", "p2", "p3"]);
        assert_eq!(catalog.best_sellers(8).len(), 4);
        assert_eq!(catalog.new_arrivals(4).len(), 1);
    }

    #[test]
    fn test_by_category() {
        let catalog = sample();
        assert_eq!(catalog.by_category("Fashion").len(), 5);
        assert_eq!(catalog.by_category("Electronics").len(), 6);
        assert!(catalog.by_category("Toys").is_empty());
    }

    #[test]
    fn test_search_requires_min_length() {
        let catalog = sample();
        let config = SearchConfig::default();
        assert!(catalog.search("w", &config).is_empty());
        let hits = catalog.search("wi", &config);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "hp");
    }

    #[test]
    fn test_search_truncates_results() {
        let catalog = sample();
        let config = SearchConfig::default();
        assert_eq!(catalog.search("item", &config).len(), config.max_results);
    }

    #[test]
    fn test_browse_filters() {
        let catalog = sample();
        assert_eq!(catalog.browse(None, None).len(), catalog.len());
        assert_eq!(catalog.browse(Some("Fashion"), None).len(), 5);
        let hits = catalog.browse(Some("Electronics"), Some("head"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "hp");
        assert_eq!(catalog.browse(None, Some("  ")).len(), catalog.len());
        assert!(catalog.browse(Some("Fashion"), Some("head")).is_empty());
    }

    #[test]
    fn test_resolve_skips_unknown() {
        let catalog = sample();
        let ids = vec![ProductId::new("p2"), ProductId::new("gone"), ProductId::new("p0")];
        let found: Vec<_> = catalog.resolve(&ids).iter().map(|p| p.id.to_string()).collect();
        assert_eq!(found, vec!["p2", "p0"]);
    }

    #[test]
    fn test_search_href() {
        assert_eq!(search_href(" silk scarf "), "/shop?search=silk%20scarf");
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "products": [
                {"id": "a", "name": "Desk Lamp", "price": 49.0, "brand": "Lumen",
                 "inStock": true, "rating": 4.2, "reviewCount": 10, "category": "Home & Living"}
            ],
            "categories": [
                {"id": "home", "name": "Home & Living", "image": "h.jpg", "productCount": 1}
            ]
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.categories()[0].product_count, 1);
        assert!(catalog.get("a").unwrap().images.is_empty());
    }

    #[test]
    fn test_from_json_rejects_duplicate_ids() {
        let json = r#"{"products": [
            {"id": "a", "name": "Lamp", "price": 49.0, "brand": "Lumen",
             "inStock": true, "rating": 4.2, "reviewCount": 10, "category": "Home & Living"},
            {"id": "a", "name": "Mug", "price": 12.0, "brand": "Lumen",
             "inStock": true, "rating": 4.0, "reviewCount": 3, "category": "Home & Living"}
        ]}"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, CommerceError::InvalidCatalog(msg) if msg.contains("duplicate product id a")));
    }

    #[test]
    fn test_from_json_rejects_negative_price() {
        let json = r#"{"products": [
            {"id": "a", "name": "Lamp", "price": -5.0, "brand": "Lumen",
             "inStock": true, "rating": 4.2, "reviewCount": 10, "category": "Home & Living"}
        ]}"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, CommerceError::InvalidCatalog(_)));
    }

    #[test]
    fn test_validate_checks_original_price() {
        let lamp = Product::new("a", "Lamp", 49.0, "Home & Living").with_original_price(-1.0);
        assert!(Catalog::new(vec![lamp], Vec::new()).validate().is_err());
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = Catalog::from_json("{not json").unwrap_err();
        assert!(matches!(err, CommerceError::Serialization(_)));
    }
}
