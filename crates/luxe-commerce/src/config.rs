//! Storefront configuration.
//!
//! Every field has a default, so an empty TOML document is a valid
//! configuration. Discount codes are not configurable.

use crate::error::CommerceError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Storefront configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Brand shown in the header and footer.
    #[serde(default = "default_store_name")]
    pub store_name: String,

    /// Display currency for all prices.
    #[serde(default)]
    pub currency: Currency,

    /// Order value above which shipping is advertised as free.
    #[serde(default = "default_free_shipping_threshold")]
    pub free_shipping_threshold: f64,

    /// Home page listing sizes.
    #[serde(default)]
    pub listing: ListingConfig,

    /// Header quick search.
    #[serde(default)]
    pub search: SearchConfig,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            store_name: default_store_name(),
            currency: Currency::default(),
            free_shipping_threshold: default_free_shipping_threshold(),
            listing: ListingConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

impl StorefrontConfig {
    /// Parse and validate a TOML configuration.
    pub fn from_toml_str(content: &str) -> Result<Self, CommerceError> {
        let config: StorefrontConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges serde cannot express.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.store_name.trim().is_empty() {
            return Err(CommerceError::Config("store_name must not be empty".into()));
        }
        if !self.free_shipping_threshold.is_finite() || self.free_shipping_threshold < 0.0 {
            return Err(CommerceError::Config(format!(
                "free_shipping_threshold must be a non-negative amount, got {}",
                self.free_shipping_threshold
            )));
        }
        let limits = [
            ("listing.featured_limit", self.listing.featured_limit),
            ("listing.best_seller_limit", self.listing.best_seller_limit),
            ("listing.new_arrival_limit", self.listing.new_arrival_limit),
            ("search.max_results", self.search.max_results),
        ];
        for (name, value) in limits {
            if value == 0 {
                return Err(CommerceError::Config(format!("{name} must be greater than 0")));
            }
        }
        Ok(())
    }

    /// Format an amount in the configured currency.
    pub fn money(&self, amount: f64) -> Money {
        Money::new(amount, self.currency)
    }
}

fn default_store_name() -> String {
    "LUXE".to_string()
}

fn default_free_shipping_threshold() -> f64 {
    100.0
}

/// How many products each home page section shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingConfig {
    #[serde(default = "default_featured_limit")]
    pub featured_limit: usize,
    #[serde(default = "default_best_seller_limit")]
    pub best_seller_limit: usize,
    #[serde(default = "default_new_arrival_limit")]
    pub new_arrival_limit: usize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            featured_limit: default_featured_limit(),
            best_seller_limit: default_best_seller_limit(),
            new_arrival_limit: default_new_arrival_limit(),
        }
    }
}

fn default_featured_limit() -> usize {
    4
}

fn default_best_seller_limit() -> usize {
    8
}

fn default_new_arrival_limit() -> usize {
    4
}

/// Header search dropdown behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Minimum query length before results are shown.
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
    /// Maximum number of dropdown results.
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_len: default_min_query_len(),
            max_results: default_max_results(),
        }
    }
}

fn default_min_query_len() -> usize {
    2
}

fn default_max_results() -> usize {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = StorefrontConfig::from_toml_str("").unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.store_name, "LUXE");
        assert_eq!(config.listing.best_seller_limit, 8);
        assert_eq!(config.search.min_query_len, 2);
    }

    #[test]
    fn test_partial_override() {
        let config = StorefrontConfig::from_toml_str(
            r#"
            store_name = "Luxe Outlet"
            currency = "EUR"

            [listing]
            featured_limit = 8
            "#,
        )
        .unwrap();
        assert_eq!(config.store_name, "Luxe Outlet");
        assert_eq!(config.currency, Currency::EUR);
        assert_eq!(config.listing.featured_limit, 8);
        assert_eq!(config.listing.new_arrival_limit, 4);
        assert_eq!(config.money(5.0).display(), "\u{20ac}5.00");
    }

    #[test]
    fn test_zero_limit_rejected() {
        let err = StorefrontConfig::from_toml_str("[search]\nmax_results = 0\n").unwrap_err();
        assert!(matches!(err, CommerceError::Config(msg) if msg.contains("search.max_results")));
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let err = StorefrontConfig::from_toml_str("free_shipping_threshold = -1.0").unwrap_err();
        assert!(matches!(err, CommerceError::Config(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let err = StorefrontConfig::from_toml_str("store_name = ").unwrap_err();
        assert!(matches!(err, CommerceError::Config(_)));
    }
}
