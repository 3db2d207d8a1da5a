//! Storefront domain types and state for LUXE.
//!
//! This crate holds everything the storefront UI needs that is not
//! rendering:
//!
//! - **Catalog**: read-only products and categories, listing and search
//! - **Cart**: line items, discount codes, derived totals
//! - **Wishlist**: saved product ids
//! - **Session**: the per-shopper owner of the cart
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use luxe_commerce::prelude::*;
//!
//! let tote = Arc::new(Product::new("tote-01", "Canvas Tote", 50.0, "Fashion"));
//!
//! let mut session = CartSession::new();
//! session.add_item(tote, 2);
//! assert!(session.apply_discount("save20"));
//!
//! let totals = session.totals();
//! assert_eq!(totals.subtotal, 100.0);
//! assert_eq!(totals.display(Currency::USD).total, "$80.00");
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod session;
pub mod wishlist;

pub use config::StorefrontConfig;
pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{ListingConfig, SearchConfig, StorefrontConfig};
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Category, Product};

    // Cart
    pub use crate::cart::{
        AppliedDiscount, Cart, CartAction, CartLine, CartTotals, DiscountTable, TotalsDisplay,
    };

    // Session
    pub use crate::session::{CartSession, Notice};
    pub use crate::wishlist::Wishlist;
}
