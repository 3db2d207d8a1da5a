//! Promotional discount codes.

/// Codes accepted at checkout and the percentage each takes off the subtotal.
///
/// Keys are uppercase; lookups normalize the entered code first.
pub const DISCOUNT_CODES: &[(&str, u8)] = &[("SAVE10", 10), ("SAVE20", 20), ("WELCOME", 15)];

/// Read-only table of percent-off discount codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscountTable {
    entries: &'static [(&'static str, u8)],
}

impl DiscountTable {
    /// The storefront's fixed code table.
    pub const fn standard() -> Self {
        Self {
            entries: DISCOUNT_CODES,
        }
    }

    /// Resolve an entered code, ignoring ASCII case.
    ///
    /// Returns `None` for unknown codes; that is an expected outcome of user
    /// input, not an error.
    pub fn lookup(&self, code: &str) -> Option<AppliedDiscount> {
        let normalized = code.to_ascii_uppercase();
        self.entries
            .iter()
            .find(|(key, _)| *key == normalized)
            .map(|&(key, percent)| AppliedDiscount {
                code: key.to_string(),
                percent,
            })
    }

    /// All known codes, uppercase.
    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }
}

impl Default for DiscountTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// A discount code attached to a cart.
///
/// Only produced by [`DiscountTable::lookup`], so the code is always the
/// normalized table key and the percentage is always in `1..=100`. There
/// is no public constructor and no `Deserialize` impl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedDiscount {
    code: String,
    percent: u8,
}

impl AppliedDiscount {
    /// The uppercase code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Percent off the subtotal, in `1..=100`.
    pub fn percent(&self) -> u8 {
        self.percent
    }

    /// Amount taken off the given subtotal, unrounded.
    pub fn amount_off(&self, subtotal: f64) -> f64 {
        subtotal * (f64::from(self.percent) / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{Cart, CartAction};
    use crate::catalog::Product;
    use std::sync::Arc;

    #[test]
    fn test_lookup_known_codes() {
        let table = DiscountTable::standard();
        assert_eq!(table.lookup("SAVE10").unwrap().percent(), 10);
        assert_eq!(table.lookup("SAVE20").unwrap().percent(), 20);
        assert_eq!(table.lookup("WELCOME").unwrap().percent(), 15);
    }

    #[test]
    fn test_lookup_normalizes_case() {
        let table = DiscountTable::standard();
        let applied = table.lookup("save10").unwrap();
        assert_eq!(applied.code(), "SAVE10");
        assert_eq!(table.lookup("WeLcOmE").unwrap().code(), "WELCOME");
    }

    #[test]
    fn test_lookup_unknown_code() {
        let table = DiscountTable::standard();
        assert!(table.lookup("BOGUS").is_none());
        assert!(table.lookup("").is_none());
        assert!(table.lookup(" SAVE10").is_none());
    }

    #[test]
    fn test_amount_off() {
        let applied = DiscountTable::standard().lookup("SAVE20").unwrap();
        assert_eq!(applied.amount_off(100.0), 20.0);
        assert_eq!(applied.amount_off(0.0), 0.0);
    }

    #[test]
    fn test_table_entries_are_valid() {
        for &(code, percent) in DISCOUNT_CODES {
            assert_eq!(code, code.to_ascii_uppercase());
            assert!((1..=100).contains(&percent));
        }
        assert_eq!(DiscountTable::default().codes().count(), 3);
    }

    #[test]
    fn test_only_table_codes_reach_the_cart() {
        let table = DiscountTable::standard();
        for code in ["FREEBIE", "SAVE100", "SAVE 10", "", "x"] {
            assert!(table.lookup(code).map(CartAction::ApplyDiscount).is_none(), "{code}");
        }

        let lamp = Arc::new(Product::new("p", "Lamp", 50.0, "Home & Living"));
        for code in table.codes() {
            let cart = Cart::new()
                .reduce(CartAction::add_quantity(lamp.clone(), 2))
                .reduce(CartAction::ApplyDiscount(table.lookup(code).unwrap()));
            assert_eq!(cart.discount_code(), Some(code));
            assert!(cart.discount_percent() > 0 && cart.discount_percent() <= 100);
            assert!(cart.total() >= 0.0 && cart.total() < cart.subtotal());
        }
    }
}
