//! Shopping cart module.
//!
//! Contains the cart state, the actions that transform it, the discount
//! code table, and derived totals.

mod action;
mod cart;
mod discount;
mod pricing;

pub use action::CartAction;
pub use cart::{Cart, CartLine};
pub use discount::{AppliedDiscount, DiscountTable, DISCOUNT_CODES};
pub use pricing::{CartTotals, TotalsDisplay};
