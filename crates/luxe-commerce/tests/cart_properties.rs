//! Property tests for the cart engine over arbitrary action sequences.

use std::collections::HashSet;
use std::sync::Arc;

use luxe_commerce::prelude::*;
use proptest::prelude::*;

const PRODUCT_IDS: [&str; 4] = ["p0", "p1", "p2", "p3"];

fn products() -> Vec<Arc<Product>> {
    PRODUCT_IDS
        .iter()
        .enumerate()
        .map(|(i, id)| {
            Arc::new(Product::new(
                *id,
                format!("Product {id}"),
                12.5 * (i as f64 + 1.0),
                "Electronics",
            ))
        })
        .collect()
}

/// A compact description of an action, materialized against `products()`.
#[derive(Debug, Clone)]
enum Op {
    Add(usize, u32),
    Remove(usize),
    Update(usize, i64),
    Apply(&'static str),
    ClearDiscount,
    ClearCart,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let idx = 0..PRODUCT_IDS.len();
    prop_oneof![
        4 => (idx.clone(), 0u32..10).prop_map(|(i, q)| Op::Add(i, q)),
        2 => idx.clone().prop_map(Op::Remove),
        2 => (idx, -3i64..10).prop_map(|(i, q)| Op::Update(i, q)),
        1 => prop::sample::select(vec!["SAVE10", "save20", "WELCOME", "BOGUS"]).prop_map(Op::Apply),
        1 => Just(Op::ClearDiscount),
        1 => Just(Op::ClearCart),
    ]
}

fn run(ops: &[Op]) -> CartSession {
    let catalog = products();
    let mut session = CartSession::new();
    for op in ops {
        match op {
            Op::Add(i, q) => session.add_item(catalog[*i].clone(), *q),
            Op::Remove(i) => session.remove_item(PRODUCT_IDS[*i]),
            Op::Update(i, q) => session.update_quantity(PRODUCT_IDS[*i], *q),
            Op::Apply(code) => {
                session.apply_discount(code);
            }
            Op::ClearDiscount => session.clear_discount(),
            Op::ClearCart => session.clear_cart(),
        }
    }
    session
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// At most one line per product id, and no line ever holds zero.
    #[test]
    fn lines_are_unique_and_positive(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let session = run(&ops);
        let mut seen = HashSet::new();
        for line in session.cart().lines() {
            prop_assert!(seen.insert(line.product_id().clone()));
            prop_assert!(line.quantity >= 1);
        }
    }

    /// Discount code and percentage are present or absent together.
    #[test]
    fn discount_code_and_percent_agree(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let cart = run(&ops).cart().clone();
        prop_assert_eq!(cart.discount_code().is_some(), cart.discount_percent() > 0);
    }

    /// Totals follow from the lines and percentage.
    #[test]
    fn totals_are_consistent(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let totals = run(&ops).totals();
        let expected_discount = totals.subtotal * (f64::from(totals.discount_percent) / 100.0);
        prop_assert_eq!(totals.discount_amount, expected_discount);
        prop_assert_eq!(totals.total, totals.subtotal - totals.discount_amount);
        prop_assert!(totals.total >= 0.0);
    }

    /// Removing twice is the same as removing once.
    #[test]
    fn remove_is_idempotent(
        ops in prop::collection::vec(op_strategy(), 0..30),
        idx in 0..PRODUCT_IDS.len(),
    ) {
        let mut once = run(&ops);
        once.remove_item(PRODUCT_IDS[idx]);
        let mut twice = once.clone();
        twice.remove_item(PRODUCT_IDS[idx]);
        prop_assert_eq!(once, twice);
    }

    /// A non-positive quantity update is exactly a removal.
    #[test]
    fn non_positive_update_is_remove(
        ops in prop::collection::vec(op_strategy(), 0..30),
        idx in 0..PRODUCT_IDS.len(),
        quantity in -5i64..=0,
    ) {
        let base = run(&ops);
        let mut updated = base.clone();
        updated.update_quantity(PRODUCT_IDS[idx], quantity);
        let mut removed = base;
        removed.remove_item(PRODUCT_IDS[idx]);
        prop_assert_eq!(updated, removed);
    }

    /// An unknown code never changes state.
    #[test]
    fn invalid_code_is_noop(ops in prop::collection::vec(op_strategy(), 0..30)) {
        let mut session = run(&ops);
        let before = session.clone();
        prop_assert!(!session.apply_discount("NOT-A-CODE"));
        prop_assert_eq!(session, before);
    }

    /// Clearing always lands on the initial state.
    #[test]
    fn clear_resets_fully(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut session = run(&ops);
        session.clear_cart();
        prop_assert_eq!(session.cart(), &Cart::new());
        prop_assert_eq!(session.totals().item_count, 0);
        prop_assert_eq!(session.totals().subtotal, 0.0);
        prop_assert_eq!(session.discount_code(), None);
    }
}

#[test]
fn add_accumulates_quantities() {
    let p = Arc::new(Product::new("p", "Lamp", 50.0, "Home & Living"));
    let mut session = CartSession::new();
    session.add_item(p.clone(), 2);
    session.add_item(p, 3);
    assert_eq!(session.cart().lines().len(), 1);
    assert_eq!(session.cart().quantity_of("p"), 5);
}

#[test]
fn last_applied_discount_wins() {
    let mut session = CartSession::new();
    assert!(session.apply_discount("SAVE10"));
    assert!(session.apply_discount("SAVE20"));
    assert_eq!(session.discount_code(), Some("SAVE20"));
    assert_eq!(session.cart().discount_percent(), 20);
}

#[test]
fn subtotal_and_discount_for_two_units() {
    let p = Arc::new(Product::new("p", "Sneakers", 50.0, "Fashion"));
    let mut session = CartSession::new();
    session.add_item(p, 2);
    let totals = session.totals();
    assert_eq!(totals.subtotal, 100.0);
    assert_eq!(totals.discount_amount, 0.0);
    assert_eq!(totals.total, 100.0);

    session.apply_discount("SAVE20");
    let totals = session.totals();
    assert_eq!(totals.discount_amount, 20.0);
    assert_eq!(totals.total, 80.0);
}
