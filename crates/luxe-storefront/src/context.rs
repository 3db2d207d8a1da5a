//! Session-scoped state shared with components through Leptos context.
//!
//! Each provider creates its state when it mounts and drops it when the
//! app unmounts. Components reach the state through the `use_*` hooks,
//! which panic when called outside their provider: that is a wiring bug,
//! not a runtime condition to recover from.

use std::sync::Arc;

use leptos::prelude::*;
use luxe_commerce::prelude::*;

const CATALOG_JSON: &str = include_str!("../data/catalog.json");
const CONFIG_TOML: &str = include_str!("../data/storefront.toml");

// ============================================================================
// Store (catalog + configuration)
// ============================================================================

/// Read-only catalog and configuration.
#[derive(Clone)]
pub struct StoreContext {
    pub catalog: Arc<Catalog>,
    pub config: Arc<StorefrontConfig>,
}

impl StoreContext {
    /// Load the bundled catalog and configuration.
    ///
    /// A broken bundle degrades to defaults and an empty catalog so the
    /// shell still renders.
    pub fn load() -> Self {
        let config = StorefrontConfig::from_toml_str(CONFIG_TOML).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "invalid storefront config, using defaults");
            StorefrontConfig::default()
        });
        let catalog = Catalog::from_json(CATALOG_JSON).unwrap_or_else(|e| {
            tracing::error!(error = %e, "catalog failed to load");
            Catalog::default()
        });
        Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
        }
    }

    /// Format an amount in the store currency.
    pub fn price(&self, amount: f64) -> String {
        self.config.money(amount).display()
    }
}

#[component]
pub fn StoreProvider(store: StoreContext, children: Children) -> impl IntoView {
    provide_context(store);
    children()
}

pub fn use_store() -> StoreContext {
    expect_context::<StoreContext>()
}

// ============================================================================
// Cart
// ============================================================================

/// Handle to the session's cart.
///
/// Commands go through [`CartSession`]; views read derived values and
/// re-render when the signal changes.
#[derive(Clone, Copy)]
pub struct CartContext {
    session: RwSignal<CartSession>,
}

impl CartContext {
    pub fn add_item(&self, product: Arc<Product>, quantity: u32) {
        self.session.update(|s| s.add_item(product, quantity));
    }

    pub fn remove_item(&self, product_id: &str) {
        self.session.update(|s| s.remove_item(product_id));
    }

    pub fn update_quantity(&self, product_id: &str, quantity: i64) {
        self.session.update(|s| s.update_quantity(product_id, quantity));
    }

    /// Returns `false` for an unknown code; the cart is left as it was.
    pub fn apply_discount(&self, code: &str) -> bool {
        self.session
            .try_update(|s| s.apply_discount(code))
            .unwrap_or(false)
    }

    pub fn clear_discount(&self) {
        self.session.update(|s| s.clear_discount());
    }

    pub fn clear_cart(&self) {
        self.session.update(|s| s.clear_cart());
    }

    pub fn lines(&self) -> Vec<CartLine> {
        self.session.with(|s| s.cart().lines().to_vec())
    }

    pub fn is_empty(&self) -> bool {
        self.session.with(|s| s.cart().is_empty())
    }

    pub fn item_count(&self) -> u64 {
        self.session.with(|s| s.item_count())
    }

    pub fn totals(&self) -> CartTotals {
        self.session.with(|s| s.totals())
    }

    pub fn discount_code(&self) -> Option<String> {
        self.session.with(|s| s.discount_code().map(str::to_string))
    }
}

/// Owns the cart for the lifetime of the mounted app.
#[component]
pub fn CartProvider(children: Children) -> impl IntoView {
    provide_context(CartContext {
        session: RwSignal::new(CartSession::new()),
    });
    children()
}

/// The session cart. Panics outside `<CartProvider>`.
pub fn use_cart() -> CartContext {
    expect_context::<CartContext>()
}

// ============================================================================
// Wishlist
// ============================================================================

#[derive(Clone, Copy)]
pub struct WishlistContext {
    items: RwSignal<Wishlist>,
}

impl WishlistContext {
    /// Returns whether the product is saved afterwards.
    pub fn toggle(&self, product_id: &ProductId) -> bool {
        self.items
            .try_update(|w| w.toggle(product_id.clone()))
            .unwrap_or(false)
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.items.with(|w| w.contains(product_id))
    }

    pub fn count(&self) -> usize {
        self.items.with(|w| w.len())
    }

    pub fn ids(&self) -> Vec<ProductId> {
        self.items.with(|w| w.ids().to_vec())
    }
}

#[component]
pub fn WishlistProvider(children: Children) -> impl IntoView {
    provide_context(WishlistContext {
        items: RwSignal::new(Wishlist::new()),
    });
    children()
}

/// The session wishlist. Panics outside `<WishlistProvider>`.
pub fn use_wishlist() -> WishlistContext {
    expect_context::<WishlistContext>()
}

// ============================================================================
// Notices (toasts)
// ============================================================================

/// A notice on screen, tagged with the order it was shown in.
#[derive(Debug, Clone, PartialEq)]
pub struct ShownNotice {
    pub id: u64,
    pub notice: Notice,
}

/// The single toast slot. Each `show` gets a fresh id, so a timer started
/// for an earlier notice never clears a later one, even an identical one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticeSlot {
    next_id: u64,
    shown: Option<ShownNotice>,
}

impl NoticeSlot {
    /// Replace the current notice; returns the new notice's id.
    pub fn show(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        self.shown = Some(ShownNotice {
            id: self.next_id,
            notice,
        });
        self.next_id
    }

    pub fn dismiss(&mut self) {
        self.shown = None;
    }

    /// Clear the slot only if notice `id` is still the one showing.
    pub fn expire(&mut self, id: u64) {
        if self.shown.as_ref().is_some_and(|s| s.id == id) {
            self.shown = None;
        }
    }

    pub fn shown(&self) -> Option<&ShownNotice> {
        self.shown.as_ref()
    }
}

#[derive(Clone, Copy)]
pub struct NoticeContext {
    slot: RwSignal<NoticeSlot>,
}

impl NoticeContext {
    pub fn notify(&self, notice: Notice) {
        if notice.is_error {
            tracing::warn!(title = %notice.title, "{}", notice.description);
        }
        self.slot.update(|slot| {
            slot.show(notice);
        });
    }

    pub fn dismiss(&self) {
        self.slot.update(NoticeSlot::dismiss);
    }

    /// Timer callback: clears notice `id` unless a newer one replaced it.
    pub fn expire(&self, id: u64) {
        if self.slot.with_untracked(|slot| slot.shown().is_some_and(|s| s.id == id)) {
            self.slot.update(|slot| slot.expire(id));
        }
    }

    pub fn current(&self) -> Option<ShownNotice> {
        self.slot.with(|slot| slot.shown().cloned())
    }
}

#[component]
pub fn NoticeProvider(children: Children) -> impl IntoView {
    provide_context(NoticeContext {
        slot: RwSignal::new(NoticeSlot::default()),
    });
    children()
}

pub fn use_notices() -> NoticeContext {
    expect_context::<NoticeContext>()
}
