//! LUXE storefront
//!
//! Client-rendered Leptos shell over `luxe-commerce`:
//! - Session cart and wishlist held in reactive context
//! - Home, shop, product, cart and wishlist pages
//! - Toast notices for cart, wishlist, discount and newsletter actions

mod app;
pub mod components;
pub mod context;
pub mod pages;

pub use app::App;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
