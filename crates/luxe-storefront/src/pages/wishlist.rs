use leptos::prelude::*;

use crate::components::ProductGrid;
use crate::context::{use_store, use_wishlist};

#[component]
pub fn WishlistPage() -> impl IntoView {
    let store = use_store();
    let wishlist = use_wishlist();

    let products = Signal::derive(move || store.catalog.resolve(&wishlist.ids()));

    view! {
        <h1>"Wishlist"</h1>
        {move || {
            let products = products.get();
            if products.is_empty() {
                view! {
                    <div class="empty-state">
                        <p>"Your wishlist is empty."</p>
                        <a href="/shop" class="btn">"Discover products"</a>
                    </div>
                }
                .into_any()
            } else {
                view! { <ProductGrid products=products/> }.into_any()
            }
        }}
    }
}
