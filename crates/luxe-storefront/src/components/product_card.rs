use std::sync::Arc;

use leptos::prelude::*;
use luxe_commerce::prelude::*;

use crate::context::{use_cart, use_notices, use_store, use_wishlist};

#[component]
pub fn ProductCard(product: Arc<Product>) -> impl IntoView {
    let store = use_store();
    let cart = use_cart();
    let wishlist = use_wishlist();
    let notices = use_notices();

    let href = format!("/product/{}", product.id);
    let image = product.primary_image().unwrap_or_default().to_string();
    let price = store.price(product.price);
    let original = product
        .original_price
        .filter(|_| product.is_on_sale())
        .map(|p| store.price(p));
    let sale = product.sale_percent();
    let rating = format!("{:.1} ({})", product.rating, product.review_count);
    let in_stock = product.in_stock;

    let saved = {
        let id = product.id.clone();
        move || wishlist.contains(id.as_str())
    };
    let saved_class = saved.clone();

    let on_wishlist = {
        let product = product.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.prevent_default();
            let now_saved = wishlist.toggle(&product.id);
            notices.notify(Notice::wishlist_toggled(&product, now_saved));
        }
    };

    let on_add = {
        let product = product.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.prevent_default();
            cart.add_item(product.clone(), 1);
            notices.notify(Notice::added_to_cart(&product));
        }
    };

    view! {
        <div class="product-card">
            <a href=href.clone() class="product-image">
                <img src=image alt=product.name.clone() loading="lazy"/>
            </a>
            <div class="badges">
                {product.is_new.then(|| view! { <span class="badge badge-new">"NEW"</span> })}
                {(sale > 0).then(|| view! { <span class="badge badge-sale">{format!("-{sale}%")}</span> })}
            </div>
            <button
                class="wishlist-toggle"
                class:saved=saved_class
                aria-label="Toggle wishlist"
                on:click=on_wishlist
            >
                {move || if saved() { "♥" } else { "♡" }}
            </button>
            <div class="product-info">
                <p class="brand">{product.brand.clone()}</p>
                <a href=href><h3>{product.name.clone()}</h3></a>
                <p class="rating">"★ " {rating}</p>
                <p class="price">
                    {price}
                    {original.map(|o| view! { <span class="original-price">{o}</span> })}
                </p>
                <button class="btn add-to-cart" disabled={!in_stock} on:click=on_add>
                    {if in_stock { "Add to Cart" } else { "Out of Stock" }}
                </button>
            </div>
        </div>
    }
}
