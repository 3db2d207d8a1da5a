use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use luxe_commerce::prelude::*;

use crate::context::{use_cart, use_notices, use_store, use_wishlist};

/// Single product page
#[component]
pub fn ProductPage() -> impl IntoView {
    let store = use_store();
    let params = use_params_map();

    let product = Signal::derive(move || lookup_product(&store.catalog, params.with(|p| p.get("id"))));

    move || match product.get() {
        Some(p) => view! { <ProductDetail product=p/> }.into_any(),
        None => view! {
            <div class="empty-state">
                <h1>"Product not found"</h1>
                <a href="/shop">"Back to shop"</a>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn ProductDetail(product: Arc<Product>) -> impl IntoView {
    let store = use_store();
    let cart = use_cart();
    let wishlist = use_wishlist();
    let notices = use_notices();

    let (quantity, set_quantity) = signal(1u32);

    let price = store.price(product.price);
    let original = product
        .original_price
        .filter(|_| product.is_on_sale())
        .map(|p| store.price(p));
    let sale = product.sale_percent();
    let image = product.primary_image().unwrap_or_default().to_string();
    let category_href = store
        .catalog
        .categories()
        .iter()
        .find(|c| c.name == product.category)
        .map(|c| c.shop_href())
        .unwrap_or_else(|| "/shop".to_string());
    let in_stock = product.in_stock;

    let saved = {
        let id = product.id.clone();
        move || wishlist.contains(id.as_str())
    };
    let saved_class = saved.clone();

    let on_add = {
        let product = product.clone();
        move |_| {
            cart.add_item(product.clone(), quantity.get_untracked());
            notices.notify(Notice::added_to_cart(&product));
        }
    };

    let on_wishlist = {
        let product = product.clone();
        move |_| {
            let now_saved = wishlist.toggle(&product.id);
            notices.notify(Notice::wishlist_toggled(&product, now_saved));
        }
    };

    view! {
        <div class="product-detail">
            <div class="product-gallery">
                <img src=image alt=product.name.clone()/>
            </div>
            <div class="product-summary">
                <a href=category_href class="muted">{product.category.clone()}</a>
                <p class="brand">{product.brand.clone()}</p>
                <h1>{product.name.clone()}</h1>
                <p class="rating">
                    {format!("★ {:.1} ({} reviews)", product.rating, product.review_count)}
                </p>
                <p class="price price-large">
                    {price}
                    {original.map(|o| view! { <span class="original-price">{o}</span> })}
                    {(sale > 0).then(|| view! { <span class="badge badge-sale">{format!("-{sale}%")}</span> })}
                </p>
                <p class={if in_stock { "stock" } else { "stock out-of-stock" }}>
                    {if in_stock { "In stock" } else { "Out of stock" }}
                </p>
                <div class="quantity">
                    <button on:click=move |_| set_quantity.update(|q| *q = q.saturating_sub(1).max(1))>"−"</button>
                    <input
                        type="number"
                        min="1"
                        prop:value=move || quantity.get().to_string()
                        on:change=move |ev| set_quantity.set(parse_quantity(&event_target_value(&ev)))
                    />
                    <button on:click=move |_| set_quantity.update(|q| *q = q.saturating_add(1))>"+"</button>
                </div>
                <div class="product-actions">
                    <button class="btn" disabled={!in_stock} on:click=on_add>
                        {if in_stock { "Add to Cart" } else { "Out of Stock" }}
                    </button>
                    <button class="btn btn-outline" class:saved=saved_class on:click=on_wishlist>
                        {move || if saved() { "Saved" } else { "Save to Wishlist" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Product for the `:id` route segment. A stale or mistyped link is an
/// expected miss, logged and rendered as "not found".
fn lookup_product(catalog: &Catalog, id: Option<String>) -> Option<Arc<Product>> {
    let id = id?;
    catalog
        .require(&id)
        .map_err(|e| tracing::debug!(error = %e, "product page miss"))
        .ok()
}

/// Quantity from the input box. Anything unparseable or below one is one.
fn parse_quantity(raw: &str) -> u32 {
    raw.trim()
        .parse::<i64>()
        .map(|q| q.clamp(1, i64::from(u32::MAX)) as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::StoreContext;

    #[test]
    fn test_lookup_product() {
        let store = StoreContext::load();
        let found = lookup_product(&store.catalog, Some("1".to_string())).unwrap();
        assert_eq!(found.id, "1");
        assert!(lookup_product(&store.catalog, Some("no-such-id".to_string())).is_none());
        assert!(lookup_product(&store.catalog, None).is_none());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3"), 3);
        assert_eq!(parse_quantity(" 12 "), 12);
        assert_eq!(parse_quantity("0"), 1);
        assert_eq!(parse_quantity("-4"), 1);
        assert_eq!(parse_quantity("abc"), 1);
        assert_eq!(parse_quantity(""), 1);
        assert_eq!(parse_quantity("99999999999"), u32::MAX);
    }
}
