use leptos::prelude::*;
use luxe_commerce::prelude::*;

use crate::context::{use_cart, use_notices, use_store};

/// Shopping cart page
#[component]
pub fn CartPage() -> impl IntoView {
    let cart = use_cart();
    let empty = Memo::new(move |_| cart.is_empty());

    view! {
        <h1>"Shopping Cart"</h1>
        <Show
            when=move || !empty.get()
            fallback=|| view! {
                <div class="empty-state">
                    <p>"Your cart is empty."</p>
                    <a href="/shop" class="btn">"Continue shopping"</a>
                </div>
            }
        >
            <div class="cart-layout">
                <CartLines/>
                <CartSummary/>
            </div>
        </Show>
    }
}

#[component]
fn CartLines() -> impl IntoView {
    let cart = use_cart();

    view! {
        <div class="cart-lines">
            {move || {
                cart.lines()
                    .into_iter()
                    .map(|line| view! { <CartLineRow line=line/> })
                    .collect_view()
            }}
            <div class="cart-lines-footer">
                <a href="/shop">"Continue Shopping"</a>
                <button class="btn btn-danger" on:click=move |_| cart.clear_cart()>
                    "Clear Cart"
                </button>
            </div>
        </div>
    }
}

#[component]
fn CartLineRow(line: CartLine) -> impl IntoView {
    let store = use_store();
    let cart = use_cart();

    let product = line.product.clone();
    let href = format!("/product/{}", product.id);
    let image = product.primary_image().unwrap_or_default().to_string();
    let unit_price = store.price(product.price);
    let line_total = store.price(line.line_total());
    let quantity = i64::from(line.quantity);

    let id = product.id.to_string();
    let (dec_id, inc_id, remove_id) = (id.clone(), id.clone(), id);

    view! {
        <div class="cart-line">
            <a href=href.clone()><img src=image alt=product.name.clone()/></a>
            <div class="cart-line-info">
                <p class="brand">{product.brand.clone()}</p>
                <a href=href>{product.name.clone()}</a>
                <p class="muted">{unit_price}</p>
            </div>
            <div class="quantity">
                <button
                    aria-label="Decrease quantity"
                    on:click=move |_| cart.update_quantity(&dec_id, quantity - 1)
                >
                    "−"
                </button>
                <span>{line.quantity.to_string()}</span>
                <button
                    aria-label="Increase quantity"
                    on:click=move |_| cart.update_quantity(&inc_id, quantity + 1)
                >
                    "+"
                </button>
            </div>
            <strong class="line-total">{line_total}</strong>
            <button class="link-btn" on:click=move |_| cart.remove_item(&remove_id)>"Remove"</button>
        </div>
    }
}

#[component]
fn CartSummary() -> impl IntoView {
    let store = use_store();
    let cart = use_cart();
    let notices = use_notices();

    let (code, set_code) = signal(String::new());
    let currency = store.config.currency;
    let threshold = store.config.free_shipping_threshold;

    let totals = Memo::new(move |_| cart.totals());
    let figures = move || totals.get().display(currency);
    let applied_code = Memo::new(move |_| cart.discount_code());

    let on_apply = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let entered = code.get_untracked();
        if entered.trim().is_empty() {
            return;
        }
        let applied = cart.apply_discount(&entered);
        notices.notify(Notice::discount_result(&entered, applied));
        if applied {
            set_code.set(String::new());
        }
    };

    let shipping_hint = move || {
        shipping_gap(totals.get().total, threshold).map(|gap| {
            format!("Add {} more for free shipping", store.price(gap))
        })
    };

    view! {
        <aside class="cart-summary">
            <h2>"Order Summary"</h2>
            <div class="summary-row">
                <span>{move || format!("Subtotal ({} items)", totals.get().item_count)}</span>
                <span>{move || figures().subtotal}</span>
            </div>
            {move || {
                applied_code.get().map(|applied| {
                    let percent = totals.get().discount_percent;
                    view! {
                        <div class="summary-row discount">
                            <span>{format!("Discount ({applied}, -{percent}%)")}</span>
                            <span>{format!("-{}", figures().discount)}</span>
                            <button class="link-btn" on:click=move |_| cart.clear_discount()>
                                "Remove"
                            </button>
                        </div>
                    }
                })
            }}
            <div class="summary-row total">
                <strong>"Total"</strong>
                <strong>{move || figures().total}</strong>
            </div>
            <p class="muted">{shipping_hint}</p>

            <form class="discount-form" on:submit=on_apply>
                <input
                    type="text"
                    placeholder="Discount code"
                    prop:value=code
                    on:input=move |ev| set_code.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn-outline">"Apply"</button>
            </form>
        </aside>
    }
}

/// Amount still needed to reach free shipping, if any.
fn shipping_gap(total: f64, threshold: f64) -> Option<f64> {
    (total < threshold).then(|| threshold - total)
}
