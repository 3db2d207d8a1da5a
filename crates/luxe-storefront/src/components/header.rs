use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use luxe_commerce::catalog::search_href;

use crate::context::{use_cart, use_store, use_wishlist};

const NAV_LINKS: [(&str, &str); 5] = [
    ("Home", "/"),
    ("Shop", "/shop"),
    ("Electronics", "/shop?category=Electronics"),
    ("Fashion", "/shop?category=Fashion"),
    ("Home & Living", "/shop?category=Home%20%26%20Living"),
];

/// Dropdown row for a quick-search match.
#[derive(Clone)]
struct SearchHit {
    href: String,
    name: String,
    price: String,
    image: String,
}

#[component]
pub fn Header() -> impl IntoView {
    let store = use_store();
    let cart = use_cart();
    let wishlist = use_wishlist();
    let navigate = use_navigate();

    let (search_open, set_search_open) = signal(false);
    let (query, set_query) = signal(String::new());

    let store_name = store.config.store_name.clone();
    let results = Signal::derive(move || {
        query.with(|q| {
            store
                .catalog
                .search(q, &store.config.search)
                .into_iter()
                .map(|p| SearchHit {
                    href: format!("/product/{}", p.id),
                    name: p.name.clone(),
                    price: store.price(p.price),
                    image: p.primary_image().unwrap_or_default().to_string(),
                })
                .collect::<Vec<_>>()
        })
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let q = query.get_untracked();
        if q.trim().is_empty() {
            return;
        }
        navigate(&search_href(&q), Default::default());
        set_query.set(String::new());
        set_search_open.set(false);
    };

    let close_search = move |_: leptos::ev::MouseEvent| {
        set_search_open.set(false);
        set_query.set(String::new());
    };

    view! {
        <header class="site-header">
            <a href="/" class="logo">{store_name}</a>

            <nav class="main-nav">
                {NAV_LINKS
                    .iter()
                    .map(|(label, href)| view! { <a href=*href>{*label}</a> })
                    .collect_view()}
            </nav>

            <div class="header-actions">
                <div class="search">
                    <button
                        class="icon-btn"
                        aria-label="Search"
                        on:click=move |_| set_search_open.update(|open| *open = !*open)
                    >
                        "Search"
                    </button>
                    <Show when=move || search_open.get()>
                        <div class="search-panel">
                            <form on:submit=on_submit.clone()>
                                <input
                                    type="search"
                                    placeholder="Search products..."
                                    autofocus
                                    prop:value=query
                                    on:input=move |ev| set_query.set(event_target_value(&ev))
                                />
                            </form>
                            {move || {
                                results
                                    .get()
                                    .into_iter()
                                    .map(|hit| {
                                        view! {
                                            <a href=hit.href class="search-hit" on:click=close_search>
                                                <img src=hit.image alt=hit.name.clone()/>
                                                <span class="search-hit-name">{hit.name}</span>
                                                <span class="search-hit-price">{hit.price}</span>
                                            </a>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </Show>
                </div>

                <a href="/wishlist" class="icon-btn" aria-label="Wishlist">
                    "Wishlist"
                    {move || {
                        let count = wishlist.count();
                        (count > 0).then(|| view! { <span class="count-badge">{count.to_string()}</span> })
                    }}
                </a>

                <a href="/cart" class="icon-btn" aria-label="Cart">
                    "Cart"
                    {move || {
                        let count = cart.item_count();
                        (count > 0).then(|| view! { <span class="count-badge">{count.to_string()}</span> })
                    }}
                </a>
            </div>
        </header>
    }
}
