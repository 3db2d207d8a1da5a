use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::ProductGrid;
use crate::context::use_store;

/// Product listing filtered by the `category` and `search` query parameters.
#[component]
pub fn ShopPage() -> impl IntoView {
    let store = use_store();
    let query = use_query_map();

    let category = Memo::new(move |_| query.with(|q| q.get("category")));
    let search = Memo::new(move |_| query.with(|q| q.get("search")));

    let products = {
        let catalog = store.catalog.clone();
        Signal::derive(move || catalog.browse(category.get().as_deref(), search.get().as_deref()))
    };

    let heading = move || match (category.get(), search.get()) {
        (_, Some(s)) if !s.trim().is_empty() => format!("Results for \"{}\"", s.trim()),
        (Some(c), _) => c,
        _ => "All Products".to_string(),
    };

    let filters = store
        .catalog
        .categories()
        .iter()
        .map(|cat| {
            let name = cat.name.clone();
            let active = move || category.get().as_deref() == Some(name.as_str());
            view! {
                <a href=cat.shop_href() class="filter" class:active=active>{cat.name.clone()}</a>
            }
        })
        .collect_view();

    view! {
        <div class="shop">
            <h1>{heading}</h1>
            <nav class="filters">
                <a href="/shop" class="filter" class:active=move || category.get().is_none()>"All"</a>
                {filters}
            </nav>
            {move || {
                let products = products.get();
                if products.is_empty() {
                    view! {
                        <div class="empty-state">
                            <p>"No products found."</p>
                            <a href="/shop">"Clear filters"</a>
                        </div>
                    }
                    .into_any()
                } else {
                    let count = format!("{} products", products.len());
                    view! {
                        <p class="muted">{count}</p>
                        <ProductGrid products=products/>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
