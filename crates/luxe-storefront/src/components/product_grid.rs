use std::sync::Arc;

use leptos::prelude::*;
use luxe_commerce::prelude::Product;

use crate::components::ProductCard;

#[component]
pub fn ProductGrid(products: Vec<Arc<Product>>) -> impl IntoView {
    view! {
        <div class="products">
            {products
                .into_iter()
                .map(|p| view! { <ProductCard product=p/> })
                .collect_view()}
        </div>
    }
}

/// Titled home page section. Renders nothing for an empty list.
#[component]
pub fn ProductSection(
    title: &'static str,
    subtitle: &'static str,
    products: Vec<Arc<Product>>,
    #[prop(default = true)] view_all: bool,
) -> impl IntoView {
    (!products.is_empty()).then(|| {
        view! {
            <section class="product-section">
                <div class="section-head">
                    <div>
                        <h2>{title}</h2>
                        <p>{subtitle}</p>
                    </div>
                    {view_all.then(|| view! { <a href="/shop" class="view-all">"View All"</a> })}
                </div>
                <ProductGrid products=products/>
            </section>
        }
    })
}
