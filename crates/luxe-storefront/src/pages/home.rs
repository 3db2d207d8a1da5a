use leptos::prelude::*;

use crate::components::{NewsletterForm, ProductSection};
use crate::context::use_store;

#[component]
pub fn HomePage() -> impl IntoView {
    let store = use_store();
    let listing = &store.config.listing;

    let featured = store.catalog.featured(listing.featured_limit);
    let best_sellers = store.catalog.best_sellers(listing.best_seller_limit);
    let new_arrivals = store.catalog.new_arrivals(listing.new_arrival_limit);
    let shipping = format!(
        "On orders over {}",
        store.price(store.config.free_shipping_threshold)
    );

    let perks = [
        ("Free Shipping", shipping),
        ("Secure Payment", "100% encrypted checkout".to_string()),
        ("Easy Returns", "30-day return policy".to_string()),
        ("24/7 Support", "Expert assistance".to_string()),
    ];

    let categories = store
        .catalog
        .categories()
        .iter()
        .map(|cat| {
            view! {
                <a href=cat.shop_href() class="category-tile">
                    <img src=cat.image.clone() alt=cat.name.clone() loading="lazy"/>
                    <div class="category-label">
                        <p>{cat.name.clone()}</p>
                        <p class="muted">{format!("{} items", cat.product_count)}</p>
                    </div>
                </a>
            }
        })
        .collect_view();

    view! {
        <section class="hero">
            <span class="eyebrow">"New Collection"</span>
            <h1>"Discover Your Perfect Style"</h1>
            <p>"Curated premium products for the modern lifestyle. Quality craftsmanship meets timeless design."</p>
            <div class="hero-actions">
                <a href="/shop" class="btn">"Shop Now"</a>
                <a href="/shop?category=Fashion" class="btn btn-outline">"Explore Fashion"</a>
            </div>
        </section>

        <section class="perks">
            {perks
                .into_iter()
                .map(|(label, desc)| view! {
                    <div class="perk">
                        <p class="perk-label">{label}</p>
                        <p class="muted">{desc}</p>
                    </div>
                })
                .collect_view()}
        </section>

        <section class="product-section">
            <div class="section-head">
                <div>
                    <h2>"Shop by Category"</h2>
                    <p>"Find exactly what you're looking for"</p>
                </div>
                <a href="/shop" class="view-all">"View All"</a>
            </div>
            <div class="categories">{categories}</div>
        </section>

        <ProductSection title="Featured Products" subtitle="Handpicked by our team" products=featured/>

        <section class="promo">
            <p class="eyebrow">"Limited Time Offer"</p>
            <h2>"Up to 30% Off"</h2>
            <p>"Use code " <strong>"SAVE20"</strong> " at checkout"</p>
            <a href="/shop" class="btn btn-secondary">"Shop the Sale"</a>
        </section>

        <ProductSection title="Best Sellers" subtitle="Most loved by our customers" products=best_sellers/>
        <ProductSection
            title="New Arrivals"
            subtitle="Just dropped this season"
            products=new_arrivals
            view_all=false
        />

        <section class="newsletter">
            <h2>"Stay in the Loop"</h2>
            <p>"Subscribe for exclusive offers, new arrivals, and style inspiration."</p>
            <NewsletterForm/>
        </section>
    }
}
