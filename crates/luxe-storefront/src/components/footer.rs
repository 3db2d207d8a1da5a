use leptos::prelude::*;

use crate::components::NewsletterForm;
use crate::context::use_store;

#[component]
pub fn Footer() -> impl IntoView {
    let store = use_store();
    let store_name = store.config.store_name.clone();

    view! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <h3>{store_name.clone()}</h3>
                    <p>"Premium products for the modern lifestyle. Quality meets elegance."</p>
                </div>
                <div>
                    <h4>"Shop"</h4>
                    <a href="/shop">"All Products"</a>
                    <a href="/shop?category=Electronics">"Electronics"</a>
                    <a href="/shop?category=Fashion">"Fashion"</a>
                    <a href="/shop?category=Home%20%26%20Living">"Home & Living"</a>
                </div>
                <div>
                    <h4>"Account"</h4>
                    <a href="/cart">"Cart"</a>
                    <a href="/wishlist">"Wishlist"</a>
                </div>
                <div>
                    <h4>"Newsletter"</h4>
                    <p>"Get updates on new arrivals and special offers."</p>
                    <NewsletterForm button_label="Join"/>
                </div>
            </div>
            <p class="copyright">"© " {store_name} ". All rights reserved."</p>
        </footer>
    }
}
