//! Application shell and routes.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{Footer, Header, Toaster};
use crate::context::{CartProvider, NoticeProvider, StoreContext, StoreProvider, WishlistProvider};
use crate::pages::{CartPage, HomePage, NotFound, ProductPage, ShopPage, WishlistPage};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = StoreContext::load();
    let title = format!("{} | Premium Shopping", store.config.store_name);
    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Stylesheet id="leptos" href="/pkg/luxe_storefront.css"/>
        <Meta name="description" content="Curated fashion, electronics and home goods"/>
        <Title text=title/>

        <StoreProvider store=store>
            <CartProvider>
                <WishlistProvider>
                    <NoticeProvider>
                        <Router>
                            <Header/>
                            <main>
                                <Routes fallback>
                                    <Route path=path!("") view=HomePage/>
                                    <Route path=path!("/shop") view=ShopPage/>
                                    <Route path=path!("/product/:id") view=ProductPage/>
                                    <Route path=path!("/cart") view=CartPage/>
                                    <Route path=path!("/wishlist") view=WishlistPage/>
                                </Routes>
                            </main>
                            <Footer/>
                            <Toaster/>
                        </Router>
                    </NoticeProvider>
                </WishlistProvider>
            </CartProvider>
        </StoreProvider>
    }
}
