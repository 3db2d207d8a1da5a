use leptos::prelude::*;

/// 404 page
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="empty-state">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/" class="btn">"Back to Home"</a>
        </div>
    }
}
