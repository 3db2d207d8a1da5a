use leptos::prelude::*;
use luxe_commerce::prelude::Notice;

use crate::context::{use_notices, use_store};

/// Email signup. Nothing is sent anywhere; a non-blank address just
/// confirms with a notice and clears the field.
#[component]
pub fn NewsletterForm(#[prop(default = "Subscribe")] button_label: &'static str) -> impl IntoView {
    let store = use_store();
    let notices = use_notices();
    let (email, set_email) = signal(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if email.with_untracked(|e| e.trim().is_empty()) {
            return;
        }
        notices.notify(Notice::subscribed(&store.config.store_name));
        set_email.set(String::new());
    };

    view! {
        <form class="newsletter-form" on:submit=on_submit>
            <input
                type="email"
                placeholder="your@email.com"
                prop:value=email
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <button type="submit" class="btn">{button_label}</button>
        </form>
    }
}
