use std::time::Duration;

use leptos::prelude::*;

use crate::context::{use_notices, ShownNotice};

const NOTICE_TIMEOUT: Duration = Duration::from_secs(3);

/// Shows the latest notice and dismisses it after a few seconds.
#[component]
pub fn Toaster() -> impl IntoView {
    let notices = use_notices();

    Effect::new(move |_| {
        if let Some(shown) = notices.current() {
            let id = shown.id;
            set_timeout(move || notices.expire(id), NOTICE_TIMEOUT);
        }
    });

    view! {
        <div class="toaster" role="status" aria-live="polite">
            {move || {
                notices.current().map(|ShownNotice { notice, .. }| {
                    view! {
                        <div class="toast" class:toast-error=notice.is_error>
                            <strong>{notice.title}</strong>
                            <p>{notice.description}</p>
                            <button
                                class="toast-close"
                                aria-label="Dismiss"
                                on:click=move |_| notices.dismiss()
                            >
                                "×"
                            </button>
                        </div>
                    }
                })
            }}
        </div>
    }
}
