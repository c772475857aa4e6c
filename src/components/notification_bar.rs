//! Notification Bar Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// Active notification with a dismiss button; renders nothing when idle
#[component]
pub fn NotificationBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <Show when=move || ctx.notification().is_some()>
            <p class="notification">
                {move || ctx.notification().unwrap_or_default()}
                <button
                    type="button"
                    class="dismiss-btn"
                    title="dismiss"
                    on:click=move |_| ctx.dismiss_notification()
                >
                    "×"
                </button>
            </p>
        </Show>
    }
}
