//! In-App Link Component
//!
//! Anchor that switches route without a page load.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::routes::Route;

/// Link to a route
///
/// Plain clicks are intercepted and routed through the app context;
/// modified clicks (new tab, new window) fall through to the browser.
#[component]
pub fn NavLink(route: Route, children: Children) -> impl IntoView {
    let ctx = use_app_context();
    let href = route.path().unwrap_or_default();

    let on_click = move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 || ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key() {
            return;
        }
        ev.prevent_default();
        ctx.navigate(route.clone());
    };

    view! {
        <a href=href class="nav-link" on:click=on_click>
            {children()}
        </a>
    }
}
