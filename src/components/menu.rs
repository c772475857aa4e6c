//! Menu Component
//!
//! Notification line plus the top navigation links.

use leptos::prelude::*;

use crate::components::{NavLink, NotificationBar};
use crate::routes::Route;

#[component]
pub fn Menu() -> impl IntoView {
    view! {
        <div class="menu">
            <NotificationBar />
            <NavLink route=Route::List>"anecdotes"</NavLink>
            <NavLink route=Route::Create>"create new"</NavLink>
            <NavLink route=Route::About>"about"</NavLink>
        </div>
    }
}
