//! Routed Anecdotes App
//!
//! Root component: builds the app context and switches views on the route.

use std::rc::Rc;

use leptos::prelude::*;

use crate::collection::AnecdoteCollection;
use crate::components::{About, AnecdoteList, AnecdoteView, CreateNew, Footer, Menu};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::history;
use crate::notification::BrowserScheduler;
use crate::routes::Route;
use crate::store::AppState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let anecdotes = AnecdoteCollection::seeded(config.seed.iter().cloned());
    log::info!("[APP] seeded {} anecdotes", anecdotes.len());
    let (route, set_route) = signal(history::current_route());
    history::bind_popstate(set_route);

    let ctx = AppContext::new(
        AppState::new(anecdotes),
        (route, set_route),
        Rc::new(BrowserScheduler),
        config.notification_duration(),
    );

    // Provide context to all children
    provide_context(ctx);

    Effect::new(move |_| {
        log::debug!("[APP] route {:?}", route.get());
    });

    view! {
        <div class="app">
            <h1>"Software anecdotes"</h1>
            <Menu />
            {move || match route.get() {
                Route::List => view! { <AnecdoteList /> }.into_any(),
                Route::About => view! { <About /> }.into_any(),
                Route::Create => view! { <CreateNew /> }.into_any(),
                Route::Detail(_) => view! { <AnecdoteView /> }.into_any(),
                Route::NotFound => view! { <p class="not-found">"page not found"</p> }.into_any(),
            }}
            <Footer />
        </div>
    }
}
