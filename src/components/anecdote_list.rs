//! Anecdote List Component

use leptos::prelude::*;

use crate::components::NavLink;
use crate::context::use_app_context;
use crate::models::Anecdote;
use crate::routes::Route;
use crate::store::AppStateStoreFields;

/// All anecdotes, each linking to its detail view
#[component]
pub fn AnecdoteList() -> impl IntoView {
    let ctx = use_app_context();
    let anecdotes = move || {
        ctx.store
            .anecdotes()
            .with(|anecdotes| anecdotes.iter().cloned().collect::<Vec<Anecdote>>())
    };

    view! {
        <div class="anecdote-list">
            <h2>"Anecdotes"</h2>
            <Show when=move || ctx.store.anecdotes().with(|anecdotes| anecdotes.is_empty())>
                <p class="empty">"No anecdotes yet."</p>
            </Show>
            <ul>
                <For
                    each=anecdotes
                    key=|anecdote| anecdote.id.clone()
                    children=move |anecdote: Anecdote| {
                        let route = Route::Detail(anecdote.id);
                        let content = anecdote.content;
                        view! {
                            <li>
                                <NavLink route=route>{content}</NavLink>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
