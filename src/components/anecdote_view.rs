//! Anecdote Detail Component
//!
//! Resolves the anecdote from the current route; renders nothing when the
//! route has no id or the id matches no anecdote.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn AnecdoteView() -> impl IntoView {
    let ctx = use_app_context();
    let anecdote = Memo::new(move |_| ctx.current_anecdote());

    move || {
        anecdote.get().map(|anecdote| {
            let id = anecdote.id;
            let info = anecdote.info;
            let href = info.clone();
            view! {
                <div class="anecdote">
                    <h1>{anecdote.content} " by " {anecdote.author}</h1>
                    <p>
                        "has " {anecdote.votes} " votes "
                        <button type="button" class="vote-btn" on:click=move |_| ctx.vote(&id)>
                            "vote"
                        </button>
                    </p>
                    <p>
                        "for more info see " <a href=href>{info}</a>
                    </p>
                </div>
            }
        })
    }
}
