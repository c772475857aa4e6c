//! Create Anecdote Form Component
//!
//! Controlled form built from field bindings. Submitting adds the anecdote,
//! shows a notification and returns to the list.

use leptos::prelude::*;
use leptos_field::{use_field, FieldBinding, FieldInput, InputKind, ResetAction};

use crate::context::use_app_context;
use crate::models::AnecdoteDraft;

/// Field bindings of the create form
///
/// Every field is a plain text input: nothing beyond presence is validated,
/// so the browser must not reject free text in the info field either.
#[derive(Clone, Copy)]
struct AnecdoteForm {
    content: FieldBinding,
    author: FieldBinding,
    info: FieldBinding,
}

impl AnecdoteForm {
    fn new() -> Self {
        Self {
            content: use_field(InputKind::Text, "content"),
            author: use_field(InputKind::Text, "author"),
            info: use_field(InputKind::Text, "info"),
        }
    }

    fn draft(&self) -> AnecdoteDraft {
        AnecdoteDraft::new(
            self.content.value_untracked(),
            self.author.value_untracked(),
            self.info.value_untracked(),
        )
    }

    fn reset_actions(&self) -> [ResetAction; 3] {
        [
            self.content.reset_action(),
            self.author.reset_action(),
            self.info.reset_action(),
        ]
    }
}

#[component]
pub fn CreateNew() -> impl IntoView {
    let ctx = use_app_context();

    let form = AnecdoteForm::new();
    let resets = form.reset_actions();

    let create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.create_anecdote(form.draft());
    };

    view! {
        <div class="create-new">
            <h2>"create a new anecdote"</h2>
            <form on:submit=create>
                <div>
                    "content"
                    <FieldInput binding=form.content.input() />
                </div>
                <div>
                    "author"
                    <FieldInput binding=form.author.input() />
                </div>
                <div>
                    "url for more info"
                    <FieldInput binding=form.info.input() />
                </div>
                <button type="submit">"create"</button>
            </form>
            <button type="button" on:click=move |_| resets.iter().for_each(ResetAction::run)>
                "reset"
            </button>
        </div>
    }
}
