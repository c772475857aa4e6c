//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::collection::AnecdoteCollection;
use crate::models::{Anecdote, AnecdoteDraft, AnecdoteId};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All anecdotes, in insertion order
    pub anecdotes: AnecdoteCollection,
    /// Active notification message (None when idle)
    pub notification: Option<String>,
}

impl AppState {
    pub fn new(anecdotes: AnecdoteCollection) -> Self {
        Self {
            anecdotes,
            notification: None,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Add an anecdote and return the stored copy
pub fn store_add_anecdote(store: &AppStore, draft: AnecdoteDraft) -> Anecdote {
    let created = store.anecdotes().write().add(draft);
    log::info!("added anecdote {}", created.id);
    created
}

/// Vote for an anecdote by ID. Unknown IDs leave the store untouched.
pub fn store_vote(store: &AppStore, id: &AnecdoteId) -> bool {
    if !store.anecdotes().with_untracked(|anecdotes| anecdotes.contains(id)) {
        log::debug!("vote ignored, no anecdote {}", id);
        return false;
    }
    store.anecdotes().write().vote(id)
}

/// Replace the notification message
pub fn store_set_notification(store: &AppStore, message: Option<String>) {
    store.notification().set(message);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(store: &AppStore, id: &AnecdoteId) -> Option<Anecdote> {
        store.anecdotes().with_untracked(|anecdotes| anecdotes.find_by_id(id))
    }

    fn seeded_store() -> AppStore {
        Store::new(AppState::new(AnecdoteCollection::seeded([
            AnecdoteDraft::new("first", "a", "http://a"),
            AnecdoteDraft::new("second", "b", "http://b"),
        ])))
    }

    #[test]
    fn test_store_add_and_find() {
        let owner = Owner::new();
        owner.set();
        let store = seeded_store();

        let created = store_add_anecdote(&store, AnecdoteDraft::new("X", "Y", "Z"));
        let found = find(&store, &created.id).unwrap();
        assert_eq!(found.content, "X");
        assert_eq!(found.votes, 0);
        assert_eq!(store.anecdotes().with_untracked(|a| a.len()), 3);
    }

    #[test]
    fn test_store_vote() {
        let owner = Owner::new();
        owner.set();
        let store = seeded_store();
        let id = AnecdoteId::from("1");

        assert!(store_vote(&store, &id));
        assert_eq!(find(&store, &id).unwrap().votes, 1);
        assert_eq!(find(&store, &AnecdoteId::from("2")).unwrap().votes, 0);
    }

    #[test]
    fn test_store_vote_missing_is_noop() {
        let owner = Owner::new();
        owner.set();
        let store = seeded_store();
        let before = store.anecdotes().get_untracked();

        assert!(!store_vote(&store, &AnecdoteId::from("nope")));
        assert_eq!(store.anecdotes().get_untracked(), before);
    }

    #[test]
    fn test_store_notification() {
        let owner = Owner::new();
        owner.set();
        let store = seeded_store();

        store_set_notification(&store, Some("hi".to_string()));
        assert_eq!(store.notification().get_untracked().as_deref(), Some("hi"));
        store_set_notification(&store, None);
        assert_eq!(store.notification().get_untracked(), None);
    }
}
