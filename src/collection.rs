//! Anecdote Collection
//!
//! Ordered, append-only list of anecdotes plus the id allocator.
//! All mutation goes through `add` and `vote`.

use crate::models::{Anecdote, AnecdoteDraft, AnecdoteId};

#[derive(Debug, Clone, PartialEq)]
pub struct AnecdoteCollection {
    items: Vec<Anecdote>,
    next_id: u64,
}

impl Default for AnecdoteCollection {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }
}

impl AnecdoteCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collection pre-filled with drafts, in order
    pub fn seeded(drafts: impl IntoIterator<Item = AnecdoteDraft>) -> Self {
        let mut collection = Self::new();
        for draft in drafts {
            collection.add(draft);
        }
        collection
    }

    /// Append a new anecdote with zero votes and a fresh id
    pub fn add(&mut self, draft: AnecdoteDraft) -> Anecdote {
        let anecdote = Anecdote {
            id: self.allocate_id(),
            content: draft.content,
            author: draft.author,
            info: draft.info,
            votes: 0,
        };
        self.items.push(anecdote.clone());
        anecdote
    }

    /// Replace the matching anecdote with a copy carrying one more vote.
    /// Returns false (and changes nothing) when the id is unknown.
    pub fn vote(&mut self, id: &AnecdoteId) -> bool {
        match self.items.iter_mut().find(|a| &a.id == id) {
            Some(slot) => {
                *slot = Anecdote {
                    votes: slot.votes.saturating_add(1),
                    ..slot.clone()
                };
                true
            }
            None => false,
        }
    }

    pub fn find_by_id(&self, id: &AnecdoteId) -> Option<Anecdote> {
        self.items.iter().find(|a| &a.id == id).cloned()
    }

    pub fn contains(&self, id: &AnecdoteId) -> bool {
        self.items.iter().any(|a| &a.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Anecdote> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // Ids only come from this counter, so they never repeat.
    fn allocate_id(&mut self) -> AnecdoteId {
        let id = AnecdoteId::new(self.next_id.to_string());
        self.next_id += 1;
        id
    }
}
