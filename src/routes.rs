//! Routes
//!
//! Mapping between browser paths and view states.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::collection::AnecdoteCollection;
use crate::models::{Anecdote, AnecdoteId};

/// Characters escaped inside an id path segment
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Current view state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List,
    About,
    Create,
    Detail(AnecdoteId),
    NotFound,
}

impl Route {
    /// Parse a path (query and fragment ignored, trailing slash tolerated)
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::List,
            ["about"] => Route::About,
            ["create"] => Route::Create,
            ["items" | "anecdotes", id] => {
                let id = percent_decode_str(id).decode_utf8_lossy();
                Route::Detail(AnecdoteId::new(id))
            }
            _ => Route::NotFound,
        }
    }

    /// Canonical path for this route. `NotFound` has none.
    pub fn path(&self) -> Option<String> {
        match self {
            Route::List => Some("/".to_string()),
            Route::About => Some("/about".to_string()),
            Route::Create => Some("/create".to_string()),
            Route::Detail(id) => Some(format!("/items/{}", utf8_percent_encode(id.as_str(), SEGMENT))),
            Route::NotFound => None,
        }
    }

    /// Path parameter of a detail route
    pub fn anecdote_id(&self) -> Option<&AnecdoteId> {
        match self {
            Route::Detail(id) => Some(id),
            _ => None,
        }
    }
}

/// Anecdote shown by the detail slot, if any.
/// No parameter and an unmatched parameter both yield `None`.
pub fn resolve_anecdote(route: &Route, anecdotes: &AnecdoteCollection) -> Option<Anecdote> {
    route.anecdote_id().and_then(|id| anecdotes.find_by_id(id))
}
