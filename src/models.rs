//! Frontend Models
//!
//! Anecdote records held in memory for the lifetime of the page.

use std::fmt;

use serde::Deserialize;

/// Opaque anecdote identifier, matched against path segments by exact equality
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnecdoteId(String);

impl AnecdoteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnecdoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AnecdoteId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A single anecdote
#[derive(Debug, Clone, PartialEq)]
pub struct Anecdote {
    pub id: AnecdoteId,
    pub content: String,
    pub author: String,
    /// URL for more info
    pub info: String,
    pub votes: u32,
}

/// Caller-supplied fields of a new anecdote (no id, no votes)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnecdoteDraft {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub info: String,
}

impl AnecdoteDraft {
    pub fn new(content: impl Into<String>, author: impl Into<String>, info: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            author: author.into(),
            info: info.into(),
        }
    }
}
