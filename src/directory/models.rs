//! User directory request and result models

use serde::{Deserialize, Serialize};

/// Body of a user directory search request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDirectorySearchRequest {
    pub search_term: String,
}

impl UserDirectorySearchRequest {
    pub fn new(search_term: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
        }
    }
}

/// A matched user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDirectoryEntry {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl UserDirectoryEntry {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: None,
            avatar_url: None,
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }
}

/// Search results from one source, or the aggregate of all sources
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDirectorySearchResult {
    /// True if any contributing source truncated its results
    #[serde(default)]
    pub limited: bool,
    pub results: Vec<UserDirectoryEntry>,
}

impl UserDirectorySearchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_results(results: Vec<UserDirectoryEntry>) -> Self {
        Self {
            limited: false,
            results,
        }
    }

    /// Mark the result set as truncated
    pub fn limited(mut self) -> Self {
        self.limited = true;
        self
    }

    /// Append another source's entries; `limited` is sticky
    pub fn absorb(&mut self, other: UserDirectorySearchResult) {
        self.results.extend(other.results);
        self.limited |= other.limited;
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
