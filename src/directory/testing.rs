//! Provider doubles for tests

use super::models::{UserDirectoryEntry, UserDirectorySearchResult};
use super::traits::DirectoryProvider;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Provider returning canned results and recording the queries it sees
pub struct RecordingProvider {
    name: String,
    enabled: bool,
    by_name: UserDirectorySearchResult,
    by_3pid: UserDirectorySearchResult,
    name_calls: AtomicUsize,
    threepid_calls: AtomicUsize,
    name_queries: Mutex<Vec<String>>,
    threepid_queries: Mutex<Vec<String>>,
}

impl RecordingProvider {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            enabled: true,
            by_name: UserDirectorySearchResult::new(),
            by_3pid: UserDirectorySearchResult::new(),
            name_calls: AtomicUsize::new(0),
            threepid_calls: AtomicUsize::new(0),
            name_queries: Mutex::new(Vec::new()),
            threepid_queries: Mutex::new(Vec::new()),
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn by_name(mut self, result: UserDirectorySearchResult) -> Self {
        self.by_name = result;
        self
    }

    pub fn by_3pid(mut self, result: UserDirectorySearchResult) -> Self {
        self.by_3pid = result;
        self
    }

    pub fn calls(&self) -> usize {
        self.name_calls.load(Ordering::SeqCst) + self.threepid_calls.load(Ordering::SeqCst)
    }

    pub fn name_queries(&self) -> Vec<String> {
        self.name_queries.lock().unwrap().clone()
    }

    pub fn threepid_queries(&self) -> Vec<String> {
        self.threepid_queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl DirectoryProvider for RecordingProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    async fn search_by_display_name(&self, query: &str) -> UserDirectorySearchResult {
        self.name_calls.fetch_add(1, Ordering::SeqCst);
        self.name_queries.lock().unwrap().push(query.to_string());
        self.by_name.clone()
    }

    async fn search_by_3pid(&self, query: &str) -> UserDirectorySearchResult {
        self.threepid_calls.fetch_add(1, Ordering::SeqCst);
        self.threepid_queries.lock().unwrap().push(query.to_string());
        self.by_3pid.clone()
    }
}

/// Shorthand for a result made of the given user IDs
pub fn entries(ids: &[&str]) -> UserDirectorySearchResult {
    UserDirectorySearchResult::with_results(ids.iter().map(|id| UserDirectoryEntry::new(*id)).collect())
}
