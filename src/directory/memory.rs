//! Static provider backed by entries listed in the settings file

use super::models::{UserDirectoryEntry, UserDirectorySearchResult};
use super::traits::DirectoryProvider;
use crate::config::ProviderConfig;
use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Third-party identifier bound to a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreePid {
    pub medium: String,
    pub address: String,
}

/// A user known to the memory provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryEntry {
    pub user_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub threepids: Vec<ThreePid>,
}

impl MemoryEntry {
    fn to_entry(&self) -> UserDirectoryEntry {
        UserDirectoryEntry {
            user_id: self.user_id.clone(),
            display_name: self.display_name.clone(),
            avatar_url: self.avatar_url.clone(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MemoryOptions {
    entries: Vec<MemoryEntry>,
    limit: Option<usize>,
}

/// Case-insensitive substring search over a fixed user list
pub struct MemoryProvider {
    name: String,
    enabled: bool,
    entries: Vec<MemoryEntry>,
    limit: Option<usize>,
}

impl MemoryProvider {
    pub fn new(name: impl Into<String>, entries: Vec<MemoryEntry>) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            entries,
            limit: None,
        }
    }

    pub fn from_config(config: &ProviderConfig) -> Result<Self> {
        let options: MemoryOptions = config.extra_as()?;
        Ok(Self {
            name: config.name.clone(),
            enabled: config.enabled,
            entries: options.entries,
            limit: options.limit,
        })
    }

    /// Cap the number of entries returned per search
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn collect<F>(&self, matches: F) -> UserDirectorySearchResult
    where
        F: Fn(&MemoryEntry) -> bool,
    {
        let mut results: Vec<_> = self
            .entries
            .iter()
            .filter(|&e| matches(e))
            .map(MemoryEntry::to_entry)
            .collect();

        let mut limited = false;
        if let Some(limit) = self.limit {
            if results.len() > limit {
                results.truncate(limit);
                limited = true;
            }
        }

        UserDirectorySearchResult { limited, results }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[async_trait]
impl DirectoryProvider for MemoryProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    async fn search_by_display_name(&self, query: &str) -> UserDirectorySearchResult {
        let needle = query.to_lowercase();
        self.collect(|e| {
            contains_ignore_case(&e.user_id, &needle)
                || e
                    .display_name
                    .as_deref()
                    .is_some_and(|name| contains_ignore_case(name, &needle))
        })
    }

    async fn search_by_3pid(&self, query: &str) -> UserDirectorySearchResult {
        let needle = query.to_lowercase();
        self.collect(|e| {
            e.threepids
                .iter()
                .any(|tpid| contains_ignore_case(&tpid.address, &needle))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> Vec<MemoryEntry> {
        vec![
            MemoryEntry {
                user_id: "@alice:example.org".to_string(),
                display_name: Some("Alice Liddell".to_string()),
                avatar_url: None,
                threepids: vec![ThreePid {
                    medium: "email".to_string(),
                    address: "alice@corp.example".to_string(),
                }],
            },
            MemoryEntry {
                user_id: "@bob:example.org".to_string(),
                display_name: Some("Bob".to_string()),
                avatar_url: Some("mxc://example.org/bob".to_string()),
                threepids: vec![ThreePid {
                    medium: "msisdn".to_string(),
                    address: "15551234567".to_string(),
                }],
            },
        ]
    }

    #[tokio::test]
    async fn test_display_name_search() {
        let provider = MemoryProvider::new("static", users());

        let result = provider.search_by_display_name("LIDDELL").await;
        assert_eq!(result.len(), 1);
        assert_eq!(result.results[0].user_id, "@alice:example.org");

        let result = provider.search_by_display_name("example.org").await;
        assert_eq!(result.len(), 2);
        assert!(!result.limited);
    }

    #[tokio::test]
    async fn test_3pid_search() {
        let provider = MemoryProvider::new("static", users());

        let result = provider.search_by_3pid("5551234").await;
        assert_eq!(result.len(), 1);
        assert_eq!(result.results[0].avatar_url.as_deref(), Some("mxc://example.org/bob"));

        assert!(provider.search_by_3pid("nobody").await.is_empty());
    }

    #[tokio::test]
    async fn test_limit_truncates_and_flags() {
        let provider = MemoryProvider::new("static", users()).with_limit(1);

        let result = provider.search_by_display_name("example").await;
        assert_eq!(result.len(), 1);
        assert!(result.limited);

        let result = provider.search_by_display_name("bob").await;
        assert_eq!(result.len(), 1);
        assert!(!result.limited);
    }

    #[test]
    fn test_from_config() {
        let yaml = r#"
name: static
type: memory
enabled: false
limit: 5
entries:
  - user_id: "@carol:example.org"
    display_name: Carol
    threepids:
      - medium: email
        address: carol@example.org
"#;
        let config: ProviderConfig = serde_yaml::from_str(yaml).unwrap();
        let provider = MemoryProvider::from_config(&config).unwrap();

        assert_eq!(provider.name(), "static");
        assert!(!provider.is_enabled());
        assert_eq!(provider.limit, Some(5));
        assert_eq!(provider.entries[0].threepids[0].medium, "email");
    }
}
