//! Provider delegating searches to an external REST backend

use super::models::{UserDirectoryEntry, UserDirectorySearchResult};
use super::traits::DirectoryProvider;
use crate::config::ProviderConfig;
use crate::network::{HttpClient, HttpRequest};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;
use url::Url;

/// Search mode sent to the backend as `by`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchBy {
    Name,
    Threepid,
}

#[derive(Debug, Serialize)]
struct RestSearchRequest<'a> {
    by: SearchBy,
    search_term: &'a str,
}

#[derive(Debug, Deserialize)]
struct RestSearchResponse {
    #[serde(default)]
    limited: bool,
    #[serde(default)]
    results: Vec<UserDirectoryEntry>,
}

#[derive(Debug, Deserialize)]
struct RestOptions {
    endpoint: String,
    #[serde(default)]
    domain: Option<String>,
    /// Sent with every request, e.g. an `Authorization` header
    #[serde(default)]
    headers: HashMap<String, String>,
}

/// Directory provider backed by `POST <endpoint>` with `{"by", "search_term"}`
pub struct RestProvider {
    name: String,
    enabled: bool,
    endpoint: Url,
    domain: Option<String>,
    headers: HashMap<String, String>,
    client: HttpClient,
}

impl RestProvider {
    pub fn new(name: impl Into<String>, endpoint: Url, client: HttpClient) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            endpoint,
            domain: None,
            headers: HashMap::new(),
            client,
        }
    }

    pub fn from_config(config: &ProviderConfig, client: HttpClient) -> Result<Self> {
        let options: RestOptions = config.extra_as()?;
        let endpoint = Url::parse(&options.endpoint)
            .map_err(|e| anyhow!("Invalid endpoint {}: {}", options.endpoint, e))?;

        Ok(Self {
            name: config.name.clone(),
            enabled: config.enabled,
            endpoint,
            domain: options.domain,
            headers: options.headers,
            client,
        })
    }

    /// Domain used to qualify bare localparts returned by the backend
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    async fn search(&self, by: SearchBy, query: &str) -> UserDirectorySearchResult {
        match self.fetch(by, query).await {
            Ok(result) => result,
            Err(e) => {
                warn!("Directory provider {} failed ({:?} search): {}", self.name, by, e);
                UserDirectorySearchResult::new()
            }
        }
    }

    async fn fetch(&self, by: SearchBy, query: &str) -> Result<UserDirectorySearchResult> {
        let request = self
            .headers
            .iter()
            .fold(HttpRequest::post(self.endpoint.clone()), |req, (k, v)| {
                req.header(k.as_str(), v.as_str())
            })
            .json(&RestSearchRequest {
                by,
                search_term: query,
            })?;

        let response = self.client.execute(request).await?;
        if !response.is_success() {
            return Err(anyhow!("HTTP error: {}", response.status));
        }

        let body: RestSearchResponse = response.json()?;
        let results = body
            .results
            .into_iter()
            .map(|entry| self.qualify(entry))
            .collect();

        Ok(UserDirectorySearchResult {
            limited: body.limited,
            results,
        })
    }

    fn qualify(&self, mut entry: UserDirectoryEntry) -> UserDirectoryEntry {
        if let Some(ref domain) = self.domain {
            if !entry.user_id.starts_with('@') {
                entry.user_id = format!("@{}:{}", entry.user_id, domain);
            }
        }
        entry
    }
}

#[async_trait]
impl DirectoryProvider for RestProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    async fn search_by_display_name(&self, query: &str) -> UserDirectorySearchResult {
        self.search(SearchBy::Name, query).await
    }

    async fn search_by_3pid(&self, query: &str) -> UserDirectorySearchResult {
        self.search(SearchBy::Threepid, query).await
    }
}
