//! Directory search orchestration

use super::homeserver::{HomeserverClient, HomeserverOutcome};
use super::models::UserDirectorySearchResult;
use super::registry::ProviderRegistry;
use super::traits::DirectoryProvider;
use crate::dns::AddressRewriter;
use crate::error::{DirectoryError, Result};
use crate::network::HttpClient;
use std::sync::Arc;
use tracing::{error, info, warn};
use url::Url;

/// Runs a directory search on the homeserver, then on every enabled provider
pub struct DirectoryManager {
    providers: ProviderRegistry,
    dns: Arc<dyn AddressRewriter>,
    homeserver: HomeserverClient,
}

impl DirectoryManager {
    /// Build the manager; disabled providers are dropped here, once
    pub fn new(
        providers: Vec<Arc<dyn DirectoryProvider>>,
        dns: Arc<dyn AddressRewriter>,
        client: HttpClient,
    ) -> Self {
        Self {
            providers: ProviderRegistry::new(providers),
            dns,
            homeserver: HomeserverClient::new(client),
        }
    }

    /// Enabled providers, in query order
    pub fn providers(&self) -> &ProviderRegistry {
        &self.providers
    }

    /// Search the homeserver at `target` and all providers for `query`
    ///
    /// Entries are concatenated in source order: homeserver first, then for
    /// each provider its display name matches followed by its 3PID matches.
    /// Nothing is deduplicated. A homeserver error other than "unrecognized"
    /// aborts the search before any provider is queried.
    pub async fn search(
        &self,
        target: &Url,
        access_token: &str,
        query: &str,
    ) -> Result<UserDirectorySearchResult> {
        info!("Performing search for '{}'", query);
        info!("Original request URL: {}", target);
        let mut result = UserDirectorySearchResult::new();

        let mut url = self.dns.transform(target);
        info!("Querying HS at {}", url);
        set_access_token(&mut url, access_token);

        match self.homeserver.query(url, query).await? {
            HomeserverOutcome::Success(hs) => {
                info!("Found {} match(es) in HS for '{}'", hs.len(), query);
                result.absorb(hs);
            }
            HomeserverOutcome::Unsupported => {
                warn!("Homeserver does not support Directory feature, skipping");
            }
            HomeserverOutcome::Failure {
                status,
                errcode,
                error,
            } => {
                error!("Homeserver returned an error while performing directory search");
                return Err(DirectoryError::upstream(status, errcode, error));
            }
        }

        for provider in self.providers.iter() {
            info!("Using Directory provider {}", provider.name());

            let by_name = provider.search_by_display_name(query).await;
            info!("Display name: found {} match(es) for '{}'", by_name.len(), query);
            result.absorb(by_name);

            let by_3pid = provider.search_by_3pid(query).await;
            info!("Threepid: found {} match(es) for '{}'", by_3pid.len(), query);
            result.absorb(by_3pid);
        }

        info!(
            "Total matches: {} - limited? {}",
            result.len(),
            result.limited
        );
        Ok(result)
    }
}

/// Replace any `access_token` already in the query with `token`
fn set_access_token(url: &mut Url, token: &str) {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != "access_token")
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut query = url.query_pairs_mut();
    query.clear();
    query.extend_pairs(pairs);
    query.append_pair("access_token", token);
}
