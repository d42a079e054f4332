//! Provider loader for instantiating providers from configuration

use super::memory::MemoryProvider;
use super::rest::RestProvider;
use super::traits::DirectoryProvider;
use crate::config::{ProviderConfig, Settings};
use crate::network::HttpClient;
use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

/// Loader for initializing providers from configuration
pub struct ProviderLoader;

impl ProviderLoader {
    /// Instantiate every configured provider, in configuration order
    ///
    /// Disabled providers are still built; the directory manager drops them
    /// through [`DirectoryProvider::is_enabled`].
    pub fn load(settings: &Settings, client: &HttpClient) -> Vec<Arc<dyn DirectoryProvider>> {
        let mut providers = Vec::new();

        for config in &settings.directory.providers {
            match Self::create_provider(config, client) {
                Ok(provider) => {
                    info!("Loaded provider: {} ({})", config.name, config.provider);
                    providers.push(provider);
                }
                Err(e) => {
                    warn!("Failed to load provider {}: {}", config.name, e);
                }
            }
        }

        info!("Loaded {} directory providers", providers.len());
        providers
    }

    /// Create a provider instance by type
    fn create_provider(
        config: &ProviderConfig,
        client: &HttpClient,
    ) -> Result<Arc<dyn DirectoryProvider>> {
        let provider: Arc<dyn DirectoryProvider> = match config.provider.as_str() {
            "memory" => Arc::new(MemoryProvider::from_config(config)?),
            "rest" => Arc::new(RestProvider::from_config(config, client.clone())?),
            other => {
                return Err(anyhow::anyhow!(
                    "Unknown provider type: {} (available: {})",
                    other,
                    Self::available_providers().join(", ")
                ));
            }
        };

        Ok(provider)
    }

    /// Get list of available provider types
    pub fn available_providers() -> Vec<&'static str> {
        vec!["memory", "rest"]
    }
}
