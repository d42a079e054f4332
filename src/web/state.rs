//! Application state shared across handlers

use crate::config::Settings;
use crate::directory::DirectoryManager;
use std::sync::Arc;
use tracing::warn;
use url::Url;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Directory search orchestrator
    pub directory: Arc<DirectoryManager>,
    /// Parsed `server.public_url`
    pub public_url: Option<Url>,
}

impl AppState {
    /// Create new application state
    pub fn new(settings: Settings, directory: DirectoryManager) -> Self {
        let public_url = settings
            .server
            .public_url
            .as_deref()
            .and_then(|raw| match Url::parse(raw) {
                Ok(url) => Some(url),
                Err(e) => {
                    warn!("Ignoring invalid public URL {}: {}", raw, e);
                    None
                }
            });

        Self {
            settings: Arc::new(settings),
            directory: Arc::new(directory),
            public_url,
        }
    }

    /// Scheme used when rebuilding the client-facing homeserver URL
    pub fn public_scheme(&self) -> &str {
        self.public_url.as_ref().map_or("http", Url::scheme)
    }
}
