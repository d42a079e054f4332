//! Registry of enabled directory providers

use super::traits::DirectoryProvider;
use std::sync::Arc;
use tracing::info;

/// Enabled providers in registration order, fixed at construction
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: Vec<Arc<dyn DirectoryProvider>>,
}

impl ProviderRegistry {
    /// Keep only the providers reporting enabled, preserving their order
    pub fn new(all: Vec<Arc<dyn DirectoryProvider>>) -> Self {
        let total = all.len();
        let providers: Vec<_> = all.into_iter().filter(|p| p.is_enabled()).collect();

        info!("Directory providers: {} enabled of {}", providers.len(), total);
        for provider in &providers {
            info!("\t- {}", provider.name());
        }

        Self { providers }
    }

    /// Iterate providers in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn DirectoryProvider>> {
        self.providers.iter()
    }

    /// Get all provider names
    pub fn names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
