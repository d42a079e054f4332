//! User directory search
//!
//! Queries the homeserver's user directory and every enabled provider,
//! and merges their matches into a single result.

mod homeserver;
mod loader;
mod manager;
mod models;
mod registry;
mod traits;

// Provider implementations
pub mod memory;
pub mod rest;

#[cfg(test)]
pub(crate) mod testing;

pub use homeserver::{HomeserverClient, HomeserverOutcome};
pub use loader::ProviderLoader;
pub use manager::DirectoryManager;
pub use models::*;
pub use registry::ProviderRegistry;
pub use traits::DirectoryProvider;
