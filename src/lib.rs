//! mxisd-directory: federated Matrix user directory search
//!
//! Answers user directory searches by querying the user's homeserver and a
//! set of pluggable directory providers, then merging their matches.

pub mod config;
pub mod directory;
pub mod dns;
pub mod error;
pub mod matrix;
pub mod network;
pub mod web;

pub use config::Settings;
pub use directory::{DirectoryManager, DirectoryProvider, UserDirectorySearchResult};
pub use error::DirectoryError;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
