//! Directory provider trait

use super::models::UserDirectorySearchResult;
use async_trait::async_trait;

/// A pluggable source of directory entries beyond the homeserver
///
/// Implementations absorb their own failures: a backend that cannot be
/// reached returns an empty, non-limited result instead of an error.
/// `limited` should only be set when the provider truncated its own matches.
#[async_trait]
pub trait DirectoryProvider: Send + Sync {
    /// Provider name, used in logs
    fn name(&self) -> &str;

    /// Whether the provider takes part in searches.
    /// Checked once when the orchestrator is built.
    fn is_enabled(&self) -> bool;

    /// Search users by display name (or user ID)
    async fn search_by_display_name(&self, query: &str) -> UserDirectorySearchResult;

    /// Search users by third-party identifier (email, phone number)
    async fn search_by_3pid(&self, query: &str) -> UserDirectorySearchResult;
}
