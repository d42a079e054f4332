//! Homeserver user directory client

use super::models::{UserDirectorySearchRequest, UserDirectorySearchResult};
use crate::error::{DirectoryError, Result};
use crate::matrix::{ErrorCode, MatrixErrorInfo};
use crate::network::{HttpClient, HttpRequest};
use tracing::debug;
use url::Url;

/// Classified reply of a homeserver directory search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeserverOutcome {
    Success(UserDirectorySearchResult),
    /// The homeserver does not implement the user directory
    Unsupported,
    /// Any other error reported by the homeserver
    Failure {
        status: u16,
        errcode: ErrorCode,
        error: String,
    },
}

/// Issues directory searches against a homeserver
#[derive(Clone)]
pub struct HomeserverClient {
    client: HttpClient,
}

impl HomeserverClient {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// POST `{"search_term": query}` to `target` and classify the reply
    ///
    /// `target` is the already rewritten URL, access token included.
    /// Transport failures and bodies that do not parse are returned as
    /// [`DirectoryError::Internal`].
    pub async fn query(&self, target: Url, query: &str) -> Result<HomeserverOutcome> {
        let request = HttpRequest::post(target)
            .json(&UserDirectorySearchRequest::new(query))
            .map_err(|e| DirectoryError::internal(format!("Unable to encode HS request: {}", e)))?;

        let response = self.client.execute(request).await.map_err(|e| {
            DirectoryError::internal(format!("Unable to query the HS: I/O error: {}", e))
        })?;

        debug!("HS replied with status {}", response.status);

        if !response.is_success() {
            let info: MatrixErrorInfo = response.json().map_err(invalid_reply)?;
            if info.errcode == ErrorCode::Unrecognized {
                return Ok(HomeserverOutcome::Unsupported);
            }
            return Ok(HomeserverOutcome::Failure {
                status: response.status,
                errcode: info.errcode,
                error: info.error,
            });
        }

        let result: UserDirectorySearchResult = response.json().map_err(invalid_reply)?;
        Ok(HomeserverOutcome::Success(result))
    }
}

fn invalid_reply(e: serde_json::Error) -> DirectoryError {
    DirectoryError::internal(format!("Invalid JSON reply from the HS: {}", e))
}
