//! HTTP request handlers

use super::state::AppState;
use crate::directory::{UserDirectorySearchRequest, UserDirectorySearchResult};
use crate::error::DirectoryError;
use crate::matrix::{ErrorCode, MatrixErrorInfo};
use axum::{
    body::Bytes,
    extract::{OriginalUri, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use url::Url;

/// Query parameters accepted on client-server endpoints
#[derive(Debug, Default, Deserialize)]
pub struct TokenParams {
    pub access_token: Option<String>,
}

/// Matrix-shaped error response
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    info: MatrixErrorInfo,
}

impl ApiError {
    fn new(status: StatusCode, errcode: ErrorCode, error: impl Into<String>) -> Self {
        Self {
            status,
            info: MatrixErrorInfo::new(errcode, error),
        }
    }
}

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::Upstream {
                status,
                errcode,
                error,
            } => Self::new(
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                errcode,
                error,
            ),
            DirectoryError::Internal(message) => {
                tracing::error!("Directory search failed: {}", message);
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::Unknown, message)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.info)).into_response()
    }
}

/// User directory search handler
pub async fn user_directory_search(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Query(params): Query<TokenParams>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<UserDirectorySearchResult>, ApiError> {
    let access_token = bearer_token(&headers)
        .or(params.access_token)
        .ok_or_else(|| {
            ApiError::new(
                StatusCode::UNAUTHORIZED,
                ErrorCode::MissingToken,
                "Missing access token",
            )
        })?;

    let request: UserDirectorySearchRequest = serde_json::from_slice(&body).map_err(|e| {
        let errcode = if e.is_syntax() || e.is_eof() {
            ErrorCode::NotJson
        } else {
            ErrorCode::BadJson
        };
        ApiError::new(StatusCode::BAD_REQUEST, errcode, e.to_string())
    })?;

    let target = homeserver_target(&state, &headers, uri.path()).ok_or_else(|| {
        ApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::Unknown,
            "Unable to determine the homeserver URL",
        )
    })?;

    let result = state
        .directory
        .search(&target, &access_token, &request.search_term)
        .await?;

    Ok(Json(result))
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

/// Rebuild the client-facing URL of the request from its `Host` header,
/// falling back to the configured public URL
fn homeserver_target(state: &AppState, headers: &HeaderMap, path: &str) -> Option<Url> {
    if let Some(host) = headers.get(header::HOST).and_then(|v| v.to_str().ok()) {
        return Url::parse(&format!("{}://{}{}", state.public_scheme(), host, path)).ok();
    }

    state.public_url.as_ref()?.join(path).ok()
}
