//! Route definitions

use super::handlers;
use super::state::AppState;
use crate::matrix::{USER_DIRECTORY_SEARCH_PATH_R0, USER_DIRECTORY_SEARCH_PATH_V3};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Matrix client-server API
        .route(USER_DIRECTORY_SEARCH_PATH_R0, post(handlers::user_directory_search))
        .route(USER_DIRECTORY_SEARCH_PATH_V3, post(handlers::user_directory_search))
        // Service routes
        .route("/health", get(handlers::health))
        .layer(cors)
        .with_state(state)
}
