//! Web server module
//!
//! Exposes the Matrix user directory search endpoint.

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
