//! HTTP networking module
//!
//! Provides the outbound HTTP client used to reach homeservers and REST providers.

mod client;
mod request;

pub use client::HttpClient;
pub use request::{HttpRequest, HttpResponse};
