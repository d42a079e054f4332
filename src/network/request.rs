//! Outbound request and response types

use std::collections::HashMap;
use url::Url;

/// JSON POST request to be executed by [`super::HttpClient`]
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// URL to request, query string included
    pub url: Url,
    /// Request headers
    pub headers: HashMap<String, String>,
    /// JSON body
    pub json: Option<serde_json::Value>,
}

impl HttpRequest {
    /// Create a POST request
    pub fn post(url: Url) -> Self {
        Self {
            url,
            headers: HashMap::new(),
            json: None,
        }
    }

    /// Add a header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set a JSON body
    pub fn json<T: serde::Serialize>(mut self, body: &T) -> serde_json::Result<Self> {
        self.json = Some(serde_json::to_value(body)?);
        Ok(self)
    }
}

/// HTTP response with the body already read
#[derive(Debug)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
}

impl HttpResponse {
    /// Parse response body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(&self.text)
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
