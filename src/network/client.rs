//! HTTP client used for homeserver and provider requests

use super::request::{HttpRequest, HttpResponse};
use crate::config::OutgoingSettings;
use anyhow::Result;
use reqwest::{Client, Response};
use std::time::Duration;

/// HTTP client wrapper configured from the `outgoing` settings
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> Result<Self> {
        let mut builder = Client::builder().timeout(Duration::from_secs_f64(settings.request_timeout));

        // SSL verification
        if !settings.verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }

        // Proxy settings
        if let Some(ref proxy_url) = settings.proxies.all {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        } else {
            if let Some(ref http) = settings.proxies.http {
                builder = builder.proxy(reqwest::Proxy::http(http)?);
            }
            if let Some(ref https) = settings.proxies.https {
                builder = builder.proxy(reqwest::Proxy::https(https)?);
            }
        }

        let client = builder.build()?;

        Ok(Self {
            client,
            user_agent: settings.user_agent.clone(),
        })
    }

    /// Execute a POST request and read the full body
    pub async fn execute(&self, request: HttpRequest) -> reqwest::Result<HttpResponse> {
        let mut req_builder = self
            .client
            .post(request.url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json");

        for (key, value) in &request.headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(json) = request.json {
            req_builder = req_builder.json(&json);
        }

        let response = req_builder.send().await?;

        Self::parse_response(response).await
    }

    async fn parse_response(response: Response) -> reqwest::Result<HttpResponse> {
        let status = response.status().as_u16();
        let text = response.text().await?;

        Ok(HttpResponse { status, text })
    }

    /// User agent sent with every request
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}
