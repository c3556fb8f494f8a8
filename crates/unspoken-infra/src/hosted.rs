//! Shared plumbing for the hosted-platform adapters.

use reqwest::{Client, Response, StatusCode};

use unspoken_shared::ErrorResponse;

/// Connection settings for the hosted platform.
#[derive(Debug, Clone)]
pub struct HostedConfig {
    /// Base URL of the platform, e.g. `https://api.example.dev`.
    pub base_url: String,
    /// Project API key sent with every request.
    pub api_key: Option<String>,
}

impl HostedConfig {
    /// Read the connection settings from the environment. `None` when no
    /// backend URL is configured - callers fall back to the in-memory
    /// adapters.
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var("UNSPOKEN_BACKEND_URL").ok()?;
        Some(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: std::env::var("UNSPOKEN_API_KEY").ok(),
        })
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn apply_key(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => req.header("x-api-key", key),
            None => req,
        }
    }
}

/// Build the HTTP client the adapters share.
pub(crate) fn client() -> Client {
    Client::new()
}

/// Pull a user-surfaceable message out of a non-success response.
pub(crate) async fn failure_message(response: Response) -> String {
    let status = response.status();
    match response.json::<ErrorResponse>().await {
        Ok(problem) => problem.message(),
        Err(_) => default_status_message(status),
    }
}

fn default_status_message(status: StatusCode) -> String {
    format!(
        "Request failed: {} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("unknown")
    )
}
