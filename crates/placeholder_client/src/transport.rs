//! HTTP transport seam.
//!
//! This module defines the [`Transport`] trait, the only place this crate
//! touches a network, and [`HttpTransport`], the reqwest-backed production
//! implementation. Resource clients depend on the trait alone, so tests can
//! substitute an in-memory double and the whole layer stays independent of
//! any single HTTP library.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::config::ApiConfig;
use crate::errors::Error;
use crate::response::ApiResponse;

#[cfg(test)]
#[path = "transport_tests.rs"]
mod tests;

/// Mockable HTTP transport trait.
///
/// Exposes exactly the verbs the resource layer needs. Paths are relative
/// to the base URL bound at construction and already interpolated by the
/// caller; bodies are JSON values so implementations need no knowledge of
/// the payload types. Implementations collect the exchange into an
/// [`ApiResponse`] without interpreting the status code; status policy
/// belongs to the caller.
///
/// Implementations must be safe for concurrent use; clients share one
/// transport across resource families and tasks.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute a GET request, optionally with query pairs appended.
    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<ApiResponse, Error>;

    /// Execute a POST request carrying a JSON body.
    async fn post(&self, path: &str, body: &Value) -> Result<ApiResponse, Error>;

    /// Execute a PUT request carrying a JSON body.
    async fn put(&self, path: &str, body: &Value) -> Result<ApiResponse, Error>;

    /// Execute a DELETE request.
    async fn delete(&self, path: &str) -> Result<ApiResponse, Error>;
}

/// Production transport backed by a shared `reqwest` client.
///
/// Configured once from an [`ApiConfig`]: timeout, user agent, and default
/// headers apply to every request. The underlying connection pool is
/// internally reference counted, so cloning the transport is cheap and
/// concurrent use is safe.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpTransport {
    /// Builds the production transport from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the underlying HTTP client rejects
    /// the configuration.
    pub fn new(config: ApiConfig) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent())
            .default_headers(config.default_headers().clone())
            .build()?;
        Ok(Self { client, config })
    }

    /// The configuration this transport was built from.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Joins `path` onto the bound base URL.
    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}{}",
            self.config.base_url().as_str().trim_end_matches('/'),
            path
        )
    }

    /// Sends a prepared request and collects the exchange.
    ///
    /// The status code is recorded, never interpreted: a 404 is data here.
    async fn execute(
        &self,
        request: reqwest::RequestBuilder,
        path: &str,
    ) -> Result<ApiResponse, Error> {
        let response = request.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;
        Ok(ApiResponse::new(status, headers, body, path))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<ApiResponse, Error> {
        debug!(path, "HTTP GET");
        let mut request = self.client.get(self.endpoint(path));
        if !query.is_empty() {
            request = request.query(query);
        }
        self.execute(request, path).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<ApiResponse, Error> {
        debug!(path, "HTTP POST");
        let request = self.client.post(self.endpoint(path)).json(body);
        self.execute(request, path).await
    }

    async fn put(&self, path: &str, body: &Value) -> Result<ApiResponse, Error> {
        debug!(path, "HTTP PUT");
        let request = self.client.put(self.endpoint(path)).json(body);
        self.execute(request, path).await
    }

    async fn delete(&self, path: &str) -> Result<ApiResponse, Error> {
        debug!(path, "HTTP DELETE");
        let request = self.client.delete(self.endpoint(path));
        self.execute(request, path).await
    }
}
