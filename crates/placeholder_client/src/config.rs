//! Client configuration.
//!
//! This module holds the shared request specification that every transport
//! call is bound to: the base URL of the placeholder API deployment,
//! default headers, the user agent, and the request timeout. A config is
//! built once and handed to [`crate::HttpTransport`]; it is never mutated
//! by an in-flight operation.

use std::env;
use std::time::Duration;

use http::header::{HeaderMap, HeaderName, HeaderValue};
use url::Url;

use crate::errors::Error;

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Environment variable naming the base URL of the target deployment.
pub const BASE_URL_ENV: &str = "PLACEHOLDER_BASE_URL";

/// Environment variable overriding the request timeout, in whole seconds.
pub const TIMEOUT_ENV: &str = "PLACEHOLDER_TIMEOUT_SECS";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_USER_AGENT: &str = concat!("placeholder-client/", env!("CARGO_PKG_VERSION"));

/// The shared base request specification for one API deployment.
///
/// Holds everything that is common to every request: base URL, default
/// headers, user agent, and timeout. Resource clients share one config
/// through the transport they are constructed with.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use placeholder_client::ApiConfig;
///
/// let config = ApiConfig::new("https://jsonplaceholder.typicode.com")?
///     .with_timeout(Duration::from_secs(5));
///
/// assert_eq!(config.base_url().host_str(), Some("jsonplaceholder.typicode.com"));
/// # Ok::<(), placeholder_client::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: Url,
    default_headers: HeaderMap,
    user_agent: String,
    timeout: Duration,
}

impl ApiConfig {
    /// Creates a configuration for the deployment at `base_url`.
    ///
    /// The URL is validated eagerly so a malformed target fails the suite
    /// before any request is sent. A trailing slash is accepted and
    /// normalized away when paths are joined.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBaseUrl`] if `base_url` cannot be parsed as
    /// an absolute URL.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let parsed = Url::parse(base_url).map_err(|source| Error::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;
        Ok(Self {
            base_url: parsed,
            default_headers: HeaderMap::new(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Creates a configuration from the process environment.
    ///
    /// Reads [`BASE_URL_ENV`] (required) and [`TIMEOUT_ENV`] (optional) so
    /// CI can point the suite at a deployed instance without code changes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the base URL variable is unset or the
    /// timeout variable is not a whole number of seconds, and
    /// [`Error::InvalidBaseUrl`] if the base URL does not parse.
    pub fn from_env() -> Result<Self, Error> {
        let base_url = env::var(BASE_URL_ENV)
            .map_err(|_| Error::Config(format!("{BASE_URL_ENV} is not set")))?;
        let mut config = Self::new(&base_url)?;
        if let Ok(raw) = env::var(TIMEOUT_ENV) {
            let secs: u64 = raw.parse().map_err(|_| {
                Error::Config(format!(
                    "{TIMEOUT_ENV} must be a whole number of seconds, got '{raw}'"
                ))
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    /// Adds a default header sent with every request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `name` or `value` is not valid HTTP.
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self, Error> {
        let name = HeaderName::try_from(name)
            .map_err(|_| Error::Config(format!("'{name}' is not a valid header name")))?;
        let value = HeaderValue::try_from(value)
            .map_err(|_| Error::Config(format!("header '{name}' has a non-printable value")))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Overrides the user agent string.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Overrides the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The base URL of the target deployment.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Headers sent with every request.
    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    /// The user agent sent with every request.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// The per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
