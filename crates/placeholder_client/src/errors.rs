//! Error types for placeholder API client operations.
//!
//! This module defines the error types that can occur when driving the
//! placeholder REST API through this crate. Every failure is fail-fast and
//! surfaced to the caller; nothing is retried or logged-and-swallowed.

use http::StatusCode;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur during placeholder API client operations.
///
/// This enum represents all failure conditions of the client layer:
/// construction-time configuration problems, transport failures, status
/// assertions, and payload (de)serialization. Each variant carries enough
/// context to diagnose a failing test run from the error message alone.
///
/// ## Examples
///
/// ```rust,ignore
/// use placeholder_client::Error;
///
/// match comments.create(&payload).await {
///     Ok(created) => println!("created comment {:?}", created.id),
///     Err(Error::StatusMismatch { expected, actual, path }) => {
///         eprintln!("{path} answered {actual}, wanted {expected}")
///     }
///     Err(err) => eprintln!("Other error: {err}"),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configuration value was rejected before any I/O took place.
    ///
    /// This error occurs when:
    /// - a required environment variable is missing or unparseable
    /// - a default header name or value is not valid HTTP
    #[error("Invalid client configuration: {0}")]
    Config(String),

    /// Error deserializing a response body into the target data shape.
    ///
    /// The body was received intact but does not match the model type.
    /// Raised from the extraction step only; the status assertion has
    /// already passed by the time this can occur.
    #[error("Failed to deserialize response body: {0}")]
    Deserialize(#[from] serde_json::Error),

    /// The base URL supplied at construction could not be parsed.
    #[error("Failed to parse base URL '{url}': {source}")]
    InvalidBaseUrl {
        /// The rejected input.
        url: String,
        /// The underlying parse failure.
        #[source]
        source: url::ParseError,
    },

    /// A resource route was rejected at construction time.
    ///
    /// Routes are validated eagerly so a typo in a path template fails the
    /// suite before a single request is sent.
    #[error("Invalid resource route: {0}")]
    InvalidRoute(String),

    /// The request payload could not be rendered as JSON.
    #[error("Failed to serialize request payload: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The observed status code differs from the expected one.
    ///
    /// This is a correctness assertion, not a recoverable condition: the
    /// operation (and usually the enclosing test) must abort. The caller
    /// chose `expected` either explicitly or through an operation default
    /// (201 for create, 200 for everything else).
    #[error("Expected status {expected} for {path} but the server answered {actual}")]
    StatusMismatch {
        /// The status the operation asserted.
        expected: StatusCode,
        /// The status the server actually returned.
        actual: StatusCode,
        /// The request path, for diagnosis.
        path: String,
    },

    /// A transport-level failure: connection error, timeout, or a response
    /// that never completed.
    ///
    /// Propagated unchanged from the HTTP layer; this crate performs no
    /// retries and no suppression.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
