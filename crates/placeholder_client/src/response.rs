//! Raw response wrapper.
//!
//! This module contains [`ApiResponse`], the opaque result of one completed
//! HTTP exchange. It exposes exactly two capabilities on top of plain
//! accessors: assert the status code, and deserialize the body into a typed
//! model. An `ApiResponse` is created by the transport, consumed by the
//! calling operation, and discarded after extraction.

use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;

use crate::errors::Error;

#[cfg(test)]
#[path = "response_tests.rs"]
mod tests;

/// The unvalidated result of an HTTP call.
///
/// Holds the status code, headers, and body bytes of a finished exchange,
/// together with the request path for error context. The status has not
/// been interpreted: a 404 arrives here the same way a 200 does, and the
/// caller decides what is acceptable through [`ApiResponse::expect_status`].
///
/// # Examples
///
/// ```rust,ignore
/// let comment: Comment = transport
///     .get("/comments/7", &[])
///     .await?
///     .expect_status(StatusCode::OK)?
///     .json()?;
/// ```
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
    path: String,
}

impl ApiResponse {
    /// Wraps a completed exchange. Called by transport implementations.
    pub fn new(
        status: StatusCode,
        headers: HeaderMap,
        body: Bytes,
        path: impl Into<String>,
    ) -> Self {
        Self {
            status,
            headers,
            body,
            path: path.into(),
        }
    }

    /// The response status code, uninterpreted.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The raw body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// The body rendered as text, with invalid UTF-8 replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// The path the originating request was sent to.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Asserts that the status code equals `expected`.
    ///
    /// Consumes and returns the response so assertion and extraction chain
    /// with `?`. A mismatch is a hard failure, not a recoverable condition.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StatusMismatch`] naming the expected status, the
    /// observed status, and the request path.
    pub fn expect_status(self, expected: StatusCode) -> Result<Self, Error> {
        if self.status == expected {
            Ok(self)
        } else {
            Err(Error::StatusMismatch {
                expected,
                actual: self.status,
                path: self.path,
            })
        }
    }

    /// Deserializes the body as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Deserialize`] if the body does not match the target
    /// shape. The failure propagates from the extraction step unchanged; it
    /// is never caught or converted by the calling operation.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_slice(&self.body).map_err(Error::Deserialize)
    }
}
