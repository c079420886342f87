//! Crate for interacting with a JSONPlaceholder-style REST API.
//!
//! This crate provides the request layer for test suites that exercise the
//! placeholder service: typed CRUD operations per resource family, explicit
//! status-code assertions, and serde-backed extraction of response bodies.
//!
//! [`PlaceholderApi`] is the entry point. It owns the HTTP transport and
//! hands out a [`ResourceClient`] per resource family; all clients built
//! from one facade share that transport and its connection pool.
//!
//! ```rust,no_run
//! use placeholder_client::{ApiConfig, Comment, PlaceholderApi};
//!
//! # async fn example() -> Result<(), placeholder_client::Error> {
//! let api = PlaceholderApi::new(ApiConfig::from_env()?)?;
//!
//! let payload = Comment {
//!     post_id: 1,
//!     name: "a".to_string(),
//!     email: "a@example.com".to_string(),
//!     body: "hi".to_string(),
//!     ..Default::default()
//! };
//! let created = api.comments().create(&payload).await?;
//! assert!(created.id.is_some());
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod config;
pub use config::ApiConfig;

pub mod errors;
pub use errors::Error;

pub mod models;
pub use models::{Address, Comment, Company, Geo, User};

pub mod observer;
pub use observer::{NoopObserver, Operation, RequestEvent, RequestObserver, TracingObserver};

pub mod resource;
pub use resource::{ResourceClient, ResourceRoute};

pub mod response;
pub use response::ApiResponse;

pub mod transport;
pub use transport::{HttpTransport, Transport};

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Entry point for talking to the placeholder API.
///
/// The facade owns the shared transport and observer and hands out
/// [`ResourceClient`] values bound to the built-in resource routes.
/// Construction is the only fallible step; the per-resource accessors are
/// infallible and cheap, so call them per operation or hold on to the
/// returned clients, whichever reads better in the suite.
pub struct PlaceholderApi {
    transport: Arc<dyn Transport>,
    observer: Arc<dyn RequestObserver>,
}

impl fmt::Debug for PlaceholderApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaceholderApi").finish_non_exhaustive()
    }
}

impl Clone for PlaceholderApi {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            observer: Arc::clone(&self.observer),
        }
    }
}

impl PlaceholderApi {
    /// Creates a facade backed by an [`HttpTransport`] built from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the underlying HTTP client cannot
    /// be constructed from the configuration.
    pub fn new(config: ApiConfig) -> Result<Self, Error> {
        let transport = HttpTransport::new(config)?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Creates a facade on top of an existing transport.
    ///
    /// This is the seam test doubles plug into.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            observer: Arc::new(TracingObserver),
        }
    }

    /// Replaces the observer handed to every client this facade builds.
    pub fn with_observer(mut self, observer: Arc<dyn RequestObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Client for the `/comments` resource family.
    pub fn comments(&self) -> ResourceClient<Comment> {
        self.resource(Self::comment_route())
    }

    /// Client for the `/users` resource family.
    pub fn users(&self) -> ResourceClient<User> {
        self.resource(Self::user_route())
    }

    /// Client for an arbitrary resource family.
    ///
    /// Escape hatch for resources without a built-in accessor; the client
    /// shares this facade's transport and observer.
    ///
    /// ```rust,no_run
    /// use placeholder_client::{ApiConfig, PlaceholderApi, ResourceRoute};
    /// use serde::{Deserialize, Serialize};
    ///
    /// #[derive(Debug, Serialize, Deserialize)]
    /// struct Album {
    ///     #[serde(skip_serializing_if = "Option::is_none")]
    ///     id: Option<u64>,
    ///     title: String,
    /// }
    ///
    /// # fn example() -> Result<(), placeholder_client::Error> {
    /// let api = PlaceholderApi::new(ApiConfig::from_env()?)?;
    /// let route = ResourceRoute::new("Album", "/albums", "/albums/{id}")?;
    /// let albums = api.resource::<Album, u64>(route);
    /// # Ok(())
    /// # }
    /// ```
    pub fn resource<T, I>(&self, route: ResourceRoute) -> ResourceClient<T, I>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
        I: fmt::Display + Send + Sync,
    {
        ResourceClient::new(Arc::clone(&self.transport), route)
            .with_observer(Arc::clone(&self.observer))
    }

    fn comment_route() -> ResourceRoute {
        ResourceRoute::new("Comment", "/comments", "/comments/{id}")
            .expect("the built-in comment route is valid")
    }

    fn user_route() -> ResourceRoute {
        ResourceRoute::new("User", "/users", "/users/{id}")
            .expect("the built-in user route is valid")
    }
}
