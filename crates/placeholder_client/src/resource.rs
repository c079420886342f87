//! Generic resource client.
//!
//! This module contains [`ResourceRoute`], the configuration value that
//! binds one resource family to its paths, and [`ResourceClient`], the
//! generic CRUD client built on the transport seam. One client type
//! covers every resource family: the paths become route configuration
//! and the payload and identifier become type parameters.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use http::StatusCode;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::Error;
use crate::observer::{Operation, RequestEvent, RequestObserver, TracingObserver};
use crate::response::ApiResponse;
use crate::transport::Transport;

#[cfg(test)]
#[path = "resource_tests.rs"]
mod tests;

const ID_PLACEHOLDER: &str = "{id}";

// Escaping set for rendered ids: the delimiters that would split or
// terminate a path segment, plus '%' so ids are raw text, not pre-encoded.
const ID_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// Route configuration for one resource family.
///
/// Carries the resource's display name (used for observability only), the
/// collection path, and the single-item path template. Validated eagerly:
/// a broken template fails the suite at construction, not mid-request.
///
/// # Examples
///
/// ```rust
/// use placeholder_client::ResourceRoute;
///
/// let route = ResourceRoute::new("Comment", "/comments", "/comments/{id}")?;
/// assert_eq!(route.item_path(&17), "/comments/17");
/// # Ok::<(), placeholder_client::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ResourceRoute {
    name: String,
    collection: String,
    item: String,
}

impl ResourceRoute {
    /// Creates a validated route.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRoute`] if either path does not start with
    /// `/` or if the item template does not contain exactly one `{id}`
    /// placeholder.
    pub fn new(
        name: impl Into<String>,
        collection: impl Into<String>,
        item: impl Into<String>,
    ) -> Result<Self, Error> {
        let name = name.into();
        let collection = collection.into();
        let item = item.into();

        if !collection.starts_with('/') {
            return Err(Error::InvalidRoute(format!(
                "collection path '{collection}' must start with '/'"
            )));
        }
        if !item.starts_with('/') {
            return Err(Error::InvalidRoute(format!(
                "item path template '{item}' must start with '/'"
            )));
        }
        if item.matches(ID_PLACEHOLDER).count() != 1 {
            return Err(Error::InvalidRoute(format!(
                "item path template '{item}' must contain exactly one '{ID_PLACEHOLDER}' placeholder"
            )));
        }

        Ok(Self {
            name,
            collection,
            item,
        })
    }

    /// Display name of the resource family.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The collection path, e.g. `/comments`.
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// The item path with `id` interpolated, e.g. `/comments/17`.
    ///
    /// The rendered id is percent-encoded, so a string identifier carrying
    /// reserved characters (`/`, `?`, `#`, spaces) stays a single path
    /// segment instead of rewriting the request path.
    pub fn item_path(&self, id: &dyn fmt::Display) -> String {
        let rendered = id.to_string();
        let encoded = utf8_percent_encode(&rendered, ID_ENCODE_SET).to_string();
        self.item.replace(ID_PLACEHOLDER, &encoded)
    }
}

/// Generic CRUD client for one resource family of the placeholder API.
///
/// `T` is the resource's data object (request payload and response body
/// alike); `I` is the identifier type used in item paths, one per resource,
/// defaulting to `u64`. The client holds only immutable configuration
/// (the route plus a shared transport and observer), so every call is
/// stateless and cloning is cheap.
///
/// The six `*_expecting` operations are the building blocks: each takes
/// an explicit expected status and returns the raw [`ApiResponse`]. The
/// typed conveniences (`create`, `update`, `get_by_id`, `get_all`,
/// `delete`, `get_matching`) are thin specializations that assert the
/// operation's default status and deserialize the body.
///
/// # Examples
///
/// ```rust,no_run
/// use placeholder_client::{ApiConfig, Comment, PlaceholderApi};
///
/// # async fn example() -> Result<(), placeholder_client::Error> {
/// let api = PlaceholderApi::new(ApiConfig::new("https://jsonplaceholder.typicode.com")?)?;
/// let comments = api.comments();
///
/// let payload = Comment {
///     post_id: 1,
///     name: "id labore ex et quam laborum".to_string(),
///     email: "Eliseo@gardner.biz".to_string(),
///     body: "laudantium enim quasi est".to_string(),
///     ..Default::default()
/// };
/// let created = comments.create(&payload).await?;
/// let fetched = comments.get_by_id(created.id.unwrap()).await?;
/// assert_eq!(created, fetched);
/// # Ok(())
/// # }
/// ```
pub struct ResourceClient<T, I = u64> {
    transport: Arc<dyn Transport>,
    route: ResourceRoute,
    observer: Arc<dyn RequestObserver>,
    _resource: PhantomData<fn() -> (T, I)>,
}

impl<T, I> Clone for ResourceClient<T, I> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            route: self.route.clone(),
            observer: Arc::clone(&self.observer),
            _resource: PhantomData,
        }
    }
}

impl<T, I> fmt::Debug for ResourceClient<T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceClient")
            .field("route", &self.route)
            .finish_non_exhaustive()
    }
}

impl<T, I> ResourceClient<T, I>
where
    T: Serialize + DeserializeOwned + Send + Sync,
    I: fmt::Display + Send + Sync,
{
    /// Creates a client for `route` on top of `transport`, instrumented
    /// with the default tracing observer.
    pub fn new(transport: Arc<dyn Transport>, route: ResourceRoute) -> Self {
        Self {
            transport,
            route,
            observer: Arc::new(TracingObserver),
            _resource: PhantomData,
        }
    }

    /// Replaces the instrumentation hook.
    pub fn with_observer(mut self, observer: Arc<dyn RequestObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// The route this client is bound to.
    pub fn route(&self) -> &ResourceRoute {
        &self.route
    }

    fn notify(&self, operation: Operation, path: &str) {
        self.observer.observe(RequestEvent {
            operation,
            resource: self.route.name(),
            path,
        });
    }

    fn to_body(payload: &T) -> Result<serde_json::Value, Error> {
        serde_json::to_value(payload).map_err(Error::Serialize)
    }

    /// POSTs `payload` to the collection path and asserts `expected`.
    ///
    /// Returns the raw response for manual inspection; this is the
    /// building block [`ResourceClient::create`] is layered on.
    ///
    /// # Errors
    ///
    /// Propagates transport failures unchanged and returns
    /// [`Error::StatusMismatch`] if the server answers anything but
    /// `expected`.
    pub async fn create_expecting(
        &self,
        payload: &T,
        expected: StatusCode,
    ) -> Result<ApiResponse, Error> {
        let body = Self::to_body(payload)?;
        self.notify(Operation::Create, self.route.collection());
        self.transport
            .post(self.route.collection(), &body)
            .await?
            .expect_status(expected)
    }

    /// PUTs `payload` to the item path for `id` and asserts `expected`.
    pub async fn update_expecting(
        &self,
        id: I,
        payload: &T,
        expected: StatusCode,
    ) -> Result<ApiResponse, Error> {
        let body = Self::to_body(payload)?;
        let path = self.route.item_path(&id);
        self.notify(Operation::Update, &path);
        self.transport.put(&path, &body).await?.expect_status(expected)
    }

    /// GETs the item path for `id` and asserts `expected`.
    ///
    /// No extraction is attempted, so asserting an error status (say 404
    /// for a missing id) succeeds and hands back the raw response.
    pub async fn get_by_id_expecting(
        &self,
        id: I,
        expected: StatusCode,
    ) -> Result<ApiResponse, Error> {
        let path = self.route.item_path(&id);
        self.notify(Operation::GetById, &path);
        self.transport.get(&path, &[]).await?.expect_status(expected)
    }

    /// GETs the collection path and asserts `expected`.
    pub async fn get_all_expecting(&self, expected: StatusCode) -> Result<ApiResponse, Error> {
        self.notify(Operation::GetAll, self.route.collection());
        self.transport
            .get(self.route.collection(), &[])
            .await?
            .expect_status(expected)
    }

    /// GETs the collection path with `query` pairs and asserts `expected`.
    pub async fn get_matching_expecting(
        &self,
        query: &[(&str, &str)],
        expected: StatusCode,
    ) -> Result<ApiResponse, Error> {
        self.notify(Operation::GetMatching, self.route.collection());
        self.transport
            .get(self.route.collection(), query)
            .await?
            .expect_status(expected)
    }

    /// DELETEs the item path for `id` and asserts `expected`.
    pub async fn delete_expecting(
        &self,
        id: I,
        expected: StatusCode,
    ) -> Result<ApiResponse, Error> {
        let path = self.route.item_path(&id);
        self.notify(Operation::Delete, &path);
        self.transport.delete(&path).await?.expect_status(expected)
    }

    /// Creates a new resource and validates the response has the
    /// 201 Created status code, returning the deserialized body.
    ///
    /// The returned value carries the server-assigned identifier alongside
    /// the accepted fields of `payload`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, on a status other than 201, or if the
    /// body does not deserialize as `T`.
    pub async fn create(&self, payload: &T) -> Result<T, Error> {
        self.create_expecting(payload, StatusCode::CREATED)
            .await?
            .json()
    }

    /// Updates the resource at `id` and validates the response has the
    /// 200 OK status code, returning the deserialized body.
    pub async fn update(&self, id: I, payload: &T) -> Result<T, Error> {
        self.update_expecting(id, payload, StatusCode::OK)
            .await?
            .json()
    }

    /// Fetches the resource at `id` and validates the response has the
    /// 200 OK status code, returning the deserialized body.
    pub async fn get_by_id(&self, id: I) -> Result<T, Error> {
        self.get_by_id_expecting(id, StatusCode::OK).await?.json()
    }

    /// Fetches the whole collection and validates the response has the
    /// 200 OK status code.
    ///
    /// The result preserves server order; two calls without interleaved
    /// mutation yield equal vectors.
    pub async fn get_all(&self) -> Result<Vec<T>, Error> {
        self.get_all_expecting(StatusCode::OK).await?.json()
    }

    /// Fetches the collection filtered by `query` pairs (server-side
    /// filtering, e.g. `postId=1`) and validates the response has the
    /// 200 OK status code.
    pub async fn get_matching(&self, query: &[(&str, &str)]) -> Result<Vec<T>, Error> {
        self.get_matching_expecting(query, StatusCode::OK)
            .await?
            .json()
    }

    /// Deletes the resource at `id` and validates the response has the
    /// 200 OK status code. The body is discarded; the placeholder API
    /// answers deletes with an empty object.
    pub async fn delete(&self, id: I) -> Result<(), Error> {
        self.delete_expecting(id, StatusCode::OK).await?;
        Ok(())
    }
}
