//! Operation instrumentation seam.
//!
//! Instrumentation is an injectable collaborator rather than a hardwired
//! logger: resource clients notify a [`RequestObserver`] once per
//! operation, and the default observer routes the event through `tracing`.
//! Swapping the observer never changes operation behavior, since events
//! are informational only.

use std::fmt;

use tracing::info;

#[cfg(test)]
#[path = "observer_tests.rs"]
mod tests;

/// The CRUD intent behind one transport call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// POST to the collection path.
    Create,
    /// PUT to an item path.
    Update,
    /// GET on an item path.
    GetById,
    /// GET on the collection path.
    GetAll,
    /// GET on the collection path with query filters.
    GetMatching,
    /// DELETE on an item path.
    Delete,
}

impl Operation {
    /// Stable lowercase name, suitable for log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::GetById => "get_by_id",
            Operation::GetAll => "get_all",
            Operation::GetMatching => "get_matching",
            Operation::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of an operation about to go over the wire.
#[derive(Debug, Clone, Copy)]
pub struct RequestEvent<'a> {
    /// Which CRUD operation is running.
    pub operation: Operation,
    /// Display name of the resource family, e.g. `Comment`.
    pub resource: &'a str,
    /// The interpolated request path.
    pub path: &'a str,
}

/// Per-operation instrumentation hook.
///
/// Notified exactly once per resource-client operation, before the
/// transport call. Implementations must be cheap and must not fail; they
/// exist for observability, not control flow.
pub trait RequestObserver: Send + Sync {
    /// Records one operation event.
    fn observe(&self, event: RequestEvent<'_>);
}

/// Default observer: one structured `tracing` info event per operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl RequestObserver for TracingObserver {
    fn observe(&self, event: RequestEvent<'_>) {
        info!(
            resource = event.resource,
            operation = %event.operation,
            path = event.path,
            "placeholder API request"
        );
    }
}

/// Observer that discards every event, for fully silent runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl RequestObserver for NoopObserver {
    fn observe(&self, _event: RequestEvent<'_>) {}
}
