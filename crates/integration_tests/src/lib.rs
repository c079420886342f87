//! Integration testing library for the placeholder API client.
//!
//! This library provides the pieces the scenario tests share: a local
//! stand-in for the placeholder service, payload fixtures with unique
//! names, and one-time logging setup.

use std::sync::Once;

pub mod fake_api;
pub mod fixtures;

// Re-export commonly used types for convenience
pub use fake_api::FakePlaceholderServer;

static INIT_LOGGING: Once = Once::new();

/// Initialize logging for integration tests.
///
/// Safe to call from every test; only the first call installs the
/// subscriber.
pub fn init_logging() {
    INIT_LOGGING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .with_test_writer()
            .init();
    });
}
