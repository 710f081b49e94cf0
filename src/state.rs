//! Shared application state handed to every request handler.

use std::sync::Arc;

use crate::dao::connection::ConnectionProvider;

/// Cheaply clonable handle on the application state.
pub type SharedState = Arc<AppState>;

/// Central application state.
///
/// Holds only the connection provider; all resource state lives in the
/// external document store, so concurrent requests share nothing mutable
/// in-process.
pub struct AppState {
    provider: ConnectionProvider,
}

impl AppState {
    /// Wrap the provider into an [`Arc`] so it can be cloned into handlers.
    pub fn new(provider: ConnectionProvider) -> SharedState {
        Arc::new(Self { provider })
    }

    /// Connection provider used to acquire per-request handles.
    pub fn provider(&self) -> &ConnectionProvider {
        &self.provider
    }
}
