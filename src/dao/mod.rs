//! Resource access layer: scoped connections, document models, generic CRUD.

/// Per-request connection acquisition and release.
pub mod connection;
/// Store error taxonomy.
pub mod error;
/// Persisted document definitions.
pub mod models;
/// Generic CRUD operations shared by every resource collection.
pub mod resource_store;
