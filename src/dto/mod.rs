//! Request and response payloads exchanged over the HTTP surface.

/// Asset (sprite/audio) payloads.
pub mod asset;
/// Payloads shared across resource kinds.
pub mod common;
/// Health check payload.
pub mod health;
/// Player score payloads.
pub mod score;
