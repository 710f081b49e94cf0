use serde::Serialize;
use utoipa::ToSchema;

/// Acknowledgement returned by create operations, echoing the new id.
#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    /// Human-readable confirmation.
    pub message: String,
    /// Hex representation of the store-assigned identifier.
    pub id: String,
}

impl UploadResponse {
    /// Build an acknowledgement for a freshly created resource.
    pub fn new(message: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            id: id.into(),
        }
    }
}

/// Acknowledgement returned by replace and delete operations.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable confirmation.
    pub message: String,
}

impl MessageResponse {
    /// Build a plain acknowledgement.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
