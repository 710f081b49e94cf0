//! Service layer translating handler calls into store operations.

/// Sprite and audio asset operations.
pub mod asset_service;
/// OpenAPI document aggregation.
pub mod documentation;
/// Health check logic.
pub mod health_service;
/// Player score operations.
pub mod score_service;

use mongodb::bson::oid::ObjectId;

use crate::{dao::resource_store::parse_object_id, error::ServiceError};

/// Parse a path identifier, rejecting malformed input before the store is
/// ever reached.
fn parse_id(raw: &str) -> Result<ObjectId, ServiceError> {
    parse_object_id(raw)
        .map_err(|_| ServiceError::InvalidInput(format!("`{raw}` is not a valid identifier")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_path_id_is_invalid_input_not_not_found() {
        let err = parse_id("definitely-not-hex").unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }
}
