use serde::Serialize;
use utoipa::ToSchema;

use crate::dao::models::AssetDocument;

/// Projection of a stored asset returned on fetch.
///
/// Only the filename is echoed back; the binary content never leaves the
/// store through this surface.
#[derive(Debug, Serialize, ToSchema)]
pub struct AssetMetadata {
    /// Filename recorded at upload time.
    pub filename: String,
}

impl From<AssetDocument> for AssetMetadata {
    fn from(document: AssetDocument) -> Self {
        Self {
            filename: document.filename,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_projection_never_exposes_content() {
        let document = AssetDocument::new("theme.ogg".to_owned(), vec![0xde, 0xad, 0xbe, 0xef]);
        let metadata: AssetMetadata = document.into();

        let json = serde_json::to_value(&metadata).expect("serialize metadata");
        assert_eq!(json, serde_json::json!({ "filename": "theme.ogg" }));
    }
}
