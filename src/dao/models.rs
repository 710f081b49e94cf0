use mongodb::bson::{Binary, oid::ObjectId, spec::BinarySubtype};
use serde::{Deserialize, Serialize};

/// Collection holding sprite documents.
pub const SPRITE_COLLECTION: &str = "sprites";
/// Collection holding audio documents.
pub const AUDIO_COLLECTION: &str = "audio";
/// Collection holding player score documents.
pub const SCORE_COLLECTION: &str = "scores";

/// Persisted shape shared by the sprite and audio collections.
///
/// `_id` stays `None` until the store assigns it at insert time; replace
/// payloads also leave it `None` so the stored identifier is never
/// rewritten. Content is kept verbatim as a generic BSON binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetDocument {
    /// Store-assigned identifier, absent on outbound writes.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Original upload filename.
    pub filename: String,
    /// Raw upload bytes.
    pub content: Binary,
}

impl AssetDocument {
    /// Wrap an upload into a document ready for insertion.
    pub fn new(filename: String, content: Vec<u8>) -> Self {
        Self {
            id: None,
            filename,
            content: Binary {
                subtype: BinarySubtype::Generic,
                bytes: content,
            },
        }
    }
}

/// Persisted shape of a player score record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreDocument {
    /// Store-assigned identifier, absent on outbound writes.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Player display name, validated upstream.
    pub player_name: String,
    /// Score value, validated upstream.
    pub score: i64,
}

impl ScoreDocument {
    /// Build a document from an already-validated payload.
    pub fn new(player_name: String, score: i64) -> Self {
        Self {
            id: None,
            player_name,
            score,
        }
    }
}

#[cfg(test)]
mod tests {
    use mongodb::bson::{deserialize_from_document, serialize_to_document};

    use super::*;

    #[test]
    fn asset_content_round_trips_byte_identical() {
        let bytes: Vec<u8> = (0u8..=255).cycle().take(1024).collect();
        let document = AssetDocument::new("boss_idle.png".to_owned(), bytes.clone());

        let raw = serialize_to_document(&document).expect("serialize asset");
        // `_id` must be absent so the store assigns it exactly once.
        assert!(!raw.contains_key("_id"));

        let back: AssetDocument = deserialize_from_document(raw).expect("deserialize asset");
        assert_eq!(back.filename, "boss_idle.png");
        assert_eq!(back.content.subtype, BinarySubtype::Generic);
        assert_eq!(back.content.bytes, bytes);
    }

    #[test]
    fn score_document_omits_unassigned_id() {
        let document = ScoreDocument::new("Ada".to_owned(), 42);
        let raw = serialize_to_document(&document).expect("serialize score");

        assert!(!raw.contains_key("_id"));
        assert_eq!(raw.get_str("player_name").unwrap(), "Ada");
        assert_eq!(raw.get_i64("score").unwrap(), 42);
    }
}
