use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::dao::models::ScoreDocument;

/// Inbound score payload, used for both create and replace.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct ScorePayload {
    /// Player display name.
    #[validate(length(min = 1, max = 50))]
    pub player_name: String,
    /// Score value.
    #[validate(range(min = 0, max = 999_999))]
    pub score: i64,
}

impl From<ScorePayload> for ScoreDocument {
    fn from(payload: ScorePayload) -> Self {
        ScoreDocument::new(payload.player_name, payload.score)
    }
}

/// Stored score echoed back on fetch.
#[derive(Debug, Serialize, ToSchema)]
pub struct ScoreRecord {
    /// Player display name.
    pub player_name: String,
    /// Score value.
    pub score: i64,
}

impl From<ScoreDocument> for ScoreRecord {
    fn from(document: ScoreDocument) -> Self {
        Self {
            player_name: document.player_name,
            score: document.score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(player_name: &str, score: i64) -> ScorePayload {
        ScorePayload {
            player_name: player_name.to_owned(),
            score,
        }
    }

    #[test]
    fn score_range_boundaries() {
        assert!(payload("Ada", 0).validate().is_ok());
        assert!(payload("Ada", 999_999).validate().is_ok());
        assert!(payload("Ada", -1).validate().is_err());
        assert!(payload("Ada", 1_000_000).validate().is_err());
    }

    #[test]
    fn player_name_length_boundaries() {
        assert!(payload("", 10).validate().is_err());
        assert!(payload("A", 10).validate().is_ok());
        assert!(payload(&"x".repeat(50), 10).validate().is_ok());
        assert!(payload(&"x".repeat(51), 10).validate().is_err());
    }

    #[test]
    fn record_round_trips_through_document() {
        let document: ScoreDocument = payload("Ada", 42).into();
        let record: ScoreRecord = document.into();
        assert_eq!(record.player_name, "Ada");
        assert_eq!(record.score, 42);
    }
}
