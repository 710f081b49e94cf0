use mongodb::bson::oid::ObjectId;

use super::parse_id;
use crate::{
    dao::{
        models::{SCORE_COLLECTION, ScoreDocument},
        resource_store::ResourceStore,
    },
    dto::score::{ScorePayload, ScoreRecord},
    error::ServiceError,
    state::SharedState,
};

/// Record a validated player score and return the store-assigned identifier.
pub async fn record(state: &SharedState, payload: ScorePayload) -> Result<ObjectId, ServiceError> {
    let document: ScoreDocument = payload.into();
    let id = state
        .provider()
        .with_database(|db| async move {
            ResourceStore::<ScoreDocument>::new(&db, SCORE_COLLECTION)
                .create(document)
                .await
        })
        .await?;

    Ok(id)
}

/// Fetch a stored score by identifier.
pub async fn fetch(state: &SharedState, raw_id: &str) -> Result<ScoreRecord, ServiceError> {
    let id = parse_id(raw_id)?;
    let found = state
        .provider()
        .with_database(|db| async move {
            ResourceStore::<ScoreDocument>::new(&db, SCORE_COLLECTION)
                .fetch(id)
                .await
        })
        .await?;

    let Some(document) = found else {
        return Err(ServiceError::NotFound(format!("no score `{id}`")));
    };

    Ok(document.into())
}

/// Replace a stored score in full, preserving its identifier.
pub async fn replace(
    state: &SharedState,
    raw_id: &str,
    payload: ScorePayload,
) -> Result<(), ServiceError> {
    let id = parse_id(raw_id)?;
    let document: ScoreDocument = payload.into();
    let matched = state
        .provider()
        .with_database(|db| async move {
            ResourceStore::<ScoreDocument>::new(&db, SCORE_COLLECTION)
                .replace(id, document)
                .await
        })
        .await?;

    if matched {
        Ok(())
    } else {
        Err(ServiceError::NotFound(format!("no score `{id}`")))
    }
}

/// Delete a stored score by identifier.
pub async fn remove(state: &SharedState, raw_id: &str) -> Result<(), ServiceError> {
    let id = parse_id(raw_id)?;
    let deleted = state
        .provider()
        .with_database(|db| async move {
            ResourceStore::<ScoreDocument>::new(&db, SCORE_COLLECTION)
                .delete(id)
                .await
        })
        .await?;

    if deleted {
        Ok(())
    } else {
        Err(ServiceError::NotFound(format!("no score `{id}`")))
    }
}
