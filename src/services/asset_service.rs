use mongodb::bson::oid::ObjectId;

use super::parse_id;
use crate::{
    dao::{models::AssetDocument, resource_store::ResourceStore},
    dto::asset::AssetMetadata,
    error::ServiceError,
    state::SharedState,
};

/// Persist an uploaded asset and return the store-assigned identifier.
///
/// The same implementation backs sprites and audio; only the target
/// collection differs.
pub async fn upload(
    state: &SharedState,
    collection: &'static str,
    filename: String,
    content: Vec<u8>,
) -> Result<ObjectId, ServiceError> {
    let document = AssetDocument::new(filename, content);
    let id = state
        .provider()
        .with_database(|db| async move {
            ResourceStore::<AssetDocument>::new(&db, collection)
                .create(document)
                .await
        })
        .await?;

    Ok(id)
}

/// Fetch an asset by identifier, projecting out only its metadata.
pub async fn fetch(
    state: &SharedState,
    collection: &'static str,
    raw_id: &str,
) -> Result<AssetMetadata, ServiceError> {
    let id = parse_id(raw_id)?;
    let found = state
        .provider()
        .with_database(|db| async move {
            ResourceStore::<AssetDocument>::new(&db, collection)
                .fetch(id)
                .await
        })
        .await?;

    let Some(document) = found else {
        return Err(ServiceError::NotFound(format!(
            "no document `{id}` in `{collection}`"
        )));
    };

    Ok(document.into())
}

/// Replace an asset's filename and content under its existing identifier.
pub async fn replace(
    state: &SharedState,
    collection: &'static str,
    raw_id: &str,
    filename: String,
    content: Vec<u8>,
) -> Result<(), ServiceError> {
    let id = parse_id(raw_id)?;
    let document = AssetDocument::new(filename, content);
    let matched = state
        .provider()
        .with_database(|db| async move {
            ResourceStore::<AssetDocument>::new(&db, collection)
                .replace(id, document)
                .await
        })
        .await?;

    if matched {
        Ok(())
    } else {
        Err(ServiceError::NotFound(format!(
            "no document `{id}` in `{collection}`"
        )))
    }
}

/// Delete an asset by identifier.
pub async fn remove(
    state: &SharedState,
    collection: &'static str,
    raw_id: &str,
) -> Result<(), ServiceError> {
    let id = parse_id(raw_id)?;
    let deleted = state
        .provider()
        .with_database(|db| async move {
            ResourceStore::<AssetDocument>::new(&db, collection)
                .delete(id)
                .await
        })
        .await?;

    if deleted {
        Ok(())
    } else {
        Err(ServiceError::NotFound(format!(
            "no document `{id}` in `{collection}`"
        )))
    }
}
