use axum::{
    Json, Router,
    extract::{Multipart, Path, State},
    routing::{get, post},
};

use crate::{
    dao::models::SPRITE_COLLECTION,
    dto::{
        asset::AssetMetadata,
        common::{MessageResponse, UploadResponse},
    },
    error::AppError,
    services::asset_service,
    state::SharedState,
};

/// Routes handling sprite uploads and per-id operations.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/upload_sprite", post(upload_sprite))
        .route(
            "/sprites/{id}",
            get(fetch_sprite).put(replace_sprite).delete(delete_sprite),
        )
}

/// Store an uploaded sprite and return its new identifier.
#[utoipa::path(
    post,
    path = "/upload_sprite",
    tag = "sprites",
    responses(
        (status = 200, description = "Sprite uploaded", body = UploadResponse),
        (status = 422, description = "Upload is missing a named file part"),
        (status = 503, description = "Store unreachable")
    )
)]
pub async fn upload_sprite(
    State(state): State<SharedState>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let (filename, content) = super::read_upload(multipart).await?;
    let id = asset_service::upload(&state, SPRITE_COLLECTION, filename, content).await?;
    Ok(Json(UploadResponse::new("Sprite uploaded", id.to_hex())))
}

/// Return the stored sprite's metadata (never its content).
#[utoipa::path(
    get,
    path = "/sprites/{id}",
    tag = "sprites",
    params(("id" = String, Path, description = "Sprite identifier")),
    responses(
        (status = 200, description = "Sprite metadata", body = AssetMetadata),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "No sprite with this identifier")
    )
)]
pub async fn fetch_sprite(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<AssetMetadata>, AppError> {
    let metadata = asset_service::fetch(&state, SPRITE_COLLECTION, &id).await?;
    Ok(Json(metadata))
}

/// Replace a sprite's filename and content under the same identifier.
#[utoipa::path(
    put,
    path = "/sprites/{id}",
    tag = "sprites",
    params(("id" = String, Path, description = "Sprite identifier")),
    responses(
        (status = 200, description = "Sprite replaced", body = MessageResponse),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "No sprite with this identifier"),
        (status = 422, description = "Upload is missing a named file part")
    )
)]
pub async fn replace_sprite(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<Json<MessageResponse>, AppError> {
    let (filename, content) = super::read_upload(multipart).await?;
    asset_service::replace(&state, SPRITE_COLLECTION, &id, filename, content).await?;
    Ok(Json(MessageResponse::new("Sprite updated")))
}

/// Delete a sprite by identifier.
#[utoipa::path(
    delete,
    path = "/sprites/{id}",
    tag = "sprites",
    params(("id" = String, Path, description = "Sprite identifier")),
    responses(
        (status = 200, description = "Sprite deleted", body = MessageResponse),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "No sprite with this identifier")
    )
)]
pub async fn delete_sprite(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    asset_service::remove(&state, SPRITE_COLLECTION, &id).await?;
    Ok(Json(MessageResponse::new("Sprite deleted")))
}
