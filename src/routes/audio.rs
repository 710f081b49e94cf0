use axum::{
    Json, Router,
    extract::{Multipart, Path, State},
    routing::{get, post},
};

use crate::{
    dao::models::AUDIO_COLLECTION,
    dto::{
        asset::AssetMetadata,
        common::{MessageResponse, UploadResponse},
    },
    error::AppError,
    services::asset_service,
    state::SharedState,
};

/// Routes handling audio uploads and per-id operations.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/upload_audio", post(upload_audio))
        .route(
            "/audio/{id}",
            get(fetch_audio).put(replace_audio).delete(delete_audio),
        )
}

/// Store an uploaded audio file and return its new identifier.
#[utoipa::path(
    post,
    path = "/upload_audio",
    tag = "audio",
    responses(
        (status = 200, description = "Audio file uploaded", body = UploadResponse),
        (status = 422, description = "Upload is missing a named file part"),
        (status = 503, description = "Store unreachable")
    )
)]
pub async fn upload_audio(
    State(state): State<SharedState>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let (filename, content) = super::read_upload(multipart).await?;
    let id = asset_service::upload(&state, AUDIO_COLLECTION, filename, content).await?;
    Ok(Json(UploadResponse::new("Audio file uploaded", id.to_hex())))
}

/// Return the stored audio file's metadata (never its content).
#[utoipa::path(
    get,
    path = "/audio/{id}",
    tag = "audio",
    params(("id" = String, Path, description = "Audio identifier")),
    responses(
        (status = 200, description = "Audio metadata", body = AssetMetadata),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "No audio file with this identifier")
    )
)]
pub async fn fetch_audio(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<AssetMetadata>, AppError> {
    let metadata = asset_service::fetch(&state, AUDIO_COLLECTION, &id).await?;
    Ok(Json(metadata))
}

/// Replace an audio file's filename and content under the same identifier.
#[utoipa::path(
    put,
    path = "/audio/{id}",
    tag = "audio",
    params(("id" = String, Path, description = "Audio identifier")),
    responses(
        (status = 200, description = "Audio file replaced", body = MessageResponse),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "No audio file with this identifier"),
        (status = 422, description = "Upload is missing a named file part")
    )
)]
pub async fn replace_audio(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<Json<MessageResponse>, AppError> {
    let (filename, content) = super::read_upload(multipart).await?;
    asset_service::replace(&state, AUDIO_COLLECTION, &id, filename, content).await?;
    Ok(Json(MessageResponse::new("Audio file updated")))
}

/// Delete an audio file by identifier.
#[utoipa::path(
    delete,
    path = "/audio/{id}",
    tag = "audio",
    params(("id" = String, Path, description = "Audio identifier")),
    responses(
        (status = 200, description = "Audio file deleted", body = MessageResponse),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "No audio file with this identifier")
    )
)]
pub async fn delete_audio(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    asset_service::remove(&state, AUDIO_COLLECTION, &id).await?;
    Ok(Json(MessageResponse::new("Audio file deleted")))
}
