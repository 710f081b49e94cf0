use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use validator::Validate;

use crate::{
    dto::{
        common::{MessageResponse, UploadResponse},
        score::{ScorePayload, ScoreRecord},
    },
    error::AppError,
    services::score_service,
    state::SharedState,
};

/// Routes handling player score records.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/player_score", post(record_score))
        .route(
            "/player_score/{id}",
            get(fetch_score).put(replace_score).delete(delete_score),
        )
}

/// Record a player score and return its new identifier.
#[utoipa::path(
    post,
    path = "/player_score",
    tag = "scores",
    request_body = ScorePayload,
    responses(
        (status = 200, description = "Score recorded", body = UploadResponse),
        (status = 422, description = "Payload violates the score schema"),
        (status = 503, description = "Store unreachable")
    )
)]
pub async fn record_score(
    State(state): State<SharedState>,
    Json(payload): Json<ScorePayload>,
) -> Result<Json<UploadResponse>, AppError> {
    payload.validate()?;
    let id = score_service::record(&state, payload).await?;
    Ok(Json(UploadResponse::new("Score recorded", id.to_hex())))
}

/// Return a stored score.
#[utoipa::path(
    get,
    path = "/player_score/{id}",
    tag = "scores",
    params(("id" = String, Path, description = "Score identifier")),
    responses(
        (status = 200, description = "Stored score", body = ScoreRecord),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "No score with this identifier")
    )
)]
pub async fn fetch_score(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<ScoreRecord>, AppError> {
    let record = score_service::fetch(&state, &id).await?;
    Ok(Json(record))
}

/// Replace a stored score in full under the same identifier.
#[utoipa::path(
    put,
    path = "/player_score/{id}",
    tag = "scores",
    params(("id" = String, Path, description = "Score identifier")),
    request_body = ScorePayload,
    responses(
        (status = 200, description = "Score replaced", body = MessageResponse),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "No score with this identifier"),
        (status = 422, description = "Payload violates the score schema")
    )
)]
pub async fn replace_score(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(payload): Json<ScorePayload>,
) -> Result<Json<MessageResponse>, AppError> {
    payload.validate()?;
    score_service::replace(&state, &id, payload).await?;
    Ok(Json(MessageResponse::new("Score updated")))
}

/// Delete a stored score by identifier.
#[utoipa::path(
    delete,
    path = "/player_score/{id}",
    tag = "scores",
    params(("id" = String, Path, description = "Score identifier")),
    responses(
        (status = 200, description = "Score deleted", body = MessageResponse),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "No score with this identifier")
    )
)]
pub async fn delete_score(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    score_service::remove(&state, &id).await?;
    Ok(Json(MessageResponse::new("Score deleted")))
}
