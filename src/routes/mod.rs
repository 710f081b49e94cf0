//! HTTP route composition and shared extraction helpers.

use axum::{Router, extract::Multipart};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{error::AppError, services::documentation::ApiDoc, state::SharedState};

/// Audio endpoints.
pub mod audio;
/// Health check endpoint.
pub mod health;
/// Player score endpoints.
pub mod score;
/// Sprite endpoints.
pub mod sprite;

/// Compose the resource route trees and mount the Swagger UI next to them.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = health::router()
        .merge(sprite::router())
        .merge(audio::router())
        .merge(score::router());

    let swagger: Router<SharedState> = SwaggerUi::new("/docs")
        .url("/api-doc/openapi.json", ApiDoc::openapi())
        .into();

    api_router.merge(swagger).with_state(state)
}

/// Read a file upload fully into memory.
///
/// The first multipart part carrying a filename becomes the asset; the body
/// must be read to completion before the document is constructed. A body
/// without a named file part violates the upload schema.
async fn read_upload(mut multipart: Multipart) -> Result<(String, Vec<u8>), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::BadRequest(format!("malformed multipart body: {err}")))?
    {
        let Some(filename) = field.file_name().map(ToOwned::to_owned) else {
            continue;
        };
        if filename.is_empty() {
            return Err(AppError::UnprocessableEntity(
                "uploaded file must carry a non-empty filename".into(),
            ));
        }

        let content = field
            .bytes()
            .await
            .map_err(|err| AppError::BadRequest(format!("failed to read upload body: {err}")))?;
        return Ok((filename, content.to_vec()));
    }

    Err(AppError::UnprocessableEntity(
        "multipart body must include a file field".into(),
    ))
}
