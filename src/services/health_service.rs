use tracing::warn;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Probe the store through a scoped connection and report the outcome.
///
/// The handle count is read after release, so a healthy probe reports the
/// baseline owed to other in-flight requests only.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    match state.provider().acquire().await {
        Ok(handle) => {
            handle.release().await;
            HealthResponse::ok(state.provider().live_handles())
        }
        Err(err) => {
            warn!(error = %err, "store unreachable during healthcheck");
            HealthResponse::degraded(state.provider().live_handles())
        }
    }
}
