use serde::Serialize;
use utoipa::ToSchema;

/// Health report returned by the `/healthcheck` route.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status ("ok" or "degraded").
    pub status: String,
    /// Connections currently checked out of the provider.
    pub live_handles: usize,
}

impl HealthResponse {
    /// Report that the store answered the probe.
    pub fn ok(live_handles: usize) -> Self {
        Self {
            status: "ok".to_string(),
            live_handles,
        }
    }

    /// Report that the store is unreachable.
    pub fn degraded(live_handles: usize) -> Self {
        Self {
            status: "degraded".to_string(),
            live_handles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_report_shape() {
        let ok = serde_json::to_value(HealthResponse::ok(0)).expect("serialize ok");
        assert_eq!(
            ok,
            serde_json::json!({ "status": "ok", "live_handles": 0 })
        );

        let degraded = serde_json::to_value(HealthResponse::degraded(2)).expect("serialize degraded");
        assert_eq!(degraded["status"], "degraded");
        assert_eq!(degraded["live_handles"], 2);
    }
}
