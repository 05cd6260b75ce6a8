//! Health check handler.

use axum::{extract::State, Json};

use crate::state::AppState;
use crate::types::HealthResponse;

/// GET /api/health - Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.config.uptime_seconds(),
        companies: state.store.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;

    #[tokio::test]
    async fn test_health_handler() {
        let state = AppState::new(ApiConfig::default());
        state.store.create("Acme").unwrap();

        let response = health(State(state)).await;

        assert_eq!(response.status, "ok");
        assert!(!response.version.is_empty());
        assert_eq!(response.companies, 1);
    }
}
