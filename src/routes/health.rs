//! Health check endpoints

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub service: &'static str,
}

/// GET / - plain-text liveness probe
pub async fn liveness() -> &'static str {
    "LexView server is running"
}

/// GET /health - structured health response
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        service: "lexview-server",
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(liveness))
        .route("/health", get(health_check))
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;

    use crate::test_support::test_app;

    #[tokio::test]
    async fn liveness_is_plain_text() {
        let (app, _guard) = test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/").await;
        response.assert_status_ok();
        assert_eq!(response.text(), "LexView server is running");
    }

    #[tokio::test]
    async fn health_reports_service_identity() {
        let (app, _guard) = test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health").await;
        response.assert_status_ok();
        let json: serde_json::Value = response.json();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["service"], "lexview-server");
    }
}
