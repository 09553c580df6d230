use axum::{routing::get, Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

/// Health check response body.
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub message: &'static str,
}

/// Health check endpoint handler.
///
/// Always returns `200 {"message": "OK"}` while the service is running;
/// liveness only, no dependency checks.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { message: "OK" })
}

/// Creates a router with the `/health` endpoint.
pub fn health_router() -> Router {
    Router::new().route("/health", get(health_handler))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_returns_ok_message() {
        let app = health_router();
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["message"], "OK");
    }
}
