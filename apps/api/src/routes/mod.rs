pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::matching::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Matching API
        .route("/api/v1/matches", post(handlers::handle_find_matches))
        .route(
            "/api/v1/matches/score",
            post(handlers::handle_score_provider),
        )
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_state;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_is_ok() {
        let app = build_router(test_state());
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "biped-matching");
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let app = build_router(test_state());
        let response = app
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_matches_round_trip_over_http() {
        let app = build_router(test_state());
        let request = post_json(
            "/api/v1/matches",
            json!({
                "job": {
                    "id": "job-7",
                    "category": "electrical",
                    "required_skills": ["electrical"],
                    "location": { "latitude": 34.05, "longitude": -118.24 },
                    "budget_min": 0.0,
                    "budget_max": 500.0,
                    "urgency": "week",
                    "estimated_hours": 5.0
                },
                "providers": [{
                    "id": "volt",
                    "category": "electrical",
                    "skills": ["electrical", "wiring"],
                    "location": { "latitude": 34.05, "longitude": -118.24 },
                    "rating": 4.0,
                    "completed_jobs": 10,
                    "hourly_rate": 80.0,
                    "availability": { "Mon": true, "Tue": true, "Wed": true, "Thu": true, "Fri": true },
                    "response_time_hours": 4.0
                }]
            }),
        );

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["job_id"], "job-7");
        let matches = body["matches"].as_array().unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0]["provider_id"], "volt");
        assert!(matches[0]["explanation"]
            .as_str()
            .unwrap()
            .starts_with("Good skill compatibility"));
    }

    #[tokio::test]
    async fn test_invalid_budget_returns_400() {
        let app = build_router(test_state());
        let request = post_json(
            "/api/v1/matches",
            json!({
                "job": {
                    "id": "job-8",
                    "category": "cleaning",
                    "location": { "latitude": 0.0, "longitude": 0.0 },
                    "budget_min": 300.0,
                    "budget_max": 100.0,
                    "urgency": "flexible",
                    "estimated_hours": 2.0
                },
                "providers": []
            }),
        );

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
