pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Match API
        .route("/api/v1/match/score", post(handlers::handle_score))
        .route("/api/v1/match/rank", post(handlers::handle_rank))
        .route("/api/v1/match/annotate", post(handlers::handle_annotate))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::config::Config;
    use crate::matching::scorer::MatchScorer;

    fn test_state(max_batch: usize) -> AppState {
        AppState {
            config: Config {
                port: 0,
                rust_log: "debug".to_string(),
                max_batch,
                default_min_score: 0,
            },
            scorer: MatchScorer::default(),
        }
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn job_json(required: &[&str], location: Option<&str>) -> Value {
        json!({
            "id": Uuid::new_v4(),
            "title": "Full-Stack Engineer",
            "requiredSkills": required,
            "location": location,
        })
    }

    #[tokio::test]
    async fn test_health_reports_location_backend() {
        let app = build_router(test_state(10));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["location_matcher"], "substring");
    }

    #[tokio::test]
    async fn test_score_endpoint_returns_breakdown() {
        let app = build_router(test_state(10));
        let request = post_json(
            "/api/v1/match/score",
            json!({
                "candidate": {
                    "id": Uuid::new_v4(),
                    "skills": ["React", "Node.js"],
                    "yearsOfExperience": 5,
                    "educationDetails": "BSc Computer Science",
                    "location": "Remote",
                },
                "job": job_json(&["React", "Node.js", "AWS"], Some("New York")),
            }),
        );

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["score"], 84);
        assert_eq!(body["breakdown"]["skills_match"], 67);
        assert_eq!(body["breakdown"]["location_match"], true);
        assert_eq!(body["matched_skills"][2]["skill"], "AWS");
        assert_eq!(body["matched_skills"][2]["matched"], false);
    }

    #[tokio::test]
    async fn test_score_endpoint_rejects_negative_experience() {
        let app = build_router(test_state(10));
        let request = post_json(
            "/api/v1/match/score",
            json!({
                "candidate": { "id": Uuid::new_v4(), "years_of_experience": -1 },
                "job": job_json(&["Rust"], None),
            }),
        );

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_rank_endpoint_orders_and_filters() {
        let app = build_router(test_state(10));
        let strong = Uuid::new_v4();
        let weak = Uuid::new_v4();
        let request = post_json(
            "/api/v1/match/rank",
            json!({
                "job": job_json(&["Rust"], None),
                "candidates": [
                    { "id": weak, "years_of_experience": 0 },
                    { "id": strong, "skills": ["rust"], "years_of_experience": 7 },
                ],
                "min_score": 50,
            }),
        );

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["total_candidates"], 2);
        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["candidate_id"], strong.to_string());
    }

    #[tokio::test]
    async fn test_rank_endpoint_enforces_batch_limit() {
        let app = build_router(test_state(1));
        let request = post_json(
            "/api/v1/match/rank",
            json!({
                "job": job_json(&["Rust"], None),
                "candidates": [{ "id": Uuid::new_v4() }, { "id": Uuid::new_v4() }],
            }),
        );

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_rank_endpoint_rejects_min_score_above_100() {
        let app = build_router(test_state(10));
        let request = post_json(
            "/api/v1/match/rank",
            json!({
                "job": job_json(&["Rust"], None),
                "candidates": [{ "id": Uuid::new_v4() }],
                "min_score": 101,
            }),
        );

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_annotate_endpoint_enforces_batch_limit() {
        let app = build_router(test_state(1));
        let request = post_json(
            "/api/v1/match/annotate",
            json!({
                "candidate": { "id": Uuid::new_v4() },
                "jobs": [job_json(&["Go"], None), job_json(&["Rust"], None)],
            }),
        );

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_malformed_body_rejected() {
        let app = build_router(test_state(10));
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/match/score")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"candidate\": "))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert!(
            response.status().is_client_error(),
            "status was {}",
            response.status()
        );
    }

    #[tokio::test]
    async fn test_annotate_endpoint_reports_bad_job_index() {
        let app = build_router(test_state(10));
        let request = post_json(
            "/api/v1/match/annotate",
            json!({
                "candidate": { "id": Uuid::new_v4(), "skills": ["Go"] },
                "jobs": [
                    job_json(&["Go"], None),
                    { "id": Uuid::new_v4(), "title": "" },
                ],
            }),
        );

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        let message = body["error"]["message"].as_str().unwrap();
        assert!(message.starts_with("jobs[1]"), "message was {message}");
    }

    #[tokio::test]
    async fn test_annotate_endpoint_preserves_order() {
        let app = build_router(test_state(10));
        let first = job_json(&["Python"], None);
        let second = job_json(&["Go"], None);
        let request = post_json(
            "/api/v1/match/annotate",
            json!({
                "candidate": { "id": Uuid::new_v4(), "skills": ["Go"] },
                "jobs": [first.clone(), second.clone()],
            }),
        );

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let results = body["results"].as_array().unwrap();
        assert_eq!(results[0]["job_id"], first["id"]);
        assert_eq!(results[1]["job_id"], second["id"]);
        assert_eq!(results[1]["result"]["breakdown"]["skills_match"], 100);
    }
}
