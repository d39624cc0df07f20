pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers as matching;
use crate::providers::handlers as listings;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Listings
        .route("/api/v1/jobs", get(listings::handle_list_jobs))
        .route("/api/v1/jobs/:id", get(listings::handle_get_job))
        .route("/api/v1/candidates/:id", get(listings::handle_get_candidate))
        // Matching
        .route("/api/v1/matches/score", post(matching::handle_score))
        .route("/api/v1/matches/rank", post(matching::handle_rank))
        .route(
            "/api/v1/jobs/:id/applicants",
            get(matching::handle_applicants),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_state;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    const ALEX: &str = "5d1a0c6e-1f3b-4c2a-9b7e-000000000001";
    const FRONTEND_JOB: &str = "9b2e4f10-7c3d-4a8e-b1f2-000000000001";

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = build_router(test_state()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
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
    async fn test_health_ok() {
        let (status, body) = send(get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_list_jobs_returns_seed() {
        let (status, body) = send(get("/api/v1/jobs")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().map(Vec::len), Some(12));
    }

    #[tokio::test]
    async fn test_unknown_job_is_404() {
        let (status, body) = send(get(
            "/api/v1/jobs/00000000-0000-4000-8000-000000000000",
        ))
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_get_candidate() {
        let (status, body) = send(get(&format!("/api/v1/candidates/{ALEX}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Alex Morgan");
    }

    #[tokio::test]
    async fn test_score_frontend_job_for_alex() {
        let (status, body) = send(post_json(
            "/api/v1/matches/score",
            json!({ "candidate_id": ALEX, "job_id": FRONTEND_JOB }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        let result = &body["match_result"];
        // 2/4 skills → 20, 5 ≥ 5 years → 30, SF preference → 20, 130–160k inside 120–170k → 10
        assert_eq!(result["skills_score"], 50);
        assert_eq!(result["experience_score"], 100);
        assert_eq!(result["location_score"], 100);
        assert_eq!(result["overall_score"], 80);
        assert_eq!(body["tier"], "excellent");
        assert_eq!(body["scorer_backend"], "weighted");
        assert_eq!(
            result["reasons"],
            json!([
                "Good skills alignment (50%)",
                "Experience requirement met (5+years)",
                "Location preference match",
                "Salary range matches preferences"
            ])
        );
    }

    #[tokio::test]
    async fn test_rank_for_stored_candidate() {
        let (status, body) = send(post_json(
            "/api/v1/matches/rank",
            json!({ "candidate_id": ALEX }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["jobs_scored"], 12);
        let recs = body["recommendations"].as_array().unwrap();
        assert!(!recs.is_empty() && recs.len() <= 10);
        let scores: Vec<u64> = recs
            .iter()
            .map(|r| r["overall_score"].as_u64().unwrap())
            .collect();
        assert!(scores.iter().all(|s| *s > 30));
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    #[tokio::test]
    async fn test_rank_inline_candidate() {
        let (status, body) = send(post_json(
            "/api/v1/matches/rank",
            json!({
                "candidate": {
                    "id": "11111111-1111-4111-8111-111111111111",
                    "skills": ["Go", "Kubernetes", "Prometheus", "Linux"],
                    "experience": "8 years"
                }
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["recommendations"][0]["job_id"],
            "9b2e4f10-7c3d-4a8e-b1f2-000000000012"
        );
    }

    #[tokio::test]
    async fn test_rank_requires_exactly_one_candidate_source() {
        let (status, _) = send(post_json("/api/v1/matches/rank", json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = send(post_json(
            "/api/v1/matches/rank",
            json!({
                "candidate_id": ALEX,
                "candidate": { "id": ALEX }
            }),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_applicants_for_frontend_job() {
        let (status, body) = send(get(&format!(
            "/api/v1/jobs/{FRONTEND_JOB}/applicants"
        )))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["applicants"][0]["candidate_id"], ALEX);
    }
}
