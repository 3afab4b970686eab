pub mod health;

use axum::{
    http::Uri,
    routing::{get, patch},
    Router,
};

use crate::analytics::handlers as analytics;
use crate::applications::handlers as applications;
use crate::auth::handlers as auth;
use crate::candidates::handlers as candidates;
use crate::errors::AppError;
use crate::jobs::handlers as jobs;
use crate::reviews::handlers as reviews;
use crate::state::AppState;

async fn route_not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Auth
        .route("/api/auth/providers", get(auth::handle_providers))
        .route(
            "/api/auth/session",
            get(auth::handle_get_session).post(auth::handle_sign_in),
        )
        // Public job board and applications
        .route("/api/jobs", get(jobs::handle_job_board))
        .route(
            "/api/applications",
            get(applications::handle_my_applications).post(applications::handle_apply),
        )
        // HR
        .route(
            "/api/hr/jobs",
            get(jobs::handle_list_jobs).post(jobs::handle_create_job),
        )
        .route(
            "/api/hr/jobs/:id",
            get(jobs::handle_get_job)
                .put(jobs::handle_update_job)
                .delete(jobs::handle_delete_job),
        )
        .route(
            "/api/hr/candidates",
            get(candidates::handle_list_candidates).post(candidates::handle_create_candidate),
        )
        .route(
            "/api/hr/candidates/:id",
            patch(candidates::handle_update_candidate_status),
        )
        .route(
            "/api/hr/reviews",
            get(reviews::handle_list_reviews).post(reviews::handle_create_review),
        )
        .route(
            "/api/hr/reviews/:id",
            patch(reviews::handle_moderate_review),
        )
        .route("/api/hr/analytics", get(analytics::handle_analytics))
        .route(
            "/api/hr/applications/:id",
            patch(applications::handle_update_application_status),
        )
        .fallback(route_not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::auth::session::SessionKeys;
    use crate::config::test_config;
    use crate::models::user::LoginType;
    use crate::store::Store;

    fn app() -> Router {
        build_router(AppState::new(&test_config(), Store::seeded()))
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let authorization = token.map(|t| format!("Bearer {t}"));
        send_raw(app, method, uri, authorization.as_deref(), body).await
    }

    /// Like `send`, but with the Authorization header value taken verbatim.
    async fn send_raw(
        app: &Router,
        method: Method,
        uri: &str,
        authorization: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut req = Request::builder().method(method).uri(uri);
        if let Some(value) = authorization {
            req = req.header(header::AUTHORIZATION, value);
        }
        let req = match body {
            Some(body) => req
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => req.body(Body::empty()),
        }
        .unwrap();

        let resp = app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn sign_in(app: &Router, email: &str, login_type: &str) -> String {
        let (status, body) = send(
            app,
            Method::POST,
            "/api/auth/session",
            None,
            Some(json!({ "name": "Tester", "email": email, "loginType": login_type })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        body["token"].as_str().unwrap().to_string()
    }

    fn new_job_body() -> Value {
        json!({
            "title": "Site Reliability Engineer",
            "department": "Engineering",
            "location": "Remote",
            "type": "full-time",
            "description": "Keep things running",
            "requirements": "Linux, Rust"
        })
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&app(), Method::GET, "/health", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_create_job_returns_201_with_generated_id() {
        let app = app();
        let (status, body) =
            send(&app, Method::POST, "/api/hr/jobs", None, Some(new_job_body())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["id"], 5);
        assert_eq!(body["data"]["status"], "active");
        assert_eq!(body["data"]["salary"], "Not specified");
        assert_eq!(body["message"], "Job created successfully");

        let (status, body) = send(&app, Method::GET, "/api/hr/jobs/5", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["title"], "Site Reliability Engineer");
    }

    #[tokio::test]
    async fn test_create_job_blank_title_is_400() {
        let mut job = new_job_body();
        job["title"] = json!("   ");
        let (status, body) = send(&app(), Method::POST, "/api/hr/jobs", None, Some(job)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_list_jobs_filters_narrow() {
        let app = app();
        let (_, all) = send(&app, Method::GET, "/api/hr/jobs", None, None).await;
        assert_eq!(all["total"], 4);

        let (_, sales) = send(&app, Method::GET, "/api/hr/jobs?department=sales", None, None).await;
        assert_eq!(sales["total"], 1);
        assert_eq!(sales["data"][0]["title"], "Sales Representative");

        let (_, closed) = send(&app, Method::GET, "/api/hr/jobs?status=closed", None, None).await;
        assert_eq!(closed["total"], 0);
    }

    #[tokio::test]
    async fn test_unknown_status_filter_is_400() {
        let (status, _) = send(&app(), Method::GET, "/api/hr/jobs?status=bogus", None, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_job_merges_fields() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/hr/jobs/2",
            None,
            Some(json!({ "status": "paused", "salary": "$95,000" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["id"], 2);
        assert_eq!(body["data"]["status"], "paused");
        assert_eq!(body["data"]["salary"], "$95,000");
        assert_eq!(body["data"]["title"], "Marketing Manager");

        let (status, _) = send(&app, Method::PUT, "/api/hr/jobs/42", None, Some(json!({}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_then_get_is_404() {
        let app = app();
        let (status, body) = send(&app, Method::DELETE, "/api/hr/jobs/3", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["id"], 3);

        let (status, body) = send(&app, Method::GET, "/api/hr/jobs/3", None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Job 3 not found");

        let (status, _) = send(&app, Method::DELETE, "/api/hr/jobs/3", None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_candidates_statistics_ignore_filters() {
        let (status, body) = send(
            &app(),
            Method::GET,
            "/api/hr/candidates?status=new&limit=1",
            None,
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
        assert_eq!(body["statistics"]["total"], 5);
        assert_eq!(body["statistics"]["new"], 2);
    }

    #[tokio::test]
    async fn test_candidate_job_filter_and_bad_limit() {
        let app = app();
        let (_, body) = send(&app, Method::GET, "/api/hr/candidates?jobId=1", None, None).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 2);

        let (status, _) =
            send(&app, Method::GET, "/api/hr/candidates?limit=lots", None, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_candidate_and_advance() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/hr/candidates",
            None,
            Some(json!({ "name": "Nia Okafor", "email": "nia@example.com", "jobId": 2 })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["id"], 6);
        assert_eq!(body["data"]["status"], "new");
        assert_eq!(body["data"]["skills"], json!([]));

        let (status, body) = send(
            &app,
            Method::PATCH,
            "/api/hr/candidates/6",
            None,
            Some(json!({ "status": "hired" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["status"], "hired");

        let (_, body) = send(&app, Method::GET, "/api/hr/candidates", None, None).await;
        assert_eq!(body["statistics"]["hired"], 1);
    }

    #[tokio::test]
    async fn test_reviews_statistics_and_submission() {
        let app = app();
        let (_, body) = send(&app, Method::GET, "/api/hr/reviews?status=pending", None, None).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
        assert_eq!(body["statistics"]["averageRating"], 4.3);

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/hr/reviews",
            None,
            Some(json!({
                "employeeId": 110,
                "name": "Tom Baker",
                "position": "Accountant",
                "department": "Finance",
                "rating": 2,
                "review": "Long hours"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["status"], "pending");
        let id = body["data"]["id"].as_u64().unwrap();

        let (status, _) = send(
            &app,
            Method::PATCH,
            &format!("/api/hr/reviews/{id}"),
            None,
            Some(json!({ "status": "published" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        // (5 + 4 + 5 + 3 + 2) / 5 = 3.8
        let (_, body) = send(&app, Method::GET, "/api/hr/reviews", None, None).await;
        assert_eq!(body["statistics"]["published"], 5);
        assert_eq!(body["statistics"]["averageRating"], 3.8);
    }

    #[tokio::test]
    async fn test_review_rating_out_of_range_is_400() {
        let (status, _) = send(
            &app(),
            Method::POST,
            "/api/hr/reviews",
            None,
            Some(json!({
                "employeeId": 110,
                "name": "Tom Baker",
                "department": "Finance",
                "rating": 9,
                "review": "Off the charts"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_review_rating_beyond_integer_width_is_400_envelope() {
        let app = app();
        for rating in [json!(300), json!(-1)] {
            let (status, body) = send(
                &app,
                Method::POST,
                "/api/hr/reviews",
                None,
                Some(json!({
                    "employeeId": 110,
                    "name": "Tom Baker",
                    "department": "Finance",
                    "rating": rating,
                    "review": "Off the charts"
                })),
            )
            .await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["success"], false);
            assert_eq!(body["code"], "VALIDATION_ERROR");
            assert!(body["error"].as_str().unwrap().contains("rating"));
        }
        let (_, body) = send(&app, Method::GET, "/api/hr/reviews", None, None).await;
        assert_eq!(body["statistics"]["total"], 6);
    }

    #[tokio::test]
    async fn test_malformed_body_is_400_envelope() {
        let app = app();
        let mut job = new_job_body();
        job.as_object_mut().unwrap().remove("title");
        let (status, body) = send(&app, Method::POST, "/api/hr/jobs", None, Some(job)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "VALIDATION_ERROR");

        // Not JSON at all.
        let req = Request::builder()
            .method(Method::POST)
            .uri("/api/hr/jobs")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{ nope"))
            .unwrap();
        let resp = app.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_400_envelope() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/api/hr/jobs/abc", None, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "VALIDATION_ERROR");

        let (status, body) = send(
            &app,
            Method::PATCH,
            "/api/hr/reviews/abc",
            None,
            Some(json!({ "status": "published" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_analytics_sections() {
        let app = app();
        let (_, body) = send(&app, Method::GET, "/api/hr/analytics?type=overview", None, None).await;
        assert_eq!(body["data"]["totalEmployees"], 524);

        let (_, body) =
            send(&app, Method::GET, "/api/hr/analytics?type=departments", None, None).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 8);

        let (_, body) = send(&app, Method::GET, "/api/hr/analytics?type=nope", None, None).await;
        assert!(body["data"].get("recentActivity").is_some());
    }

    #[tokio::test]
    async fn test_provider_discovery() {
        let (status, body) = send(&app(), Method::GET, "/api/auth/providers", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "google": false, "facebook": false, "github": true, "linkedin": false })
        );
    }

    #[tokio::test]
    async fn test_session_round_trip_and_missing_token() {
        let app = app();
        let token = sign_in(&app, "ada@example.com", "hr").await;
        let (status, body) = send(&app, Method::GET, "/api/auth/session", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"]["loginType"], "hr");
        assert_eq!(body["provider"], "demo");

        let (status, body) = send(&app, Method::GET, "/api/auth/session", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["code"], "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_malformed_authorization_is_401_envelope() {
        let app = app();
        for value in ["Basic x", "Bearer ", "bearer abc"] {
            let (status, body) =
                send_raw(&app, Method::GET, "/api/auth/session", Some(value), None).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "header {value:?}");
            assert_eq!(body["success"], false);
            assert_eq!(body["code"], "UNAUTHORIZED");
        }
    }

    #[tokio::test]
    async fn test_token_signed_with_other_secret_is_401() {
        let forged = SessionKeys::new("other-secret", 1)
            .issue("Mallory", "m@example.com", LoginType::Hr, "demo")
            .unwrap();
        let (status, body) = send(
            &app(),
            Method::GET,
            "/api/auth/session",
            Some(&forged.token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_social_sign_in_rules() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/auth/session",
            None,
            Some(json!({ "name": "A", "email": "a@x.io", "loginType": "user", "provider": "github" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["session"]["provider"], "github");

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/auth/session",
            None,
            Some(json!({ "name": "A", "email": "a@x.io", "loginType": "user", "provider": "google" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("Configuration"));

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/auth/session",
            None,
            Some(json!({ "name": "A", "email": "a@x.io", "loginType": "hr", "provider": "github" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_application_flow() {
        let app = app();
        let user = sign_in(&app, "sam@example.com", "user").await;
        let hr = sign_in(&app, "hr@example.com", "hr").await;

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/applications",
            None,
            Some(json!({ "jobId": 1 })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/applications",
            Some(&user),
            Some(json!({ "jobId": 1 })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["status"], "pending");
        let id = body["data"]["id"].as_u64().unwrap();

        let (_, job) = send(&app, Method::GET, "/api/hr/jobs/1", None, None).await;
        assert_eq!(job["data"]["applicants"], 25);

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/applications",
            Some(&user),
            Some(json!({ "jobId": 1 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let (_, job) = send(&app, Method::GET, "/api/hr/jobs/1", None, None).await;
        assert_eq!(job["data"]["applicants"], 25);

        let uri = format!("/api/hr/applications/{id}");
        let (status, _) = send(
            &app,
            Method::PATCH,
            &uri,
            Some(&user),
            Some(json!({ "status": "interview" })),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _) = send(
            &app,
            Method::PATCH,
            &uri,
            Some(&hr),
            Some(json!({ "status": "interview" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, mine) = send(&app, Method::GET, "/api/applications", Some(&user), None).await;
        assert_eq!(mine["total"], 1);
        assert_eq!(mine["data"][0]["status"], "interview");

        let (_, theirs) = send(&app, Method::GET, "/api/applications", Some(&hr), None).await;
        assert_eq!(theirs["total"], 0);
    }

    #[tokio::test]
    async fn test_applying_to_saturated_job_keeps_count() {
        let app = app();
        let (status, _) = send(
            &app,
            Method::PUT,
            "/api/hr/jobs/1",
            None,
            Some(json!({ "applicants": u32::MAX })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let user = sign_in(&app, "sam@example.com", "user").await;
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/applications",
            Some(&user),
            Some(json!({ "jobId": 1 })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let (_, job) = send(&app, Method::GET, "/api/hr/jobs/1", None, None).await;
        assert_eq!(job["data"]["applicants"], u32::MAX);
    }

    #[tokio::test]
    async fn test_job_board_hides_paused_jobs() {
        let app = app();
        send(
            &app,
            Method::PUT,
            "/api/hr/jobs/4",
            None,
            Some(json!({ "status": "paused" })),
        )
        .await;
        let (_, body) = send(&app, Method::GET, "/api/jobs", None, None).await;
        assert_eq!(body["total"], 3);
        let (_, body) = send(&app, Method::GET, "/api/jobs?q=marketing", None, None).await;
        assert_eq!(body["total"], 1);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404_envelope() {
        let (status, body) = send(&app(), Method::GET, "/api/nope", None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
    }
}
