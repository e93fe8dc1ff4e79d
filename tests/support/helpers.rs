// tests/support/helpers.rs
use super::builders::SAMPLE_FIXTURE;
use super::mocks::FixedClock;
use axum::body;
use axum::http::StatusCode;
use serde_json::Value;
use std::sync::Arc;

use teamboard_core::application::services::ApplicationServices;
use teamboard_core::domain::organization::OrganizationRepository;
use teamboard_core::domain::project::{ProjectRepository, ProjectStatsRepository, StatsPeriod};
use teamboard_core::domain::team::TeamRepository;
use teamboard_core::infrastructure::repositories::InMemoryStore;
use teamboard_core::infrastructure::util::DefaultSlugGenerator;
use teamboard_core::presentation::http::state::HttpState;

pub fn sample_store() -> Arc<InMemoryStore> {
    let store = InMemoryStore::from_json_str(SAMPLE_FIXTURE, &DefaultSlugGenerator, Arc::new(FixedClock))
        .expect("sample fixture should load");
    Arc::new(store)
}

/// Services over the sample fixture, optionally with a replacement stats source.
pub fn build_services(stats_override: Option<Arc<dyn ProjectStatsRepository>>) -> ApplicationServices {
    let store = sample_store();
    let org_repo: Arc<dyn OrganizationRepository> = store.clone();
    let team_repo: Arc<dyn TeamRepository> = store.clone();
    let project_repo: Arc<dyn ProjectRepository> = store.clone();
    let stats_repo: Arc<dyn ProjectStatsRepository> = match stats_override {
        Some(repo) => repo,
        None => store,
    };

    ApplicationServices::new(
        org_repo,
        team_repo,
        project_repo,
        stats_repo,
        StatsPeriod::default(),
    )
}

pub fn build_test_state() -> HttpState {
    HttpState {
        services: Arc::new(build_services(None)),
    }
}

pub fn make_test_router() -> axum::Router {
    teamboard_core::presentation::http::routes::build_router(build_test_state())
}

pub fn make_test_router_with_stats(stats: Arc<dyn ProjectStatsRepository>) -> axum::Router {
    let state = HttpState {
        services: Arc::new(build_services(Some(stats))),
    };
    teamboard_core::presentation::http::routes::build_router(state)
}

/// Read a JSON response body, asserting the status and content type first.
pub async fn read_json(resp: axum::response::Response, expected_status: StatusCode) -> Value {
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts.headers.get("content-type").and_then(|v| v.to_str().ok()).unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    if status != expected_status {
        panic!(
            "expected {}, got {}: {}",
            expected_status,
            status,
            String::from_utf8_lossy(&body_bytes)
        );
    }
    serde_json::from_slice(&body_bytes).expect("expected valid json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: axum::response::Response, expected_status: StatusCode, expected_error: &str) {
    let json = read_json(resp, expected_status).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
