//! Router-level integration tests, driven in-process with `oneshot`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use tower::util::ServiceExt;

use clearpoint_api::store::InMemoryNoteStore;
use clearpoint_api::{build_router, AppState};
use clearpoint_core::{Category, Fragment};
use clearpoint_inference::mock::MockExtractionBackend;
use clearpoint_inference::ExtractionService;

fn app_with_service(service: ExtractionService) -> Router {
    build_router(AppState {
        service: Arc::new(service),
        notes: Arc::new(InMemoryNoteStore::new()),
    })
}

fn heuristic_app() -> Router {
    app_with_service(ExtractionService::heuristic_only())
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_health_check() {
    let app = heuristic_app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_extract_with_ai_backend() {
    let backend = MockExtractionBackend::new().with_fragments(vec![Fragment::new(
        0,
        "We decided to ship the redesign",
        Category::HighImportance,
    )]);
    let app = app_with_service(ExtractionService::new(Arc::new(backend)));

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/extract",
        Some(serde_json::json!({ "notes": "raw notes", "usage_type": "meetings" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mode"], "ai");
    assert_eq!(body["count"], 1);
    assert_eq!(body["usage_type"], "meetings");
    assert_eq!(body["fragments"][0]["category"], "high_importance");
}

#[tokio::test]
async fn test_extract_falls_back_on_backend_failure() {
    let backend = MockExtractionBackend::new().failing("upstream down");
    let app = app_with_service(ExtractionService::new(Arc::new(backend)));

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/extract",
        Some(serde_json::json!({
            "notes": "We decided to ship the new design\nShould we add dark mode?"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mode"], "heuristic");
    assert_eq!(body["count"], 2);
    assert_eq!(body["fragments"][0]["category"], "high_importance");
    assert_eq!(body["fragments"][1]["category"], "questions");
}

#[tokio::test]
async fn test_extract_rejects_empty_notes() {
    let app = heuristic_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/extract",
        Some(serde_json::json!({ "notes": "   \n  " })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("empty"));
}

#[tokio::test]
async fn test_export_summary() {
    let app = heuristic_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/export",
        Some(serde_json::json!({
            "fragments": [
                {"id": "card-0", "content": "We decided to ship", "category": "high_importance"},
                {"id": "card-1", "content": "Draft the checklist", "category": "todo"}
            ]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let summary = body["summary"].as_str().unwrap();
    assert!(summary.starts_with("HIGH IMPORTANCE:"));
    assert!(summary.contains("• Draft the checklist"));
}

#[tokio::test]
async fn test_note_lifecycle_freezes_to_legacy() {
    let app = heuristic_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/notes",
        Some(serde_json::json!({
            "title": "Kickoff",
            "content": "the original pasted text",
            "usage_type": "school",
            "fragments": [
                {"id": "card-0", "content": "We decided to ship", "category": "high_importance"},
                {"id": "card-1", "content": "Mike will draft specs", "category": "people"},
                {"id": "card-2", "content": "Should we add dark mode?", "category": "questions"}
            ]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_str().unwrap().to_string();

    // Saved cards carry the legacy taxonomy.
    let (status, note) = send(&app, Method::GET, &format!("/api/v1/notes/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(note["usage_type"], "school");
    assert_eq!(note["cards"][0]["category"], "decision");
    assert_eq!(note["cards"][1]["category"], "action");
    assert_eq!(note["cards"][2]["category"], "question");

    let (status, listing) = send(&app, Method::GET, "/api/v1/notes", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listing["total"], 1);

    let (status, _) = send(&app, Method::DELETE, &format!("/api/v1/notes/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::GET, &format!("/api/v1/notes/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_save_note_validation() {
    let app = heuristic_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/notes",
        Some(serde_json::json!({
            "title": "  ",
            "content": "text",
            "fragments": [
                {"id": "card-0", "content": "We decided to ship", "category": "high_importance"}
            ]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("title"));

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/notes",
        Some(serde_json::json!({
            "title": "Kickoff",
            "content": "text",
            "fragments": []
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("process"));
}
