//! HTTP surface for the clearpoint note classifier.
//!
//! The router is built separately from the binary so tests can drive it
//! in-process with `tower::ServiceExt::oneshot`.

pub mod handlers;
pub mod store;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use clearpoint_core::NoteRepository;
use clearpoint_inference::ExtractionService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// AI-preferred extraction with heuristic fallback.
    pub service: Arc<ExtractionService>,
    /// Saved-note repository. Persistence proper is an external
    /// collaborator; the in-process implementation keeps notes in memory.
    pub notes: Arc<dyn NoteRepository>,
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/v1/extract", post(handlers::extract_notes))
        .route("/api/v1/export", post(handlers::export_summary))
        .route(
            "/api/v1/notes",
            get(handlers::list_notes).post(handlers::save_note),
        )
        .route(
            "/api/v1/notes/:id",
            get(handlers::get_note).delete(handlers::delete_note),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// =============================================================================
// ERROR HANDLING
// =============================================================================

/// HTTP-facing error with status mapping.
#[derive(Debug)]
pub enum ApiError {
    Internal(clearpoint_core::Error),
    NotFound(String),
    BadRequest(String),
}

impl From<clearpoint_core::Error> for ApiError {
    fn from(err: clearpoint_core::Error) -> Self {
        match &err {
            clearpoint_core::Error::NotFound(msg) => ApiError::NotFound(msg.clone()),
            clearpoint_core::Error::NoteNotFound(id) => {
                ApiError::NotFound(format!("Note {} not found", id))
            }
            clearpoint_core::Error::InvalidInput(msg) => ApiError::BadRequest(msg.clone()),
            _ => ApiError::Internal(err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::Internal(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(serde_json::json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
