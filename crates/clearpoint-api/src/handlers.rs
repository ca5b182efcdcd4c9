//! HTTP handlers for the clearpoint API.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use clearpoint_core::{
    Extraction, ExtractionMode, Fragment, SaveNoteRequest, SavedNote, UsageType,
};
use clearpoint_extract::render_summary;

use crate::{ApiError, AppState};

pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

// =============================================================================
// EXTRACTION
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub notes: String,
    /// Opaque tag, echoed back untouched.
    #[serde(default)]
    pub usage_type: Option<UsageType>,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub fragments: Vec<Fragment>,
    /// Which classifier answered; informational, never an error state.
    pub mode: ExtractionMode,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_type: Option<UsageType>,
}

pub async fn extract_notes(
    State(state): State<AppState>,
    Json(req): Json<ExtractRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if req.notes.trim().is_empty() {
        return Err(ApiError::BadRequest("notes must not be empty".to_string()));
    }

    let Extraction { fragments, mode } = state.service.extract(&req.notes).await;

    Ok(Json(ExtractResponse {
        count: fragments.len(),
        fragments,
        mode,
        usage_type: req.usage_type,
    }))
}

// =============================================================================
// EXPORT
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub fragments: Vec<Fragment>,
}

pub async fn export_summary(Json(req): Json<ExportRequest>) -> impl IntoResponse {
    Json(serde_json::json!({
        "summary": render_summary(&req.fragments),
    }))
}

// =============================================================================
// NOTES
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct SaveNoteBody {
    pub title: String,
    pub content: String,
    /// Current-taxonomy fragments; frozen to the legacy shape on insert.
    pub fragments: Vec<Fragment>,
    #[serde(default)]
    pub usage_type: Option<UsageType>,
}

#[derive(Debug, Serialize)]
pub struct ListNotesResponse {
    pub notes: Vec<SavedNote>,
    pub total: usize,
}

pub async fn save_note(
    State(state): State<AppState>,
    Json(body): Json<SaveNoteBody>,
) -> Result<impl IntoResponse, ApiError> {
    if body.title.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "note title must not be empty".to_string(),
        ));
    }
    if body.fragments.is_empty() {
        return Err(ApiError::BadRequest(
            "process notes before saving".to_string(),
        ));
    }

    let id = state
        .notes
        .insert(SaveNoteRequest {
            title: body.title,
            content: body.content,
            fragments: body.fragments,
            usage_type: body.usage_type,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(serde_json::json!({ "id": id }))))
}

pub async fn list_notes(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let notes = state.notes.list().await?;
    Ok(Json(ListNotesResponse {
        total: notes.len(),
        notes,
    }))
}

pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let note = state.notes.fetch(id).await?;
    Ok(Json(note))
}

pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.notes.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
