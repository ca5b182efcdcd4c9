//! Core traits for clearpoint abstractions.
//!
//! These traits define the interfaces that concrete implementations
//! must satisfy, enabling pluggable backends and testability.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Fragment, SavedNote, UsageType};

// =============================================================================
// EXTRACTION BACKEND
// =============================================================================

/// A classifier that turns raw note text into categorized fragments.
///
/// The AI adapter is the primary implementation; the extraction service
/// falls back to the heuristic classifier when a backend call fails, so
/// implementations should surface failures as errors rather than guessing.
#[async_trait]
pub trait ExtractionBackend: Send + Sync {
    /// Classify the full text in one pass.
    async fn extract_fragments(&self, notes: &str) -> Result<Vec<Fragment>>;

    /// Backend name for logging.
    fn name(&self) -> &str;
}

// =============================================================================
// NOTE REPOSITORY
// =============================================================================

/// Request for saving a processed note.
#[derive(Debug, Clone)]
pub struct SaveNoteRequest {
    pub title: String,
    pub content: String,
    /// Fragments in the current taxonomy; frozen to the legacy shape on
    /// insert.
    pub fragments: Vec<Fragment>,
    pub usage_type: Option<UsageType>,
}

/// Repository for saved-note CRUD operations.
///
/// Persistence is an external collaborator: the trait is the boundary,
/// and the in-process implementation keeps notes in memory.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Insert a new note, freezing its fragments into the legacy taxonomy.
    async fn insert(&self, req: SaveNoteRequest) -> Result<Uuid>;

    /// Fetch a saved note by ID.
    async fn fetch(&self, id: Uuid) -> Result<SavedNote>;

    /// List all saved notes, newest first.
    async fn list(&self) -> Result<Vec<SavedNote>>;

    /// Delete a saved note.
    async fn delete(&self, id: Uuid) -> Result<()>;
}
