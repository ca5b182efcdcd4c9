//! Core data models for clearpoint.
//!
//! A [`Fragment`] is one categorized unit of extracted text, corresponding
//! to one input line (or one item of AI output). Fragments are immutable
//! values: they are created fresh on every extraction pass and frozen into
//! the legacy shape exactly once, when a note is saved.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::taxonomy::{Category, LegacyCategory};
use crate::traits::SaveNoteRequest;

/// One categorized unit of extracted text, in the current taxonomy.
///
/// The id is sequential within one extraction pass (`card-0`, `card-1`, …)
/// and is not a persisted identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    pub id: String,
    pub content: String,
    pub category: Category,
}

impl Fragment {
    /// Create a fragment with a pass-local sequential id.
    pub fn new(index: usize, content: impl Into<String>, category: Category) -> Self {
        Self {
            id: format!("card-{}", index),
            content: content.into(),
            category,
        }
    }

    /// Freeze this fragment into the legacy persisted shape.
    pub fn into_legacy(self) -> LegacyFragment {
        LegacyFragment {
            id: self.id,
            content: self.content,
            category: self.category.to_legacy(),
        }
    }
}

/// A fragment frozen into the legacy taxonomy for persistence.
///
/// The freeze is lossy: the fine-grained current category cannot be
/// reconstructed from this shape and no attempt is made to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyFragment {
    pub id: String,
    pub content: String,
    pub category: LegacyCategory,
}

/// Which classifier produced an extraction pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMode {
    /// The AI backend answered.
    Ai,
    /// The AI backend failed or was not configured; the heuristic
    /// classifier produced the result.
    Heuristic,
}

impl ExtractionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionMode::Ai => "ai",
            ExtractionMode::Heuristic => "heuristic",
        }
    }
}

/// Result of one extraction pass: the fragments plus which path produced
/// them. The mode is informational, never an error state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Extraction {
    pub fragments: Vec<Fragment>,
    pub mode: ExtractionMode,
}

/// Opaque usage tag propagated through requests and saved notes.
///
/// Never interpreted by the classification logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageType {
    Meetings,
    School,
}

impl UsageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UsageType::Meetings => "meetings",
            UsageType::School => "school",
        }
    }
}

/// A saved note aggregate: original text plus its fragments frozen into
/// the legacy taxonomy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedNote {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub cards: Vec<LegacyFragment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_type: Option<UsageType>,
    pub created_at_utc: DateTime<Utc>,
}

impl SavedNote {
    /// Build the aggregate from a save request, freezing every fragment
    /// into the legacy shape. This is the only place the legacy mapper
    /// runs.
    pub fn from_request(req: SaveNoteRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: req.title,
            content: req.content,
            cards: req
                .fragments
                .into_iter()
                .map(Fragment::into_legacy)
                .collect(),
            usage_type: req.usage_type,
            created_at_utc: Utc::now(),
        }
    }
}
