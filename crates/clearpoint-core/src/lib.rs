//! # clearpoint-core
//!
//! Core types, traits, and abstractions for the clearpoint note classifier.
//!
//! This crate provides the foundational data structures and trait definitions
//! that the other clearpoint crates depend on: the two category taxonomies,
//! the fragment model, the extraction backend and note repository seams, and
//! the shared error type.

pub mod defaults;
pub mod error;
pub mod models;
pub mod taxonomy;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::{Extraction, ExtractionMode, Fragment, LegacyFragment, SavedNote, UsageType};
pub use taxonomy::{normalize, Category, LegacyCategory};
pub use traits::{ExtractionBackend, NoteRepository, SaveNoteRequest};
