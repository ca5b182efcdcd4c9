//! # clearpoint-extract
//!
//! The dependency-free classification path: a regex/keyword heuristic that
//! turns freeform notes into categorized fragments, plus the plain-text
//! summary exporter.
//!
//! The heuristic is not dead code behind the AI backend: it is the
//! documented degraded-mode implementation of the same contract, and the
//! extraction service falls back to it on any backend failure.

pub mod export;
pub mod heuristic;

pub use export::render_summary;
pub use heuristic::extract_fragments;
