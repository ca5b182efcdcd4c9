//! # clearpoint-inference
//!
//! The AI classification path for clearpoint.
//!
//! This crate provides:
//! - An OpenAI-compatible extraction backend (one chat-completion call per
//!   pass, fixed instruction prompt, JSON response)
//! - Tolerant parsing of the completion payload into fragments
//! - The extraction service that prefers the AI backend and transparently
//!   falls back to the heuristic classifier on any failure
//!
//! # Feature Flags
//!
//! - `mock`: expose the mock backend to downstream test suites

pub mod config;
pub mod openai;
pub mod parse;
pub mod service;

// Mock extraction backend for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export core types
pub use clearpoint_core::*;

pub use config::OpenAiConfig;
pub use openai::OpenAiExtractor;
pub use parse::parse_extraction_content;
pub use service::ExtractionService;
