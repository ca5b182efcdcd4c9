//! Centralized default constants for clearpoint.
//!
//! **This module is the single source of truth** for shared default values.
//! Crates reference these constants instead of defining their own magic
//! numbers.

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Minimum trimmed line length for the heuristic classifier. Shorter lines
/// are treated as noise (headers, separators) and produce no fragment.
pub const MIN_FRAGMENT_CHARS: usize = 10;

/// Category label assumed for AI items that carry no `type` field. Runs
/// through the normalizer like every other label.
pub const FALLBACK_ITEM_LABEL: &str = "question";

// =============================================================================
// INFERENCE
// =============================================================================

/// Default OpenAI-compatible API base URL.
pub const OPENAI_URL: &str = "https://api.openai.com/v1";

/// Default generation model.
pub const GEN_MODEL: &str = "gpt-4o";

/// Default sampling temperature for extraction requests.
pub const GEN_TEMPERATURE: f32 = 0.3;

/// Timeout for generation requests in seconds.
pub const GEN_TIMEOUT_SECS: u64 = 120;

// =============================================================================
// SERVER
// =============================================================================

/// Default HTTP server port.
pub const SERVER_PORT: u16 = 3000;
