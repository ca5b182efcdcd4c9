//! Extraction orchestration: AI preferred, heuristic on failure.
//!
//! The fallback is a plain sequential try/catch, not a circuit breaker or
//! retry policy; exactly one classifier runs to completion per pass. Any
//! backend failure (missing credential, upstream error, unparseable
//! payload) downgrades silently to the heuristic result; the caller only
//! sees which mode answered, never an error.

use std::sync::Arc;
use tracing::{debug, warn};

use clearpoint_core::{Extraction, ExtractionBackend, ExtractionMode};
use clearpoint_extract::extract_fragments;

use crate::openai::OpenAiExtractor;

/// Classification entry point used by the API layer.
pub struct ExtractionService {
    backend: Option<Arc<dyn ExtractionBackend>>,
}

impl ExtractionService {
    /// Service preferring the given AI backend.
    pub fn new(backend: Arc<dyn ExtractionBackend>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    /// Service with no AI backend: every pass runs the heuristic.
    pub fn heuristic_only() -> Self {
        Self { backend: None }
    }

    /// Build from environment variables. A backend that cannot even be
    /// constructed (HTTP client failure) degrades to heuristic-only.
    pub fn from_env() -> Self {
        match OpenAiExtractor::from_env() {
            Ok(backend) => Self::new(Arc::new(backend)),
            Err(err) => {
                warn!(error = %err, "AI backend unavailable, running heuristic-only");
                Self::heuristic_only()
            }
        }
    }

    /// Classify the text, preferring the AI backend and falling back to
    /// the heuristic classifier on any failure.
    pub async fn extract(&self, notes: &str) -> Extraction {
        if let Some(backend) = &self.backend {
            match backend.extract_fragments(notes).await {
                Ok(fragments) => {
                    debug!(
                        backend = backend.name(),
                        result_count = fragments.len(),
                        "AI extraction succeeded"
                    );
                    return Extraction {
                        fragments,
                        mode: ExtractionMode::Ai,
                    };
                }
                Err(err) => {
                    warn!(
                        backend = backend.name(),
                        error = %err,
                        "AI extraction failed, falling back to heuristic classifier"
                    );
                }
            }
        }

        let fragments = extract_fragments(notes);
        Extraction {
            fragments,
            mode: ExtractionMode::Heuristic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockExtractionBackend;
    use clearpoint_core::{Category, Fragment};

    const NOTES: &str = "We decided to ship the new design\nShould we add dark mode?";

    #[tokio::test]
    async fn test_ai_success_reports_ai_mode() {
        let backend = MockExtractionBackend::new()
            .with_fragments(vec![Fragment::new(0, "We decided to ship", Category::HighImportance)]);
        let service = ExtractionService::new(Arc::new(backend.clone()));

        let extraction = service.extract(NOTES).await;
        assert_eq!(extraction.mode, ExtractionMode::Ai);
        assert_eq!(extraction.fragments.len(), 1);
        assert_eq!(backend.call_count(), 1);
    }

    #[tokio::test]
    async fn test_backend_failure_falls_back_to_heuristic() {
        let backend = MockExtractionBackend::new().failing("upstream exploded");
        let service = ExtractionService::new(Arc::new(backend.clone()));

        let extraction = service.extract(NOTES).await;
        assert_eq!(extraction.mode, ExtractionMode::Heuristic);
        // No fragment is lost relative to running the heuristic alone.
        assert_eq!(extraction.fragments, extract_fragments(NOTES));
        assert_eq!(backend.call_count(), 1);
    }

    #[tokio::test]
    async fn test_heuristic_only_service() {
        let service = ExtractionService::heuristic_only();

        let extraction = service.extract(NOTES).await;
        assert_eq!(extraction.mode, ExtractionMode::Heuristic);
        assert_eq!(extraction.fragments.len(), 2);
    }

    #[tokio::test]
    async fn test_fallback_is_deterministic() {
        let service = ExtractionService::new(Arc::new(
            MockExtractionBackend::new().failing("still broken"),
        ));

        let first = service.extract(NOTES).await;
        let second = service.extract(NOTES).await;
        assert_eq!(first.fragments, second.fragments);
    }
}
