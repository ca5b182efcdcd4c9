//! Mock extraction backend for deterministic testing.
//!
//! ## Usage
//!
//! ```rust
//! use clearpoint_inference::mock::MockExtractionBackend;
//! use clearpoint_core::{Category, Fragment};
//!
//! let backend = MockExtractionBackend::new()
//!     .with_fragments(vec![Fragment::new(0, "Ship it", Category::HighImportance)]);
//! ```

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use clearpoint_core::{Error, ExtractionBackend, Fragment, Result};

/// Mock extraction backend with canned fragments or a forced failure.
#[derive(Clone, Default)]
pub struct MockExtractionBackend {
    fragments: Vec<Fragment>,
    failure: Option<String>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockExtractionBackend {
    /// Create a mock that returns no fragments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fragments every extraction call returns.
    pub fn with_fragments(mut self, fragments: Vec<Fragment>) -> Self {
        self.fragments = fragments;
        self
    }

    /// Make every extraction call fail with a service error.
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// Number of extraction calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Inputs passed to extraction calls, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ExtractionBackend for MockExtractionBackend {
    async fn extract_fragments(&self, notes: &str) -> Result<Vec<Fragment>> {
        self.calls.lock().unwrap().push(notes.to_string());

        match &self.failure {
            Some(message) => Err(Error::Service(message.clone())),
            None => Ok(self.fragments.clone()),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
