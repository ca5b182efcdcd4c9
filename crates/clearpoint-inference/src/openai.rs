//! OpenAI-compatible extraction backend implementation.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

use clearpoint_core::{Error, ExtractionBackend, Fragment, Result};

use crate::config::OpenAiConfig;
use crate::parse::parse_extraction_content;

/// Fixed system instruction for the extraction request.
///
/// Describes the three legacy categories and pushes the header/attendee/
/// short-line filtering into the model, mirroring what the heuristic
/// classifier enforces in code.
const EXTRACTION_SYSTEM_PROMPT: &str = r#"You are an AI assistant that extracts and categorizes meeting notes. Analyze the provided meeting notes and extract:
- DECISIONS: Final choices, agreements, or conclusions made
- ACTIONS: Tasks, todos, or action items with owners/deadlines
- QUESTIONS: Open questions, uncertainties, or items needing clarification

Return a JSON object with an "items" array of objects, each with "content" (the extracted text) and "type" (either "decision", "action", or "question").
Only extract meaningful items, skip headers, attendee lists, and short/irrelevant lines."#;

/// OpenAI-compatible extraction backend.
///
/// One chat-completion call per pass; no retry, no caching, no rate
/// limiting. Cancellation is not supported beyond the transport timeout.
pub struct OpenAiExtractor {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiExtractor {
    /// Create a new backend with the given configuration.
    pub fn new(config: OpenAiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| Error::Internal(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            "Initializing OpenAI extraction backend: url={}, model={}",
            config.base_url, config.model
        );

        Ok(Self { client, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(OpenAiConfig::from_env())
    }

    /// Get the current configuration.
    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }
}

#[async_trait]
impl ExtractionBackend for OpenAiExtractor {
    #[instrument(skip(self, notes), fields(subsystem = "inference", component = "openai", op = "extract_fragments", model = %self.config.model, prompt_len = notes.len()))]
    async fn extract_fragments(&self, notes: &str) -> Result<Vec<Fragment>> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or_else(|| Error::Config("OPENAI_API_KEY is not configured".to_string()))?;

        let start = Instant::now();

        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: EXTRACTION_SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: notes.to_string(),
                },
            ],
            temperature: Some(self.config.temperature),
            response_format: Some(serde_json::json!({ "type": "json_object" })),
        };

        let url = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Request(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Service(format!(
                "OpenAI API error: {}: {}",
                status, body
            )));
        }

        let result: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| Error::Parse(format!("Failed to parse response: {}", e)))?;

        let content = result
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .unwrap_or_default();

        if content.is_empty() {
            debug!("Completion carried no content");
            return Ok(Vec::new());
        }

        let fragments = parse_extraction_content(&content)?;
        debug!(
            result_count = fragments.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "AI extraction complete"
        );
        Ok(fragments)
    }

    fn name(&self) -> &str {
        "openai"
    }
}

/// Request body for the chat completions endpoint.
#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    /// `{"type": "json_object"}` for guaranteed valid JSON output.
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<serde_json::Value>,
}

/// A single chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// Response from the chat completions endpoint.
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

/// Single chat completion choice.
#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}
