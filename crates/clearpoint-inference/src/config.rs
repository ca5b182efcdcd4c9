//! Configuration for the OpenAI-compatible extraction backend.

use clearpoint_core::defaults;

/// Configuration for the OpenAI-compatible backend.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// Base URL for the API endpoint.
    pub base_url: String,
    /// API key for authentication. Extraction fails with a configuration
    /// error when absent; the service then falls back to the heuristic.
    pub api_key: Option<String>,
    /// Model to use for extraction.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::OPENAI_URL.to_string(),
            api_key: None,
            model: defaults::GEN_MODEL.to_string(),
            temperature: defaults::GEN_TEMPERATURE,
            timeout_seconds: defaults::GEN_TIMEOUT_SECS,
        }
    }
}

impl OpenAiConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| defaults::OPENAI_URL.to_string()),
            api_key: std::env::var("OPENAI_API_KEY").ok(),
            model: std::env::var("OPENAI_GEN_MODEL")
                .unwrap_or_else(|_| defaults::GEN_MODEL.to_string()),
            temperature: std::env::var("OPENAI_TEMPERATURE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults::GEN_TEMPERATURE),
            timeout_seconds: std::env::var("OPENAI_TIMEOUT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults::GEN_TIMEOUT_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OpenAiConfig::default();
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert_eq!(config.model, "gpt-4o");
        assert!(config.api_key.is_none());
        assert_eq!(config.temperature, 0.3);
    }
}
