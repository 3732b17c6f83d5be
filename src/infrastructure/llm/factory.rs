use std::sync::Arc;
use std::time::Duration;

use super::gemini::{GeminiBackend, GenerationSettings};
use super::http_client::HttpClient;
use crate::config::BackendConfig;
use crate::domain::{DomainError, GenerativeBackend};

/// Factory for creating generative backends
#[derive(Debug)]
pub struct BackendFactory;

impl BackendFactory {
    /// Create the Gemini backend from configuration. A missing API key yields
    /// an unconfigured backend rather than an error.
    pub fn from_config(config: &BackendConfig) -> Result<Arc<dyn GenerativeBackend>, DomainError> {
        Ok(Arc::new(Self::create_gemini(config)?))
    }

    pub fn create_gemini(config: &BackendConfig) -> Result<GeminiBackend<HttpClient>, DomainError> {
        let client = HttpClient::with_timeout(Duration::from_secs(config.timeout_secs))
            .map_err(|e| DomainError::configuration(e.to_string()))?;

        let settings = GenerationSettings {
            temperature: config.temperature,
            top_p: config.top_p,
            top_k: config.top_k,
            max_output_tokens: config.max_output_tokens,
        };

        Ok(
            GeminiBackend::with_base_url(client, config.api_key.clone(), &config.base_url)
                .with_model(&config.model)
                .with_settings(settings),
        )
    }
}
