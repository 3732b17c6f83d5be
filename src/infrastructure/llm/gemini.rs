use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::http_client::{HttpClientTrait, HttpError};
use super::prompt::{user_prompt, SYSTEM_PROMPT};
use crate::domain::{BackendError, GenerativeBackend, ProductRecord};

const BACKEND_NAME: &str = "gemini";

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Value shipped in `.env.example`; treated as "no key"
pub const PLACEHOLDER_API_KEY: &str = "your_gemini_api_key_here";

const SAFETY_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];
const SAFETY_THRESHOLD: &str = "BLOCK_MEDIUM_AND_ABOVE";

/// Sampling parameters sent with every request
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationSettings {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.95,
            top_k: 40,
            max_output_tokens: 1024,
        }
    }
}

/// Google Gemini `generateContent` backend
#[derive(Debug)]
pub struct GeminiBackend<C: HttpClientTrait> {
    client: C,
    api_key: Option<String>,
    model: String,
    base_url: String,
    settings: GenerationSettings,
}

impl<C: HttpClientTrait> GeminiBackend<C> {
    pub fn new(client: C, api_key: Option<String>) -> Self {
        Self::with_base_url(client, api_key, DEFAULT_GEMINI_BASE_URL)
    }

    pub fn with_base_url(
        client: C,
        api_key: Option<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let api_key = api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty() && k != PLACEHOLDER_API_KEY);
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            client,
            api_key,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url,
            settings: GenerationSettings::default(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_settings(mut self, settings: GenerationSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    fn build_request(&self, query: &str, context_records: &[ProductRecord]) -> serde_json::Value {
        let request = GeminiRequest {
            system_instruction: GeminiContent {
                role: None,
                parts: vec![GeminiPart::text(SYSTEM_PROMPT)],
            },
            contents: vec![GeminiContent {
                role: Some("user"),
                parts: vec![GeminiPart::text(user_prompt(query, context_records))],
            }],
            generation_config: self.settings,
            safety_settings: SAFETY_CATEGORIES
                .iter()
                .map(|&category| GeminiSafetySetting {
                    category,
                    threshold: SAFETY_THRESHOLD,
                })
                .collect(),
        };

        serde_json::to_value(request).unwrap_or_default()
    }

    fn parse_response(&self, json: serde_json::Value) -> Result<String, BackendError> {
        let response: GeminiResponse = serde_json::from_value(json)
            .map_err(|e| BackendError::malformed(BACKEND_NAME, e.to_string()))?;

        if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(BackendError::blocked(BACKEND_NAME, reason));
        }

        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| BackendError::malformed(BACKEND_NAME, "No candidates in response"))?;

        let text: String = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(match candidate.finish_reason.as_deref() {
                Some("SAFETY") => BackendError::blocked(BACKEND_NAME, "SAFETY"),
                _ => BackendError::malformed(BACKEND_NAME, "Candidate has no text"),
            });
        }

        Ok(text)
    }
}

fn map_http_error(error: HttpError) -> BackendError {
    match error {
        HttpError::Transport(message) => BackendError::network(BACKEND_NAME, message),
        HttpError::Status { status, body } => BackendError::from_status(BACKEND_NAME, status, body),
        HttpError::Decode(message) => BackendError::malformed(BACKEND_NAME, message),
    }
}

#[async_trait]
impl<C: HttpClientTrait> GenerativeBackend for GeminiBackend<C> {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate(
        &self,
        query: &str,
        context_records: &[ProductRecord],
    ) -> Result<String, BackendError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| BackendError::not_configured(BACKEND_NAME))?;

        let url = self.generate_url();
        let body = self.build_request(query, context_records);
        let headers = vec![
            ("x-goog-api-key", api_key),
            ("Content-Type", "application/json"),
        ];

        debug!(model = %self.model, records = context_records.len(), "Calling Gemini");

        let response = self
            .client
            .post_json(&url, headers, &body)
            .await
            .map_err(map_http_error)?;

        self.parse_response(response)
    }

    fn backend_name(&self) -> &'static str {
        BACKEND_NAME
    }
}

// Gemini API types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    system_instruction: GeminiContent,
    contents: Vec<GeminiContent>,
    generation_config: GenerationSettings,
    safety_settings: Vec<GeminiSafetySetting>,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
struct GeminiPart {
    text: String,
}

impl GeminiPart {
    fn text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Serialize)]
struct GeminiSafetySetting {
    category: &'static str,
    threshold: &'static str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    prompt_feedback: Option<GeminiPromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<GeminiResponseContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponseContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPromptFeedback {
    block_reason: Option<String>,
}
