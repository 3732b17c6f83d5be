//! Generative backend implementations

mod factory;
mod gemini;
mod http_client;
pub mod prompt;

pub use factory::BackendFactory;
pub use gemini::{
    GeminiBackend, GenerationSettings, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL,
    PLACEHOLDER_API_KEY,
};
pub use http_client::{HttpClient, HttpClientTrait, HttpError};
