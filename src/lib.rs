//! MedAssist
//!
//! Symptom-to-product matching for the Biofina medical assistant:
//! - Rule-based relevance scoring of a small static catalog
//! - Reply composition through a generative backend (Gemini)
//! - Deterministic fallback replies when the backend is absent or fails

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{
    score_and_rank, Catalog, ComposedResponse, GenerativeBackend, ProductRecord, RankedResult,
    ResponseComposer,
};

use domain::biofina_catalog;
use infrastructure::catalog::JsonCatalogSource;
use infrastructure::llm::BackendFactory;
use infrastructure::services::AssistantService;
use tracing::info;

/// Build the assistant service from configuration
pub fn create_assistant(config: &AppConfig) -> anyhow::Result<AssistantService> {
    config.validate()?;

    let catalog = load_catalog(config)?;
    let backend = BackendFactory::from_config(&config.backend)?;

    if backend.is_configured() {
        info!(
            "Generative backend '{}' configured with model {}",
            backend.backend_name(),
            config.backend.model
        );
    } else {
        info!("Generative backend not configured, replies will use the fallback templates");
    }

    let composer = ResponseComposer::new(config.fallback.clone()).with_backend(backend);
    let assistant = AssistantService::new(catalog, composer).with_top_k(config.matching.top_k)?;

    Ok(assistant)
}

/// Catalog from the configured file, or the built-in Biofina table
pub fn load_catalog(config: &AppConfig) -> anyhow::Result<Catalog> {
    match &config.catalog.path {
        Some(path) => Ok(JsonCatalogSource::new(path).load()?),
        None => Ok(biofina_catalog().clone()),
    }
}
