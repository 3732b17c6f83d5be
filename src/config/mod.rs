//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, BackendConfig, CatalogConfig, LogFormat, LoggingConfig, MatchingConfig,
    GEMINI_API_KEY_ENV,
};
