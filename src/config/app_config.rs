use serde::Deserialize;

use crate::domain::{DomainError, FallbackTemplates, DEFAULT_TOP_K};

/// Conventional environment variable holding the Gemini API key
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub backend: BackendConfig,
    pub matching: MatchingConfig,
    pub catalog: CatalogConfig,
    pub fallback: FallbackTemplates,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Generative backend settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    pub top_k: usize,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON catalog file; the built-in Biofina table is used when unset
    pub path: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-1.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            timeout_secs: 30,
            temperature: 0.7,
            top_p: 0.95,
            top_k: 40,
            max_output_tokens: 1024,
        }
    }
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl AppConfig {
    /// Load from `config/default`, `config/local` and `APP__*` variables,
    /// then apply `GEMINI_API_KEY`.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut app_config: Self = config.try_deserialize()?;

        if let Ok(api_key) = std::env::var(GEMINI_API_KEY_ENV) {
            app_config.backend.api_key = Some(api_key);
        }

        Ok(app_config)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.matching.top_k == 0 {
            return Err(DomainError::configuration("matching.top_k must be at least 1"));
        }

        if self.backend.timeout_secs == 0 {
            return Err(DomainError::configuration(
                "backend.timeout_secs must be at least 1",
            ));
        }

        if !(0.0..=2.0).contains(&self.backend.temperature) {
            return Err(DomainError::configuration(format!(
                "backend.temperature {} must be between 0.0 and 2.0",
                self.backend.temperature
            )));
        }

        if !(0.0..=1.0).contains(&self.backend.top_p) {
            return Err(DomainError::configuration(format!(
                "backend.top_p {} must be between 0.0 and 1.0",
                self.backend.top_p
            )));
        }

        if self.fallback.categories.is_empty() {
            return Err(DomainError::configuration(
                "fallback.categories must list at least one category",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.matching.top_k, 2);
        assert_eq!(config.backend.model, "gemini-1.5-flash");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.catalog.path.is_none());
    }

    #[test]
    fn test_zero_top_k_rejected() {
        let mut config = AppConfig::default();
        config.matching.top_k = 0;

        assert!(matches!(
            config.validate(),
            Err(DomainError::Configuration { .. })
        ));
    }

    #[test]
    fn test_out_of_range_sampling_rejected() {
        let mut config = AppConfig::default();
        config.backend.top_p = 1.5;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.backend.temperature = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_categories_rejected() {
        let mut config = AppConfig::default();
        config.fallback.categories.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_sections_deserialize() {
        let config: AppConfig = serde_json::from_value(serde_json::json!({
            "matching": { "top_k": 3 },
            "logging": { "format": "json" },
            "backend": { "model": "gemini-1.5-pro" }
        }))
        .unwrap();

        assert_eq!(config.matching.top_k, 3);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.backend.model, "gemini-1.5-pro");
        assert_eq!(config.backend.max_output_tokens, 1024);
        assert_eq!(config.fallback.brand, "Biofina");
    }
}
