//! Response composition: generative backend first, deterministic fallback second

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::fallback::FallbackTemplates;
use super::reminder::ensure_reminder;
use crate::domain::backend::{BackendError, GenerativeBackend};
use crate::domain::catalog::ProductRecord;
use crate::domain::matching::RankedResult;

/// Which path produced the reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseSource {
    Generated,
    Fallback,
}

/// Non-fatal report of a backend failure, for display next to the reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendNotice {
    pub backend: String,
    pub error: BackendError,
}

impl fmt::Display for BackendNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error using {}: {}. Falling back to simple response.",
            self.backend, self.error
        )
    }
}

/// Final reply for one chat turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedResponse {
    pub text: String,
    pub source: ResponseSource,
    pub notice: Option<BackendNotice>,
}

impl ComposedResponse {
    fn fallback(text: String, notice: Option<BackendNotice>) -> Self {
        Self {
            text,
            source: ResponseSource::Fallback,
            notice,
        }
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

/// Turns a query and its ranked products into reply text.
///
/// Backend faults never escape `compose`; they become a fallback reply plus
/// a [`BackendNotice`].
#[derive(Clone, Default)]
pub struct ResponseComposer {
    backend: Option<Arc<dyn GenerativeBackend>>,
    templates: FallbackTemplates,
}

impl fmt::Debug for ResponseComposer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseComposer")
            .field("backend", &self.backend.as_ref().map(|b| b.backend_name()))
            .field("templates", &self.templates)
            .finish()
    }
}

impl ResponseComposer {
    pub fn new(templates: FallbackTemplates) -> Self {
        Self {
            backend: None,
            templates,
        }
    }

    pub fn with_backend(mut self, backend: Arc<dyn GenerativeBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Whether a configured backend will be tried first
    pub fn backend_available(&self) -> bool {
        self.configured_backend().is_some()
    }

    pub fn backend_name(&self) -> Option<&'static str> {
        self.backend.as_ref().map(|b| b.backend_name())
    }

    pub fn templates(&self) -> &FallbackTemplates {
        &self.templates
    }

    /// Compose the reply for `query`. Always returns non-empty text carrying
    /// the consultation reminder.
    pub async fn compose(&self, query: &str, ranked: &RankedResult) -> ComposedResponse {
        let Some(backend) = self.configured_backend() else {
            debug!("No generative backend configured, using fallback reply");
            return ComposedResponse::fallback(self.compose_fallback(ranked), None);
        };

        let context: Vec<ProductRecord> = ranked.records().cloned().collect();

        match generate_checked(backend.as_ref(), query, &context).await {
            Ok(text) => {
                info!(
                    backend = backend.backend_name(),
                    matches = context.len(),
                    "Generated reply"
                );
                ComposedResponse {
                    text: ensure_reminder(text),
                    source: ResponseSource::Generated,
                    notice: None,
                }
            }
            Err(error) => {
                warn!(
                    backend = backend.backend_name(),
                    error = %error,
                    "Generative backend failed, using fallback reply"
                );
                let notice = BackendNotice {
                    backend: backend.backend_name().to_string(),
                    error,
                };
                ComposedResponse::fallback(self.compose_fallback(ranked), Some(notice))
            }
        }
    }

    /// Deterministic reply built from `ranked` alone
    pub fn compose_fallback(&self, ranked: &RankedResult) -> String {
        ensure_reminder(self.templates.render(ranked))
    }

    fn configured_backend(&self) -> Option<&Arc<dyn GenerativeBackend>> {
        self.backend.as_ref().filter(|b| b.is_configured())
    }
}

async fn generate_checked(
    backend: &dyn GenerativeBackend,
    query: &str,
    context: &[ProductRecord],
) -> Result<String, BackendError> {
    let text = backend.generate(query, context).await?;

    if text.trim().is_empty() {
        return Err(BackendError::malformed(
            backend.backend_name(),
            "empty response text",
        ));
    }

    Ok(text)
}
