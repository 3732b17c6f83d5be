use async_trait::async_trait;

use super::BackendError;
use crate::domain::catalog::ProductRecord;

#[cfg(test)]
use mockall::automock;

/// Natural-language generation capability (Gemini, etc.)
///
/// Callers must check [`GenerativeBackend::is_configured`] before calling
/// [`GenerativeBackend::generate`].
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Whether credentials are present and the backend can be called
    fn is_configured(&self) -> bool;

    /// Produce a reply to `query` using the matched records as context
    async fn generate(
        &self,
        query: &str,
        context_records: &[ProductRecord],
    ) -> Result<String, BackendError>;

    /// Backend name used in logs and notices
    fn backend_name(&self) -> &'static str;
}
