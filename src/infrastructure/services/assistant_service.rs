//! Assistant service - one chat turn from query to reply

use tracing::{debug, info};

use crate::domain::{
    score_and_rank, Catalog, ComposedResponse, DomainError, RankedResult, ResponseComposer,
    DEFAULT_TOP_K,
};

/// Scores the catalog for a query and composes the reply
#[derive(Debug, Clone)]
pub struct AssistantService {
    catalog: Catalog,
    composer: ResponseComposer,
    top_k: usize,
}

impl AssistantService {
    pub fn new(catalog: Catalog, composer: ResponseComposer) -> Self {
        Self {
            catalog,
            composer,
            top_k: DEFAULT_TOP_K,
        }
    }

    pub fn with_top_k(mut self, top_k: usize) -> Result<Self, DomainError> {
        if top_k == 0 {
            return Err(DomainError::validation("top_k must be at least 1"));
        }
        self.top_k = top_k;
        Ok(self)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn composer(&self) -> &ResponseComposer {
        &self.composer
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Rank the catalog with the configured `top_k`
    pub fn rank(&self, query: &str) -> RankedResult {
        self.rank_top(query, self.top_k)
    }

    pub fn rank_top(&self, query: &str, top_k: usize) -> RankedResult {
        score_and_rank(query, self.catalog.records(), top_k)
    }

    /// Handle one chat turn
    pub async fn respond(&self, query: &str) -> ComposedResponse {
        let ranked = self.rank(query);
        debug!(matches = ?ranked.titles(), "Ranked catalog");

        let response = self.composer.compose(query, &ranked).await;
        info!(
            source = ?response.source,
            matches = ranked.len(),
            degraded = response.notice.is_some(),
            "Composed reply"
        );
        response
    }
}
