//! Domain layer - Catalog, relevance scoring and response composition

pub mod backend;
pub mod catalog;
pub mod error;
pub mod matching;
pub mod response;

pub use backend::{BackendError, GenerativeBackend};
pub use catalog::{biofina_catalog, Catalog, ProductRecord};
pub use error::DomainError;
pub use matching::{score_and_rank, score_record, RankedResult, ScoredMatch, DEFAULT_TOP_K};
pub use response::{
    ensure_reminder, BackendNotice, ComposedResponse, FallbackTemplates, ResponseComposer,
    ResponseSource,
};
