//! Relevance scoring of catalog products against user queries

mod scorer;

pub use scorer::{
    score_and_rank, score_record, RankedResult, ScoredMatch, DEFAULT_TOP_K, EXACT_TITLE_WEIGHT,
    KEYWORD_WEIGHT, QUERY_PREFIX_WEIGHT, QUERY_WORD_WEIGHT, TITLE_WORD_WEIGHT,
};
