//! Rule-based relevance scoring of catalog records against free text.
//!
//! Every signal is a case-insensitive substring test against the lowercased
//! query, so the function is deterministic and free of side effects.

use std::cmp::Ordering;

use serde::Serialize;

use crate::domain::catalog::ProductRecord;

/// Number of records returned when the caller does not ask for more
pub const DEFAULT_TOP_K: usize = 2;

/// Bonus when the full title occurs in the query
pub const EXACT_TITLE_WEIGHT: u32 = 10;
/// Bonus per title word longer than three characters found in the query
pub const TITLE_WORD_WEIGHT: u32 = 5;
/// Bonus per keyword found in the query
pub const KEYWORD_WEIGHT: u32 = 3;
/// Bonus per query word contained in some keyword
pub const QUERY_WORD_WEIGHT: u32 = 2;
/// Bonus per query word whose prefix is contained in some long keyword
pub const QUERY_PREFIX_WEIGHT: u32 = 1;

/// Words must be strictly longer than this to count
const MIN_WORD_CHARS: usize = 3;
/// Length of the misspelling-tolerant prefix
const PREFIX_CHARS: usize = 4;

/// A record paired with its score for one query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredMatch {
    pub record: ProductRecord,
    pub score: u32,
}

/// Top-K positively scored records, best first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RankedResult {
    matches: Vec<ScoredMatch>,
}

impl RankedResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn matches(&self) -> &[ScoredMatch] {
        &self.matches
    }

    pub fn records(&self) -> impl Iterator<Item = &ProductRecord> {
        self.matches.iter().map(|m| &m.record)
    }

    pub fn titles(&self) -> Vec<&str> {
        self.records().map(|r| r.title.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

impl FromIterator<ScoredMatch> for RankedResult {
    fn from_iter<T: IntoIterator<Item = ScoredMatch>>(iter: T) -> Self {
        Self {
            matches: iter.into_iter().collect(),
        }
    }
}

/// Score every record against `query` and keep the best `top_k`.
///
/// Records are ordered by descending score; equal scores keep catalog order.
/// Records scoring zero are dropped, so an empty query always yields an empty
/// result. A `top_k` of zero also yields an empty result.
pub fn score_and_rank(query: &str, catalog: &[ProductRecord], top_k: usize) -> RankedResult {
    let query = query.to_lowercase();

    let mut scored: Vec<(usize, &ProductRecord, u32)> = catalog
        .iter()
        .enumerate()
        .map(|(position, record)| (position, record, score_normalized(&query, record)))
        .collect();

    scored.sort_by(|a, b| match b.2.cmp(&a.2) {
        Ordering::Equal => a.0.cmp(&b.0),
        other => other,
    });

    scored
        .into_iter()
        .filter(|(_, _, score)| *score > 0)
        .take(top_k)
        .map(|(_, record, score)| ScoredMatch {
            record: record.clone(),
            score,
        })
        .collect()
}

/// Relevance score of a single record for `query`
pub fn score_record(query: &str, record: &ProductRecord) -> u32 {
    score_normalized(&query.to_lowercase(), record)
}

fn score_normalized(query: &str, record: &ProductRecord) -> u32 {
    let title = record.title.to_lowercase();
    let keywords: Vec<String> = record.keywords.iter().map(|k| k.to_lowercase()).collect();

    let mut score = 0;

    if !title.is_empty() && query.contains(&title) {
        score += EXACT_TITLE_WEIGHT;
    }

    score += title
        .split_whitespace()
        .filter(|word| is_significant(word) && query.contains(word))
        .count() as u32
        * TITLE_WORD_WEIGHT;

    score += keywords
        .iter()
        .filter(|keyword| !keyword.is_empty() && query.contains(keyword.as_str()))
        .count() as u32
        * KEYWORD_WEIGHT;

    for word in query.split_whitespace().filter(|w| is_significant(w)) {
        if keywords.iter().any(|keyword| keyword.contains(word)) {
            score += QUERY_WORD_WEIGHT;
        } else {
            let prefix = char_prefix(word, PREFIX_CHARS);
            if keywords
                .iter()
                .any(|keyword| keyword.chars().count() > PREFIX_CHARS && keyword.contains(prefix))
            {
                score += QUERY_PREFIX_WEIGHT;
            }
        }
    }

    score
}

fn is_significant(word: &str) -> bool {
    word.chars().count() > MIN_WORD_CHARS
}

fn char_prefix(word: &str, chars: usize) -> &str {
    match word.char_indices().nth(chars) {
        Some((end, _)) => &word[..end],
        None => word,
    }
}
