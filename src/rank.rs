//! Ranking orchestration: filter, score, and order a candidate document set.
//!
//! This is the client-side fallback path used when a server-side relevance
//! endpoint is unavailable or errors, and the direct path for instant
//! filtering over an already-fetched set. It produces a result for any input:
//! an empty candidate set yields an empty list, and a query consisting only of
//! excluded tokens degrades to the filtered set in filter order.

use std::cmp::{Ordering, Reverse};
use std::time::Instant;

use chrono::Utc;

use crate::highlight::highlight;
use crate::score::{compile_terms, score_with_matchers};
use crate::terms::{SynonymTable, extract_terms};
use crate::types::{DocumentRecord, RankRequest, RankResponse, RankedHit, SortMode};

/// A document paired with its relevance score, alive only during ranking.
#[derive(Debug, Clone)]
struct ScoredDocument {
    document: DocumentRecord,
    score: f64,
}

/// Pipeline output: the scored survivors plus the term list that scored them
/// (synonym-expanded when requested), reused for highlighting.
struct RankedSet {
    entries: Vec<ScoredDocument>,
    terms: Vec<String>,
}

/// The relevance engine: pure, synchronous, no I/O and no shared state.
///
/// Holds only the synonym table; weights, criteria, and sort mode arrive with
/// every request. Safe to call concurrently from multiple callers.
#[derive(Debug, Clone)]
pub struct RelevanceEngine {
    synonyms: SynonymTable,
}

impl Default for RelevanceEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RelevanceEngine {
    /// Engine with the built-in bilingual synonym table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            synonyms: SynonymTable::builtin().clone(),
        }
    }

    /// Engine with an injected synonym table.
    #[must_use]
    pub fn with_synonyms(synonyms: SynonymTable) -> Self {
        Self { synonyms }
    }

    /// Filter, score, and order a candidate set, returning the documents in
    /// final order. Pagination is the caller's responsibility.
    #[must_use]
    pub fn rank(&self, documents: &[DocumentRecord], request: &RankRequest) -> Vec<DocumentRecord> {
        self.ranked(documents, request)
            .entries
            .into_iter()
            .map(|scored| scored.document)
            .collect()
    }

    /// Like [`Self::rank`], but returns the decorated response consumed by
    /// search screens: per-hit rank, score, and highlighted filename/summary.
    #[must_use]
    pub fn search(&self, documents: &[DocumentRecord], request: &RankRequest) -> RankResponse {
        let started = Instant::now();
        let RankedSet { entries, terms } = self.ranked(documents, request);
        let hits: Vec<RankedHit> = entries
            .into_iter()
            .enumerate()
            .map(|(index, scored)| RankedHit {
                rank: index + 1,
                score: scored.score,
                highlighted_filename: highlight(&scored.document.filename, &terms),
                highlighted_summary: scored
                    .document
                    .summary
                    .as_deref()
                    .map(|summary| highlight(summary, &terms)),
                document: scored.document,
            })
            .collect();
        RankResponse {
            query: request.query.clone(),
            elapsed_ms: started.elapsed().as_millis(),
            total: hits.len(),
            hits,
        }
    }

    fn ranked(&self, documents: &[DocumentRecord], request: &RankRequest) -> RankedSet {
        let now = request.now.unwrap_or_else(Utc::now);
        let started = Instant::now();

        // Filtering precedes scoring; excluded documents never reach the scorer.
        let predicate = request.criteria.build_predicate();
        let candidates: Vec<&DocumentRecord> =
            documents.iter().filter(|doc| predicate(doc)).collect();
        let candidate_count = candidates.len();

        let raw_terms = extract_terms(&request.query);
        let raw_term_count = raw_terms.len();
        let has_terms = raw_term_count > 0;
        let terms: Vec<String> = if request.expand_synonyms {
            self.synonyms.expand(&raw_terms).into_iter().collect()
        } else {
            raw_terms
        };
        let matchers = compile_terms(&terms);

        let mut scored: Vec<ScoredDocument> = candidates
            .into_iter()
            .map(|document| ScoredDocument {
                score: score_with_matchers(document, &matchers, &request.weights, now),
                document: document.clone(),
            })
            .collect();

        // A query that extracted real text terms drops zero-score documents.
        // A query of only excluded tokens (e.g. "field:value") extracts no
        // terms and degrades to no text-relevance filtering at all.
        if has_terms {
            scored.retain(|entry| entry.score > 0.0);
        }

        // Without text terms there is no relevance signal; relevance mode then
        // keeps the filter-stage order instead of reordering by recency alone.
        if has_terms || !matches!(request.sort, SortMode::Relevance) {
            sort_scored(&mut scored, request.sort);
        }

        tracing::debug!(
            candidates = candidate_count,
            survivors = scored.len(),
            terms = raw_term_count,
            expanded_terms = terms.len(),
            sort = ?request.sort,
            elapsed_us = started.elapsed().as_micros(),
            "ranked document set"
        );

        RankedSet {
            entries: scored,
            terms,
        }
    }
}

/// Stable ordering per sort mode; equal keys keep their filter-stage order.
fn sort_scored(scored: &mut [ScoredDocument], mode: SortMode) {
    match mode {
        SortMode::Relevance => {
            scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        }
        SortMode::DateDesc => {
            scored.sort_by_cached_key(|entry| Reverse(entry.document.uploaded_instant()));
        }
        SortMode::DateAsc => {
            scored.sort_by_cached_key(|entry| entry.document.uploaded_instant());
        }
        SortMode::NameAsc => {
            scored.sort_by_cached_key(|entry| entry.document.filename.to_lowercase());
        }
        SortMode::NameDesc => {
            scored.sort_by_cached_key(|entry| Reverse(entry.document.filename.to_lowercase()));
        }
        SortMode::CategoryAsc => {
            scored.sort_by_cached_key(|entry| {
                entry
                    .document
                    .category
                    .as_deref()
                    .unwrap_or("")
                    .to_lowercase()
            });
        }
    }
}
