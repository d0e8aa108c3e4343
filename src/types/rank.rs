//! Ranking request and decorated response types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::document::DocumentRecord;
use super::query::{FilterCriteria, ScoreWeights, SortMode};

/// One ranking invocation: query text, structured filters, weights, and sort
/// mode, bundled the way a search screen owns them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankRequest {
    /// Raw user query text.
    pub query: String,
    #[serde(default)]
    /// Structured filters, ANDed together.
    pub criteria: FilterCriteria,
    #[serde(default)]
    /// Scoring weights for this call.
    pub weights: ScoreWeights,
    #[serde(default)]
    /// Result ordering.
    pub sort: SortMode,
    #[serde(default)]
    /// Expand query terms through the bilingual synonym table.
    pub expand_synonyms: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Explicit clock for recency scoring and deterministic tests.
    /// Defaults to the current instant.
    pub now: Option<DateTime<Utc>>,
}

impl RankRequest {
    /// Request with the given query text and default everything else.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }
}

/// A single ranked hit with presentation decorations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedHit {
    /// 1-based position in the result list.
    pub rank: usize,
    /// Relevance score; only meaningful relative to other hits of the same
    /// invocation.
    pub score: f64,
    /// Filename with matched terms wrapped in highlight markers.
    pub highlighted_filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Summary with matched terms wrapped in highlight markers, when present.
    pub highlighted_summary: Option<String>,
    /// The underlying document, unmodified.
    pub document: DocumentRecord,
}

/// Full decorated ranking response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankResponse {
    /// Query echoed back for clients.
    pub query: String,
    /// Milliseconds spent satisfying the request.
    pub elapsed_ms: u128,
    /// Number of hits after filtering and the zero-score drop.
    pub total: usize,
    /// Ordered hits.
    pub hits: Vec<RankedHit>,
}
