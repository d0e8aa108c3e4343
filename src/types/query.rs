//! Filter criteria, scoring weights, and sort modes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{DocrankError, Result};

/// Structured filter criteria applied before scoring.
///
/// All criteria are ANDed together; an absent criterion is a no-op, never a
/// rejection. `Default` therefore matches every document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Exact-match category. When set, `no_category` is ignored.
    pub category: Option<String>,
    #[serde(default)]
    /// Keep only documents with an empty or absent category.
    pub no_category: bool,
    #[serde(default)]
    /// Requested tags; a document matches when any of its tags equals any of
    /// these, case-insensitively.
    pub tags: Vec<String>,
    #[serde(default)]
    /// Keep only documents with a non-empty tag list.
    pub has_tags: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Inclusive lower date bound, floored to 00:00:00.000 local time.
    pub date_from: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Inclusive upper date bound, ceilinged to 23:59:59.999 local time.
    pub date_to: Option<NaiveDate>,
}

/// Field multipliers for relevance scoring.
///
/// These are user-adjustable session state owned by the calling screen; the
/// engine accepts them on every call and holds no hidden global.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreWeights {
    /// Multiplier for whole-word matches in the filename.
    pub filename: f64,
    /// Multiplier for matches in the joined tag string.
    pub tag: f64,
    /// Multiplier for matches in the summary.
    pub summary: f64,
    /// Multiplier for the linear recency boost.
    pub recency: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            filename: 3.0,
            tag: 2.0,
            summary: 1.0,
            recency: 1.5,
        }
    }
}

impl ScoreWeights {
    /// Reject negative or non-finite multipliers.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("filename", self.filename),
            ("tag", self.tag),
            ("summary", self.summary),
            ("recency", self.recency),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(DocrankError::InvalidWeights {
                    reason: format!("{name} weight must be a non-negative finite number, got {value}"),
                });
            }
        }
        Ok(())
    }
}

/// Ordering applied to the ranked result list.
///
/// `Relevance` keeps the scorer-produced order; every other mode ignores the
/// score and re-sorts by the named field. All modes are stable: equal keys
/// keep their filter-stage order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    #[default]
    Relevance,
    DateDesc,
    DateAsc,
    NameAsc,
    NameDesc,
    CategoryAsc,
}
