//! Field-weighted term scoring with a linear recency decay.
//!
//! Matches are counted as case-insensitive whole-word occurrences (word
//! boundary matching, never raw substrings) over filename, joined tags, and
//! summary. Scores have no fixed range and are only meaningful relative to
//! other scores of the same invocation.

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::types::{DocumentRecord, ScoreWeights};

/// Age in days at which the recency boost decays to zero.
pub const RECENCY_HORIZON_DAYS: f64 = 365.0;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Score a document against a term set. Always ≥ 0.
///
/// An empty term set contributes no field score and the document is never
/// excluded downstream for it: the absence of a query means "match
/// everything", not "match nothing".
#[must_use]
pub fn score_document(
    document: &DocumentRecord,
    terms: &[String],
    weights: &ScoreWeights,
    now: DateTime<Utc>,
) -> f64 {
    score_with_matchers(document, &compile_terms(terms), weights, now)
}

/// Linear recency boost: `2 · recency_weight` at age zero, decaying to zero at
/// [`RECENCY_HORIZON_DAYS`] and beyond. Never negative; future timestamps
/// clamp to age zero.
#[must_use]
pub fn recency_boost(uploaded: DateTime<Utc>, recency_weight: f64, now: DateTime<Utc>) -> f64 {
    let age_millis = (now - uploaded).num_milliseconds().max(0);
    let age_days = age_millis as f64 / MILLIS_PER_DAY;
    (2.0 - (age_days / RECENCY_HORIZON_DAYS) * 2.0).max(0.0) * recency_weight
}

/// Compile terms into case-insensitive whole-word matchers.
///
/// Empty terms produce no matcher. Metacharacters are escaped, so a term can
/// never corrupt the pattern. `\b` is emitted only against a word-character
/// edge of the term: both neighbors of a punctuation edge are non-word, so an
/// unconditional anchor would make terms like `(final)` or `c++` unmatchable.
pub(crate) fn compile_terms(terms: &[String]) -> Vec<Regex> {
    terms
        .iter()
        .filter(|term| !term.is_empty())
        .filter_map(|term| {
            let lead = if term.starts_with(is_word_char) {
                r"\b"
            } else {
                ""
            };
            let trail = if term.ends_with(is_word_char) {
                r"\b"
            } else {
                ""
            };
            Regex::new(&format!("(?i){lead}{}{trail}", regex::escape(term))).ok()
        })
        .collect()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

pub(crate) fn score_with_matchers(
    document: &DocumentRecord,
    matchers: &[Regex],
    weights: &ScoreWeights,
    now: DateTime<Utc>,
) -> f64 {
    let mut score = 0.0;
    if !matchers.is_empty() {
        let joined_tags = document.joined_tags();
        let summary = document.summary.as_deref().unwrap_or("");
        for matcher in matchers {
            score += weights.filename * count_matches(matcher, &document.filename);
            score += weights.tag * count_matches(matcher, &joined_tags);
            score += weights.summary * count_matches(matcher, summary);
        }
    }
    score + recency_boost(document.uploaded_instant(), weights.recency, now)
}

fn count_matches(matcher: &Regex, text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }
    matcher.find_iter(text).count() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn doc(filename: &str, tags: &[&str], summary: Option<&str>, uploaded_at: &str) -> DocumentRecord {
        DocumentRecord {
            id: "doc".into(),
            filename: filename.into(),
            uploaded_at: uploaded_at.into(),
            category: None,
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            summary: summary.map(str::to_string),
        }
    }

    fn terms(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| (*t).to_string()).collect()
    }

    #[test]
    fn word_boundary_matching_has_no_substring_false_positives() {
        let now = Utc::now();
        let weights = ScoreWeights {
            recency: 0.0,
            ..Default::default()
        };
        let record = doc("category.pdf", &[], None, "");
        assert_eq!(
            score_document(&record, &terms(&["cat"]), &weights, now),
            0.0
        );
        assert!(score_document(&record, &terms(&["category"]), &weights, now) > 0.0);
    }

    #[test]
    fn field_weights_multiply_occurrence_counts() {
        let now = Utc::now();
        let weights = ScoreWeights {
            filename: 3.0,
            tag: 2.0,
            summary: 1.0,
            recency: 0.0,
        };
        // filename: 2 matches, tags: 1, summary: 1 -> 3*2 + 2*1 + 1*1 = 9
        let record = doc(
            "budget budget.pdf",
            &["budget"],
            Some("annual budget"),
            "",
        );
        assert_eq!(
            score_document(&record, &terms(&["budget"]), &weights, now),
            9.0
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        let now = Utc::now();
        let weights = ScoreWeights {
            recency: 0.0,
            ..Default::default()
        };
        let record = doc("BUDGET.pdf", &[], None, "");
        assert_eq!(
            score_document(&record, &terms(&["budget"]), &weights, now),
            3.0
        );
    }

    #[test]
    fn regex_metacharacters_in_terms_are_neutralized() {
        let now = Utc::now();
        let weights = ScoreWeights {
            recency: 0.0,
            ..Default::default()
        };
        let record = doc("report (final).pdf", &[], None, "");
        // "(final)" must match literally, not as a capture group.
        assert!(score_document(&record, &terms(&["(final)"]), &weights, now) > 0.0);
        assert_eq!(score_document(&record, &terms(&[".*"]), &weights, now), 0.0);
    }

    #[test]
    fn punctuation_edged_terms_match_verbatim_occurrences() {
        let now = Utc::now();
        let weights = ScoreWeights {
            recency: 0.0,
            ..Default::default()
        };
        let report = doc("report (final).pdf", &[], None, "");
        assert!(score_document(&report, &terms(&["(final)"]), &weights, now) > 0.0);

        let notes = doc("intro to c++ notes.txt", &[], None, "");
        assert!(score_document(&notes, &terms(&["c++"]), &weights, now) > 0.0);

        // Word-character edges stay anchored: no substring false positives.
        let record = doc("category.pdf", &[], None, "");
        assert_eq!(
            score_document(&record, &terms(&["cat"]), &weights, now),
            0.0
        );
    }

    #[test]
    fn recency_boost_at_age_zero_is_twice_the_weight() {
        let now = Utc::now();
        assert_eq!(recency_boost(now, 1.5, now), 3.0);
    }

    #[test]
    fn recency_boost_is_zero_at_horizon_and_beyond() {
        let now = Utc::now();
        assert_eq!(recency_boost(now - Duration::days(365), 1.5, now), 0.0);
        assert_eq!(recency_boost(now - Duration::days(900), 10.0, now), 0.0);
    }

    #[test]
    fn recency_boost_decays_halfway_at_half_horizon() {
        let now = Utc::now();
        let boost = recency_boost(now - Duration::days(365) / 2, 2.0, now);
        assert!((boost - 2.0).abs() < 1e-6, "got {boost}");
    }

    #[test]
    fn future_timestamps_clamp_to_age_zero() {
        let now = Utc::now();
        assert_eq!(recency_boost(now + Duration::days(30), 1.0, now), 2.0);
    }

    #[test]
    fn unparsable_upload_date_gets_no_recency_boost() {
        let now = Utc::now();
        let record = doc("memo.txt", &[], None, "garbage");
        let weights = ScoreWeights::default();
        assert_eq!(score_document(&record, &[], &weights, now), 0.0);
    }

    #[test]
    fn empty_terms_score_is_recency_only() {
        let now = Utc::now();
        let record = doc("memo.txt", &[], None, &now.to_rfc3339());
        let weights = ScoreWeights::default();
        assert_eq!(score_document(&record, &[], &weights, now), 3.0);
    }
}
