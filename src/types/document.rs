//! The normalized document shape consumed by the engine.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// A document record as produced by the backend-facing normalization layer.
///
/// The engine treats records as read-only: scores and highlighted text are
/// produced as new values alongside the record, never written back. Field
/// names follow the normalized wire shape (`uploadedAt` etc.); raw legacy
/// variants (`uploaded_at`, `keywords` CSV) are an upstream concern and never
/// reach this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    /// Opaque unique identifier.
    pub id: String,
    /// Display name; non-empty in practice but treated as possibly empty.
    pub filename: String,
    /// Upload timestamp in a parseable string form. Absent or unparsable
    /// values are treated as the Unix epoch (oldest possible).
    #[serde(default)]
    pub uploaded_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional single classification.
    pub category: Option<String>,
    #[serde(default)]
    /// Ordered tag list; duplicates are not guaranteed to be absent.
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional free-text summary.
    pub summary: Option<String>,
}

impl DocumentRecord {
    /// Parse `uploaded_at` into an instant, falling back to the Unix epoch.
    ///
    /// This is the single parsing point for upload timestamps; filtering and
    /// scoring both go through it so the epoch fallback behaves identically
    /// everywhere.
    #[must_use]
    pub fn uploaded_instant(&self) -> DateTime<Utc> {
        parse_uploaded_at(&self.uploaded_at)
    }

    /// Tags joined with `", "`, the text form the scorer counts matches in.
    #[must_use]
    pub fn joined_tags(&self) -> String {
        self.tags.join(", ")
    }

    pub(crate) fn has_category(&self) -> bool {
        self.category.as_deref().is_some_and(|c| !c.is_empty())
    }
}

/// Parse an ISO-ish upload timestamp.
///
/// Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS[.fff]` date-time (space
/// separator also accepted), or a bare `YYYY-MM-DD` date. Anything else maps
/// to the Unix epoch, which fails any lower date bound and passes any upper
/// one by design.
#[must_use]
pub fn parse_uploaded_at(raw: &str) -> DateTime<Utc> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return DateTime::<Utc>::UNIX_EPOCH;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return parsed.with_timezone(&Utc);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.and_utc();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f") {
        return naive.and_utc();
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_time(NaiveTime::MIN).and_utc();
    }
    DateTime::<Utc>::UNIX_EPOCH
}
