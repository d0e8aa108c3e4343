//! Structured filtering evaluated as a single predicate over documents.
//!
//! Criteria are ANDed in a fixed order: category (or no-category), has-tags,
//! tag any-match, date range. Date bounds are compared at day granularity
//! using local-time boundaries, matching the behavior observed in the
//! consuming screens.

use chrono::{
    DateTime, Duration, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc,
};

use crate::types::{DocumentRecord, FilterCriteria};

impl FilterCriteria {
    /// Evaluate every criterion against a document.
    #[must_use]
    pub fn matches(&self, document: &DocumentRecord) -> bool {
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            // Canonical category strings are exact, case-sensitive.
            if document.category.as_deref() != Some(category) {
                return false;
            }
        } else if self.no_category && document.has_category() {
            return false;
        }

        if self.has_tags && document.tags.is_empty() {
            return false;
        }

        if !self.tags.is_empty() {
            let wanted: Vec<String> = self.tags.iter().map(|tag| tag.to_lowercase()).collect();
            let any_match = document
                .tags
                .iter()
                .any(|tag| wanted.iter().any(|w| *w == tag.to_lowercase()));
            if !any_match {
                return false;
            }
        }

        if self.date_from.is_some() || self.date_to.is_some() {
            let uploaded = document.uploaded_instant();
            if let Some(from) = self.date_from {
                if uploaded < local_day_start(from) {
                    return false;
                }
            }
            if let Some(to) = self.date_to {
                if uploaded > local_day_end(to) {
                    return false;
                }
            }
        }

        true
    }

    /// Borrowing closure form of [`Self::matches`], for callers composing
    /// iterator pipelines.
    #[must_use]
    pub fn build_predicate(&self) -> impl Fn(&DocumentRecord) -> bool + '_ {
        move |document| self.matches(document)
    }

    /// True when no criterion is set, i.e. the predicate keeps everything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.category.as_deref().is_none_or(str::is_empty)
            && !self.no_category
            && self.tags.is_empty()
            && !self.has_tags
            && self.date_from.is_none()
            && self.date_to.is_none()
    }
}

/// 00:00:00.000 local time on the given day, as a UTC instant.
fn local_day_start(date: NaiveDate) -> DateTime<Utc> {
    resolve_local(date.and_time(NaiveTime::MIN), true)
}

/// 23:59:59.999 local time on the given day, as a UTC instant.
fn local_day_end(date: NaiveDate) -> DateTime<Utc> {
    let end = date
        .and_time(NaiveTime::MIN)
        .checked_add_signed(Duration::days(1) - Duration::milliseconds(1))
        .unwrap_or_else(|| date.and_time(NaiveTime::MIN));
    resolve_local(end, false)
}

/// Resolve a naive local datetime to UTC. Ambiguous times (fall-back) take the
/// earliest reading for range starts and the latest for range ends, keeping
/// the inclusive range maximal; nonexistent times (spring-forward) fall back
/// to a UTC reading.
fn resolve_local(naive: NaiveDateTime, earliest: bool) -> DateTime<Utc> {
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(local) => local.with_timezone(&Utc),
        LocalResult::Ambiguous(first, second) => {
            let picked = if earliest { first } else { second };
            picked.with_timezone(&Utc)
        }
        LocalResult::None => naive.and_utc(),
    }
}
