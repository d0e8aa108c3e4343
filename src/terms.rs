//! Query term extraction and bilingual synonym expansion.

use std::collections::{BTreeSet, HashMap};

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::{DocrankError, Result};

static EMBEDDED_SYNONYMS: &str = include_str!("../data/synonyms.json");

#[allow(clippy::non_std_lazy_statics)]
static BUILTIN: Lazy<SynonymTable> = Lazy::new(|| {
    SynonymTable::from_json(EMBEDDED_SYNONYMS).unwrap_or_else(|err| {
        tracing::error!("embedded synonym table failed to parse: {err}");
        SynonymTable::default()
    })
});

/// Split a raw query into normalized search terms.
///
/// Lower-cases, trims, and splits on runs of whitespace. Tokens containing a
/// colon are silently excluded (reserved for field-qualified syntax), as are
/// empty tokens. No stemming and no de-duplication: duplicates are harmless to
/// downstream counting.
#[must_use]
pub fn extract_terms(raw_query: &str) -> Vec<String> {
    raw_query
        .trim()
        .to_lowercase()
        .split_whitespace()
        .filter(|token| !token.contains(':'))
        .map(str::to_string)
        .collect()
}

/// Bilingual synonym table used to expand extracted terms.
///
/// Built from groups of mutually-synonymous terms; looking up any member of a
/// group yields the rest. The built-in table ships as a JSON asset so
/// extending it requires no code change.
#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    entries: HashMap<String, Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct SynonymAsset {
    groups: Vec<Vec<String>>,
}

impl SynonymTable {
    /// Build a table from synonym groups. Terms are lower-cased; empty terms
    /// and single-member groups contribute nothing.
    #[must_use]
    pub fn from_groups<I, G, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: HashMap<String, Vec<String>> = HashMap::new();
        for group in groups {
            let members: Vec<String> = group
                .into_iter()
                .map(|term| term.as_ref().trim().to_lowercase())
                .filter(|term| !term.is_empty())
                .collect();
            if members.len() < 2 {
                continue;
            }
            for term in &members {
                let synonyms = entries.entry(term.clone()).or_default();
                for other in &members {
                    if other != term && !synonyms.contains(other) {
                        synonyms.push(other.clone());
                    }
                }
            }
        }
        Self { entries }
    }

    /// Parse a table from its JSON asset form: `{"groups": [["a", "b"], ...]}`.
    pub fn from_json(raw: &str) -> Result<Self> {
        let asset: SynonymAsset =
            serde_json::from_str(raw).map_err(|err| DocrankError::SynonymTable {
                reason: err.to_string(),
            })?;
        Ok(Self::from_groups(asset.groups))
    }

    /// The built-in bilingual table shipped with the crate.
    #[must_use]
    pub fn builtin() -> &'static SynonymTable {
        &BUILTIN
    }

    /// Synonyms recorded for a term, if any.
    #[must_use]
    pub fn synonyms_of(&self, term: &str) -> Option<&[String]> {
        self.entries.get(&term.to_lowercase()).map(Vec::as_slice)
    }

    /// Expand a term list through the table.
    ///
    /// The output contains every input term plus any synonyms found,
    /// de-duplicated; terms with no table entry pass through unchanged.
    #[must_use]
    pub fn expand(&self, terms: &[String]) -> BTreeSet<String> {
        let mut expanded = BTreeSet::new();
        for term in terms {
            let term = term.to_lowercase();
            if let Some(synonyms) = self.entries.get(&term) {
                expanded.extend(synonyms.iter().cloned());
            }
            expanded.insert(term);
        }
        expanded
    }

    /// Number of terms with at least one synonym.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
