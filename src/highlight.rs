//! Match highlighting for displayed text.
//!
//! Terms are combined into a single case-insensitive alternation and applied
//! in one pass, so overlapping terms resolve to one highlighted span and no
//! text is ever double-wrapped.

use regex::Regex;

/// Opening highlight marker, matching what the rendering layer styles.
pub const HIGHLIGHT_OPEN: &str = "<mark class=\"search-highlight\">";
/// Closing highlight marker.
pub const HIGHLIGHT_CLOSE: &str = "</mark>";

/// Wrap every matched term span in `text` with the highlight markers.
///
/// With an empty term set this is the identity: the input is returned
/// unchanged, markup-like characters included. Every term is escaped before
/// matching, so regex metacharacters in user input cannot corrupt the pattern
/// or inject into the matching engine.
#[must_use]
pub fn highlight(text: &str, terms: &[String]) -> String {
    let Some(pattern) = combined_pattern(terms) else {
        return text.to_string();
    };
    pattern
        .replace_all(text, |caps: &regex::Captures<'_>| {
            format!("{HIGHLIGHT_OPEN}{}{HIGHLIGHT_CLOSE}", &caps[0])
        })
        .into_owned()
}

/// Build one alternation over all non-empty terms, longest alternative first
/// so a longer term wins over a shorter prefix of itself.
fn combined_pattern(terms: &[String]) -> Option<Regex> {
    let mut escaped: Vec<String> = terms
        .iter()
        .filter(|term| !term.is_empty())
        .map(|term| regex::escape(term))
        .collect();
    if escaped.is_empty() {
        return None;
    }
    escaped.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    escaped.dedup();
    Regex::new(&format!("(?i)(?:{})", escaped.join("|"))).ok()
}
