#![deny(clippy::all, clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![cfg_attr(
    test,
    allow(clippy::float_cmp, clippy::uninlined_format_args, clippy::useless_vec)
)]
#![allow(clippy::module_name_repetitions)]
//
// Documentation lints: internal/self-documenting functions don't need
// extensive docs. Public APIs should still have proper documentation.
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
//
// Match counts and day ages are small; f64 precision loss is not a concern.
#![allow(clippy::cast_precision_loss)]

/// The docrank-core crate version (matches `Cargo.toml`).
pub const DOCRANK_CORE_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod filter;
pub mod highlight;
pub mod rank;
pub mod score;
pub mod terms;
pub mod types;

pub use error::{DocrankError, Result};
pub use highlight::{HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN, highlight};
pub use rank::RelevanceEngine;
pub use score::{RECENCY_HORIZON_DAYS, recency_boost, score_document};
pub use terms::{SynonymTable, extract_terms};
pub use types::{
    DocumentRecord, FilterCriteria, RankRequest, RankResponse, RankedHit, ScoreWeights, SortMode,
    parse_uploaded_at,
};
