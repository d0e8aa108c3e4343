//! Public types exposed by the `docrank-core` crate.

pub mod document;
pub mod query;
pub mod rank;

pub use document::{DocumentRecord, parse_uploaded_at};
pub use query::{FilterCriteria, ScoreWeights, SortMode};
pub use rank::{RankRequest, RankResponse, RankedHit};
