//! Error types for the `docrank-core` crate.
//!
//! The engine itself is total over its input domain: empty collections, empty
//! strings, and unparsable dates are defined behaviors, not errors. Failures
//! only arise at configuration edges (synonym assets, weight validation).

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, DocrankError>;

/// Errors produced by `docrank-core`.
#[derive(Debug, Error)]
pub enum DocrankError {
    /// A synonym table asset could not be parsed.
    #[error("invalid synonym table: {reason}")]
    SynonymTable { reason: String },

    /// Score weights failed validation.
    #[error("invalid score weights: {reason}")]
    InvalidWeights { reason: String },
}
