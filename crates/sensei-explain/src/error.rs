//! Error types for the explain subsystem

use thiserror::Error;

/// Errors that can occur while building the rule table
#[derive(Debug, Error)]
pub enum ExplainError {
    #[error("Invalid rule pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: &'static str,
        #[source]
        source: regex::Error,
    },
}
