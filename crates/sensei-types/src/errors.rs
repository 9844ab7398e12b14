//! # Error Types
//!
//! Errors raised while interpreting shared values.

use thiserror::Error;

/// Errors produced when parsing shared enums from their string form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypesError {
    /// Stored theme value is neither `light` nor `dark`.
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    /// Explanation mode string is not one of `idle`, `line`, `full`.
    #[error("Unknown explanation mode: {0}")]
    UnknownMode(String),
}
