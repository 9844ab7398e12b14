//! Domain Layer - Pure explanation logic
//!
//! RULES:
//! - No I/O operations
//! - No async code

pub mod catalog;
pub mod rule;
pub mod template;

pub use rule::{Detail, Rule, RuleSpec};

/// Returned for purely structural lines (`{`, `}`, `};`) and empty input.
pub const STRUCTURAL_EXPLANATION: &str = "...";

/// Returned when no rule matches.
pub const FALLBACK_EXPLANATION: &str = "Line analysis unsupported. (AI Explanation Available)";

/// Lines that carry no meaning on their own.
pub const STRUCTURAL_LINES: [&str; 3] = ["{", "}", "};"];

/// Whether a trimmed line is skipped without consulting the rules.
pub fn is_structural(trimmed: &str) -> bool {
    trimmed.is_empty() || STRUCTURAL_LINES.contains(&trimmed)
}
