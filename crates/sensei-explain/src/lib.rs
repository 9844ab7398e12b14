//! # Sensei Explain
//!
//! Rule-based explanations for single lines of C++ source.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - `Rule`: compiled pattern plus summary/detail templates
//!   - `catalog`: the ordered rule table
//!   - `template`: placeholder substitution from capture groups
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `LineExplainer`: Driving port used by the gateway
//!
//! - **Service Layer** (`service`): `RuleExplainer` implements `LineExplainer`
//!
//! ## Matching
//!
//! Rules are tried in catalogue order against the trimmed line and the first
//! rule whose pattern matches anywhere in the line wins. Specific rules sit
//! before generic ones.
//!
//! ## Usage Example
//!
//! ```
//! use sensei_explain::{LineExplainer, RuleExplainer};
//!
//! let explainer = RuleExplainer::new().unwrap();
//! assert_eq!(
//!     explainer.explain_line("int count = 0;"),
//!     "INTEGER DECLARATION: Creating a whole number variable 'count'."
//! );
//! ```

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use domain::{Detail, Rule, RuleSpec, FALLBACK_EXPLANATION, STRUCTURAL_EXPLANATION};
pub use error::ExplainError;
pub use ports::LineExplainer;
pub use service::RuleExplainer;
