//! Service Layer
//!
//! `RuleExplainer` compiles the catalogue once and answers lookups against it.

use tracing::debug;

use crate::domain::{
    catalog::RULES, is_structural, Detail, Rule, RuleSpec, FALLBACK_EXPLANATION,
    STRUCTURAL_EXPLANATION,
};
use crate::error::ExplainError;
use crate::ports::LineExplainer;

/// Explainer backed by an ordered list of compiled rules.
#[derive(Debug, Clone)]
pub struct RuleExplainer {
    rules: Vec<Rule>,
}

impl RuleExplainer {
    /// Build from the built-in catalogue.
    pub fn new() -> Result<Self, ExplainError> {
        Self::with_rules(RULES)
    }

    /// Build from a custom, ordered rule table.
    pub fn with_rules(specs: &[RuleSpec]) -> Result<Self, ExplainError> {
        let rules = specs
            .iter()
            .copied()
            .map(Rule::compile)
            .collect::<Result<Vec<_>, _>>()?;
        debug!(rules = rules.len(), "Compiled explanation rules");
        Ok(Self { rules })
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

impl LineExplainer for RuleExplainer {
    fn explain_line(&self, line: &str) -> String {
        let line = line.trim();
        if is_structural(line) {
            return STRUCTURAL_EXPLANATION.to_string();
        }
        self.rules
            .iter()
            .find_map(|rule| rule.summarize(line))
            .unwrap_or_else(|| FALLBACK_EXPLANATION.to_string())
    }

    fn explain_more(&self, line: &str) -> Option<Detail> {
        let line = line.trim();
        self.rules.iter().find_map(|rule| rule.detail(line))
    }
}
