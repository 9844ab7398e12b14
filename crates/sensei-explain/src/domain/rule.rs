//! Rule definition and matching

use regex::{Captures, Regex};

use super::template;
use crate::error::ExplainError;

/// Static description of a rule, compiled into a [`Rule`].
#[derive(Debug, Clone, Copy)]
pub struct RuleSpec {
    /// Pattern searched for anywhere in the trimmed line.
    pub pattern: &'static str,
    /// One-line, scannable explanation.
    pub summary: &'static str,
    /// Long-form concept explanation.
    pub detail: &'static str,
    /// Reference documentation.
    pub url: &'static str,
}

/// Drill-down for a matched line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detail {
    pub description: String,
    pub url: String,
}

/// A compiled rule
#[derive(Debug, Clone)]
pub struct Rule {
    regex: Regex,
    spec: RuleSpec,
}

impl Rule {
    pub fn compile(spec: RuleSpec) -> Result<Self, ExplainError> {
        let regex = Regex::new(spec.pattern).map_err(|source| ExplainError::InvalidPattern {
            pattern: spec.pattern,
            source,
        })?;
        Ok(Self { regex, spec })
    }

    pub fn spec(&self) -> &RuleSpec {
        &self.spec
    }

    /// Formatted summary if the rule matches `line`.
    pub fn summarize(&self, line: &str) -> Option<String> {
        let caps = self.regex.captures(line)?;
        Some(template::render(self.spec.summary, &groups(&caps)))
    }

    /// Formatted detail if the rule matches `line`.
    pub fn detail(&self, line: &str) -> Option<Detail> {
        let caps = self.regex.captures(line)?;
        Some(Detail {
            description: template::render(self.spec.detail, &groups(&caps)),
            url: self.spec.url.to_string(),
        })
    }
}

/// Capture groups 1..N (group 0 is the whole match and is not exposed).
fn groups<'h>(caps: &Captures<'h>) -> Vec<Option<&'h str>> {
    caps.iter().skip(1).map(|m| m.map(|m| m.as_str())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEC: RuleSpec = RuleSpec {
        pattern: r"while\s*\((.*)\)",
        summary: "WHILE LOOP: Repeating code as long as '{}' is true.",
        detail: "Loops while the condition holds.",
        url: "https://en.cppreference.com/w/cpp/language/while",
    };

    #[test]
    fn test_summarize_match() {
        let rule = Rule::compile(SPEC).unwrap();
        assert_eq!(
            rule.summarize("while (n > 0) {").as_deref(),
            Some("WHILE LOOP: Repeating code as long as 'n > 0' is true.")
        );
    }

    #[test]
    fn test_no_match() {
        let rule = Rule::compile(SPEC).unwrap();
        assert!(rule.summarize("for (;;)").is_none());
        assert!(rule.detail("for (;;)").is_none());
    }

    #[test]
    fn test_invalid_pattern() {
        let spec = RuleSpec {
            pattern: r"do\s*{(",
            ..SPEC
        };
        assert!(matches!(
            Rule::compile(spec),
            Err(ExplainError::InvalidPattern { .. })
        ));
    }
}
