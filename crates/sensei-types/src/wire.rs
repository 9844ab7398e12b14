//! # Wire Envelopes
//!
//! JSON bodies exchanged between the front end and the gateway. No schema
//! validation is layered on top: a response missing its field deserializes
//! to an empty value rather than failing.

use serde::{Deserialize, Serialize};

/// Body of `POST /explain` and `POST /explain/more`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplainRequest {
    /// The trimmed source line to explain.
    pub line: String,
}

impl ExplainRequest {
    pub fn new(line: impl Into<String>) -> Self {
        Self { line: line.into() }
    }
}

/// Response of `POST /explain`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplainResponse {
    #[serde(default)]
    pub explanation: Option<String>,
}

impl ExplainResponse {
    pub fn new(explanation: impl Into<String>) -> Self {
        Self {
            explanation: Some(explanation.into()),
        }
    }

    /// Explanation text, or an empty string when the field was absent.
    pub fn explanation_text(&self) -> &str {
        self.explanation.as_deref().unwrap_or("")
    }
}

/// Response of `POST /explain/more` when a rule matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplainMoreResponse {
    /// Long-form explanation of the concept.
    pub detail: String,
    /// Reference documentation link.
    pub url: String,
}

/// Opening frame of the `/ws/run` stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRequest {
    #[serde(default)]
    pub code: Option<String>,
}

impl RunRequest {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
        }
    }

    /// The submitted source, or `None` when it is missing or empty.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref().filter(|c| !c.is_empty())
    }
}

/// Response of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_explanation_is_empty() {
        let resp: ExplainResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(resp.explanation, None);
        assert_eq!(resp.explanation_text(), "");
    }

    #[test]
    fn test_explanation_keeps_raw_markup() {
        let resp: ExplainResponse =
            serde_json::from_str(r#"{"explanation":"uses <b>cout</b>"}"#).unwrap();
        assert_eq!(resp.explanation_text(), "uses <b>cout</b>");
    }

    #[test]
    fn test_run_request_wire_shape() {
        let json = serde_json::to_string(&RunRequest::new("int main() {}")).unwrap();
        assert_eq!(json, r#"{"code":"int main() {}"}"#);
    }

    #[test]
    fn test_run_request_empty_code() {
        let req: RunRequest = serde_json::from_str(r#"{"code":""}"#).unwrap();
        assert_eq!(req.code(), None);

        let req: RunRequest = serde_json::from_str(r#"{"other":1}"#).unwrap();
        assert_eq!(req.code(), None);
    }
}
