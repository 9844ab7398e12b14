//! Explanation client for the gateway's `/explain` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use sensei_types::{ExplainRequest, ExplainResponse};
use thiserror::Error;

use crate::domain::{candidate_lines, LineExplanation, LinePanel};

/// Errors that can occur when asking for an explanation.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Failed to parse response: {0}")]
    Parse(String),
    #[error("Connection failed: {0}")]
    Connection(String),
}

#[async_trait]
pub trait ExplainClient: Send + Sync {
    async fn explain(&self, line: &str) -> Result<ExplainResponse, ClientError>;
}

/// POSTs `{"line": ...}` to `<base>/explain`.
pub struct HttpExplainClient {
    client: Client,
    endpoint: String,
}

impl HttpExplainClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        // No request timeout: a slow line holds up the rest of the batch.
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(2))
            .build()
            .map_err(ClientError::Http)?;

        let base = base_url.into();
        Ok(Self {
            client,
            endpoint: format!("{}/explain", base.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ExplainClient for HttpExplainClient {
    async fn explain(&self, line: &str) -> Result<ExplainResponse, ClientError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&ExplainRequest::new(line))
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ClientError::Connection(e.to_string())
                } else {
                    ClientError::Http(e)
                }
            })?;

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Parse(e.to_string()))
    }
}

/// Explain every candidate line of `source`, one request at a time.
///
/// Requests go out in line order and each is awaited before the next.
/// The first failure discards everything gathered so far.
pub async fn explain_source(client: &dyn ExplainClient, source: &str) -> LinePanel {
    let mut entries = Vec::new();

    for line in candidate_lines(source) {
        match client.explain(&line.text).await {
            Ok(response) => {
                entries.push(LineExplanation::new(&line, response.explanation_text()));
            }
            Err(e) => {
                tracing::warn!(line = line.number, error = %e, "Explanation request failed");
                return LinePanel::failed(e);
            }
        }
    }

    if entries.is_empty() {
        LinePanel::Empty
    } else {
        LinePanel::Entries(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // =========================================================================
    // Mock client
    // =========================================================================

    #[derive(Default)]
    struct Recording {
        requests: Mutex<Vec<String>>,
        fail_on: Option<usize>,
    }

    #[async_trait]
    impl ExplainClient for Recording {
        async fn explain(&self, line: &str) -> Result<ExplainResponse, ClientError> {
            let mut requests = self.requests.lock().unwrap();
            requests.push(line.to_string());
            if self.fail_on == Some(requests.len()) {
                return Err(ClientError::Connection("connection refused".into()));
            }
            Ok(ExplainResponse::new(format!("about {line}")))
        }
    }

    struct Silent;

    #[async_trait]
    impl ExplainClient for Silent {
        async fn explain(&self, _line: &str) -> Result<ExplainResponse, ClientError> {
            Ok(serde_json::from_str("{}").unwrap())
        }
    }

    // =========================================================================
    // explain_source
    // =========================================================================

    #[tokio::test]
    async fn test_one_request_per_candidate_in_order() {
        let client = Recording::default();
        let panel = explain_source(&client, "// comment\nint x = 1;\n\nreturn x;").await;

        assert_eq!(
            *client.requests.lock().unwrap(),
            vec!["int x = 1;".to_string(), "return x;".to_string()]
        );
        let LinePanel::Entries(entries) = panel else {
            panic!("expected entries");
        };
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].number, 2);
        assert_eq!(entries[0].explanation, "about int x = 1;");
        assert_eq!(entries[1].number, 4);
    }

    #[tokio::test]
    async fn test_nothing_to_explain() {
        let client = Recording::default();
        let panel = explain_source(&client, "\n// only a comment\n").await;
        assert_eq!(panel, LinePanel::Empty);
        assert!(client.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failure_aborts_batch() {
        let client = Recording {
            fail_on: Some(2),
            ..Default::default()
        };
        let panel = explain_source(&client, "a;\nb;\nc;\nd;").await;

        assert_eq!(client.requests.lock().unwrap().len(), 2);
        assert_eq!(
            panel,
            LinePanel::Failed(
                "Error getting explanations: Connection failed: connection refused. Is the server running?"
                    .into()
            )
        );
    }

    #[tokio::test]
    async fn test_missing_explanation_renders_empty() {
        let panel = explain_source(&Silent, "int x;").await;
        let LinePanel::Entries(entries) = panel else {
            panic!("expected entries");
        };
        assert_eq!(entries[0].explanation, "");
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let client = HttpExplainClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8000/explain");
    }
}
