//! # Explanation Flow
//!
//! `/explain`, `/explain/more` and `/health` over real HTTP.

#[cfg(test)]
mod tests {
    use crate::integration::harness::TestGateway;
    use sensei_explain::{FALLBACK_EXPLANATION, STRUCTURAL_EXPLANATION};
    use sensei_types::{ExplainMoreResponse, ExplainResponse, HealthResponse};
    use serde_json::json;
    use tempfile::TempDir;

    async fn explain(gateway: &TestGateway, path: &str, line: &str) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}{path}", gateway.http_url()))
            .json(&json!({ "line": line }))
            .send()
            .await
            .unwrap()
    }

    // =========================================================================
    // /explain
    // =========================================================================

    #[tokio::test]
    async fn test_explain_known_line() {
        let dir = TempDir::new().unwrap();
        let gateway = TestGateway::start(dir.path()).await;

        let response = explain(&gateway, "/explain", "  int count = 0;  ").await;
        assert!(response.status().is_success());
        let body: ExplainResponse = response.json().await.unwrap();
        assert_eq!(
            body.explanation_text(),
            "INTEGER DECLARATION: Creating a whole number variable 'count'."
        );
    }

    #[tokio::test]
    async fn test_explain_structural_and_unknown_lines() {
        let dir = TempDir::new().unwrap();
        let gateway = TestGateway::start(dir.path()).await;

        let body: ExplainResponse = explain(&gateway, "/explain", "};").await.json().await.unwrap();
        assert_eq!(body.explanation_text(), STRUCTURAL_EXPLANATION);

        let body: ExplainResponse = explain(&gateway, "/explain", "@@@").await.json().await.unwrap();
        assert_eq!(body.explanation_text(), FALLBACK_EXPLANATION);
    }

    #[tokio::test]
    async fn test_explain_rejects_malformed_body() {
        let dir = TempDir::new().unwrap();
        let gateway = TestGateway::start(dir.path()).await;

        let response = reqwest::Client::new()
            .post(format!("{}/explain", gateway.http_url()))
            .json(&json!({ "text": "int x;" }))
            .send()
            .await
            .unwrap();
        assert!(response.status().is_client_error());
    }

    // =========================================================================
    // /explain/more and /health
    // =========================================================================

    #[tokio::test]
    async fn test_explain_more() {
        let dir = TempDir::new().unwrap();
        let gateway = TestGateway::start(dir.path()).await;

        let body: Option<ExplainMoreResponse> = explain(&gateway, "/explain/more", "int count = 0;")
            .await
            .json()
            .await
            .unwrap();
        let detail = body.expect("detail for a known line");
        assert!(!detail.detail.is_empty());
        assert!(detail.url.starts_with("https://en.cppreference.com/"));

        let body: Option<ExplainMoreResponse> =
            explain(&gateway, "/explain/more", "@@@").await.json().await.unwrap();
        assert!(body.is_none());
    }

    #[tokio::test]
    async fn test_health() {
        let dir = TempDir::new().unwrap();
        let gateway = TestGateway::start(dir.path()).await;

        let body: HealthResponse = reqwest::get(format!("{}/health", gateway.http_url()))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body.status, "ok");
    }
}
