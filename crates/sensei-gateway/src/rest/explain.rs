//! Explanation and health endpoints.

use axum::extract::State;
use axum::Json;
use sensei_types::{ExplainMoreResponse, ExplainRequest, ExplainResponse, HealthResponse};
use tracing::debug;

use crate::service::AppState;

/// `POST /explain`
pub async fn explain(
    State(state): State<AppState>,
    Json(request): Json<ExplainRequest>,
) -> Json<ExplainResponse> {
    let explanation = state.explainer.explain_line(&request.line);
    debug!(line = %request.line, "Explained line");
    Json(ExplainResponse::new(explanation))
}

/// `POST /explain/more`: `null` when no rule matches.
pub async fn explain_more(
    State(state): State<AppState>,
    Json(request): Json<ExplainRequest>,
) -> Json<Option<ExplainMoreResponse>> {
    Json(
        state
            .explainer
            .explain_more(&request.line)
            .map(|detail| ExplainMoreResponse {
                detail: detail.description,
                url: detail.url,
            }),
    )
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
