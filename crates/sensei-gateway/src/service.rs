//! Gateway service - router construction and serving.

use std::future::Future;
use std::sync::Arc;

use axum::{
    extract::{ws::WebSocketUpgrade, State},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use sensei_explain::{LineExplainer, RuleExplainer};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::domain::{GatewayConfig, GatewayError};
use crate::middleware::create_cors_layer;
use crate::rest;
use crate::ws::RunSessionHandler;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub explainer: Arc<dyn LineExplainer>,
    pub config: Arc<GatewayConfig>,
}

/// The gateway: explanation endpoints plus the run stream
pub struct GatewayService {
    state: AppState,
}

impl GatewayService {
    /// Create a service with the built-in rule table.
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        config.validate()?;
        let explainer = RuleExplainer::new()?;
        info!(rules = explainer.rule_count(), "Explanation rules loaded");
        Ok(Self::with_explainer(config, Arc::new(explainer)))
    }

    /// Create a service around any explainer.
    pub fn with_explainer(config: GatewayConfig, explainer: Arc<dyn LineExplainer>) -> Self {
        Self {
            state: AppState {
                explainer,
                config: Arc::new(config),
            },
        }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.state.config
    }

    /// Build the HTTP router
    pub fn router(&self) -> Router {
        Router::new()
            .route("/explain", post(rest::explain))
            .route("/explain/more", post(rest::explain_more))
            .route("/health", get(rest::health))
            .route("/ws/run", get(run_stream))
            .layer(create_cors_layer(&self.state.config.cors))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Bind the configured HTTP address.
    pub async fn bind(&self) -> Result<TcpListener, GatewayError> {
        let addr = self.state.config.http_addr();
        TcpListener::bind(addr)
            .await
            .map_err(|e| GatewayError::Bind(format!("{addr}: {e}")))
    }

    /// Serve on `listener` until `shutdown` resolves.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<(), GatewayError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Ok(addr) = listener.local_addr() {
            info!(%addr, "Sensei gateway listening");
        }
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| GatewayError::Server(e.to_string()))?;
        info!("Sensei gateway stopped");
        Ok(())
    }
}

/// `GET /ws/run`
async fn run_stream(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    let handler = RunSessionHandler::new(&state.config);
    ws.max_message_size(state.config.websocket.max_message_size)
        .on_upgrade(move |socket| handler.handle(socket))
}
