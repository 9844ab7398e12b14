//! Domain types for the gateway.
//!
//! Configuration and error handling.

pub mod config;
pub mod error;

// Re-exports for convenience
pub use config::{
    ConfigError, CorsConfig, GatewayConfig, HttpConfig, RunnerConfig, WebSocketConfig,
};
pub use error::{GatewayError, RunError};
