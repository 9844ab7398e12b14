//! # Sensei Gateway
//!
//! The server half of the Sensei learning environment.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      SENSEI GATEWAY                           │
//! ├──────────────────────────────────────────────────────────────┤
//! │  POST /explain        POST /explain/more       GET /health    │
//! │        │                      │                               │
//! │        └──────── LineExplainer (sensei-explain) ──────┐       │
//! │                                                       │       │
//! │  GET /ws/run ──► RunSessionHandler                    │       │
//! │                    │  Workspace (temp_<uuid>.cpp/.exe)│       │
//! │                    │  compile ──► spawn ──► pump      │       │
//! │                    ▼                                   │       │
//! │              text frames out / stdin lines in         │       │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Run Stream
//!
//! The client opens `/ws/run` and sends `{"code": "..."}`. The gateway
//! answers with `Compiling...\n`, then either `Compilation Error:\n` plus
//! diagnostics, or `Running...\n` followed by the program's output as it is
//! produced. Text frames from the client are fed to the program's stdin.
//! `\n[Program Finished]` closes a completed run.
//!
//! # Usage
//!
//! ```ignore
//! use sensei_gateway::{GatewayConfig, GatewayService};
//!
//! let service = GatewayService::new(GatewayConfig::default())?;
//! let listener = service.bind().await?;
//! service.serve(listener, async { let _ = tokio::signal::ctrl_c().await; }).await?;
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod domain;
pub mod middleware;
pub mod rest;
pub mod runner;
pub mod service;
pub mod ws;

pub use domain::{ConfigError, GatewayConfig, GatewayError, RunError};
pub use service::{AppState, GatewayService};
pub use ws::RunSessionHandler;
