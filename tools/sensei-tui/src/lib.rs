//! Sensei TUI: terminal front end for the Sensei C++ learning environment.
//!
//! Talks to the gateway like the browser page does: `POST /explain` once per
//! code line, and one `/ws/run` stream per program run.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────┐ keys  ┌──────────────────────────────┐ draw ┌──────┐
//! │ crossterm  │──────▶│ App (domain)                 │─────▶│  ui  │
//! └────────────┘       │  Editor, ViewState, Chat ... │      └──────┘
//!                      │  ExecutionStream ──┐         │
//!                      └────────▲───────────┼─────────┘
//!                               │ events    │ connect / send_line
//!                      ┌────────┴───────────▼─────────┐
//!                      │ api: HttpExplainClient,      │──▶ gateway
//!                      │      WsConnector             │
//!                      └──────────────────────────────┘
//! ```

pub mod api;
pub mod domain;
pub mod ui;

pub use domain::{App, AppEvents, AppOptions};
