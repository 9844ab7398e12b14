//! # Sensei Types Crate
//!
//! Types shared by the gateway (`sensei-gateway`) and the terminal front end
//! (`sensei-tui`).
//!
//! ## Contents
//!
//! - **Wire envelopes** (`wire`): the JSON bodies of `/explain`,
//!   `/explain/more`, `/health` and the opening frame of `/ws/run`.
//! - **Protocol text** (`protocol`): the fixed strings the run stream
//!   exchanges (progress markers, error prefixes, client notices).
//! - **Modes** (`modes`): explanation display mode, explanation style and
//!   the persisted theme.

pub mod errors;
pub mod modes;
pub mod protocol;
pub mod wire;

pub use errors::TypesError;
pub use modes::{ExplanationMode, Region, StyleMode, Theme, THEME_KEY};
pub use wire::{ExplainMoreResponse, ExplainRequest, ExplainResponse, HealthResponse, RunRequest};
