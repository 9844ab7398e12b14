//! Cross-crate integration flows.

pub mod harness;

mod client_flow;
mod explain_flow;
mod run_flow;
