//! Ports Layer
//!
//! Defines the driving port used by callers (the gateway's REST handlers).

pub mod inbound;

pub use inbound::LineExplainer;
