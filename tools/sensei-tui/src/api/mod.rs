//! Gateway clients: HTTP explanations and the run stream.

mod client;
mod ws;

pub use client::{explain_source, ClientError, ExplainClient, HttpExplainClient};
pub use ws::WsConnector;
