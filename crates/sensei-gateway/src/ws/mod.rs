//! WebSocket module for the run stream.

pub mod handler;

pub use handler::RunSessionHandler;
