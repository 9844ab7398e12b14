//! REST endpoints.

pub mod explain;

pub use explain::{explain, explain_more, health};
