//! Compile-and-run machinery behind `/ws/run`.
//!
//! - `workspace`: per-run temp files, removed on drop
//! - `process`: compiler/program invocation and output pumping
//! - `hints`: friendly notes for common compiler errors

pub mod hints;
pub mod process;
pub mod workspace;

pub use hints::{compile_error_message, friendly_hint};
pub use process::{compile, expand_command, pump, spawn_program, Utf8Chunker};
pub use workspace::Workspace;
