//! Gateway error types.

use std::path::PathBuf;

use sensei_explain::ExplainError;

use super::config::ConfigError;

/// Gateway-level errors
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rule table failed to build
    #[error("explainer error: {0}")]
    Explain(#[from] ExplainError),

    /// Server socket bind error
    #[error("server bind error: {0}")]
    Bind(String),

    /// Server failed while running
    #[error("server error: {0}")]
    Server(String),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors of a single compile-and-run session
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// Opening frame had no code
    #[error("no code provided")]
    NoCode,

    /// Work directory or source file could not be written
    #[error("failed to prepare {path}: {source}")]
    Workspace {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configured program could not be started
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Compiler exited unsuccessfully
    #[error("compilation failed")]
    Compile { stderr: String },

    /// Command template expanded to nothing
    #[error("empty command")]
    EmptyCommand,

    /// Pipe I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_error_names_program() {
        let err = RunError::Spawn {
            program: "g++".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().starts_with("failed to start 'g++'"));
    }

    #[test]
    fn test_config_error_converts() {
        let err: GatewayError = ConfigError::EmptyCommand("compile_command").into();
        assert_eq!(
            err.to_string(),
            "configuration error: runner.compile_command cannot be empty"
        );
    }
}
