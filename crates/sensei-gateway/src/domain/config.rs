//! Gateway configuration with validation.
//!
//! Every section has defaults, so an empty TOML file (or none at all) yields
//! a server equivalent to `g++` on `0.0.0.0:8000`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding `http.host`.
pub const ENV_HOST: &str = "SENSEI_HOST";
/// Environment variable overriding `http.port`.
pub const ENV_PORT: &str = "SENSEI_PORT";
/// Environment variable overriding the compiler program.
pub const ENV_COMPILER: &str = "SENSEI_COMPILER";

/// Placeholder for the source file path in command templates.
pub const SRC_TOKEN: &str = "{src}";
/// Placeholder for the executable path in command templates.
pub const EXE_TOKEN: &str = "{exe}";

/// Main gateway configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// HTTP server configuration
    pub http: HttpConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Compile and run configuration
    pub runner: RunnerConfig,
    /// WebSocket configuration
    pub websocket: WebSocketConfig,
}

impl GatewayConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply `SENSEI_*` overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST) {
            self.http.host = host
                .parse()
                .map_err(|_| ConfigError::InvalidOverride(ENV_HOST, host))?;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.http.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidOverride(ENV_PORT, port))?;
        }
        if let Some(compiler) = lookup(ENV_COMPILER) {
            if compiler.trim().is_empty() {
                return Err(ConfigError::InvalidOverride(ENV_COMPILER, compiler));
            }
            match self.runner.compile_command.first_mut() {
                Some(program) => *program = compiler,
                None => self.runner.compile_command.push(compiler),
            }
        }
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.runner.compile_command.is_empty() {
            return Err(ConfigError::EmptyCommand("compile_command"));
        }
        if self.runner.run_command.is_empty() {
            return Err(ConfigError::EmptyCommand("run_command"));
        }
        if self.runner.read_buffer_size == 0 {
            return Err(ConfigError::InvalidLimit(
                "runner.read_buffer_size cannot be 0".into(),
            ));
        }
        if self.runner.source_extension.is_empty() {
            return Err(ConfigError::Invalid(
                "runner.source_extension cannot be empty".into(),
            ));
        }

        if self.websocket.max_message_size == 0 {
            return Err(ConfigError::InvalidLimit(
                "websocket.max_message_size cannot be 0".into(),
            ));
        }
        if self.websocket.output_buffer == 0 {
            return Err(ConfigError::InvalidLimit(
                "websocket.output_buffer cannot be 0".into(),
            ));
        }

        Ok(())
    }

    /// Get HTTP server bind address
    pub fn http_addr(&self) -> SocketAddr {
        SocketAddr::new(self.http.host, self.http.port)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Bind address
    pub host: IpAddr,
    /// Port (default: 8000, 0 = OS-assigned)
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)),
            port: 8000,
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Enable CORS
    pub enabled: bool,
    /// Allowed origins ("*" for all)
    pub allowed_origins: Vec<String>,
    /// Allowed methods ("*" for all)
    pub allowed_methods: Vec<String>,
    /// Allowed headers ("*" for all)
    pub allowed_headers: Vec<String>,
    /// Max age for preflight cache
    pub max_age: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: vec!["*".to_string()],
            allowed_methods: vec!["*".to_string()],
            allowed_headers: vec!["*".to_string()],
            max_age: 86400, // 24 hours
        }
    }
}

/// Compile and run configuration
///
/// Command templates are argument vectors; `{src}` and `{exe}` inside any
/// argument are replaced with the per-run source and executable paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Compiler invocation
    pub compile_command: Vec<String>,
    /// Program invocation
    pub run_command: Vec<String>,
    /// Extension of the written source file
    pub source_extension: String,
    /// Directory holding per-run temporary files
    pub work_dir: PathBuf,
    /// Kill the program after this many seconds (0 = unlimited)
    pub max_runtime_secs: u64,
    /// Bytes read from a program pipe per chunk
    pub read_buffer_size: usize,
}

impl RunnerConfig {
    /// Run time limit, if one is configured.
    pub fn max_runtime(&self) -> Option<Duration> {
        (self.max_runtime_secs > 0).then(|| Duration::from_secs(self.max_runtime_secs))
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            compile_command: vec![
                "g++".to_string(),
                SRC_TOKEN.to_string(),
                "-o".to_string(),
                EXE_TOKEN.to_string(),
            ],
            run_command: vec![EXE_TOKEN.to_string()],
            source_extension: "cpp".to_string(),
            work_dir: std::env::temp_dir().join("sensei"),
            max_runtime_secs: 0,
            read_buffer_size: 1024,
        }
    }
}

/// WebSocket configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebSocketConfig {
    /// Maximum incoming message size in bytes
    pub max_message_size: usize,
    /// Capacity of the program output channel
    pub output_buffer: usize,
}

impl Default for WebSocketConfig {
    fn default() -> Self {
        Self {
            max_message_size: 1024 * 1024, // 1MB
            output_buffer: 256,
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("failed to read {path}: {error}")]
    Io { path: String, error: String },
    /// TOML parsing error
    #[error("failed to parse config: {0}")]
    Parse(String),
    /// Environment override could not be parsed
    #[error("invalid value for {0}: {1:?}")]
    InvalidOverride(&'static str, String),
    /// A command template has no program
    #[error("runner.{0} cannot be empty")]
    EmptyCommand(&'static str),
    /// Invalid size or count limit
    #[error("invalid limit: {0}")]
    InvalidLimit(String),
    /// General configuration error
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
