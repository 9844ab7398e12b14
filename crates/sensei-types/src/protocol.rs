//! # Run Stream Protocol Text
//!
//! Fixed strings of the `/ws/run` stream. The gateway sends the server-side
//! markers; the front end appends the client-side notices to its console.

/// Sent when the opening frame carries no code; the connection closes after.
pub const NO_CODE_MESSAGE: &str = "Error: No code provided";

/// Sent before the compiler is invoked.
pub const COMPILING_MESSAGE: &str = "Compiling...\n";

/// Prefix of the compiler diagnostics frame.
pub const COMPILATION_ERROR_PREFIX: &str = "Compilation Error:\n";

/// Sent once the program has been started.
pub const RUNNING_MESSAGE: &str = "Running...\n";

/// Prefix added to every chunk read from the program's stderr.
pub const STDERR_PREFIX: &str = "Error: ";

/// Sent after the program exits.
pub const FINISHED_MESSAGE: &str = "\n[Program Finished]";

/// Prefix of unexpected gateway failures.
pub const SERVER_ERROR_PREFIX: &str = "Server Error: ";

/// Sent when the program is killed for exceeding the configured run time.
pub const TIMEOUT_MESSAGE: &str = "\nError: Program took too long to run (Infinite loop?).";

/// Appended by the client when the stream closes.
pub const DISCONNECTED_NOTICE: &str = "\n\n[Disconnected]";

/// Appended by the client on a transport error.
pub const CONNECTION_ERROR_NOTICE: &str = "\n[Connection Error]";

/// Shown when input is submitted while no program is running.
pub const NOT_RUNNING_NOTICE: &str = "Program is not running";
