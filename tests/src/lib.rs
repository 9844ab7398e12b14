//! # Sensei Test Suite
//!
//! End-to-end flows against a real gateway bound on `127.0.0.1:0`.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── harness.rs      # Gateway fixture and socket helpers
//!     ├── explain_flow.rs # /explain, /explain/more, /health over HTTP
//!     ├── run_flow.rs     # /ws/run protocol
//!     └── client_flow.rs  # sensei-tui clients against the gateway
//! ```
//!
//! Programs are shell scripts: the gateway is configured with `sh -n` as the
//! compile step and `sh` as the run step, so no C++ toolchain is needed.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p sensei-tests
//! ```

pub mod integration;
