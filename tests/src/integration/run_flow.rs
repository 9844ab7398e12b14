//! # Run Stream Flow
//!
//! The `/ws/run` protocol end to end: opening frame, compile step,
//! streamed output, stdin forwarding and the closing marker.

#[cfg(test)]
mod tests {
    use crate::integration::harness::{
        collect_until_close, next_text, opening, read_until, runner_config, TestGateway,
    };
    use futures_util::SinkExt;
    use sensei_types::protocol::{
        COMPILATION_ERROR_PREFIX, COMPILING_MESSAGE, FINISHED_MESSAGE, NO_CODE_MESSAGE,
        RUNNING_MESSAGE, TIMEOUT_MESSAGE,
    };
    use tempfile::TempDir;
    use tokio_tungstenite::tungstenite::Message;

    // =========================================================================
    // Opening frame
    // =========================================================================

    #[tokio::test]
    async fn test_missing_code_rejected() {
        let dir = TempDir::new().unwrap();
        let gateway = TestGateway::start(dir.path()).await;

        for frame in [r#"{"source":"echo hi"}"#, r#"{"code":""}"#, "not json"] {
            let mut socket = gateway.open_run(frame).await;
            assert_eq!(next_text(&mut socket).await.as_deref(), Some(NO_CODE_MESSAGE));
            assert_eq!(next_text(&mut socket).await, None);
        }
    }

    // =========================================================================
    // Compile step
    // =========================================================================

    #[tokio::test]
    async fn test_compile_error_reported() {
        let dir = TempDir::new().unwrap();
        let gateway = TestGateway::start(dir.path()).await;

        let mut socket = gateway.open_run(&opening("if then\n")).await;
        let output = collect_until_close(&mut socket).await;

        let rest = output
            .strip_prefix(COMPILING_MESSAGE)
            .expect("compiling marker first");
        assert!(rest.starts_with(COMPILATION_ERROR_PREFIX));
        assert!(!output.contains(RUNNING_MESSAGE));
        assert!(!output.contains(FINISHED_MESSAGE));
    }

    // =========================================================================
    // Running
    // =========================================================================

    #[tokio::test]
    async fn test_program_output_streamed() {
        let dir = TempDir::new().unwrap();
        let gateway = TestGateway::start(dir.path()).await;

        let mut socket = gateway.open_run(&opening("echo hello\necho world\n")).await;
        let output = collect_until_close(&mut socket).await;

        assert_eq!(
            output,
            format!("{COMPILING_MESSAGE}{RUNNING_MESSAGE}hello\nworld\n{FINISHED_MESSAGE}")
        );
    }

    #[tokio::test]
    async fn test_stderr_prefixed() {
        let dir = TempDir::new().unwrap();
        let gateway = TestGateway::start(dir.path()).await;

        let mut socket = gateway.open_run(&opening("echo oops >&2\n")).await;
        let output = collect_until_close(&mut socket).await;

        assert!(output.contains("Error: oops"));
        assert!(output.ends_with(FINISHED_MESSAGE));
    }

    #[tokio::test]
    async fn test_stdin_forwarded() {
        let dir = TempDir::new().unwrap();
        let gateway = TestGateway::start(dir.path()).await;

        let script = "read name\necho \"Hello, $name\"\n";
        let mut socket = gateway.open_run(&opening(script)).await;
        read_until(&mut socket, RUNNING_MESSAGE).await;

        // Empty frames are not forwarded.
        socket.send(Message::Text(String::new().into())).await.unwrap();
        socket.send(Message::Text("Ada".to_string().into())).await.unwrap();

        let output = collect_until_close(&mut socket).await;
        assert_eq!(output, format!("Hello, Ada\n{FINISHED_MESSAGE}"));
    }

    #[tokio::test]
    async fn test_run_time_limit() {
        let dir = TempDir::new().unwrap();
        let mut runner = runner_config(dir.path());
        runner.max_runtime_secs = 1;
        let gateway = TestGateway::start_with(runner).await;

        let mut socket = gateway.open_run(&opening("echo start\nsleep 30\n")).await;
        let output = collect_until_close(&mut socket).await;

        assert!(output.contains("start\n"));
        assert!(output.contains(TIMEOUT_MESSAGE));
        assert!(output.ends_with(FINISHED_MESSAGE));
    }

    #[tokio::test]
    async fn test_workspace_cleaned_after_run() {
        let dir = TempDir::new().unwrap();
        let gateway = TestGateway::start(dir.path()).await;

        let mut socket = gateway.open_run(&opening("echo done\n")).await;
        collect_until_close(&mut socket).await;

        // Files are removed when the session ends, just after the close frame.
        let mut leftover = usize::MAX;
        for _ in 0..50 {
            leftover = std::fs::read_dir(dir.path())
                .map(|entries| entries.count())
                .unwrap_or(0);
            if leftover == 0 {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        }
        assert_eq!(leftover, 0);
    }
}
