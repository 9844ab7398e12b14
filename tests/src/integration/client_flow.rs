//! # Client Flow
//!
//! The terminal front end's clients (`HttpExplainClient`, `WsConnector`)
//! driven against a live gateway.

#[cfg(test)]
mod tests {
    use std::net::TcpListener;
    use std::time::Duration;

    use crate::integration::harness::{TestGateway, STEP_TIMEOUT};
    use sensei_tui::api::{explain_source, HttpExplainClient, WsConnector};
    use sensei_tui::domain::{ConsoleEvent, ConsoleEventKind, ConsoleLog, ExecutionStream, LinePanel};
    use sensei_types::protocol::{DISCONNECTED_NOTICE, FINISHED_MESSAGE, RUNNING_MESSAGE};
    use tempfile::TempDir;
    use tokio::sync::mpsc;

    async fn next_event(rx: &mut mpsc::UnboundedReceiver<ConsoleEvent>) -> ConsoleEvent {
        tokio::time::timeout(STEP_TIMEOUT, rx.recv())
            .await
            .expect("event within timeout")
            .expect("channel open")
    }

    // =========================================================================
    // Line explanations
    // =========================================================================

    #[tokio::test]
    async fn test_explain_source_against_gateway() {
        let dir = TempDir::new().unwrap();
        let gateway = TestGateway::start(dir.path()).await;
        let client = HttpExplainClient::new(gateway.http_url()).unwrap();

        let source = "// counter\nint count = 0;\n\n}\n";
        let LinePanel::Entries(entries) = explain_source(&client, source).await else {
            panic!("expected entries");
        };

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].number, 2);
        assert_eq!(
            entries[0].explanation,
            "INTEGER DECLARATION: Creating a whole number variable 'count'."
        );
        assert_eq!(entries[1].number, 4);
        assert_eq!(entries[1].explanation, "...");
    }

    #[tokio::test]
    async fn test_explain_source_server_down() {
        // Reserve a port, then free it so nothing is listening.
        let port = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let client = HttpExplainClient::new(format!("http://127.0.0.1:{port}")).unwrap();

        let panel = explain_source(&client, "int x;\nint y;").await;
        let LinePanel::Failed(message) = panel else {
            panic!("expected failure");
        };
        assert!(message.starts_with("Error getting explanations: "));
        assert!(message.ends_with(". Is the server running?"));
    }

    // =========================================================================
    // Run stream
    // =========================================================================

    #[tokio::test]
    async fn test_execution_stream_round_trip() {
        let dir = TempDir::new().unwrap();
        let gateway = TestGateway::start(dir.path()).await;

        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut stream = ExecutionStream::new(Box::new(WsConnector::new()), gateway.ws_url(), tx);
        let mut log = ConsoleLog::new();

        let session = stream.start("read n\necho \"got $n\"\n");
        let opened = next_event(&mut rx).await;
        assert_eq!(opened, ConsoleEvent::new(session, ConsoleEventKind::Opened));
        assert!(stream.is_running());

        // Wait until the program is running before typing.
        while !log.text().contains(RUNNING_MESSAGE) {
            let event = next_event(&mut rx).await;
            log.apply(&event.kind);
        }
        stream.send_input("7").unwrap();
        log.echo_input("7");

        loop {
            let event = next_event(&mut rx).await;
            assert_eq!(event.session, session);
            let closed = event.kind == ConsoleEventKind::Closed;
            log.apply(&event.kind);
            if closed {
                break;
            }
        }

        assert!(log.text().contains("7\ngot 7\n"));
        assert!(log
            .text()
            .ends_with(&format!("{FINISHED_MESSAGE}{DISCONNECTED_NOTICE}")));
        assert!(!stream.is_running());
    }

    #[tokio::test]
    async fn test_restart_closes_previous_session() {
        let dir = TempDir::new().unwrap();
        let marker_dir = TempDir::new().unwrap();
        let marker = marker_dir.path().join("first-ran");
        let gateway = TestGateway::start(dir.path()).await;

        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut stream = ExecutionStream::new(Box::new(WsConnector::new()), gateway.ws_url(), tx);

        let first = stream.start(&format!("touch '{}'\nsleep 30\n", marker.display()));
        let second = stream.start("echo second\n");
        assert!(!stream.is_current(first));

        let mut first_kinds = Vec::new();
        let mut second_output = ConsoleLog::new();
        loop {
            let event = next_event(&mut rx).await;
            if event.session != second {
                first_kinds.push(event.kind);
                continue;
            }
            let closed = event.kind == ConsoleEventKind::Closed;
            second_output.apply(&event.kind);
            if closed {
                break;
            }
        }
        assert!(second_output.text().contains("second\n"));

        // the superseded run never opened, so its code never reached the gateway
        tokio::time::sleep(Duration::from_millis(300)).await;
        while let Ok(event) = rx.try_recv() {
            first_kinds.push(event.kind);
        }
        assert!(!first_kinds.contains(&ConsoleEventKind::Opened));
        assert!(!marker.exists());
    }
}
