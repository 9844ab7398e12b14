//! Program console and the execution stream behind it.
//!
//! At most one run connection is live: starting a run closes the previous
//! handle before the new one is opened. Events carry the session that
//! produced them so output from a superseded run never reaches the console.

use sensei_types::protocol::{CONNECTION_ERROR_NOTICE, DISCONNECTED_NOTICE};
use thiserror::Error;
use tokio::sync::mpsc;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StreamError {
    #[error("Program is not running")]
    NotRunning,
    #[error("Connection closed: {0}")]
    Closed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleEventKind {
    /// Connection established and the program submitted.
    Opened,
    /// A text frame from the server, verbatim.
    Output(String),
    Closed,
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleEvent {
    pub session: u64,
    pub kind: ConsoleEventKind,
}

impl ConsoleEvent {
    pub fn new(session: u64, kind: ConsoleEventKind) -> Self {
        Self { session, kind }
    }
}

/// A live (or dying) run connection.
pub trait RunHandle: Send {
    fn is_open(&self) -> bool;
    fn send_line(&self, line: &str) -> Result<(), StreamError>;
    fn close(&mut self);
}

/// Opens run connections.
///
/// `connect` returns immediately; the handle reports `is_open` once the
/// connection is up and the code was sent, and progress is reported on
/// `events` tagged with `session`.
pub trait RunConnector: Send + Sync {
    fn connect(
        &self,
        url: &str,
        code: &str,
        session: u64,
        events: mpsc::UnboundedSender<ConsoleEvent>,
    ) -> Box<dyn RunHandle>;
}

pub struct ExecutionStream {
    connector: Box<dyn RunConnector>,
    url: String,
    events: mpsc::UnboundedSender<ConsoleEvent>,
    current: Option<Box<dyn RunHandle>>,
    session: u64,
}

impl ExecutionStream {
    pub fn new(
        connector: Box<dyn RunConnector>,
        url: impl Into<String>,
        events: mpsc::UnboundedSender<ConsoleEvent>,
    ) -> Self {
        Self {
            connector,
            url: url.into(),
            events,
            current: None,
            session: 0,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Close any previous run, then open a new one for `code`.
    ///
    /// Returns the session id of the new run.
    pub fn start(&mut self, code: &str) -> u64 {
        self.close();
        self.session += 1;
        tracing::info!(session = self.session, url = %self.url, "Starting run");
        let handle = self
            .connector
            .connect(&self.url, code, self.session, self.events.clone());
        self.current = Some(handle);
        self.session
    }

    /// Forward one line of user input to the running program.
    pub fn send_input(&self, line: &str) -> Result<(), StreamError> {
        match &self.current {
            Some(handle) if handle.is_open() => handle.send_line(line),
            _ => Err(StreamError::NotRunning),
        }
    }

    pub fn close(&mut self) {
        if let Some(mut handle) = self.current.take() {
            tracing::debug!(session = self.session, "Closing run");
            handle.close();
        }
    }

    pub fn is_running(&self) -> bool {
        self.current.as_ref().is_some_and(|h| h.is_open())
    }

    /// Whether `session` is the run the console currently belongs to.
    pub fn is_current(&self, session: u64) -> bool {
        self.current.is_some() && session == self.session
    }
}

impl Drop for ExecutionStream {
    fn drop(&mut self) {
        self.close();
    }
}

/// Accumulated console text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsoleLog {
    text: String,
}

impl ConsoleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn apply(&mut self, kind: &ConsoleEventKind) {
        match kind {
            ConsoleEventKind::Opened => {}
            ConsoleEventKind::Output(frame) => self.text.push_str(frame),
            ConsoleEventKind::Closed => self.text.push_str(DISCONNECTED_NOTICE),
            ConsoleEventKind::Error(_) => self.text.push_str(CONNECTION_ERROR_NOTICE),
        }
    }

    /// Echo a line the user typed.
    pub fn echo_input(&mut self, line: &str) {
        self.text.push_str(line);
        self.text.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    // =========================================================================
    // Mock connector
    // =========================================================================

    #[derive(Default)]
    struct Recorder {
        live: AtomicUsize,
        max_live: AtomicUsize,
        opened: Mutex<Vec<(u64, String)>>,
        sent: Mutex<Vec<String>>,
    }

    struct MockHandle {
        recorder: Arc<Recorder>,
        open: Arc<AtomicBool>,
        closed: bool,
    }

    impl RunHandle for MockHandle {
        fn is_open(&self) -> bool {
            !self.closed && self.open.load(Ordering::SeqCst)
        }

        fn send_line(&self, line: &str) -> Result<(), StreamError> {
            self.recorder.sent.lock().unwrap().push(line.to_string());
            Ok(())
        }

        fn close(&mut self) {
            if !self.closed {
                self.closed = true;
                self.recorder.live.fetch_sub(1, Ordering::SeqCst);
            }
        }
    }

    struct MockConnector {
        recorder: Arc<Recorder>,
        open_on_connect: Arc<AtomicBool>,
    }

    impl RunConnector for MockConnector {
        fn connect(
            &self,
            _url: &str,
            code: &str,
            session: u64,
            _events: mpsc::UnboundedSender<ConsoleEvent>,
        ) -> Box<dyn RunHandle> {
            let live = self.recorder.live.fetch_add(1, Ordering::SeqCst) + 1;
            self.recorder.max_live.fetch_max(live, Ordering::SeqCst);
            self.recorder
                .opened
                .lock()
                .unwrap()
                .push((session, code.to_string()));
            Box::new(MockHandle {
                recorder: self.recorder.clone(),
                open: self.open_on_connect.clone(),
                closed: false,
            })
        }
    }

    fn stream(open: bool) -> (ExecutionStream, Arc<Recorder>) {
        let recorder = Arc::new(Recorder::default());
        let connector = MockConnector {
            recorder: recorder.clone(),
            open_on_connect: Arc::new(AtomicBool::new(open)),
        };
        let (tx, _rx) = mpsc::unbounded_channel();
        (
            ExecutionStream::new(Box::new(connector), "ws://test/ws/run", tx),
            recorder,
        )
    }

    // =========================================================================
    // ExecutionStream
    // =========================================================================

    #[test]
    fn test_new_run_supersedes_previous() {
        let (mut stream, recorder) = stream(true);
        let first = stream.start("int main() {}");
        let second = stream.start("int main() { return 1; }");

        assert_ne!(first, second);
        assert!(!stream.is_current(first));
        assert!(stream.is_current(second));
        assert_eq!(recorder.max_live.load(Ordering::SeqCst), 1);
        assert_eq!(recorder.live.load(Ordering::SeqCst), 1);
        assert_eq!(recorder.opened.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_send_input_without_run() {
        let (stream, recorder) = stream(true);
        assert_eq!(stream.send_input("5"), Err(StreamError::NotRunning));
        assert!(recorder.sent.lock().unwrap().is_empty());
    }

    #[test]
    fn test_send_input_before_open() {
        let (mut stream, recorder) = stream(false);
        stream.start("code");
        assert!(!stream.is_running());
        assert_eq!(stream.send_input("5"), Err(StreamError::NotRunning));
        assert!(recorder.sent.lock().unwrap().is_empty());
    }

    #[test]
    fn test_send_input_while_running() {
        let (mut stream, recorder) = stream(true);
        stream.start("code");
        assert!(stream.is_running());
        stream.send_input("42").unwrap();
        assert_eq!(*recorder.sent.lock().unwrap(), vec!["42".to_string()]);
    }

    #[test]
    fn test_close_releases_handle() {
        let (mut stream, recorder) = stream(true);
        let session = stream.start("code");
        stream.close();
        assert!(!stream.is_current(session));
        assert_eq!(recorder.live.load(Ordering::SeqCst), 0);
        assert_eq!(stream.send_input("x"), Err(StreamError::NotRunning));
    }

    // =========================================================================
    // ConsoleLog
    // =========================================================================

    #[test]
    fn test_console_appends_frames_verbatim() {
        let mut log = ConsoleLog::new();
        log.apply(&ConsoleEventKind::Opened);
        log.apply(&ConsoleEventKind::Output("Compiling...\n".into()));
        log.apply(&ConsoleEventKind::Output("Running...\n".into()));
        log.apply(&ConsoleEventKind::Output("0 1 1 2 ".into()));
        assert_eq!(log.text(), "Compiling...\nRunning...\n0 1 1 2 ");
    }

    #[test]
    fn test_console_notices() {
        let mut log = ConsoleLog::new();
        log.apply(&ConsoleEventKind::Error("refused".into()));
        log.apply(&ConsoleEventKind::Closed);
        assert_eq!(log.text(), "\n[Connection Error]\n\n[Disconnected]");
    }

    #[test]
    fn test_console_echo_and_clear() {
        let mut log = ConsoleLog::new();
        log.echo_input("7");
        assert_eq!(log.text(), "7\n");
        log.clear();
        assert_eq!(log.text(), "");
    }
}
