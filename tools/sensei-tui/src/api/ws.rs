//! WebSocket connector for the gateway's `/ws/run` stream.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use futures_util::{SinkExt, StreamExt};
use sensei_types::RunRequest;
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::Message};

use crate::domain::{ConsoleEvent, ConsoleEventKind, RunConnector, RunHandle, StreamError};

/// Commands from the UI to a connection task.
#[derive(Debug)]
enum Outgoing {
    Line(String),
    Close,
}

/// Opens one WebSocket per run, driven by a spawned task.
///
/// Must be used from within a tokio runtime.
#[derive(Debug, Default, Clone)]
pub struct WsConnector;

impl WsConnector {
    pub fn new() -> Self {
        Self
    }
}

impl RunConnector for WsConnector {
    fn connect(
        &self,
        url: &str,
        code: &str,
        session: u64,
        events: mpsc::UnboundedSender<ConsoleEvent>,
    ) -> Box<dyn RunHandle> {
        let (out_tx, out_rx) = mpsc::unbounded_channel();
        let open = Arc::new(AtomicBool::new(false));

        tokio::spawn(run_connection(
            url.to_string(),
            code.to_string(),
            session,
            open.clone(),
            out_rx,
            events,
        ));

        Box::new(WsHandle {
            open,
            out_tx,
            closed: false,
        })
    }
}

struct WsHandle {
    open: Arc<AtomicBool>,
    out_tx: mpsc::UnboundedSender<Outgoing>,
    closed: bool,
}

impl RunHandle for WsHandle {
    fn is_open(&self) -> bool {
        !self.closed && self.open.load(Ordering::SeqCst)
    }

    fn send_line(&self, line: &str) -> Result<(), StreamError> {
        if !self.is_open() {
            return Err(StreamError::NotRunning);
        }
        self.out_tx
            .send(Outgoing::Line(line.to_string()))
            .map_err(|_| StreamError::Closed("connection task ended".into()))
    }

    fn close(&mut self) {
        if !self.closed {
            self.closed = true;
            let _ = self.out_tx.send(Outgoing::Close);
        }
    }
}

impl Drop for WsHandle {
    fn drop(&mut self) {
        self.close();
    }
}

async fn run_connection(
    url: String,
    code: String,
    session: u64,
    open: Arc<AtomicBool>,
    mut out_rx: mpsc::UnboundedReceiver<Outgoing>,
    events: mpsc::UnboundedSender<ConsoleEvent>,
) {
    let emit = |kind| {
        let _ = events.send(ConsoleEvent::new(session, kind));
    };

    // A close requested while connecting aborts the handshake.
    let connecting = connect_async(url.as_str());
    tokio::pin!(connecting);
    let connected = loop {
        tokio::select! {
            result = &mut connecting => break result,
            out = out_rx.recv() => match out {
                Some(Outgoing::Line(_)) => {}
                Some(Outgoing::Close) | None => {
                    tracing::debug!(session, "Run cancelled while connecting");
                    emit(ConsoleEventKind::Closed);
                    return;
                }
            },
        }
    };

    let mut ws_stream = match connected {
        Ok((stream, _)) => stream,
        Err(e) => {
            tracing::warn!(session, %url, error = %e, "Run connection failed");
            emit(ConsoleEventKind::Error(e.to_string()));
            emit(ConsoleEventKind::Closed);
            return;
        }
    };

    // The code must never reach the server once the run is superseded.
    if close_pending(&mut out_rx) {
        tracing::debug!(session, "Run cancelled before submitting code");
        let _ = ws_stream.close(None).await;
        emit(ConsoleEventKind::Closed);
        return;
    }

    let (mut write, mut read) = ws_stream.split();

    let opening = match serde_json::to_string(&RunRequest::new(code)) {
        Ok(body) => body,
        Err(e) => {
            emit(ConsoleEventKind::Error(e.to_string()));
            emit(ConsoleEventKind::Closed);
            return;
        }
    };
    if let Err(e) = write.send(Message::Text(opening.into())).await {
        emit(ConsoleEventKind::Error(e.to_string()));
        emit(ConsoleEventKind::Closed);
        return;
    }

    open.store(true, Ordering::SeqCst);
    tracing::info!(session, "Run connection open");
    emit(ConsoleEventKind::Opened);

    loop {
        tokio::select! {
            msg = read.next() => match msg {
                Some(Ok(Message::Text(text))) => {
                    emit(ConsoleEventKind::Output(text.as_str().to_owned()));
                }
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    emit(ConsoleEventKind::Error(e.to_string()));
                    break;
                }
            },
            out = out_rx.recv() => match out {
                Some(Outgoing::Line(line)) => {
                    if let Err(e) = write.send(Message::Text(line.into())).await {
                        emit(ConsoleEventKind::Error(e.to_string()));
                        break;
                    }
                }
                Some(Outgoing::Close) | None => {
                    let _ = write.send(Message::Close(None)).await;
                    break;
                }
            },
        }
    }

    open.store(false, Ordering::SeqCst);
    tracing::info!(session, "Run connection closed");
    emit(ConsoleEventKind::Closed);
}

/// Drain queued commands; true if the handle asked to close or is gone.
fn close_pending(out_rx: &mut mpsc::UnboundedReceiver<Outgoing>) -> bool {
    loop {
        match out_rx.try_recv() {
            Ok(Outgoing::Line(_)) => {}
            Ok(Outgoing::Close) | Err(mpsc::error::TryRecvError::Disconnected) => return true,
            Err(mpsc::error::TryRecvError::Empty) => return false,
        }
    }
}
