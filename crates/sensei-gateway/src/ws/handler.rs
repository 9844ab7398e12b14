//! WebSocket handler for `/ws/run`.
//!
//! One handler per connection:
//! 1. the first text frame is `{"code": "..."}`;
//! 2. the code is compiled, then run with piped stdio;
//! 3. program output is streamed back as it is produced (stderr chunks
//!    prefixed `Error: `) while every incoming text frame is written to the
//!    program's stdin followed by a newline;
//! 4. `\n[Program Finished]` is sent once the program exits and its pipes
//!    are drained.
//!
//! A client that goes away kills the program. Temp files are removed on
//! every path.

use axum::extract::ws::{Message, WebSocket};
use sensei_types::protocol::{
    COMPILING_MESSAGE, FINISHED_MESSAGE, NO_CODE_MESSAGE, RUNNING_MESSAGE, SERVER_ERROR_PREFIX,
    STDERR_PREFIX, TIMEOUT_MESSAGE,
};
use sensei_types::RunRequest;
use tokio::io::AsyncWriteExt;
use tokio::process::{Child, ChildStdin};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::domain::{GatewayConfig, RunError, RunnerConfig};
use crate::runner::{compile, compile_error_message, pump, spawn_program, Workspace};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    /// Program ran to completion (or was killed by the time limit)
    Finished,
    /// The client closed or the socket failed
    ClientGone,
}

/// What the opening frame carried.
enum Opening {
    Code(String),
    NoCode,
    Gone,
}

/// WebSocket connection handler
pub struct RunSessionHandler {
    connection_id: Uuid,
    runner: RunnerConfig,
    output_buffer: usize,
}

impl RunSessionHandler {
    pub fn new(config: &GatewayConfig) -> Self {
        Self {
            connection_id: Uuid::new_v4(),
            runner: config.runner.clone(),
            output_buffer: config.websocket.output_buffer,
        }
    }

    pub fn connection_id(&self) -> Uuid {
        self.connection_id
    }

    /// Handle a WebSocket connection
    pub async fn handle(self, mut socket: WebSocket) {
        info!(connection_id = %self.connection_id, "New run connection");

        let code = match receive_opening(&mut socket).await {
            Opening::Code(code) => code,
            Opening::NoCode => {
                debug!(connection_id = %self.connection_id, "Opening frame carried no code");
                let _ = send_text(&mut socket, NO_CODE_MESSAGE).await;
                close(&mut socket).await;
                return;
            }
            Opening::Gone => {
                debug!(connection_id = %self.connection_id, "Client left before sending code");
                return;
            }
        };

        let flow = match self.run(&mut socket, &code).await {
            Ok(flow) => flow,
            Err(RunError::Compile { stderr }) => {
                info!(connection_id = %self.connection_id, "Compilation failed");
                let _ = send_text(&mut socket, &compile_error_message(&stderr)).await;
                Flow::Finished
            }
            Err(e) => {
                error!(connection_id = %self.connection_id, error = %e, "Run failed");
                let _ = send_text(&mut socket, &format!("{SERVER_ERROR_PREFIX}{e}")).await;
                Flow::Finished
            }
        };

        if flow == Flow::Finished {
            close(&mut socket).await;
        }

        info!(
            connection_id = %self.connection_id,
            ?flow,
            "Run connection closed"
        );
    }

    async fn run(&self, socket: &mut WebSocket, code: &str) -> Result<Flow, RunError> {
        let workspace = Workspace::create(
            &self.runner.work_dir,
            &self.runner.source_extension,
            code,
        )
        .await?;
        debug!(
            connection_id = %self.connection_id,
            run_id = %workspace.id(),
            "Workspace ready"
        );

        if send_text(socket, COMPILING_MESSAGE).await.is_err() {
            return Ok(Flow::ClientGone);
        }
        compile(&self.runner, &workspace).await?;

        if send_text(socket, RUNNING_MESSAGE).await.is_err() {
            return Ok(Flow::ClientGone);
        }
        let mut child = spawn_program(&self.runner, &workspace)?;
        let mut stdin = child.stdin.take();

        let (tx, mut rx) = mpsc::channel::<String>(self.output_buffer);
        let buf_size = self.runner.read_buffer_size;
        if let Some(stdout) = child.stdout.take() {
            tokio::spawn(log_pump_errors(
                self.connection_id,
                pump(stdout, "", buf_size, tx.clone()),
            ));
        }
        if let Some(stderr) = child.stderr.take() {
            tokio::spawn(log_pump_errors(
                self.connection_id,
                pump(stderr, STDERR_PREFIX, buf_size, tx.clone()),
            ));
        }
        drop(tx);

        let limit = self.runner.max_runtime();
        let deadline = async move {
            match limit {
                Some(limit) => tokio::time::sleep(limit).await,
                None => std::future::pending::<()>().await,
            }
        };
        tokio::pin!(deadline);

        loop {
            tokio::select! {
                Some(chunk) = rx.recv() => {
                    if send_text(socket, &chunk).await.is_err() {
                        self.stop(&mut child).await;
                        return Ok(Flow::ClientGone);
                    }
                }
                incoming = socket.recv() => match incoming {
                    Some(Ok(Message::Text(line))) => self.forward_input(&mut stdin, &line).await,
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => {
                        debug!(connection_id = %self.connection_id, "Client left while running");
                        self.stop(&mut child).await;
                        return Ok(Flow::ClientGone);
                    }
                    Some(Ok(_)) => {}
                },
                status = child.wait() => {
                    let status = status?;
                    debug!(connection_id = %self.connection_id, %status, "Program exited");
                    break;
                }
                _ = &mut deadline => {
                    warn!(
                        connection_id = %self.connection_id,
                        limit_secs = self.runner.max_runtime_secs,
                        "Program exceeded run time limit"
                    );
                    self.stop(&mut child).await;
                    if send_text(socket, TIMEOUT_MESSAGE).await.is_err() {
                        return Ok(Flow::ClientGone);
                    }
                    break;
                }
            }
        }

        // Output written just before exit is still in the pipes.
        drop(stdin);
        while let Some(chunk) = rx.recv().await {
            if send_text(socket, &chunk).await.is_err() {
                return Ok(Flow::ClientGone);
            }
        }

        if send_text(socket, FINISHED_MESSAGE).await.is_err() {
            return Ok(Flow::ClientGone);
        }
        Ok(Flow::Finished)
    }

    /// Write one line of user input to the program.
    ///
    /// Empty frames are ignored. Once the pipe breaks, further input is
    /// dropped.
    async fn forward_input(&self, stdin: &mut Option<ChildStdin>, line: &str) {
        if line.is_empty() {
            return;
        }
        let Some(pipe) = stdin.as_mut() else {
            return;
        };
        let payload = format!("{line}\n");
        let written = match pipe.write_all(payload.as_bytes()).await {
            Ok(()) => pipe.flush().await,
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            debug!(connection_id = %self.connection_id, error = %e, "Program stdin closed");
            *stdin = None;
        }
    }

    async fn stop(&self, child: &mut Child) {
        if let Err(e) = child.kill().await {
            warn!(connection_id = %self.connection_id, error = %e, "Failed to kill program");
        }
    }
}

async fn receive_opening(socket: &mut WebSocket) -> Opening {
    loop {
        let text = match socket.recv().await {
            Some(Ok(Message::Text(text))) => text,
            Some(Ok(Message::Binary(data))) => match String::from_utf8(data) {
                Ok(text) => text,
                Err(_) => return Opening::NoCode,
            },
            Some(Ok(Message::Ping(_))) | Some(Ok(Message::Pong(_))) => continue,
            Some(Ok(Message::Close(_))) | Some(Err(_)) | None => return Opening::Gone,
        };

        return match serde_json::from_str::<RunRequest>(&text) {
            Ok(request) => match request.code() {
                Some(code) => Opening::Code(code.to_string()),
                None => Opening::NoCode,
            },
            Err(_) => Opening::NoCode,
        };
    }
}

async fn log_pump_errors<F>(connection_id: Uuid, pump: F)
where
    F: std::future::Future<Output = std::io::Result<()>>,
{
    if let Err(e) = pump.await {
        debug!(%connection_id, error = %e, "Output pipe read failed");
    }
}

async fn send_text(socket: &mut WebSocket, text: &str) -> Result<(), axum::Error> {
    socket.send(Message::Text(text.to_string())).await
}

async fn close(socket: &mut WebSocket) {
    let _ = socket.send(Message::Close(None)).await;
}
