//! Compiler and program processes.

use std::path::Path;
use std::process::Stdio;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{Child, Command};
use tokio::sync::mpsc;
use tracing::debug;

use super::workspace::Workspace;
use crate::domain::config::{RunnerConfig, EXE_TOKEN, SRC_TOKEN};
use crate::domain::RunError;

/// Substitute `{src}` and `{exe}` in every argument of `template`.
pub fn expand_command(template: &[String], src: &Path, exe: &Path) -> Vec<String> {
    let src = src.display().to_string();
    let exe = exe.display().to_string();
    template
        .iter()
        .map(|arg| arg.replace(SRC_TOKEN, &src).replace(EXE_TOKEN, &exe))
        .collect()
}

fn command_for(args: &[String], work_dir: &Path) -> Result<(String, Command), RunError> {
    let (program, rest) = args.split_first().ok_or(RunError::EmptyCommand)?;
    let mut command = Command::new(program);
    command.args(rest).current_dir(work_dir);
    Ok((program.clone(), command))
}

/// Run the compiler to completion.
///
/// A non-zero exit becomes [`RunError::Compile`] carrying the diagnostics.
pub async fn compile(config: &RunnerConfig, workspace: &Workspace) -> Result<(), RunError> {
    let args = expand_command(
        &config.compile_command,
        workspace.source(),
        workspace.executable(),
    );
    let (program, mut command) = command_for(&args, workspace.dir())?;
    debug!(?args, "Compiling");

    let output = command
        .stdin(Stdio::null())
        .kill_on_drop(true)
        .output()
        .await
        .map_err(|source| RunError::Spawn { program, source })?;

    if output.status.success() {
        Ok(())
    } else {
        Err(RunError::Compile {
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Start the compiled program with all three stdio streams piped.
///
/// The child is killed if its handle is dropped.
pub fn spawn_program(config: &RunnerConfig, workspace: &Workspace) -> Result<Child, RunError> {
    let args = expand_command(
        &config.run_command,
        workspace.source(),
        workspace.executable(),
    );
    let (program, mut command) = command_for(&args, workspace.dir())?;
    debug!(?args, "Starting program");

    command
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| RunError::Spawn { program, source })
}

/// Forward everything read from `reader` to `tx` as it arrives, each chunk
/// prefixed with `prefix`.
///
/// Chunks are not line-buffered, so prompts without a trailing newline are
/// delivered immediately. Returns when the pipe closes or the receiver is
/// gone.
pub async fn pump<R>(
    mut reader: R,
    prefix: &'static str,
    buf_size: usize,
    tx: mpsc::Sender<String>,
) -> std::io::Result<()>
where
    R: AsyncRead + Unpin,
{
    let mut buf = vec![0u8; buf_size];
    let mut decoder = Utf8Chunker::default();

    loop {
        let n = reader.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        if let Some(text) = decoder.push(&buf[..n]) {
            if tx.send(format!("{prefix}{text}")).await.is_err() {
                return Ok(());
            }
        }
    }

    if let Some(text) = decoder.finish() {
        let _ = tx.send(format!("{prefix}{text}")).await;
    }
    Ok(())
}

/// Decodes a byte stream into text without splitting multi-byte characters
/// across chunks.
#[derive(Debug, Default)]
pub struct Utf8Chunker {
    pending: Vec<u8>,
}

impl Utf8Chunker {
    /// Feed bytes; returns the text that is complete so far.
    ///
    /// Invalid sequences become U+FFFD. An incomplete trailing sequence is
    /// held back until the next call.
    pub fn push(&mut self, bytes: &[u8]) -> Option<String> {
        self.pending.extend_from_slice(bytes);
        let mut out = String::new();

        loop {
            match std::str::from_utf8(&self.pending) {
                Ok(text) => {
                    out.push_str(text);
                    self.pending.clear();
                    break;
                }
                Err(e) => {
                    let valid = e.valid_up_to();
                    out.push_str(&String::from_utf8_lossy(&self.pending[..valid]));
                    match e.error_len() {
                        Some(len) => {
                            out.push(char::REPLACEMENT_CHARACTER);
                            self.pending.drain(..valid + len);
                        }
                        None => {
                            self.pending.drain(..valid);
                            break;
                        }
                    }
                }
            }
        }

        (!out.is_empty()).then_some(out)
    }

    /// Flush whatever is held back at end of stream.
    pub fn finish(self) -> Option<String> {
        (!self.pending.is_empty()).then(|| String::from_utf8_lossy(&self.pending).into_owned())
    }
}
