//! Gateway fixture shared by the integration flows.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;
use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use sensei_gateway::domain::RunnerConfig;
use sensei_gateway::{GatewayConfig, GatewayService};
use tokio::net::TcpStream;
use tokio::sync::oneshot;
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};

/// Upper bound on any single wait in a flow.
pub const STEP_TIMEOUT: Duration = Duration::from_secs(10);

pub type Socket = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// A gateway serving on an ephemeral port; stops when dropped.
pub struct TestGateway {
    pub addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestGateway {
    /// Start a gateway that treats programs as shell scripts.
    pub async fn start(work_dir: &Path) -> Self {
        Self::start_with(runner_config(work_dir)).await
    }

    pub async fn start_with(runner: RunnerConfig) -> Self {
        let mut config = GatewayConfig::default();
        config.http.host = Ipv4Addr::LOCALHOST.into();
        config.http.port = 0;
        config.runner = runner;

        let service = GatewayService::new(config).expect("valid test config");
        let listener = service.bind().await.expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");

        let (tx, rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            let _ = service
                .serve(listener, async {
                    let _ = rx.await;
                })
                .await;
        });

        Self {
            addr,
            shutdown: Some(tx),
        }
    }

    pub fn http_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn ws_url(&self) -> String {
        format!("ws://{}/ws/run", self.addr)
    }

    /// Open `/ws/run` and send the opening frame.
    pub async fn open_run(&self, opening: &str) -> Socket {
        let (mut socket, _) = connect_async(self.ws_url()).await.expect("ws connect");
        socket
            .send(Message::Text(opening.to_string().into()))
            .await
            .expect("send opening frame");
        socket
    }
}

impl Drop for TestGateway {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

/// `sh -n` checks syntax, `sh` runs the script.
pub fn runner_config(work_dir: &Path) -> RunnerConfig {
    RunnerConfig {
        compile_command: vec!["sh".into(), "-n".into(), "{src}".into()],
        run_command: vec!["sh".into(), "{src}".into()],
        source_extension: "sh".to_string(),
        work_dir: work_dir.to_path_buf(),
        max_runtime_secs: 0,
        read_buffer_size: 64,
    }
}

/// The JSON opening frame for `code`.
pub fn opening(code: &str) -> String {
    serde_json::json!({ "code": code }).to_string()
}

/// Next text frame, or `None` once the server closes.
pub async fn next_text(socket: &mut Socket) -> Option<String> {
    loop {
        let msg = tokio::time::timeout(STEP_TIMEOUT, socket.next())
            .await
            .expect("frame within timeout")?;
        match msg {
            Ok(Message::Text(text)) => return Some(text.as_str().to_owned()),
            Ok(Message::Close(_)) | Err(_) => return None,
            Ok(_) => continue,
        }
    }
}

/// Concatenation of every text frame until the server closes.
pub async fn collect_until_close(socket: &mut Socket) -> String {
    let mut out = String::new();
    while let Some(text) = next_text(socket).await {
        out.push_str(&text);
    }
    out
}

/// Read frames until the accumulated text contains `needle`.
pub async fn read_until(socket: &mut Socket, needle: &str) -> String {
    let mut out = String::new();
    while !out.contains(needle) {
        match next_text(socket).await {
            Some(text) => out.push_str(&text),
            None => break,
        }
    }
    out
}
