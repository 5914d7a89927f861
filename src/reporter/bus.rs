//! # Message Bus Module / 消息总线模块
//!
//! The transport the status channel rides on. The bus is deliberately dumb:
//! at-most-once per send, fire-and-forget publishing, no ordering guarantee
//! across processes. Two transports are provided — an in-process broadcast
//! channel for tests and single-process embedding, and a Unix domain socket
//! carrying newline-delimited JSON for the cross-process production path.
//!
//! 状态通道所依赖的传输层。总线刻意保持简单：每次发送至多送达一次，
//! 发布即忘，跨进程不保证顺序。提供两种传输 ——
//! 用于测试和单进程嵌入的进程内广播通道，
//! 以及用于跨进程生产路径、承载行式 JSON 的 Unix 域套接字。

use anyhow::{Context, Result};
use futures::StreamExt;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{UnixListener, UnixStream};
use tokio::sync::{broadcast, mpsc};
use tokio_stream::wrappers::{BroadcastStream, UnixListenerStream};

use crate::reporter::events::Envelope;
use crate::t;

/// Buffered envelopes per subscription before a slow consumer starts
/// losing messages.
const CHANNEL_CAPACITY: usize = 64;

/// A one-to-many broadcast transport for status envelopes.
///
/// `publish` is fire-and-forget: no acknowledgment, no retry, and transport
/// failures never reach the caller. `subscribe` yields every envelope
/// published after the subscription was created.
///
/// 状态信封的一对多广播传输。`publish` 发布即忘；
/// `subscribe` 产出订阅建立之后发布的每个信封。
pub trait MessageBus: Send + Sync {
    /// Hands an envelope to the transport. Failures are logged, never
    /// returned — the sender has no delivery confirmation channel.
    fn publish(&self, envelope: Envelope);

    /// Opens a new subscription. Must be called from within a tokio
    /// runtime; the pump task is detached and stops when the returned
    /// receiver is dropped.
    fn subscribe(&self) -> Result<mpsc::Receiver<Envelope>>;
}

/// In-process transport backed by a tokio broadcast channel.
///
/// 基于 tokio 广播通道的进程内传输。
pub struct InProcessBus {
    tx: broadcast::Sender<Envelope>,
}

impl InProcessBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }
}

impl Default for InProcessBus {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageBus for InProcessBus {
    fn publish(&self, envelope: Envelope) {
        // A send with no live subscribers is not a failure; broadcasts to
        // nobody are part of the contract.
        let _ = self.tx.send(envelope);
    }

    fn subscribe(&self) -> Result<mpsc::Receiver<Envelope>> {
        let (fwd_tx, fwd_rx) = mpsc::channel(CHANNEL_CAPACITY);
        let mut stream = BroadcastStream::new(self.tx.subscribe());
        tokio::spawn(async move {
            while let Some(item) = stream.next().await {
                // A lagged subscriber skips what it missed; the bus is
                // at-most-once per send.
                let Ok(envelope) = item else { continue };
                if fwd_tx.send(envelope).await.is_err() {
                    break;
                }
            }
        });
        Ok(fwd_rx)
    }
}

/// Cross-process transport over a Unix domain socket.
///
/// The subscribing process binds the socket and accepts publisher
/// connections; each publisher writes one JSON line per envelope and hangs
/// up. Malformed lines are logged and dropped without disturbing the
/// connection loop.
///
/// 基于 Unix 域套接字的跨进程传输。订阅进程绑定套接字并接受发布方连接；
/// 发布方每个信封写入一行 JSON。格式错误的行被记录并丢弃。
pub struct UnixSocketBus {
    socket_path: PathBuf,
}

impl UnixSocketBus {
    pub fn new(socket_path: impl Into<PathBuf>) -> Self {
        Self {
            socket_path: socket_path.into(),
        }
    }

    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }
}

impl MessageBus for UnixSocketBus {
    fn publish(&self, envelope: Envelope) {
        let path = self.socket_path.clone();
        tokio::spawn(async move {
            if let Err(e) = send_envelope(&path, &envelope).await {
                // Nobody listening is indistinguishable from lost delivery,
                // and neither is an error for the sender.
                eprintln!("{}", t!("status_publish_failed", error = e));
            }
        });
    }

    fn subscribe(&self) -> Result<mpsc::Receiver<Envelope>> {
        // Replace a stale socket file from a previous receiver.
        if self.socket_path.exists() {
            std::fs::remove_file(&self.socket_path).with_context(|| {
                format!(
                    "Failed to remove existing socket: {}",
                    self.socket_path.display()
                )
            })?;
        }
        let listener = UnixListener::bind(&self.socket_path).with_context(|| {
            format!("Failed to bind to socket: {}", self.socket_path.display())
        })?;

        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        let mut incoming = UnixListenerStream::new(listener);
        tokio::spawn(async move {
            while let Some(conn) = incoming.next().await {
                let Ok(stream) = conn else { continue };
                let tx = tx.clone();
                tokio::spawn(async move {
                    // A closed subscription ends this connection; the
                    // accept loop keeps serving any remaining publishers.
                    let _ = pump_connection(stream, tx).await;
                });
            }
        });
        Ok(rx)
    }
}

/// Reads newline-delimited envelopes from one publisher connection and
/// forwards them to the subscription. Returns `Err` once the subscription
/// side is gone.
async fn pump_connection(stream: UnixStream, tx: mpsc::Sender<Envelope>) -> Result<()> {
    let mut lines = BufReader::new(stream).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        match Envelope::from_wire(&line) {
            Ok(envelope) => {
                tx.send(envelope)
                    .await
                    .map_err(|_| anyhow::anyhow!("subscription closed"))?;
            }
            Err(e) => {
                eprintln!("{}", t!("status_malformed_message", error = e));
            }
        }
    }
    Ok(())
}

/// Connects, writes one envelope as a JSON line, and hangs up.
async fn send_envelope(path: &Path, envelope: &Envelope) -> Result<()> {
    let mut stream = UnixStream::connect(path)
        .await
        .with_context(|| format!("Failed to connect to socket: {}", path.display()))?;
    let mut line = envelope.to_wire()?;
    line.push('\n');
    stream.write_all(line.as_bytes()).await?;
    stream.shutdown().await?;
    Ok(())
}
