//! In-memory duplex transport.
//!
//! `duplex` returns the page end (a `Transport` plus the inbound receiver the
//! channel pump drains) and the wallet end (reads calls, writes replies and
//! push-events). Dropping the wallet end closes the page's inbound stream.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc;

use walletport_core::error::{Result, WalletPortError};
use walletport_core::protocol::envelope::{self, Call, Envelope, Event, Reply};

use super::Transport;

/// Page -> wallet sender.
#[derive(Clone)]
pub struct MemoryTransport {
    tx: mpsc::Sender<String>,
}

#[async_trait]
impl Transport for MemoryTransport {
    async fn send(&self, raw: String) -> Result<()> {
        self.tx
            .send(raw)
            .await
            .map_err(|_| WalletPortError::Transport("wallet end closed".into()))
    }
}

/// Page side of the duplex.
pub struct PageEnd {
    pub transport: Arc<MemoryTransport>,
    pub inbound: mpsc::Receiver<String>,
}

/// Wallet side of the duplex.
pub struct WalletEnd {
    calls: mpsc::Receiver<String>,
    outbound: mpsc::Sender<String>,
}

pub fn duplex(capacity: usize) -> (PageEnd, WalletEnd) {
    let (call_tx, call_rx) = mpsc::channel(capacity);
    let (out_tx, out_rx) = mpsc::channel(capacity);

    let page = PageEnd {
        transport: Arc::new(MemoryTransport { tx: call_tx }),
        inbound: out_rx,
    };
    let wallet = WalletEnd {
        calls: call_rx,
        outbound: out_tx,
    };
    (page, wallet)
}

impl WalletEnd {
    /// Next call sent by the page. Returns `None` once the page side is gone.
    /// Payloads that are not calls are skipped.
    pub async fn next_call(&mut self) -> Option<Call> {
        while let Some(raw) = self.calls.recv().await {
            match envelope::decode(&raw) {
                Ok(Envelope::Call(call)) => return Some(call),
                Ok(other) => {
                    tracing::warn!(kind = other.kind(), "wallet end ignoring non-call envelope");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "wallet end ignoring undecodable payload");
                }
            }
        }
        None
    }

    pub async fn reply(&self, reply: Reply) -> Result<()> {
        self.send_envelope(&Envelope::Reply(reply)).await
    }

    pub async fn push(&self, event: Event) -> Result<()> {
        self.send_envelope(&Envelope::Event(event)).await
    }

    /// Deliver a payload verbatim (malformed input, foreign traffic).
    pub async fn send_raw(&self, raw: impl Into<String>) -> Result<()> {
        self.outbound
            .send(raw.into())
            .await
            .map_err(|_| WalletPortError::Transport("page end closed".into()))
    }

    async fn send_envelope(&self, env: &Envelope) -> Result<()> {
        let raw = envelope::encode(env)?;
        self.send_raw(raw).await
    }
}
