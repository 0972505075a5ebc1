use std::sync::Arc;

use serde_json::Value;
use tokio::sync::mpsc;

use walletport_core::error::Result;
use walletport_core::protocol::envelope::{self, Call, Envelope, Reply};

use crate::config::ChannelSection;
use crate::emitter::{Emitter, ListenerId};
use crate::transport::Transport;

/// Receiver of correlated replies.
pub trait ReplySink: Send + Sync {
    /// Settle the call waiting on `reply.token`. Returns false when no call
    /// is waiting (late, duplicate, or foreign token).
    fn deliver(&self, reply: Reply) -> bool;

    /// The inbound side of the transport is gone; nothing will settle.
    fn close(&self);
}

/// What `route` did with one inbound payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Routed {
    Reply { matched: bool },
    Event { handlers: usize },
    Dropped,
}

pub struct Channel {
    transport: Arc<dyn Transport>,
    sink: Arc<dyn ReplySink>,
    handlers: Emitter,
    max_envelope_bytes: usize,
}

impl Channel {
    pub fn new(
        transport: Arc<dyn Transport>,
        sink: Arc<dyn ReplySink>,
        cfg: &ChannelSection,
    ) -> Self {
        Self {
            transport,
            sink,
            handlers: Emitter::new(),
            max_envelope_bytes: cfg.max_envelope_bytes,
        }
    }

    /// Serialize and forward an outbound call.
    pub async fn send(&self, call: Call) -> Result<()> {
        let raw = envelope::encode(&Envelope::Call(call))?;
        self.transport.send(raw).await
    }

    /// Subscribe to inbound push-events named `event`.
    pub fn on<F>(&self, event: &str, handler: F) -> ListenerId
    where
        F: Fn(&Value) + Send + Sync + 'static,
    {
        self.handlers.on(event, handler)
    }

    pub fn off(&self, event: &str, id: ListenerId) -> bool {
        self.handlers.off(event, id)
    }

    /// Classify and dispatch one inbound payload. Never fails: anything that
    /// cannot be attributed is dropped.
    pub fn route(&self, raw: &str) -> Routed {
        if raw.len() > self.max_envelope_bytes {
            tracing::warn!(
                len = raw.len(),
                max = self.max_envelope_bytes,
                "inbound envelope too large, dropped"
            );
            return Routed::Dropped;
        }

        let env = match envelope::decode(raw) {
            Ok(env) => env,
            Err(e) => {
                tracing::warn!(error = %e, "inbound payload dropped");
                return Routed::Dropped;
            }
        };

        match env {
            Envelope::Reply(reply) => {
                let token = reply.token;
                let matched = self.sink.deliver(reply);
                if !matched {
                    tracing::debug!(%token, "unmatched reply dropped");
                }
                Routed::Reply { matched }
            }
            Envelope::Event(ev) => {
                let handlers = self.handlers.emit(&ev.event, &ev.payload);
                tracing::debug!(event = %ev.event, handlers, "push-event dispatched");
                Routed::Event { handlers }
            }
            Envelope::Call(call) => {
                tracing::warn!(
                    token = %call.token,
                    method = %call.method,
                    "inbound call on page side, dropped"
                );
                Routed::Dropped
            }
        }
    }

    /// Route inbound payloads in arrival order until the transport closes,
    /// then fail whatever is still outstanding.
    pub async fn pump(&self, mut inbound: mpsc::Receiver<String>) {
        while let Some(raw) = inbound.recv().await {
            self.route(&raw);
        }
        tracing::info!("transport inbound closed");
        self.sink.close();
    }
}
