use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio::time::timeout;

use walletport_core::error::{Result, WalletPortError};
use walletport_core::protocol::envelope::{Call, Token};

use crate::channel::Channel;
use crate::config::MessengerSection;
use crate::messenger::PendingTable;

pub struct Messenger {
    channel: Arc<Channel>,
    pending: Arc<PendingTable>,
    call_timeout: Option<Duration>,
}

impl Messenger {
    pub fn new(channel: Arc<Channel>, pending: Arc<PendingTable>, cfg: &MessengerSection) -> Self {
        Self {
            channel,
            pending,
            call_timeout: cfg.call_timeout(),
        }
    }

    /// Issue one call and wait for its reply.
    ///
    /// Without a configured timeout this waits until the reply arrives or the
    /// transport closes. Dropping the returned future releases the slot, so a
    /// reply arriving afterwards is treated as unmatched.
    pub async fn send(&self, method: &str, params: Option<Value>) -> Result<Value> {
        let (token, rx) = self.pending.register(method)?;
        let _slot = SlotGuard {
            table: &self.pending,
            token,
        };

        tracing::debug!(%token, method, "rpc call");
        let call = Call {
            token,
            method: method.to_string(),
            params,
        };
        if let Err(e) = self.channel.send(call).await {
            tracing::warn!(%token, method, error = %e, "rpc call not delivered");
            return Err(e);
        }

        let settled = match self.call_timeout {
            Some(limit) => match timeout(limit, rx).await {
                Ok(settled) => settled,
                Err(_) => {
                    tracing::warn!(%token, method, "rpc call timed out");
                    return Err(WalletPortError::Timeout {
                        method: method.to_string(),
                        after_ms: limit.as_millis() as u64,
                    });
                }
            },
            None => rx.await,
        };

        // Sender dropped without settling: the table itself went away.
        settled.unwrap_or(Err(WalletPortError::ChannelClosed))
    }

    /// Calls issued and not yet settled or released.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

/// Releases a call's slot when the awaiting future finishes or is dropped.
struct SlotGuard<'a> {
    table: &'a PendingTable,
    token: Token,
}

impl Drop for SlotGuard<'_> {
    fn drop(&mut self) {
        if self.table.abandon(self.token) {
            tracing::debug!(token = %self.token, "rpc call released before reply");
        }
    }
}
