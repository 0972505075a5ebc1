use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use dashmap::DashMap;
use serde_json::Value;
use tokio::sync::oneshot;
use tokio::time::Instant;

use walletport_core::error::{Result, WalletPortError};
use walletport_core::protocol::envelope::{Reply, Token};

use crate::channel::ReplySink;

type Completion = oneshot::Sender<Result<Value>>;

/// One outstanding call.
struct PendingCall {
    method: String,
    created_at: Instant,
    tx: Completion,
}

/// Token -> outstanding call.
///
/// Tokens come from a monotonic counter and are never reused. A slot is
/// removed exactly once: by its reply, by `abandon`, or by `fail_all`.
/// Once closed, no new slot is handed out.
pub struct PendingTable {
    calls: DashMap<Token, PendingCall>,
    seq: AtomicU64,
    closed: AtomicBool,
}

impl Default for PendingTable {
    fn default() -> Self {
        Self::new()
    }
}

impl PendingTable {
    pub fn new() -> Self {
        Self {
            calls: DashMap::new(),
            seq: AtomicU64::new(1),
            closed: AtomicBool::new(false),
        }
    }

    /// Allocate a token and a slot for `method`. Fails with `ChannelClosed`
    /// once the inbound side is gone, since no reply could ever arrive.
    pub fn register(&self, method: &str) -> Result<(Token, oneshot::Receiver<Result<Value>>)> {
        if self.is_closed() {
            return Err(WalletPortError::ChannelClosed);
        }
        let token = Token::new(self.seq.fetch_add(1, Ordering::Relaxed));
        let (tx, rx) = oneshot::channel();
        self.calls.insert(
            token,
            PendingCall {
                method: method.to_string(),
                created_at: Instant::now(),
                tx,
            },
        );
        // `close` may have run between the check and the insert and missed this slot.
        if self.is_closed() {
            self.calls.remove(&token);
            return Err(WalletPortError::ChannelClosed);
        }
        Ok((token, rx))
    }

    /// Settle and remove the slot for `token`. No-op (returns false) when the
    /// slot is already gone.
    pub fn settle(&self, token: Token, outcome: Result<Value>) -> bool {
        let Some((_, call)) = self.calls.remove(&token) else {
            return false;
        };
        tracing::debug!(
            %token,
            method = %call.method,
            elapsed_ms = call.created_at.elapsed().as_millis() as u64,
            ok = outcome.is_ok(),
            "rpc call settled"
        );
        // Receiver gone means the caller stopped waiting; nothing to do.
        let _ = call.tx.send(outcome);
        true
    }

    /// Remove the slot without settling it.
    pub fn abandon(&self, token: Token) -> bool {
        self.calls.remove(&token).is_some()
    }

    /// Fail every outstanding call. Returns how many were failed.
    pub fn fail_all(&self, err: impl Fn() -> WalletPortError) -> usize {
        let tokens: Vec<Token> = self.calls.iter().map(|e| *e.key()).collect();
        tokens
            .into_iter()
            .filter(|t| self.settle(*t, Err(err())))
            .count()
    }

    pub fn contains(&self, token: Token) -> bool {
        self.calls.contains_key(&token)
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

impl ReplySink for PendingTable {
    fn deliver(&self, reply: Reply) -> bool {
        let token = reply.token;
        self.settle(token, reply.into_outcome().map_err(WalletPortError::Rpc))
    }

    fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
        let failed = self.fail_all(|| WalletPortError::ChannelClosed);
        if failed > 0 {
            tracing::warn!(failed, "outstanding calls failed on transport close");
        }
    }
}
