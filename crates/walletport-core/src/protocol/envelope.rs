//! Wire envelope (JSON).
//!
//! Every payload on the transport is one `Envelope`, discriminated by an
//! explicit `kind` tag:
//!
//! ```json
//! {"kind":"call","token":7,"method":"mina_requestAccounts"}
//! {"kind":"reply","token":7,"result":["B62q..."]}
//! {"kind":"reply","token":8,"error":{"code":4001,"message":"User rejected"}}
//! {"kind":"event","event":"chainChanged","payload":"Mainnet"}
//! ```
//!
//! The tag is inspected once at decode time; routing code matches on the
//! variant and never probes fields.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::error::{Result, WalletPortError};

/// Correlation token assigned to an outbound call and echoed by its reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(u64);

impl Token {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error object reported by the wallet (reply `error`, `disconnect` payload).
///
/// Passed to the application unmodified; codes are wallet-defined.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("{message} (code {code})")]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl RpcError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }
}

/// Error payload carried by a `disconnect` push-event.
pub type ProviderError = RpcError;

/// Outbound RPC call (page -> wallet).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Call {
    pub token: Token,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

/// RPC reply (wallet -> page). Exactly one of `result` / `error` is meaningful;
/// when both are present the error wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub token: Token,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

impl Reply {
    pub fn ok(token: Token, result: Value) -> Self {
        Self {
            token,
            result: Some(result),
            error: None,
        }
    }

    pub fn err(token: Token, error: RpcError) -> Self {
        Self {
            token,
            result: None,
            error: Some(error),
        }
    }

    /// Collapse into the call outcome. A reply with neither field (or
    /// `"result": null`) resolves to `Value::Null`.
    pub fn into_outcome(self) -> std::result::Result<Value, RpcError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.result.unwrap_or(Value::Null)),
        }
    }
}

/// Push-event (wallet -> page), never correlated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub event: String,
    #[serde(default)]
    pub payload: Value,
}

impl Event {
    pub fn new(event: impl Into<String>, payload: Value) -> Self {
        Self {
            event: event.into(),
            payload,
        }
    }
}

/// One unit on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Envelope {
    Call(Call),
    Reply(Reply),
    Event(Event),
}

impl Envelope {
    /// Short tag for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Envelope::Call(_) => "call",
            Envelope::Reply(_) => "reply",
            Envelope::Event(_) => "event",
        }
    }
}

/// Decode one raw payload.
pub fn decode(raw: &str) -> Result<Envelope> {
    serde_json::from_str(raw)
        .map_err(|e| WalletPortError::BadEnvelope(format!("invalid envelope json: {e}")))
}

/// Encode one envelope for the transport.
pub fn encode(env: &Envelope) -> Result<String> {
    serde_json::to_string(env)
        .map_err(|e| WalletPortError::BadEnvelope(format!("envelope encode failed: {e}")))
}
