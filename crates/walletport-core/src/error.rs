//! Shared error type across walletport crates.

use thiserror::Error;

use crate::protocol::envelope::RpcError;

/// Stable error codes (useful for logs and for mapping into host-side errors).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid input or configuration.
    BadRequest,
    /// Payload could not be decoded/encoded as an envelope.
    BadEnvelope,
    /// Wallet answered the call with an error object.
    Rpc,
    /// Transport refused or failed to deliver a payload.
    Transport,
    /// Transport closed while the call was outstanding.
    ChannelClosed,
    /// No reply within the configured call timeout.
    Timeout,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    /// String representation used in logs and test vectors.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::BadEnvelope => "BAD_ENVELOPE",
            ErrorCode::Rpc => "RPC_ERROR",
            ErrorCode::Transport => "TRANSPORT",
            ErrorCode::ChannelClosed => "CHANNEL_CLOSED",
            ErrorCode::Timeout => "TIMEOUT",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, WalletPortError>;

/// Unified error type used by core and client.
#[derive(Debug, Error)]
pub enum WalletPortError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("bad envelope: {0}")]
    BadEnvelope(String),
    #[error("wallet error: {0}")]
    Rpc(#[from] RpcError),
    #[error("transport: {0}")]
    Transport(String),
    #[error("channel closed")]
    ChannelClosed,
    #[error("call {method} timed out after {after_ms}ms")]
    Timeout { method: String, after_ms: u64 },
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl WalletPortError {
    /// Map to a stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            WalletPortError::BadRequest(_) => ErrorCode::BadRequest,
            WalletPortError::BadEnvelope(_) => ErrorCode::BadEnvelope,
            WalletPortError::Rpc(_) => ErrorCode::Rpc,
            WalletPortError::Transport(_) => ErrorCode::Transport,
            WalletPortError::ChannelClosed => ErrorCode::ChannelClosed,
            WalletPortError::Timeout { .. } => ErrorCode::Timeout,
            WalletPortError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            WalletPortError::Internal(_) => ErrorCode::Internal,
        }
    }

    /// The wallet-reported error, if this failure came from the wallet.
    pub fn rpc_error(&self) -> Option<&RpcError> {
        match self {
            WalletPortError::Rpc(e) => Some(e),
            _ => None,
        }
    }
}
