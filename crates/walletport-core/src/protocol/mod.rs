//! Protocol modules.
//!
//! - `envelope`: the tagged JSON unit exchanged over the transport (call,
//!   reply, event) plus the codec used at the wire boundary.
//! - `method`: the fixed wallet method catalogue.
//! - `event`: push-event names with built-in provider handling.
//! - `wallet`: argument/result shapes for the typed convenience calls.
//!
//! Decoding is panic-free: malformed input is reported as `WalletPortError`
//! and never reaches routing code half-parsed.

pub mod envelope;
pub mod event;
pub mod method;
pub mod wallet;

pub use envelope::{Call, Envelope, Event, ProviderError, Reply, RpcError, Token};
pub use method::WalletMethod;
pub use wallet::RequestArguments;
