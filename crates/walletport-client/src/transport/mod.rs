//! Transport boundary.
//!
//! The provider only needs to push a serialized envelope out and to be handed
//! serialized envelopes as they arrive. Outbound is the `Transport` trait;
//! inbound is an `mpsc::Receiver<String>` drained by the channel pump.
//! `memory` is a loopback duplex used by tests and the demo binary.

pub mod memory;

use async_trait::async_trait;

use walletport_core::error::Result;

/// Outbound half of a duplex, string-addressed channel.
///
/// Implementations must not reorder or duplicate a single payload, but no
/// ordering across payloads is assumed. An `Err` means the transport knows the
/// payload was not delivered.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, raw: String) -> Result<()>;
}
