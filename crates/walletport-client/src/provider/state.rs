use std::sync::atomic::{AtomicU8, Ordering};

use serde_json::Value;

use walletport_core::protocol::event;

use crate::emitter::Emitter;

/// Connectivity as last reported by the wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    /// No `connect`/`disconnect` seen yet.
    Unknown,
    Connected,
    Disconnected,
}

impl Connectivity {
    fn from_u8(v: u8) -> Self {
        match v {
            1 => Connectivity::Connected,
            2 => Connectivity::Disconnected,
            _ => Connectivity::Unknown,
        }
    }

    fn as_u8(self) -> u8 {
        match self {
            Connectivity::Unknown => 0,
            Connectivity::Connected => 1,
            Connectivity::Disconnected => 2,
        }
    }
}

/// Connectivity flag plus application listeners. Shared with the channel's
/// push-event handlers; mutated only from them.
pub(crate) struct ProviderState {
    connectivity: AtomicU8,
    pub(crate) events: Emitter,
}

impl ProviderState {
    pub(crate) fn new() -> Self {
        Self {
            connectivity: AtomicU8::new(Connectivity::Unknown.as_u8()),
            events: Emitter::new(),
        }
    }

    pub(crate) fn connectivity(&self) -> Connectivity {
        Connectivity::from_u8(self.connectivity.load(Ordering::Acquire))
    }

    /// Re-emitted on every notification, even when already connected.
    pub(crate) fn on_connect(&self) {
        self.set(Connectivity::Connected);
        self.events.emit(event::CONNECT, &Value::Null);
    }

    pub(crate) fn on_disconnect(&self, error: &Value) {
        self.set(Connectivity::Disconnected);
        self.events.emit(event::DISCONNECT, error);
    }

    /// Pass-through without state change.
    pub(crate) fn relay(&self, name: &str, payload: &Value) {
        self.events.emit(name, payload);
    }

    fn set(&self, next: Connectivity) {
        let prev = Connectivity::from_u8(self.connectivity.swap(next.as_u8(), Ordering::AcqRel));
        if prev != next {
            tracing::info!(?prev, ?next, "wallet connectivity changed");
        }
    }
}
