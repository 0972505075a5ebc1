//! walletport client library entry.
//!
//! Wires a transport into the channel (reply/event multiplexing), the
//! messenger (token-correlated calls), and the provider facade that
//! applications hold. Consumed by the demo binary (`main.rs`) and by the
//! integration tests.

pub mod channel;
pub mod config;
pub mod emitter;
pub mod messenger;
pub mod provider;
pub mod transport;

pub use config::ProviderConfig;
pub use emitter::{Emitter, ListenerId};
pub use provider::{Connectivity, Provider};
