//! Top-level facade crate for walletport.
//!
//! Re-exports the wire types and the client library so applications can depend on a single crate.

pub mod core {
    pub use walletport_core::*;
}

pub mod client {
    pub use walletport_client::*;
}

pub use walletport_client::{Provider, ProviderConfig};
