//! Messenger: future-based RPC over the channel.
//!
//! Every call gets a fresh token and a slot in the `PendingTable`; the channel
//! settles the slot when a reply carrying that token arrives.

mod pending;
mod rpc;

pub use pending::PendingTable;
pub use rpc::Messenger;
