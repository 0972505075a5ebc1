//! walletport core: transport-agnostic wire envelopes, wallet method catalogue,
//! argument/result shapes, and the shared error type.
//!
//! This crate defines the contract between an in-page provider and a wallet
//! running in another context. It carries no runtime or transport dependencies
//! so the same types can be used on both ends of the wire.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Malformed inbound payloads surface as `WalletPortError` so a hostile or
//! buggy wallet cannot take down the page-side routing path.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{Result, WalletPortError};
