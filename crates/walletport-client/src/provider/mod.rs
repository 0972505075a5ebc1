//! Provider: the application-facing facade.
//!
//! Wraps the messenger with typed wallet calls, tracks connectivity from the
//! wallet's `connect`/`disconnect` push-events, and re-emits wallet events on
//! its own listener registry.

mod facade;
mod state;

pub use facade::Provider;
pub use state::Connectivity;
