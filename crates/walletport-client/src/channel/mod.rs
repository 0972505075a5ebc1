//! Channel: one transport, two logical facilities.
//!
//! Inbound replies are routed to a `ReplySink` by token; inbound push-events
//! are dispatched to handlers registered by name.

mod routing;

pub use routing::{Channel, ReplySink, Routed};
