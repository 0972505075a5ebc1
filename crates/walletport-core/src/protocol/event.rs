//! Push-event names the wallet emits and the provider re-emits.

pub const CONNECT: &str = "connect";
pub const DISCONNECT: &str = "disconnect";
pub const CHAIN_CHANGED: &str = "chainChanged";
pub const NETWORK_CHANGED: &str = "networkChanged";
pub const ACCOUNTS_CHANGED: &str = "accountsChanged";

/// Names with built-in provider handling.
pub const BUILTIN: [&str; 5] = [
    CONNECT,
    DISCONNECT,
    CHAIN_CHANGED,
    NETWORK_CHANGED,
    ACCOUNTS_CHANGED,
];

pub fn is_builtin(name: &str) -> bool {
    BUILTIN.contains(&name)
}
