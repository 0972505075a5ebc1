//! Wallet method catalogue.

/// Methods with a typed convenience wrapper on the provider.
///
/// `request` accepts any method string; this enum only pins the identifiers
/// the wrappers bind to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WalletMethod {
    SendTransaction,
    SignMessage,
    VerifyMessage,
    RequestAccounts,
    RequestNetwork,
    SendPayment,
    SendStakeDelegation,
}

impl WalletMethod {
    pub const ALL: [WalletMethod; 7] = [
        WalletMethod::SendTransaction,
        WalletMethod::SignMessage,
        WalletMethod::VerifyMessage,
        WalletMethod::RequestAccounts,
        WalletMethod::RequestNetwork,
        WalletMethod::SendPayment,
        WalletMethod::SendStakeDelegation,
    ];

    /// Method identifier on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            WalletMethod::SendTransaction => "mina_sendTransaction",
            WalletMethod::SignMessage => "mina_signMessage",
            WalletMethod::VerifyMessage => "mina_verifyMessage",
            WalletMethod::RequestAccounts => "mina_requestAccounts",
            WalletMethod::RequestNetwork => "mina_requestNetwork",
            WalletMethod::SendPayment => "mina_sendPayment",
            WalletMethod::SendStakeDelegation => "mina_sendStakeDelegation",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == s)
    }
}
