use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use walletport_core::error::{Result, WalletPortError};
use walletport_core::protocol::event;
use walletport_core::protocol::wallet::{
    BroadcastTransactionResult, SendLegacyPaymentArgs, SendLegacyStakeDelegationArgs,
    SendTransactionArgs, SendTransactionResult, SignMessageArgs, SignedData, VerifyMessageArgs,
};
use walletport_core::protocol::{RequestArguments, WalletMethod};

use crate::channel::{Channel, ReplySink};
use crate::config::ProviderConfig;
use crate::emitter::ListenerId;
use crate::messenger::{Messenger, PendingTable};
use crate::provider::state::{Connectivity, ProviderState};
use crate::transport::Transport;

/// Cheap to clone; clones share one channel, messenger, and listener set.
#[derive(Clone)]
pub struct Provider {
    inner: Arc<ProviderInner>,
}

struct ProviderInner {
    channel: Arc<Channel>,
    messenger: Messenger,
    state: Arc<ProviderState>,
}

impl Provider {
    /// Build a provider over `transport`. Inbound payloads must be fed with
    /// `attach` (or `Channel::route`) for calls to ever settle.
    pub fn new(transport: Arc<dyn Transport>, cfg: &ProviderConfig) -> Self {
        let pending = Arc::new(PendingTable::new());
        let sink: Arc<dyn ReplySink> = pending.clone();
        let channel = Arc::new(Channel::new(transport, sink, &cfg.channel));
        let messenger = Messenger::new(Arc::clone(&channel), pending, &cfg.messenger);
        let state = Arc::new(ProviderState::new());

        init_events(&channel, &state);

        Self {
            inner: Arc::new(ProviderInner {
                channel,
                messenger,
                state,
            }),
        }
    }

    /// Build a provider and spawn the inbound pump on the current runtime.
    pub fn spawn(
        transport: Arc<dyn Transport>,
        inbound: mpsc::Receiver<String>,
        cfg: &ProviderConfig,
    ) -> (Self, JoinHandle<()>) {
        let provider = Self::new(transport, cfg);
        let pump = provider.attach(inbound);
        (provider, pump)
    }

    /// Spawn a task routing `inbound` into this provider's channel.
    pub fn attach(&self, inbound: mpsc::Receiver<String>) -> JoinHandle<()> {
        let channel = Arc::clone(&self.inner.channel);
        tokio::spawn(async move { channel.pump(inbound).await })
    }

    pub fn channel(&self) -> &Channel {
        &self.inner.channel
    }

    /// Wallet identification flag.
    pub fn is_auro(&self) -> bool {
        true
    }

    // --------------------
    // RPC
    // --------------------
    pub async fn request(&self, args: RequestArguments) -> Result<Value> {
        self.inner.messenger.send(&args.method, args.params).await
    }

    pub async fn send_transaction(
        &self,
        args: SendTransactionArgs,
    ) -> Result<SendTransactionResult> {
        self.call(WalletMethod::SendTransaction, Some(to_params(&args)?)).await
    }

    pub async fn sign_message(&self, args: SignMessageArgs) -> Result<SignedData> {
        self.call(WalletMethod::SignMessage, Some(to_params(&args)?)).await
    }

    pub async fn verify_message(&self, args: VerifyMessageArgs) -> Result<bool> {
        self.call(WalletMethod::VerifyMessage, Some(to_params(&args)?)).await
    }

    pub async fn request_accounts(&self) -> Result<Vec<String>> {
        self.call(WalletMethod::RequestAccounts, None).await
    }

    /// Network name as reported by the wallet (`"Mainnet"`, `"Devnet"`, ...).
    pub async fn request_network(&self) -> Result<String> {
        self.call(WalletMethod::RequestNetwork, None).await
    }

    pub async fn send_legacy_payment(
        &self,
        args: SendLegacyPaymentArgs,
    ) -> Result<BroadcastTransactionResult> {
        self.call(WalletMethod::SendPayment, Some(to_params(&args)?)).await
    }

    pub async fn send_legacy_stake_delegation(
        &self,
        args: SendLegacyStakeDelegationArgs,
    ) -> Result<BroadcastTransactionResult> {
        self.call(WalletMethod::SendStakeDelegation, Some(to_params(&args)?)).await
    }

    /// Calls issued and not yet settled.
    pub fn pending_count(&self) -> usize {
        self.inner.messenger.pending_count()
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: WalletMethod,
        params: Option<Value>,
    ) -> Result<T> {
        let m = method.as_str();
        let v = self.request(RequestArguments::new(m, params)).await?;
        serde_json::from_value(v).map_err(|e| {
            WalletPortError::BadEnvelope(format!("{m} returned unexpected result: {e}"))
        })
    }

    // --------------------
    // Connectivity
    // --------------------
    pub fn is_connected(&self) -> bool {
        self.connectivity() == Connectivity::Connected
    }

    pub fn connectivity(&self) -> Connectivity {
        self.inner.state.connectivity()
    }

    // --------------------
    // Events
    // --------------------
    pub fn on<F>(&self, event: &str, f: F) -> ListenerId
    where
        F: Fn(&Value) + Send + Sync + 'static,
    {
        self.inner.state.events.on(event, f)
    }

    pub fn once<F>(&self, event: &str, f: F) -> ListenerId
    where
        F: Fn(&Value) + Send + Sync + 'static,
    {
        self.inner.state.events.once(event, f)
    }

    pub fn off(&self, event: &str, id: ListenerId) -> bool {
        self.inner.state.events.off(event, id)
    }

    pub fn remove_all_listeners(&self, event: Option<&str>) {
        self.inner.state.events.remove_all(event)
    }

    pub fn listener_count(&self, event: &str) -> usize {
        self.inner.state.events.listener_count(event)
    }

    pub fn event_names(&self) -> Vec<String> {
        self.inner.state.events.event_names()
    }

    /// Re-emit wallet push-events named `name` unchanged. Built-in names are
    /// already handled and are rejected.
    pub fn forward_event(&self, name: &str) -> Result<ListenerId> {
        if event::is_builtin(name) {
            return Err(WalletPortError::BadRequest(format!(
                "event {name} is already forwarded"
            )));
        }
        let state = Arc::clone(&self.inner.state);
        let owned = name.to_string();
        Ok(self
            .inner
            .channel
            .on(name, move |payload| state.relay(&owned, payload)))
    }
}

fn to_params<T: Serialize>(args: &T) -> Result<Value> {
    serde_json::to_value(args)
        .map_err(|e| WalletPortError::BadRequest(format!("params encode failed: {e}")))
}

fn init_events(channel: &Channel, state: &Arc<ProviderState>) {
    let s = Arc::clone(state);
    channel.on(event::CONNECT, move |_| s.on_connect());

    let s = Arc::clone(state);
    channel.on(event::DISCONNECT, move |error| s.on_disconnect(error));

    for name in [event::CHAIN_CHANGED, event::NETWORK_CHANGED, event::ACCOUNTS_CHANGED] {
        let s = Arc::clone(state);
        channel.on(name, move |payload| s.relay(name, payload));
    }
}
