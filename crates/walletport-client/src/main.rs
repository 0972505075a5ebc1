//! walletport demo
//!
//! Runs a provider against a scripted wallet over the in-memory transport:
//! - wallet announces `connect`
//! - page issues `requestAccounts` and `requestNetwork` concurrently
//! - wallet answers in reverse order, then pushes `chainChanged`
//!
//! Usage: `RUST_LOG=debug walletport-demo [walletport.yaml]`

use serde_json::json;
use tokio::sync::oneshot;
use tracing_subscriber::{fmt, EnvFilter};

use walletport_client::transport::memory::{self, WalletEnd};
use walletport_client::{config, Provider, ProviderConfig};
use walletport_core::error::Result;
use walletport_core::protocol::{event, Event, Reply, WalletMethod};

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = match std::env::args().nth(1) {
        Some(path) => config::load_from_file(&path)?,
        None => ProviderConfig::default(),
    };

    let (page, wallet) = memory::duplex(cfg.channel.inbound_capacity);
    let (provider, pump) = Provider::spawn(page.transport, page.inbound, &cfg);

    let (connected_tx, connected_rx) = oneshot::channel();
    let connected_tx = std::sync::Mutex::new(Some(connected_tx));
    provider.once(event::CONNECT, move |_| {
        if let Ok(mut slot) = connected_tx.lock() {
            if let Some(tx) = slot.take() {
                let _ = tx.send(());
            }
        }
    });
    provider.on(event::CHAIN_CHANGED, |chain| tracing::info!(%chain, "chain changed"));

    let wallet_task = tokio::spawn(scripted_wallet(wallet));

    let _ = connected_rx.await;
    tracing::info!(connected = provider.is_connected(), "wallet ready");

    let (accounts, network) = tokio::join!(provider.request_accounts(), provider.request_network());
    let (accounts, network) = (accounts?, network?);
    tracing::info!(?accounts, %network, "wallet answered");

    match wallet_task.await {
        Ok(res) => res?,
        Err(e) => tracing::warn!(error = %e, "wallet task failed"),
    }
    // Wallet end dropped: the pump drains and exits.
    let _ = pump.await;
    tracing::info!(pending = provider.pending_count(), "demo finished");
    Ok(())
}

async fn scripted_wallet(mut wallet: WalletEnd) -> Result<()> {
    wallet.push(Event::new(event::CONNECT, json!(null))).await?;

    let mut calls = Vec::new();
    while calls.len() < 2 {
        match wallet.next_call().await {
            Some(call) => calls.push(call),
            None => return Ok(()),
        }
    }

    for call in calls.into_iter().rev() {
        let result = match WalletMethod::from_wire(&call.method) {
            Some(WalletMethod::RequestAccounts) => {
                json!(["B62qpRzFVjd56FiHnNfxokVbcHMQLT119My1FEdSq8ss7KomLiSZcan"])
            }
            Some(WalletMethod::RequestNetwork) => json!("Mainnet"),
            _ => json!(null),
        };
        wallet.reply(Reply::ok(call.token, result)).await?;
    }

    wallet.push(Event::new(event::CHAIN_CHANGED, json!("Devnet"))).await?;
    Ok(())
}
