#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use serde_json::json;

use walletport_client::channel::Routed;
use walletport_client::ProviderConfig;
use walletport_core::protocol::{Reply, RequestArguments, Token};

use harness::{event_raw, manual, reply_raw, Recorder};

#[tokio::test]
async fn duplicate_reply_is_a_no_op() {
    let (provider, mut wallet) = manual(&ProviderConfig::default());

    let p = provider.clone();
    let call = tokio::spawn(async move { p.request_accounts().await });
    let sent = wallet.next_call().await.unwrap();

    let raw = reply_raw(Reply::ok(sent.token, json!(["B62qA"])));
    assert_eq!(provider.channel().route(&raw), Routed::Reply { matched: true });
    assert_eq!(provider.channel().route(&raw), Routed::Reply { matched: false });

    assert_eq!(call.await.unwrap().unwrap(), vec!["B62qA".to_string()]);
    assert_eq!(provider.pending_count(), 0);
}

#[tokio::test]
async fn unknown_token_does_not_touch_outstanding_calls() {
    let (provider, mut wallet) = manual(&ProviderConfig::default());

    let p = provider.clone();
    let call = tokio::spawn(async move {
        p.request(RequestArguments::new("mina_requestNetwork", None))
            .await
    });
    let sent = wallet.next_call().await.unwrap();

    let stray = Token::new(sent.token.get() + 1000);
    assert_eq!(
        provider.channel().route(&reply_raw(Reply::ok(stray, json!("Devnet")))),
        Routed::Reply { matched: false }
    );
    assert_eq!(provider.pending_count(), 1);
    assert!(!call.is_finished());

    provider
        .channel()
        .route(&reply_raw(Reply::ok(sent.token, json!("Mainnet"))));
    assert_eq!(call.await.unwrap().unwrap(), json!("Mainnet"));
}

#[tokio::test]
async fn malformed_payloads_are_dropped() {
    let (provider, _wallet) = manual(&ProviderConfig::default());
    let ch = provider.channel();

    assert_eq!(ch.route("not json"), Routed::Dropped);
    assert_eq!(ch.route(r#"{"token":1,"result":true}"#), Routed::Dropped);
    assert_eq!(
        ch.route(r#"{"kind":"call","token":1,"method":"mina_requestAccounts"}"#),
        Routed::Dropped
    );
    assert!(!provider.is_connected());
}

#[tokio::test]
async fn oversized_payload_is_dropped() {
    let cfg = walletport_client::config::load_from_str(
        "version: 1\nchannel:\n  max_envelope_bytes: 256\n",
    )
    .unwrap();
    let (provider, _wallet) = manual(&cfg);
    let rec = Recorder::default();
    provider.on("accountsChanged", rec.listener("a"));

    let big = event_raw("accountsChanged", json!(["x".repeat(512)]));
    assert_eq!(provider.channel().route(&big), Routed::Dropped);
    assert!(rec.take().is_empty());
}

#[tokio::test]
async fn unknown_event_reaches_zero_handlers() {
    let (provider, _wallet) = manual(&ProviderConfig::default());
    let rec = Recorder::default();
    provider.on("walletLocked", rec.listener("app"));

    assert_eq!(
        provider.channel().route(&event_raw("walletLocked", json!(null))),
        Routed::Event { handlers: 0 }
    );
    assert!(rec.take().is_empty());
}

#[tokio::test]
async fn channel_handlers_fire_in_registration_order() {
    let (provider, _wallet) = manual(&ProviderConfig::default());
    let rec = Recorder::default();
    provider.channel().on("custom", rec.listener("first"));
    provider.channel().on("custom", rec.listener("second"));

    assert_eq!(
        provider.channel().route(&event_raw("custom", json!(7))),
        Routed::Event { handlers: 2 }
    );
    assert_eq!(
        rec.take(),
        vec![("first".to_string(), json!(7)), ("second".to_string(), json!(7))]
    );
}
