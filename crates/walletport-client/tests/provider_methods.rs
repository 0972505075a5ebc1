#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use serde_json::json;

use walletport_client::ProviderConfig;
use walletport_core::protocol::wallet::{
    FeePayer, SendLegacyPaymentArgs, SendLegacyStakeDelegationArgs, SendTransactionArgs,
    SignMessageArgs, Signature, SignedData,
};
use walletport_core::protocol::{Reply, WalletMethod};

use harness::pumped;

#[tokio::test]
async fn accounts_and_network_replies_are_not_swapped() {
    let (provider, mut wallet) = pumped(&ProviderConfig::default());

    let accounts = tokio::spawn({
        let p = provider.clone();
        async move { p.request_accounts().await }
    });
    let network = tokio::spawn({
        let p = provider.clone();
        async move { p.request_network().await }
    });

    let first = wallet.next_call().await.unwrap();
    let second = wallet.next_call().await.unwrap();
    let (acc_call, net_call) = if first.method == WalletMethod::RequestAccounts.as_str() {
        (first, second)
    } else {
        (second, first)
    };
    assert_eq!(net_call.method, "mina_requestNetwork");
    assert!(acc_call.params.is_none());

    wallet.reply(Reply::ok(net_call.token, json!("Mainnet"))).await.unwrap();
    wallet
        .reply(Reply::ok(acc_call.token, json!(["B62qAccount"])))
        .await
        .unwrap();

    assert_eq!(network.await.unwrap().unwrap(), "Mainnet");
    assert_eq!(accounts.await.unwrap().unwrap(), vec!["B62qAccount".to_string()]);
}

#[tokio::test]
async fn send_transaction_binds_method_and_params() {
    let (provider, mut wallet) = pumped(&ProviderConfig::default());
    let args = SendTransactionArgs {
        transaction: json!("{\"zkappCommand\":{}}"),
        fee_payer: Some(FeePayer {
            fee: Some(0.1),
            memo: Some("hello".into()),
        }),
        only_sign: None,
    };

    let call = tokio::spawn({
        let p = provider.clone();
        async move { p.send_transaction(args).await }
    });
    let sent = wallet.next_call().await.unwrap();
    assert_eq!(sent.method, "mina_sendTransaction");
    assert_eq!(
        sent.params,
        Some(json!({
            "transaction": "{\"zkappCommand\":{}}",
            "feePayer": {"fee": 0.1, "memo": "hello"}
        }))
    );

    wallet.reply(Reply::ok(sent.token, json!({"hash": "5Ju1"}))).await.unwrap();
    assert_eq!(call.await.unwrap().unwrap().hash, "5Ju1");
}

#[tokio::test]
async fn sign_then_verify_message() {
    let (provider, mut wallet) = pumped(&ProviderConfig::default());
    let signed = json!({
        "publicKey": "B62qSigner",
        "data": "hello",
        "signature": {"field": "123", "scalar": "456"}
    });

    let sign = tokio::spawn({
        let p = provider.clone();
        async move { p.sign_message(SignMessageArgs { message: "hello".into() }).await }
    });
    let sent = wallet.next_call().await.unwrap();
    assert_eq!(sent.method, "mina_signMessage");
    assert_eq!(sent.params, Some(json!({"message": "hello"})));
    wallet.reply(Reply::ok(sent.token, signed.clone())).await.unwrap();

    let data = sign.await.unwrap().unwrap();
    assert_eq!(
        data,
        SignedData {
            public_key: "B62qSigner".into(),
            data: "hello".into(),
            signature: Signature {
                field: "123".into(),
                scalar: "456".into(),
            },
        }
    );

    let verify = tokio::spawn({
        let p = provider.clone();
        async move { p.verify_message(data).await }
    });
    let sent = wallet.next_call().await.unwrap();
    assert_eq!(sent.method, "mina_verifyMessage");
    assert_eq!(sent.params, Some(signed));
    wallet.reply(Reply::ok(sent.token, json!(true))).await.unwrap();
    assert!(verify.await.unwrap().unwrap());
}

#[tokio::test]
async fn legacy_payment_and_delegation() {
    let (provider, mut wallet) = pumped(&ProviderConfig::default());

    let pay = tokio::spawn({
        let p = provider.clone();
        async move {
            p.send_legacy_payment(SendLegacyPaymentArgs {
                amount: 1.5,
                to: "B62qTo".into(),
                fee: None,
                memo: None,
            })
            .await
        }
    });
    let sent = wallet.next_call().await.unwrap();
    assert_eq!(sent.method, "mina_sendPayment");
    assert_eq!(sent.params, Some(json!({"amount": 1.5, "to": "B62qTo"})));
    wallet.reply(Reply::ok(sent.token, json!({"hash": "pay"}))).await.unwrap();
    assert_eq!(pay.await.unwrap().unwrap().hash, "pay");

    let delegate = tokio::spawn({
        let p = provider.clone();
        async move {
            p.send_legacy_stake_delegation(SendLegacyStakeDelegationArgs {
                to: "B62qPool".into(),
                fee: Some(0.01),
                memo: None,
            })
            .await
        }
    });
    let sent = wallet.next_call().await.unwrap();
    assert_eq!(sent.method, "mina_sendStakeDelegation");
    assert_eq!(sent.params, Some(json!({"to": "B62qPool", "fee": 0.01})));
    wallet.reply(Reply::ok(sent.token, json!({"hash": "stake"}))).await.unwrap();
    assert_eq!(delegate.await.unwrap().unwrap().hash, "stake");
}

#[tokio::test]
async fn unexpected_result_shape_is_reported() {
    let (provider, mut wallet) = pumped(&ProviderConfig::default());

    let call = tokio::spawn({
        let p = provider.clone();
        async move { p.request_accounts().await }
    });
    let sent = wallet.next_call().await.unwrap();
    wallet.reply(Reply::ok(sent.token, json!({"not": "a list"}))).await.unwrap();

    let err = call.await.unwrap().expect_err("bad shape");
    assert_eq!(err.code().as_str(), "BAD_ENVELOPE");
    assert_eq!(provider.pending_count(), 0);
}
