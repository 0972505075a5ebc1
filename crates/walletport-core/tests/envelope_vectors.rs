//! Envelope decode vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use serde_json::json;

use walletport_core::protocol::envelope::{self, Call, Envelope, Reply, RpcError, Token};
use walletport_core::protocol::{RequestArguments, WalletMethod};

use vector_loader::load;

#[test]
fn envelope_vectors() {
    let files = [
        "reply_result.json",
        "reply_error.json",
        "reply_null_result.json",
        "event_chain_changed.json",
        "event_no_payload.json",
        "missing_kind.json",
        "unknown_kind.json",
        "not_json.json",
        "reply_missing_token.json",
    ];

    for f in files {
        let v = load(f);
        let res = envelope::decode(&v.raw);

        if let Some(err) = v.expect_error {
            let e = res.expect_err("expected error");
            assert_eq!(e.code().as_str(), err.code, "vector={}", v.description);
            continue;
        }

        let env = res.expect("expected envelope");
        let ex = v.expect.expect("missing expect block");
        assert_eq!(env.kind(), ex["kind"].as_str().unwrap(), "vector={}", v.description);

        match env {
            Envelope::Reply(reply) => {
                assert_eq!(
                    reply.token.get(),
                    ex["token"].as_u64().unwrap(),
                    "vector={}",
                    v.description
                );
                let ok = ex["ok"].as_bool().unwrap();
                match reply.into_outcome() {
                    Ok(_) => assert!(ok, "vector={}", v.description),
                    Err(e) => {
                        assert!(!ok, "vector={}", v.description);
                        assert_eq!(
                            e.code,
                            ex["error_code"].as_i64().unwrap(),
                            "vector={}",
                            v.description
                        );
                    }
                }
            }
            Envelope::Event(ev) => {
                assert_eq!(ev.event, ex["event"].as_str().unwrap(), "vector={}", v.description);
            }
            Envelope::Call(_) => panic!("no call vectors expected: {}", v.description),
        }
    }
}

#[test]
fn call_encodes_with_kind_tag() {
    let env = Envelope::Call(Call {
        token: Token::new(3),
        method: WalletMethod::RequestAccounts.as_str().into(),
        params: None,
    });
    let raw = envelope::encode(&env).unwrap();
    let v: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(v, json!({"kind": "call", "token": 3, "method": "mina_requestAccounts"}));
}

#[test]
fn reply_error_wins_over_result() {
    let reply = Reply {
        token: Token::new(1),
        result: Some(json!(true)),
        error: Some(RpcError::new(4100, "Unauthorized")),
    };
    assert_eq!(reply.into_outcome(), Err(RpcError::new(4100, "Unauthorized")));
}

#[test]
fn rpc_error_keeps_wallet_data() {
    let raw =
        r#"{"kind":"reply","token":2,"error":{"code":20002,"message":"nope","data":{"hint":"x"}}}"#;
    let Envelope::Reply(reply) = envelope::decode(raw).unwrap() else {
        panic!("expected reply");
    };
    let err = reply.into_outcome().unwrap_err();
    assert_eq!(err.data, Some(json!({"hint": "x"})));
}

#[test]
fn method_catalogue_round_trips_wire_names() {
    for m in WalletMethod::ALL {
        assert_eq!(WalletMethod::from_wire(m.as_str()), Some(m));
    }
    assert_eq!(WalletMethod::from_wire("eth_accounts"), None);
}

#[test]
fn request_arguments_omit_absent_params() {
    let args = RequestArguments::new("mina_requestNetwork", None);
    assert_eq!(
        serde_json::to_value(&args).unwrap(),
        json!({"method": "mina_requestNetwork"})
    );
}
