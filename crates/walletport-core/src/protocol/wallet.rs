//! Argument/result shapes for the typed provider calls.
//!
//! These only give the convenience wrappers static types. The wallet owns the
//! semantics; unknown fields are tolerated so newer wallets keep working.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Generic `request` input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestArguments {
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl RequestArguments {
    pub fn new(method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            method: method.into(),
            params,
        }
    }
}

/// Optional fee payer overrides for `sendTransaction`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeePayer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTransactionArgs {
    /// Serialized transaction (string or JSON object), opaque here.
    pub transaction: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_payer: Option<FeePayer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub only_sign: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendTransactionResult {
    pub hash: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignMessageArgs {
    pub message: String,
}

/// Field/scalar pair of a Schnorr signature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    pub field: String,
    pub scalar: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedData {
    pub public_key: String,
    pub data: String,
    pub signature: Signature,
}

/// `verifyMessage` takes exactly what `signMessage` produced.
pub type VerifyMessageArgs = SignedData;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendLegacyPaymentArgs {
    pub amount: f64,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendLegacyStakeDelegationArgs {
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BroadcastTransactionResult {
    pub hash: String,
}
