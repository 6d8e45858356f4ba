//! Raw transaction construction and broadcast.

use serde_json::{json, Value};

use crate::error::Error;

use super::CoinRpc;

impl CoinRpc {
    /// `getrawtransaction`
    ///
    /// For a transaction that is no longer in the mempool, `block_hash`
    /// must name the block containing it (unless the node runs `txindex`).
    /// `verbose` unset returns the decoded JSON form; `Some(false)` the raw
    /// hex string.
    pub async fn get_raw_transaction(
        &self,
        txid: &str,
        verbose: Option<bool>,
        block_hash: Option<&str>,
    ) -> Result<Value, Error> {
        self.call(
            "getrawtransaction",
            vec![json!(txid), json!(verbose.unwrap_or(true)), json!(block_hash)],
        )
        .await
    }

    /// `createrawtransaction`
    ///
    /// Returns the hex-encoded unsigned transaction. A non-zero `locktime`
    /// also locktime-activates the inputs.
    pub async fn create_raw_transaction(
        &self,
        inputs: Vec<Value>,
        outputs: Vec<Value>,
        locktime: Option<u32>,
    ) -> Result<String, Error> {
        self.call(
            "createrawtransaction",
            vec![json!(inputs), json!(outputs), json!(locktime.unwrap_or(0))],
        )
        .await
    }

    /// `fundrawtransaction`
    ///
    /// `iswitness` states whether `hexstring` is a serialized witness
    /// transaction; unset lets the daemon infer it from the hex. On the wire
    /// the funding `options` object precedes `iswitness`.
    pub async fn fund_raw_transaction(
        &self,
        hexstring: &str,
        iswitness: Option<bool>,
        options: Option<Value>,
    ) -> Result<Value, Error> {
        self.call(
            "fundrawtransaction",
            vec![
                json!(hexstring),
                options.unwrap_or_else(|| json!({})),
                json!(iswitness),
            ],
        )
        .await
    }

    /// `sendrawtransaction`
    pub async fn send_raw_transaction(&self, hexstring: &str) -> Result<String, Error> {
        self.call("sendrawtransaction", vec![json!(hexstring)]).await
    }

    /// `signrawtransactionwithwallet`
    ///
    /// `sighashtype` must be one of `ALL`, `NONE`, `SINGLE`,
    /// `ALL|ANYONECANPAY`, `NONE|ANYONECANPAY`, `SINGLE|ANYONECANPAY`;
    /// the daemon default `ALL` applies when unset.
    pub async fn sign_raw_transaction_with_wallet(
        &self,
        hexstring: &str,
        prevtxs: Option<Vec<Value>>,
        sighashtype: Option<&str>,
    ) -> Result<Value, Error> {
        self.call(
            "signrawtransactionwithwallet",
            vec![
                json!(hexstring),
                json!(prevtxs.unwrap_or_default()),
                json!(sighashtype.unwrap_or("ALL")),
            ],
        )
        .await
    }
}
