//! Chain-state queries.
//!
//! Each wrapper maps its arguments to the positional `params` array the
//! daemon documents, in the daemon's order, and forwards to
//! [`CoinRpc::call`]. See
//! <https://developer.bitcoin.org/reference/rpc/index.html> for the
//! authoritative method reference.

use serde_json::{json, Value};

use crate::error::Error;

use super::CoinRpc;

/// Block selector for `getblockstats`: a block hash or a height.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(untagged)]
pub enum HashOrHeight {
    Hash(String),
    Height(u64),
}

impl From<u64> for HashOrHeight {
    fn from(height: u64) -> Self {
        Self::Height(height)
    }
}

impl From<&str> for HashOrHeight {
    fn from(hash: &str) -> Self {
        Self::Hash(hash.to_owned())
    }
}

impl From<String> for HashOrHeight {
    fn from(hash: String) -> Self {
        Self::Hash(hash)
    }
}

impl CoinRpc {
    /// `getblockchaininfo`
    pub async fn get_blockchain_info(&self) -> Result<Value, Error> {
        self.call("getblockchaininfo", Vec::new()).await
    }

    /// `getmempoolinfo`
    pub async fn get_mempool_info(&self) -> Result<Value, Error> {
        self.call("getmempoolinfo", Vec::new()).await
    }

    /// `getchaintips`
    pub async fn get_chain_tips(&self) -> Result<Value, Error> {
        self.call("getchaintips", Vec::new()).await
    }

    /// `getdifficulty`
    pub async fn get_difficulty(&self) -> Result<f64, Error> {
        self.call("getdifficulty", Vec::new()).await
    }

    /// `getbestblockhash`
    pub async fn get_best_block_hash(&self) -> Result<String, Error> {
        self.call("getbestblockhash", Vec::new()).await
    }

    /// `getblockhash`
    pub async fn get_block_hash(&self, height: u64) -> Result<String, Error> {
        self.call("getblockhash", vec![json!(height)]).await
    }

    /// `getblockcount`
    pub async fn get_block_count(&self) -> Result<u64, Error> {
        self.call("getblockcount", Vec::new()).await
    }

    /// `getblockheader`
    ///
    /// With `verbose` unset the daemon decodes the header to JSON; pass
    /// `Some(false)` for the hex-serialized form.
    pub async fn get_block_header(
        &self,
        block_hash: &str,
        verbose: Option<bool>,
    ) -> Result<Value, Error> {
        self.call(
            "getblockheader",
            vec![json!(block_hash), json!(verbose.unwrap_or(true))],
        )
        .await
    }

    /// `getblockstats`
    ///
    /// `keys` restricts the response to the named stats; an empty slice asks
    /// for all of them.
    pub async fn get_block_stats(
        &self,
        target: impl Into<HashOrHeight>,
        keys: &[&str],
    ) -> Result<Value, Error> {
        let keys = if keys.is_empty() {
            Value::Null
        } else {
            json!(keys)
        };
        self.call("getblockstats", vec![json!(target.into()), keys])
            .await
    }

    /// `getblock`
    ///
    /// `verbosity`: 0 for hex-encoded block data, 1 for block data with a
    /// txid list, 2 for block data with each transaction decoded. The
    /// daemon's default of 1 applies when unset.
    pub async fn get_block(&self, block_hash: &str, verbosity: Option<u8>) -> Result<Value, Error> {
        self.call(
            "getblock",
            vec![json!(block_hash), json!(verbosity.unwrap_or(1))],
        )
        .await
    }
}
