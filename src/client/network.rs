//! Network and mining status queries.

use serde_json::{json, Value};

use crate::error::Error;

use super::CoinRpc;

impl CoinRpc {
    /// `getnetworkinfo`
    pub async fn get_network_info(&self) -> Result<Value, Error> {
        self.call("getnetworkinfo", Vec::new()).await
    }

    /// `getconnectioncount`
    pub async fn get_connection_count(&self) -> Result<u64, Error> {
        self.call("getconnectioncount", Vec::new()).await
    }

    /// `getmininginfo`
    pub async fn get_mining_info(&self) -> Result<Value, Error> {
        self.call("getmininginfo", Vec::new()).await
    }

    /// `getnetworkhashps`
    ///
    /// `nblocks` of -1 estimates hash power since the last difficulty
    /// change (the daemon default); `height` unset means the latest block.
    pub async fn get_network_hashps(
        &self,
        nblocks: Option<i64>,
        height: Option<u64>,
    ) -> Result<f64, Error> {
        self.call(
            "getnetworkhashps",
            vec![json!(nblocks.unwrap_or(-1)), json!(height)],
        )
        .await
    }
}
