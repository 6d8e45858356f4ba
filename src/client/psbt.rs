//! Partially signed transaction (PSBT) operations.
//!
//! PSBTs are opaque base64 strings to this client; decoding, combining and
//! finalizing all happen daemon-side.

use serde_json::{json, Value};

use crate::error::Error;

use super::CoinRpc;

impl CoinRpc {
    /// `analyzepsbt`
    pub async fn analyze_psbt(&self, psbt: &str) -> Result<Value, Error> {
        self.call("analyzepsbt", vec![json!(psbt)]).await
    }

    /// `combinepsbt`
    ///
    /// Merges multiple PSBTs for the same transaction into one; returns the
    /// combined PSBT.
    pub async fn combine_psbt(&self, psbts: &[&str]) -> Result<String, Error> {
        self.call("combinepsbt", vec![json!(psbts)]).await
    }

    /// `decodepsbt`
    pub async fn decode_psbt(&self, psbt: &str) -> Result<Value, Error> {
        self.call("decodepsbt", vec![json!(psbt)]).await
    }

    /// `finalizepsbt`
    ///
    /// With `extract` unset (the daemon default `true`), a complete
    /// transaction comes back as network-ready hex.
    pub async fn finalize_psbt(&self, psbt: &str, extract: Option<bool>) -> Result<Value, Error> {
        self.call(
            "finalizepsbt",
            vec![json!(psbt), json!(extract.unwrap_or(true))],
        )
        .await
    }

    /// `joinpsbts`
    ///
    /// Joins PSBTs with distinct inputs into one transaction; returns the
    /// joined PSBT.
    pub async fn join_psbts(&self, psbts: &[&str]) -> Result<String, Error> {
        self.call("joinpsbts", vec![json!(psbts)]).await
    }

    /// `utxoupdatepsbt`
    ///
    /// When `descriptors` is absent it is left off the wire entirely rather
    /// than sent as null; the daemon distinguishes the two.
    pub async fn utxo_update_psbt(
        &self,
        psbt: &str,
        descriptors: Option<Vec<Value>>,
    ) -> Result<String, Error> {
        let params = match descriptors {
            Some(descriptors) => vec![json!(psbt), json!(descriptors)],
            None => vec![json!(psbt)],
        };
        self.call("utxoupdatepsbt", params).await
    }

    /// `walletprocesspsbt`
    ///
    /// Updates the PSBT with wallet data and, with `sign` unset, signs it.
    /// `sighashtype` defaults to `ALL`, `bip32_derivs` to `true`.
    pub async fn wallet_process_psbt(
        &self,
        psbt: &str,
        sign: Option<bool>,
        sighashtype: Option<&str>,
        bip32_derivs: Option<bool>,
    ) -> Result<Value, Error> {
        self.call(
            "walletprocesspsbt",
            vec![
                json!(psbt),
                json!(sign.unwrap_or(true)),
                json!(sighashtype.unwrap_or("ALL")),
                json!(bip32_derivs.unwrap_or(true)),
            ],
        )
        .await
    }
}
