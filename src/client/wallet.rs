//! Wallet operations.
//!
//! All signing, coin selection, and key handling happens daemon-side; these
//! wrappers only place arguments into the documented positions.

use serde_json::{json, Value};

use crate::error::Error;

use super::CoinRpc;

impl CoinRpc {
    /// `sendtoaddress`
    ///
    /// `comment` and `comment_to` are stored in the wallet only, never in
    /// the transaction. When unset, `subtractfeefromamount` defaults to
    /// `true` (the recipient receives `amount` minus the fee) and
    /// `avoid_reuse` to `false`. Returns the txid.
    pub async fn send_to_address(
        &self,
        address: &str,
        amount: f64,
        comment: Option<&str>,
        comment_to: Option<&str>,
        subtract_fee_from_amount: Option<bool>,
        avoid_reuse: Option<bool>,
    ) -> Result<String, Error> {
        self.call(
            "sendtoaddress",
            vec![
                json!(address),
                json!(amount),
                json!(comment),
                json!(comment_to),
                json!(subtract_fee_from_amount.unwrap_or(true)),
                json!(avoid_reuse.unwrap_or(false)),
            ],
        )
        .await
    }

    /// `getnewaddress`
    ///
    /// `address_type` is one of `legacy`, `p2sh-segwit`, `bech32`;
    /// defaults to `bech32` when unset.
    pub async fn get_new_address(
        &self,
        label: Option<&str>,
        address_type: Option<&str>,
    ) -> Result<String, Error> {
        self.call(
            "getnewaddress",
            vec![json!(label), json!(address_type.unwrap_or("bech32"))],
        )
        .await
    }

    /// `importpubkey`
    ///
    /// `rescan` defaults to `true`; on a long chain the rescan can take
    /// well over the default timeout, so pair this with a per-call
    /// override via [`CoinRpc::call_with`] when that matters.
    pub async fn import_pubkey(
        &self,
        pubkey: &str,
        label: Option<&str>,
        rescan: Option<bool>,
    ) -> Result<(), Error> {
        self.call(
            "importpubkey",
            vec![json!(pubkey), json!(label), json!(rescan.unwrap_or(true))],
        )
        .await
    }

    /// `listreceivedbyaddress`
    ///
    /// Arguments are in wire order: `minconf` defaults to 1 and
    /// `include_empty` to `false`; `address_filter` restricts the listing
    /// to a single address.
    pub async fn list_received_by_address(
        &self,
        minconf: Option<u32>,
        include_empty: Option<bool>,
        include_watchonly: Option<bool>,
        address_filter: Option<&str>,
    ) -> Result<Value, Error> {
        self.call(
            "listreceivedbyaddress",
            vec![
                json!(minconf.unwrap_or(1)),
                json!(include_empty.unwrap_or(false)),
                json!(include_watchonly),
                json!(address_filter),
            ],
        )
        .await
    }

    /// `listunspent`
    ///
    /// Defaults mirror the daemon's: confirmations between 1 and 9999999,
    /// no address filter, unsafe outputs included, no query options.
    pub async fn list_unspent(
        &self,
        minconf: Option<u32>,
        maxconf: Option<u32>,
        addresses: Option<Vec<String>>,
        include_unsafe: Option<bool>,
        query_options: Option<Value>,
    ) -> Result<Value, Error> {
        self.call(
            "listunspent",
            vec![
                json!(minconf.unwrap_or(1)),
                json!(maxconf.unwrap_or(9_999_999)),
                json!(addresses.unwrap_or_default()),
                json!(include_unsafe.unwrap_or(true)),
                query_options.unwrap_or_else(|| json!({})),
            ],
        )
        .await
    }

    /// `createwallet`
    ///
    /// On the wire `passphrase` sits fourth, after `disable_private_keys`
    /// and `blank`. Unset flags fall back to the daemon defaults: `blank`,
    /// `avoid_reuse` and `descriptors` off, `load_on_startup` on.
    pub async fn create_wallet(
        &self,
        wallet_name: &str,
        passphrase: &str,
        disable_private_keys: Option<bool>,
        blank: Option<bool>,
        avoid_reuse: Option<bool>,
        descriptors: Option<bool>,
        load_on_startup: Option<bool>,
    ) -> Result<Value, Error> {
        self.call(
            "createwallet",
            vec![
                json!(wallet_name),
                json!(disable_private_keys),
                json!(blank.unwrap_or(false)),
                json!(passphrase),
                json!(avoid_reuse.unwrap_or(false)),
                json!(descriptors.unwrap_or(false)),
                json!(load_on_startup.unwrap_or(true)),
            ],
        )
        .await
    }

    /// `walletpassphrase`
    ///
    /// Unlocks the wallet for `timeout` seconds.
    pub async fn wallet_passphrase(&self, passphrase: &str, timeout: u64) -> Result<(), Error> {
        self.call(
            "walletpassphrase",
            vec![json!(passphrase), json!(timeout)],
        )
        .await
    }

    /// `optimizeutxoset`
    ///
    /// Peercoin-specific: consolidates the UTXO set for continuous minting,
    /// resetting accumulated coinage. Requires an unlocked wallet. With
    /// `transmit` unset the transaction is generated but not broadcast;
    /// `source_address` unset spends from all available coins.
    pub async fn optimize_utxo_set(
        &self,
        address: &str,
        amount: f64,
        transmit: Option<bool>,
        source_address: Option<&str>,
    ) -> Result<String, Error> {
        self.call(
            "optimizeutxoset",
            vec![
                json!(address),
                json!(amount),
                json!(transmit.unwrap_or(false)),
                json!(source_address),
            ],
        )
        .await
    }
}
