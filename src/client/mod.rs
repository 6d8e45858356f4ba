//! JSON-RPC 2.0 envelope client for Bitcoin Core compatible daemons.
//!
//! [`CoinRpc`] owns one `reqwest` connection pool, allocates strictly
//! increasing request ids from a per-client atomic counter, and unwraps the
//! JSON-RPC response envelope into either the `result` value or a typed
//! error. The per-method wrappers in the sibling modules are pure
//! positional-parameter adapters over [`CoinRpc::call`].

mod blockchain;
mod network;
mod protocol;
mod psbt;
mod rawtransactions;
mod wallet;

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::error::Error;
use crate::options::ClientOptions;

use protocol::{parse_jsonrpc_error, JsonRpcRequest, JsonRpcResponse};

pub use blockchain::HashOrHeight;

/// Transport overrides applied to a single request only.
///
/// The common case is a one-off [`timeout`](Self::timeout) for a call known
/// to be slow on the daemon side, such as `getrawtransaction` on a node
/// without `txindex`.
#[derive(Debug, Default, Clone)]
pub struct CallOptions {
    /// Replaces the client-wide timeout for this request.
    pub timeout: Option<Duration>,
    /// Extra headers for this request. `content-type` remains
    /// `application/json` and `authorization` stays derived from the
    /// client's credentials regardless of what is supplied here.
    pub headers: Option<HeaderMap>,
}

/// Async JSON-RPC 2.0 client over HTTP(S).
///
/// One instance owns one connection pool for its whole lifetime; the pool is
/// allocated eagerly at construction and released when the client is dropped
/// or explicitly [`close`](Self::close)d. Calls may be issued concurrently
/// from multiple tasks: each call is a single HTTP POST carrying its own
/// request id, and the id counter is the only shared mutable state.
#[derive(Debug)]
pub struct CoinRpc {
    http: reqwest::Client,
    url: String,
    user: String,
    pass: String,
    next_id: AtomicU64,
}

impl CoinRpc {
    /// Create a client with default transport options.
    pub fn new(url: &str, user: &str, pass: &str) -> Result<Self, Error> {
        Self::with_options(url, user, pass, ClientOptions::default())
    }

    /// Create a client with explicit transport options.
    ///
    /// Fails with [`Error::Configuration`] if the URL is not HTTP(S), if the
    /// options try to set authentication, or if the transport rejects the
    /// requested settings.
    pub fn with_options(
        url: &str,
        user: &str,
        pass: &str,
        options: ClientOptions,
    ) -> Result<Self, Error> {
        let url = parse_connection(url)?;
        options.validate()?;

        let mut builder = reqwest::Client::builder()
            .default_headers(options.default_headers())
            .timeout(options.request_timeout());
        if let Some(connect_timeout) = options.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        if let Some(max_idle) = options.pool_max_idle_per_host {
            builder = builder.pool_max_idle_per_host(max_idle);
        }
        if let Some(nodelay) = options.tcp_nodelay {
            builder = builder.tcp_nodelay(nodelay);
        }
        if let Some(user_agent) = options.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let http = builder
            .build()
            .map_err(|e| Error::Configuration(format!("transport rejected options: {e}")))?;

        Ok(Self {
            http,
            url,
            user: user.to_owned(),
            pass: pass.to_owned(),
            next_id: AtomicU64::new(1),
        })
    }

    /// The daemon URL this client posts to.
    pub fn url(&self) -> &str {
        &self.url
    }

    fn next_request_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Issue a raw JSON-RPC call.
    ///
    /// `params` is positional, in the exact order the daemon's RPC reference
    /// documents for `method`. Neither the method name nor the parameter
    /// arity is validated locally; the daemon decides. Scalar results decode
    /// into scalar types; object- and array-shaped results are best taken as
    /// [`serde_json::Value`] since the shapes the reference documents are
    /// not enforced here.
    pub async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Vec<serde_json::Value>,
    ) -> Result<T, Error> {
        self.call_with(method, params, CallOptions::default()).await
    }

    /// Issue a raw JSON-RPC call with per-request transport overrides.
    pub async fn call_with<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Vec<serde_json::Value>,
        overrides: CallOptions,
    ) -> Result<T, Error> {
        let id = self.next_request_id();
        debug!(
            rpc.id = id,
            rpc.method = method,
            rpc.params = params.len(),
            "rpc call"
        );
        let req = JsonRpcRequest {
            jsonrpc: "2.0",
            id,
            method,
            params,
        };

        let mut builder = self
            .http
            .post(&self.url)
            .header(header::CONTENT_TYPE, "application/json")
            .basic_auth(&self.user, Some(&self.pass))
            .json(&req);
        if let Some(mut extra) = overrides.headers {
            // Per-key replacement semantics, so the fixed values must be
            // re-inserted into the override set rather than appended after.
            extra.remove(header::AUTHORIZATION);
            extra.remove(header::PROXY_AUTHORIZATION);
            extra.insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            );
            builder = builder.headers(extra);
        }
        if let Some(timeout) = overrides.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await?;
        let status = response.status();

        let body = response.text().await?;
        debug!(rpc.id = id, rpc.method = method, %status, body_len = body.len(), "rpc response");
        trace!(rpc.id = id, rpc.method = method, body = %body, "rpc response body");

        let decoded: JsonRpcResponse = serde_json::from_str(&body).map_err(|e| {
            Error::InvalidResponse(format!("decode JSON-RPC response: {e}; body={body}"))
        })?;

        if let Some(err) = decoded.error {
            return Err(parse_jsonrpc_error(err));
        }

        let result = decoded.result.unwrap_or(serde_json::Value::Null);
        serde_json::from_value(result)
            .map_err(|e| Error::InvalidResponse(format!("decode {method} result: {e}")))
    }

    /// Release the underlying connection pool.
    ///
    /// Consuming the client makes a second close unrepresentable. Dropping
    /// the client without calling this releases the pool the same way once
    /// in-flight requests finish; dropping an in-flight call future aborts
    /// its HTTP request.
    pub fn close(self) {
        drop(self.http);
    }
}

fn parse_connection(connection: &str) -> Result<String, Error> {
    let parsed = Url::parse(connection).map_err(|e| {
        Error::Configuration(format!(
            "invalid daemon URL `{connection}`: expected HTTP(S) URL ({e})"
        ))
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(connection.to_owned()),
        other => Err(Error::Configuration(format!(
            "unsupported URL scheme `{other}`; expected http or https"
        ))),
    }
}
