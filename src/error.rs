#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The client was constructed with options it cannot honor. Raised
    /// synchronously at construction time, never retried.
    #[error("invalid client configuration: {0}")]
    Configuration(String),

    /// The daemon processed the request and reported a failure. `code` and
    /// `message` carry the daemon's JSON-RPC error verbatim; whether the
    /// failure is transient is the caller's call.
    #[error("daemon RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// The HTTP round trip itself failed: DNS, connection refused, TLS,
    /// timeout. Surfaced as-is from the transport layer.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not a JSON-RPC envelope, or the `result` field
    /// did not decode into the type the caller asked for.
    #[error("invalid JSON-RPC response: {0}")]
    InvalidResponse(String),
}
