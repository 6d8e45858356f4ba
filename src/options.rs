//! Transport configuration for [`CoinRpc`](crate::CoinRpc).
//!
//! Every knob the client recognizes is enumerated here explicitly and
//! validated at construction time; nothing is forwarded blindly to the
//! HTTP layer. Authentication is deliberately absent: credentials are
//! constructor arguments and cannot be supplied through `headers`.

use std::time::Duration;

use reqwest::header::{self, HeaderMap, HeaderValue};

use crate::error::Error;

/// Default per-request timeout applied when [`ClientOptions::timeout`]
/// is not set.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Transport options applied to every request issued by a client.
#[derive(Debug, Default, Clone)]
pub struct ClientOptions {
    /// Extra default headers, merged on top of the built-in set.
    /// `content-type` is always forced back to `application/json` after
    /// the merge, even if a caller supplies a different value.
    pub headers: HeaderMap,

    /// Per-request timeout for all calls issued by the client.
    /// Defaults to [`DEFAULT_TIMEOUT`].
    pub timeout: Option<Duration>,

    /// TCP connect timeout.
    pub connect_timeout: Option<Duration>,

    /// Maximum idle connections kept per host in the pool.
    pub pool_max_idle_per_host: Option<usize>,

    /// Set `TCP_NODELAY` on the socket.
    pub tcp_nodelay: Option<bool>,

    /// `user-agent` value sent with every request.
    pub user_agent: Option<String>,
}

impl ClientOptions {
    /// Reject option combinations the client refuses to honor.
    ///
    /// Basic auth comes exclusively from the username/password pair given
    /// at construction; an `authorization` header smuggled in through the
    /// generic options path is a configuration error regardless of what
    /// else is set.
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.headers.contains_key(header::AUTHORIZATION)
            || self.headers.contains_key(header::PROXY_AUTHORIZATION)
        {
            return Err(Error::Configuration(
                "authentication cannot be set via transport options".to_owned(),
            ));
        }
        Ok(())
    }

    /// Effective default header set: caller extras merged under the fixed
    /// `content-type: application/json`.
    pub(crate) fn default_headers(&self) -> HeaderMap {
        let mut headers = self.headers.clone();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers
    }

    pub(crate) fn request_timeout(&self) -> Duration {
        self.timeout.unwrap_or(DEFAULT_TIMEOUT)
    }
}
