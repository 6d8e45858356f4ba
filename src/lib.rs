//! Async JSON-RPC client for Bitcoin- and Peercoin-family node daemons.
//!
//! This crate is a thin envelope client: method calls become JSON-RPC 2.0
//! requests over HTTP POST, and the response envelope is unwrapped into the
//! `result` value or a typed error. The daemon does all the real work —
//! consensus, mempool, wallet signing, coin selection — and also defines
//! every method's name, positional parameter order, and defaults; the
//! wrappers here mirror its RPC reference method by method.
//!
//! ```no_run
//! use coinrpc::CoinRpc;
//!
//! # async fn run() -> Result<(), coinrpc::Error> {
//! let rpc = CoinRpc::new("http://localhost:9904", "rpc_user", "rpc_password")?;
//!
//! let height = rpc.get_block_count().await?;
//! let hash = rpc.get_block_hash(height).await?;
//! let header = rpc.get_block_header(&hash, None).await?;
//! println!("tip {hash} at {height}: {header}");
//!
//! rpc.close();
//! # Ok(())
//! # }
//! ```
//!
//! Anything not wrapped (or newer than the wrappers) can be reached through
//! [`CoinRpc::call`] with hand-built positional params.

pub mod client;
pub mod error;
pub mod options;

pub use client::{CallOptions, CoinRpc, HashOrHeight};
pub use error::Error;
pub use options::ClientOptions;
