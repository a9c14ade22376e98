use crate::models::jsonrpc::RpcErrorObject;
use thiserror::Error;

/// Tool-specific error types
///
/// This enum defines all possible errors that can occur while generating load.
/// Every submission-level error is recoverable: the driver reports it and
/// moves on to the next tick.
#[derive(Error, Debug)]
pub enum SpamError {
    /// Error serializing the JSON-RPC request envelope
    #[error("failed to serialize request: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Error performing the HTTP POST or reading the response body
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Error decoding the response body as a JSON-RPC response
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// Non-null error field in the JSON-RPC response
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcErrorObject),

    /// The configured endpoint is not a valid URL
    #[error("invalid endpoint URL: {0}")]
    Endpoint(#[from] url::ParseError),

    /// The account pool is too small to pick a distinct (from, to) pair
    #[error("account pool needs at least 2 accounts, got {0}")]
    PoolTooSmall(usize),
}
