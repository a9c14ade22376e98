use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use alloy::primitives::Bytes;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::error::SpamError;
use crate::models::jsonrpc::{JsonRpcRequest, JsonRpcResponse, TransferParams};

/// JSON-RPC method used to submit a transfer
pub const ETH_SEND_TRANSACTION: &str = "eth_sendTransaction";

/// Configuration for the JSON-RPC client
///
/// An explicit configuration object passed to the client constructor,
/// rather than a global endpoint read from the process environment.
#[derive(Debug, Clone)]
pub struct RpcConfig {
    /// Target JSON-RPC endpoint
    pub endpoint: Url,

    /// Artificial pacing delay applied before each request (off by default)
    pub send_delay: Duration,
}

impl RpcConfig {
    /// Create a configuration for the given endpoint with no pacing delay.
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            send_delay: Duration::ZERO,
        }
    }

    /// Set an artificial delay to wait before each request is sent.
    pub fn with_send_delay(mut self, delay: Duration) -> Self {
        self.send_delay = delay;
        self
    }
}

/// JSON-RPC client for submitting requests over HTTP
///
/// Wraps a method + params pair in a JSON-RPC 2.0 envelope, POSTs it to the
/// configured endpoint and decodes the response. Request ids are assigned
/// from an atomic counter so concurrent calls never share an id.
#[derive(Debug)]
pub struct RpcClient {
    http: reqwest::Client,
    config: RpcConfig,
    next_id: AtomicU64,
}

impl RpcClient {
    /// Create a new client from an explicit configuration.
    pub fn new(config: RpcConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            next_id: AtomicU64::new(1),
        }
    }

    /// Create a new client for the given endpoint URL with default configuration.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - URL of the JSON-RPC endpoint
    ///
    /// # Returns
    ///
    /// * `Result<Self, SpamError>` - New client instance or an error if the
    ///   URL does not parse
    pub fn from_url(endpoint: &str) -> Result<Self, SpamError> {
        let endpoint = Url::parse(endpoint)?;
        Ok(Self::new(RpcConfig::new(endpoint)))
    }

    /// The endpoint this client submits to.
    pub fn endpoint(&self) -> &Url {
        &self.config.endpoint
    }

    /// Perform a JSON-RPC call.
    ///
    /// Serializes the envelope, POSTs it with `Content-Type: application/json`
    /// and decodes the body as a single JSON-RPC response object. No timeout
    /// is applied to the request itself.
    ///
    /// # Arguments
    ///
    /// * `method` - Method name to call
    /// * `params` - Method parameters (serialized as-is)
    ///
    /// # Returns
    ///
    /// * `Result<JsonRpcResponse, SpamError>` - Decoded response, or a
    ///   serialization / transport / decode error
    pub async fn call<P: Serialize>(
        &self,
        method: &str,
        params: P,
    ) -> Result<JsonRpcResponse, SpamError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = JsonRpcRequest::new(method, params, id);
        let body = serde_json::to_vec(&request).map_err(SpamError::Serialize)?;

        if !self.config.send_delay.is_zero() {
            tokio::time::sleep(self.config.send_delay).await;
        }

        debug!(method, id, "sending JSON-RPC request");

        let response = self
            .http
            .post(self.config.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(SpamError::Decode)
    }

    /// Submit a transfer via `eth_sendTransaction`.
    ///
    /// Sends the parameters as a single-element list and decodes the result
    /// payload as the hex-prefixed transaction hash bytes.
    pub async fn send_transaction(&self, params: TransferParams) -> Result<Bytes, SpamError> {
        let response = self.call(ETH_SEND_TRANSACTION, [params]).await?;
        let result = response.into_result()?;
        serde_json::from_value(result).map_err(SpamError::Decode)
    }
}
