use std::str::FromStr;
use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::SpamError;

/// JSON-RPC protocol version sent with every request
pub const JSONRPC_VERSION: &str = "2.0";

/// JSON-RPC 2.0 request structure
///
/// This structure represents a standard JSON-RPC request with generic parameters.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonRpcRequest<T> {
    /// JSON-RPC protocol version (always "2.0")
    pub jsonrpc: String,

    /// Method name to call
    pub method: String,

    /// Method parameters
    pub params: T,

    /// Request identifier, unique per call on a given client
    pub id: u64,
}

impl<T> JsonRpcRequest<T> {
    /// Create a new JSON-RPC request envelope
    ///
    /// # Arguments
    ///
    /// * `method` - Method name to call
    /// * `params` - Method parameters
    /// * `id` - Request identifier
    pub fn new(method: &str, params: T, id: u64) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.to_string(),
            params,
            id,
        }
    }
}

/// JSON-RPC 2.0 response structure
///
/// This structure represents a standard JSON-RPC response. Either `result`
/// or `error` is populated; the result payload's shape is method-specific
/// and interpreted by the caller.
#[derive(Debug, Deserialize)]
pub struct JsonRpcResponse {
    /// JSON-RPC protocol version (some servers omit it)
    #[serde(default)]
    pub jsonrpc: Option<String>,

    /// Request identifier (matching the request)
    pub id: serde_json::Value,

    /// Method result (present on success)
    #[serde(default)]
    pub result: Option<serde_json::Value>,

    /// Error details (present on failure)
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

impl JsonRpcResponse {
    /// Extract the result payload, converting a non-null error field into
    /// an [`SpamError::Rpc`].
    pub fn into_result(self) -> Result<serde_json::Value, SpamError> {
        if let Some(error) = self.error {
            return Err(SpamError::Rpc(error));
        }
        Ok(self.result.unwrap_or(serde_json::Value::Null))
    }
}

/// JSON-RPC 2.0 error object
///
/// Code and message are preserved exactly as sent by the endpoint.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[error("code {code}: {message}")]
pub struct RpcErrorObject {
    /// Error code
    pub code: i64,

    /// Error message
    pub message: String,

    /// Additional error data (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// Parameters for the eth_sendTransaction JSON-RPC method
///
/// All fields are hex-encoded strings on the wire, addresses prefixed "0x".
/// Built fresh per submission; `from` and `to` are always distinct accounts
/// drawn from the pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferParams {
    /// Sender address
    pub from: String,

    /// Recipient address
    pub to: String,

    /// Transfer value in wei
    pub value: String,

    /// Gas limit for the transaction
    pub gas_limit: String,

    /// Gas price in wei
    pub gas_price: String,
}

impl TransferParams {
    /// Build transfer parameters from typed values.
    pub fn new(from: Address, to: Address, value: U256, gas_limit: u64, gas_price: U256) -> Self {
        Self {
            from: format_hex_address(from),
            to: format_hex_address(to),
            value: format_hex_u256(value),
            gas_limit: format_hex_u64(gas_limit),
            gas_price: format_hex_u256(gas_price),
        }
    }
}

/// Helper functions to parse and format hex values using alloy primitives.

/// Parse a hexadecimal address string into an `Address`.
///
/// Expects a string starting with "0x" and 40 hex digits (20 bytes).
///
/// # Arguments
///
/// * `hex` - The hexadecimal address string
///
/// # Returns
///
/// * `Result<Address, String>` - Parsed address or error message
pub fn parse_hex_address(hex: &str) -> Result<Address, String> {
    if !hex.starts_with("0x") {
        return Err("Address must start with 0x".to_string());
    }
    Address::from_str(hex)
        .map_err(|e| format!("Invalid address: {}", e))
}

/// Parse a hexadecimal string into a `U256` value.
///
/// Expects a string starting with "0x".
///
/// # Arguments
///
/// * `hex` - The hexadecimal string
///
/// # Returns
///
/// * `Result<U256, String>` - Parsed value or error message
pub fn parse_hex_u256(hex: &str) -> Result<U256, String> {
    let hex = hex
        .strip_prefix("0x")
        .ok_or_else(|| "Hex value must start with 0x".to_string())?;
    U256::from_str_radix(hex, 16).map_err(|e| format!("Invalid hex value: {}", e))
}

/// Parse a hexadecimal string into a `u64` value.
///
/// Expects a string starting with "0x".
///
/// # Arguments
///
/// * `hex` - The hexadecimal string
///
/// # Returns
///
/// * `Result<u64, String>` - Parsed value or error message
pub fn parse_hex_u64(hex: &str) -> Result<u64, String> {
    let hex = hex
        .strip_prefix("0x")
        .ok_or_else(|| "Hex value must start with 0x".to_string())?;
    u64::from_str_radix(hex, 16).map_err(|e| format!("Invalid u64 hex value: {}", e))
}

/// Format a `U256` value into a hexadecimal string prefixed with "0x".
pub fn format_hex_u256(value: U256) -> String {
    format!("0x{:x}", value)
}

/// Format a `u64` value into a hexadecimal string prefixed with "0x".
pub fn format_hex_u64(value: u64) -> String {
    format!("0x{:x}", value)
}

/// Format an `Address` into a lowercase hexadecimal string prefixed with "0x".
pub fn format_hex_address(address: Address) -> String {
    format!("0x{:x}", address)
}
