//! Command-line interface definitions.

use clap::{Args, Parser, Subcommand};

use crate::spammer::{DEFAULT_GAS_LIMIT, DEFAULT_GAS_PRICE, DEFAULT_VALUE};

/// Load-generation tool for an Ethereum JSON-RPC endpoint.
#[derive(Debug, Parser)]
#[command(name = "eth-tx-spammer", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Send transfer transactions between random accounts at a fixed rate
    #[command(name = "sendtx")]
    SendTx(SendTxArgs),

    /// Generate a given number of accounts and print their addresses
    #[command(name = "genAccts")]
    GenAccts(GenAcctsArgs),
}

#[derive(Debug, Args)]
pub struct SendTxArgs {
    /// Number of accounts to generate for the pool
    #[arg(long, default_value_t = 10)]
    pub accounts: usize,

    /// Transfer value in wei, hex-encoded
    #[arg(long, default_value = DEFAULT_VALUE)]
    pub value: String,

    /// Gas limit per transaction, hex-encoded
    #[arg(long, default_value = DEFAULT_GAS_LIMIT)]
    pub gas_limit: String,

    /// Gas price in wei, hex-encoded
    #[arg(long, default_value = DEFAULT_GAS_PRICE)]
    pub gas_price: String,

    /// Maximum number of transactions to submit
    #[arg(long, default_value_t = 100)]
    pub max_tx: u64,

    /// Tick interval between submissions, in microseconds
    #[arg(long, default_value_t = 600)]
    pub interval_us: u64,

    /// Artificial delay before each request, in milliseconds
    #[arg(long, default_value_t = 0)]
    pub send_delay_ms: u64,

    /// JSON-RPC endpoint URL (overrides ETHEREUM_RPC_URL)
    #[arg(long)]
    pub rpc_url: Option<String>,
}

#[derive(Debug, Args)]
pub struct GenAcctsArgs {
    /// Number of accounts to generate
    #[arg(long, default_value_t = 10)]
    pub count: usize,
}
