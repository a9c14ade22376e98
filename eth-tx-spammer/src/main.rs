use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use url::Url;

use crate::accounts::AccountPool;
use crate::cli::{Cli, Commands};
use crate::models::jsonrpc::{parse_hex_u256, parse_hex_u64};
use crate::rpc::{RpcClient, RpcConfig};
use crate::spammer::{SpamConfig, Spammer};

mod accounts;
mod cli;
mod config;
mod error;
mod models;
mod rpc;
mod spammer;

/// Application entry point
///
/// This is the main function that:
/// 1. Sets up logging
/// 2. Loads configuration
/// 3. Dispatches the requested subcommand
#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Configure logging with appropriate log levels for different components
    // - Info level for our tool
    // - Lower levels for dependencies to reduce noise
    let filter = EnvFilter::from_default_env()
        .add_directive("eth_tx_spammer=info".parse().unwrap())
        .add_directive("hyper=warn".parse().unwrap())
        .add_directive("reqwest=warn".parse().unwrap());

    // Initialize the tracing subscriber with our filter
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();

    // Load configuration from environment variables
    let config = config::Config::from_env()?;

    match Cli::parse().command {
        Commands::SendTx(args) => {
            // CLI flag takes precedence over the environment
            let endpoint = args.rpc_url.unwrap_or(config.ethereum_rpc_url);

            let value = parse_hex_u256(&args.value).map_err(|e| eyre::eyre!(e))?;
            let gas_limit = parse_hex_u64(&args.gas_limit).map_err(|e| eyre::eyre!(e))?;
            let gas_price = parse_hex_u256(&args.gas_price).map_err(|e| eyre::eyre!(e))?;

            let rpc_config = RpcConfig::new(Url::parse(&endpoint)?)
                .with_send_delay(Duration::from_millis(args.send_delay_ms));
            let client = RpcClient::new(rpc_config);

            let pool = AccountPool::generate(args.accounts);

            let spammer = Spammer::new(
                client,
                pool,
                SpamConfig {
                    value,
                    gas_limit,
                    gas_price,
                    max_tx: args.max_tx,
                    interval: Duration::from_micros(args.interval_us),
                },
            )?;

            let report = spammer.run().await;
            report.print();
        }
        Commands::GenAccts(args) => {
            let pool = AccountPool::generate(args.count);
            for address in pool.addresses() {
                println!("{}", address);
            }
        }
    }

    Ok(())
}
