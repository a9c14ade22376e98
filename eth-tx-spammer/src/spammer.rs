//! Transaction driver that orchestrates submission at a fixed rate.

use std::sync::Arc;
use std::time::Duration;

use alloy::primitives::{Bytes, U256};
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::accounts::AccountPool;
use crate::error::SpamError;
use crate::models::jsonrpc::TransferParams;
use crate::rpc::RpcClient;

/// Default transfer value in wei (1 gwei)
pub const DEFAULT_VALUE: &str = "0x3b9aca00";

/// Default gas limit (21000, a plain transfer)
pub const DEFAULT_GAS_LIMIT: &str = "0x5208";

/// Default gas price in wei
pub const DEFAULT_GAS_PRICE: &str = "0x15ef3c0";

/// Driver configuration
///
/// Transfer parameters are threaded through to every submission rather
/// than embedded as constants.
#[derive(Debug, Clone)]
pub struct SpamConfig {
    /// Transfer value in wei
    pub value: U256,

    /// Gas limit per transaction
    pub gas_limit: u64,

    /// Gas price in wei
    pub gas_price: U256,

    /// Total number of transactions to submit before stopping
    pub max_tx: u64,

    /// Tick interval between submissions
    pub interval: Duration,
}

/// Outcome of a single submission, reported over the driver's channel.
enum Outcome {
    /// Transaction hash decoded from the result payload
    Submitted(Bytes),

    /// The submission failed; reported once, never retried
    Failed(SpamError),
}

/// Transaction spammer that drives submissions against one endpoint.
///
/// On each tick of a fixed-interval timer it picks two distinct random
/// accounts from the pool and spawns an independent task that performs the
/// HTTP call and decode, without waiting for prior ticks' tasks to finish.
/// The loop terminates once `max_tx` ticks have fired; outstanding tasks
/// are then drained through the outcome channel.
pub struct Spammer {
    client: Arc<RpcClient>,
    pool: Arc<AccountPool>,
    config: SpamConfig,
}

impl Spammer {
    /// Create a new driver over the given client and account pool.
    ///
    /// Fails if the pool cannot produce a distinct `(from, to)` pair.
    pub fn new(client: RpcClient, pool: AccountPool, config: SpamConfig) -> Result<Self, SpamError> {
        if pool.len() < 2 {
            return Err(SpamError::PoolTooSmall(pool.len()));
        }

        Ok(Self {
            client: Arc::new(client),
            pool: Arc::new(pool),
            config,
        })
    }

    /// Run the submission loop until `max_tx` transactions have been fired,
    /// then drain in-flight submissions and return the final report.
    pub async fn run(&self) -> SpamReport {
        info!(
            max_tx = self.config.max_tx,
            interval_us = self.config.interval.as_micros() as u64,
            accounts = self.pool.len(),
            endpoint = %self.client.endpoint(),
            "starting spammer"
        );

        // Producers push into an unbounded channel, so a submission task can
        // never block on reporting its outcome.
        let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel();

        let mut ticker = tokio::time::interval(self.config.interval);
        let mut submitted = 0u64;

        while submitted < self.config.max_tx {
            ticker.tick().await;
            submitted += 1;

            let client = Arc::clone(&self.client);
            let pool = Arc::clone(&self.pool);
            let config = self.config.clone();
            let outcome_tx = outcome_tx.clone();

            // Fire-and-forget with respect to the ticker: completions are
            // unordered and only observed through the channel.
            tokio::spawn(async move {
                let outcome = Self::submit_one(&client, &pool, &config).await;
                if let Outcome::Failed(ref error) = outcome {
                    warn!(error = %error, "transaction submission failed");
                }
                let _ = outcome_tx.send(outcome);
            });
        }

        // Closing our side lets the drain below finish once every spawned
        // task has reported.
        drop(outcome_tx);

        let mut report = SpamReport::new(submitted);
        while let Some(outcome) = outcome_rx.recv().await {
            match outcome {
                Outcome::Submitted(hash) => report.hashes.push(hash),
                Outcome::Failed(error) => report.errors.push(error),
            }
        }

        info!(
            submitted = report.submitted,
            succeeded = report.succeeded(),
            failed = report.failed(),
            "spammer finished"
        );

        report
    }

    /// Perform a single submission: pick a pair, build parameters, send.
    async fn submit_one(client: &RpcClient, pool: &AccountPool, config: &SpamConfig) -> Outcome {
        let pair = {
            let mut rng = rand::thread_rng();
            pool.pick_pair(&mut rng)
        };

        let (from, to) = match pair {
            Ok(pair) => pair,
            Err(error) => return Outcome::Failed(error),
        };

        let params = TransferParams::new(from, to, config.value, config.gas_limit, config.gas_price);

        match client.send_transaction(params).await {
            Ok(hash) => Outcome::Submitted(hash),
            Err(error) => Outcome::Failed(error),
        }
    }
}

/// Report collected after a spammer run.
#[derive(Debug, Default)]
pub struct SpamReport {
    /// Number of submissions fired
    pub submitted: u64,

    /// Transaction hashes decoded from successful submissions
    pub hashes: Vec<Bytes>,

    /// Errors collected from failed submissions
    pub errors: Vec<SpamError>,
}

impl SpamReport {
    fn new(submitted: u64) -> Self {
        Self {
            submitted,
            ..Default::default()
        }
    }

    /// Number of submissions that returned a decodable transaction hash.
    pub fn succeeded(&self) -> u64 {
        self.hashes.len() as u64
    }

    /// Number of submissions that failed.
    pub fn failed(&self) -> u64 {
        self.errors.len() as u64
    }

    /// Print the report to stdout.
    pub fn print(&self) {
        println!("\n=== Spam Report ===");
        println!("Submitted: {}", self.submitted);
        println!("Succeeded: {}", self.succeeded());
        println!("Failed:    {}", self.failed());

        for error in &self.errors {
            println!("  error: {}", error);
        }
    }
}
