//! Account generation for transaction load.
//!
//! Provides an `Account` type and `AccountPool` for building the pool of
//! test addresses the driver draws from. Accounts live in memory for the
//! process lifetime and are never mutated after generation.

use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;
use rand::Rng;
use tracing::debug;

use crate::error::SpamError;

/// A test account identified by its key-pair-derived address.
///
/// The signing key is discarded after derivation: the tool submits unsigned
/// transfer parameters, so only the 20-byte address is retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Account {
    /// Address derived from the account's public key
    pub address: Address,
}

impl Account {
    /// Generate a fresh account from a random secp256k1 key pair.
    pub fn generate() -> Self {
        let signer = PrivateKeySigner::random();
        Self {
            address: signer.address(),
        }
    }
}

/// Read-only pool of generated accounts.
///
/// Shared across submission tasks behind an `Arc`; concurrently read,
/// never mutated after generation.
#[derive(Debug, Clone)]
pub struct AccountPool {
    accounts: Vec<Account>,
}

impl AccountPool {
    /// Generate a pool of `count` accounts, each derived independently.
    ///
    /// Key generation draws from the OS RNG and cannot fail; addresses are
    /// pairwise distinct with overwhelming probability given the key space.
    pub fn generate(count: usize) -> Self {
        let accounts = (0..count).map(|_| Account::generate()).collect();
        debug!(count, "generated account pool");
        Self { accounts }
    }

    /// Number of accounts in the pool.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Addresses of all accounts in generation order.
    pub fn addresses(&self) -> impl Iterator<Item = Address> + '_ {
        self.accounts.iter().map(|account| account.address)
    }

    /// Pick two distinct random accounts as a `(from, to)` pair.
    ///
    /// Re-draws `to` until it differs from `from`. Fails if the pool holds
    /// fewer than two accounts.
    pub fn pick_pair(&self, rng: &mut impl Rng) -> Result<(Address, Address), SpamError> {
        if self.accounts.len() < 2 {
            return Err(SpamError::PoolTooSmall(self.accounts.len()));
        }

        let from = self.accounts[rng.gen_range(0..self.accounts.len())];
        let mut to = self.accounts[rng.gen_range(0..self.accounts.len())];
        while to == from {
            to = self.accounts[rng.gen_range(0..self.accounts.len())];
        }

        Ok((from.address, to.address))
    }
}
