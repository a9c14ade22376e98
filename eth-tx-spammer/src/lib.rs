// Export modules for testing and benchmarking
pub mod accounts;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod rpc;
pub mod spammer;
