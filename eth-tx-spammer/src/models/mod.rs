//! Data models used throughout the application
//!
//! This module contains all the data structures and serialization/deserialization
//! logic for the transaction spammer.

// JSON-RPC protocol data structures
pub mod jsonrpc;
