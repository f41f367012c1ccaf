//! cryptoquote: current cryptocurrency prices from public exchange APIs
//!
//! This library provides the core components for:
//! - Asset registry with exchange-specific identifiers and value formatting
//! - Exchange adapters for Kraken, LocalBitcoins and Coinbase
//! - Quote rendering
//! - JSON file cache for exchange pair listings
//! - Structured logging to stderr

pub mod asset;
pub mod cache;
pub mod cli;
pub mod config;
pub mod exchange;
pub mod http;
pub mod quote;
pub mod telemetry;
