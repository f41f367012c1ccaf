//! CLI interface for cryptoquote
//!
//! Provides subcommands for:
//! - `price`: Fetch and print a quote
//! - `list`: Show supported exchanges, assets or pairs
//! - `reset`: Delete the pair listing cache

mod list;
mod price;
mod reset;

pub use list::{ListArgs, ListTarget};
pub use price::PriceArgs;
pub use reset::ResetArgs;

use crate::cache::{FileCache, NullCache, PairCache};
use crate::config::Config;
use crate::exchange::ExchangeContext;
use crate::http::ReqwestFetcher;
use clap::{Parser, Subcommand};
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "cq")]
#[command(about = "Print current cryptocurrency prices from public exchange APIs")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch and print a price quote
    Price(PriceArgs),
    /// List supported exchanges, assets or pairs
    List(ListArgs),
    /// Delete the cached pair listings
    Reset(ResetArgs),
}

impl Commands {
    /// Whether the command asked for verbose output
    pub fn verbose(&self) -> bool {
        match self {
            Commands::Price(args) => args.verbose,
            Commands::List(_) => false,
            Commands::Reset(args) => args.verbose,
        }
    }

    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        match self {
            Commands::Price(args) => args.execute(config).await,
            Commands::List(args) => args.execute(config).await,
            Commands::Reset(args) => args.execute(config).await,
        }
    }
}

/// Pair cache selected by the configuration
pub fn pair_cache(config: &Config) -> Arc<dyn PairCache> {
    if config.cache.enabled {
        Arc::new(FileCache::new(config.cache.resolved_dir()))
    } else {
        Arc::new(NullCache)
    }
}

/// Live collaborators for exchange adapters
pub fn exchange_context(config: &Config) -> anyhow::Result<ExchangeContext> {
    let http = ReqwestFetcher::new(&config.http)?;
    Ok(ExchangeContext::new(Arc::new(http), pair_cache(config)))
}
