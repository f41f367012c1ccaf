//! Exchange adapters
//!
//! Each exchange implements [`Exchange`], translating canonical assets into
//! its own identifiers and its response shape into a [`Quote`]. Adapters are
//! built by name through the [`ExchangeRegistry`] and share an
//! [`ExchangeContext`] carrying the HTTP and cache collaborators.

mod coinbase;
mod kraken;
mod localbitcoins;
mod parse;
mod registry;
mod types;

pub use coinbase::Coinbase;
pub use kraken::{parse_asset_pairs, Kraken};
pub use localbitcoins::LocalBitcoins;
pub use registry::{ExchangeInfo, ExchangeRegistry, UnknownExchange};
pub use types::ExchangeError;

use crate::asset::AssetPair;
use crate::cache::PairCache;
use crate::http::HttpFetcher;
use crate::quote::Quote;
use crate::telemetry::{record_latency, LatencyMetric};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;

/// Single-pass sequence of pairs listed by an exchange
pub type AssetPairs = Box<dyn Iterator<Item = AssetPair> + Send>;

/// Collaborators shared by all exchange adapters
#[derive(Clone)]
pub struct ExchangeContext {
    /// JSON transport
    pub http: Arc<dyn HttpFetcher>,
    /// Pair listing cache
    pub cache: Arc<dyn PairCache>,
}

impl ExchangeContext {
    /// Create a context from its collaborators
    pub fn new(http: Arc<dyn HttpFetcher>, cache: Arc<dyn PairCache>) -> Self {
        Self { http, cache }
    }

    /// Fetch a JSON document, recording request latency
    pub(crate) async fn fetch(
        &self,
        url: &str,
        metric: LatencyMetric,
    ) -> Result<Value, ExchangeError> {
        let started = Instant::now();
        let document = self.http.fetch_json(url).await?;
        record_latency(metric, started.elapsed());
        Ok(document)
    }
}

/// Trait for exchange implementations
#[async_trait]
pub trait Exchange: Send + Sync {
    /// Display name, also the key into each asset's identifier table
    fn name(&self) -> &'static str;

    /// Exchange homepage
    fn url(&self) -> &'static str;

    /// Pairs listed by the exchange
    ///
    /// Exchanges without a fixed listing return an empty sequence. Each call
    /// reloads the listing from the cache or the network.
    async fn asset_pairs(&self) -> Result<AssetPairs, ExchangeError>;

    /// Fetch a quote for `base` priced in `quote`
    ///
    /// When `quote` is `None`, `base` is taken as a pair name in the
    /// exchange's own notation.
    async fn quote(&self, base: &str, quote: Option<&str>) -> Result<Quote, ExchangeError>;

    /// Find the listed pair matching both asset names
    async fn find_pair(&self, base: &str, quote: &str) -> Result<AssetPair, ExchangeError> {
        self.asset_pairs()
            .await?
            .find(|pair| pair.matches(base, quote))
            .ok_or_else(|| ExchangeError::PairNotSupported {
                exchange: self.name(),
                pair: format!("{}/{}", base.trim(), quote.trim()),
            })
    }
}
