//! Kraken public REST API
//!
//! Quotes go through the pair listing: both asset names must match a listed
//! pair, whose public name is then passed to the ticker endpoint. The
//! listing is cached between invocations.

use super::parse::{object_field, parse_optional_price};
use super::{AssetPairs, Exchange, ExchangeContext, ExchangeError};
use crate::asset::{resolve, AssetPair};
use crate::cache::pairs_key;
use crate::quote::{PriceStats, Quote};
use crate::telemetry::LatencyMetric;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// Exchange name
pub const KRAKEN: &str = "Kraken";

const HOMEPAGE: &str = "https://www.kraken.com/";

/// Asset pair listing endpoint
pub const ASSET_PAIRS_URL: &str = "https://api.kraken.com/0/public/AssetPairs";

/// Ticker endpoint
pub const TICKER_URL: &str = "https://api.kraken.com/0/public/Ticker";

/// Suffix of settlement-precision duplicates in the pair listing
const DECIMAL_SUFFIX: &str = ".d";

/// Kraken exchange
pub struct Kraken {
    ctx: ExchangeContext,
}

impl Kraken {
    /// Create a Kraken adapter
    pub fn new(ctx: ExchangeContext) -> Self {
        Self { ctx }
    }

    /// Ticker URL for a pair
    pub fn ticker_url(pair: &AssetPair) -> String {
        format!("{}?pair={}", TICKER_URL, pair.pretty_name)
    }

    /// Pair listing from the cache, falling back to the API
    async fn pair_listing(&self) -> Result<Map<String, Value>, ExchangeError> {
        let key = pairs_key(KRAKEN);

        match self.ctx.cache.read_entry(&key) {
            Ok(Value::Object(listing)) => {
                tracing::debug!(pairs = listing.len(), "Using cached asset pairs");
                return Ok(listing);
            }
            Ok(_) => tracing::info!("Cached asset pairs are invalid"),
            Err(e) => tracing::info!(reason = %e, "Asset pair cache not found"),
        }

        let document = self
            .ctx
            .fetch(ASSET_PAIRS_URL, LatencyMetric::PairListing)
            .await?;
        let listing = result(&document)?.clone();

        if let Err(e) = self
            .ctx
            .cache
            .write_entry(&key, &Value::Object(listing.clone()))
        {
            tracing::warn!(error = %e, "Failed to cache asset pairs");
        }

        Ok(listing)
    }
}

/// Unwrap Kraken's `{"error": [...], "result": {...}}` envelope
fn result(document: &Value) -> Result<&Map<String, Value>, ExchangeError> {
    let messages: Vec<String> = document
        .get("error")
        .and_then(Value::as_array)
        .map(|errors| {
            errors
                .iter()
                .map(|e| e.as_str().map(str::to_string).unwrap_or_else(|| e.to_string()))
                .collect()
        })
        .unwrap_or_default();

    if !messages.is_empty() {
        return Err(ExchangeError::Remote {
            exchange: KRAKEN,
            messages,
        });
    }

    object_field(KRAKEN, document, "result")
}

/// Turn a pair listing into asset pairs, skipping ".d" duplicates
///
/// Pairs whose assets are not in the registry are kept with the unknown
/// asset; they never match a lookup by name.
pub fn parse_asset_pairs(listing: Map<String, Value>) -> impl Iterator<Item = AssetPair> + Send {
    listing
        .into_iter()
        .filter(|(pair_name, _)| !pair_name.ends_with(DECIMAL_SUFFIX))
        .map(|(pair_name, info)| {
            let field = |name: &str| info.get(name).and_then(Value::as_str).map(str::to_string);

            let pretty_name = field("altname").unwrap_or_else(|| pair_name.clone());
            let base = resolve(&field("base").unwrap_or_default());
            let quote = resolve(&field("quote").unwrap_or_default());

            AssetPair::new(KRAKEN, pair_name, pretty_name, base, quote)
        })
}

/// Map a ticker entry onto price statistics
///
/// Each statistic is an array whose first element covers today and whose
/// second covers the last 24 hours.
fn ticker_stats(ticker: &Value) -> Result<PriceStats, ExchangeError> {
    if !ticker.is_object() {
        return Err(ExchangeError::malformed(KRAKEN, "ticker entry is not an object"));
    }

    let stat = |field: &str, index: usize| {
        parse_optional_price(
            KRAKEN,
            &format!("{}[{}]", field, index),
            ticker.get(field).and_then(|values| values.get(index)),
        )
    };

    Ok(PriceStats {
        ask: stat("a", 0)?,
        bid: stat("b", 0)?,
        last: stat("c", 0)?,
        today_low: stat("l", 0)?,
        today_high: stat("h", 0)?,
        today_avg: stat("p", 0)?,
        day_low: stat("l", 1)?,
        day_high: stat("h", 1)?,
        day_avg: stat("p", 1)?,
    })
}

#[async_trait]
impl Exchange for Kraken {
    fn name(&self) -> &'static str {
        KRAKEN
    }

    fn url(&self) -> &'static str {
        HOMEPAGE
    }

    async fn asset_pairs(&self) -> Result<AssetPairs, ExchangeError> {
        let listing = self.pair_listing().await?;
        Ok(Box::new(parse_asset_pairs(listing)))
    }

    async fn quote(&self, base: &str, quote: Option<&str>) -> Result<Quote, ExchangeError> {
        let pair = match quote {
            Some(quote) => {
                // unknown names never match a listed pair
                if [base, quote].iter().any(|name| resolve(name).is_unknown()) {
                    return Err(ExchangeError::PairNotSupported {
                        exchange: KRAKEN,
                        pair: format!("{}/{}", base.trim(), quote.trim()),
                    });
                }
                self.find_pair(base, quote).await?
            }
            None => self
                .asset_pairs()
                .await?
                .find(|pair| pair.is_named(base))
                .ok_or_else(|| ExchangeError::PairNotSupported {
                    exchange: KRAKEN,
                    pair: base.trim().to_string(),
                })?,
        };

        tracing::debug!(pair = %pair, "Resolved asset pair");

        let document = self
            .ctx
            .fetch(&Self::ticker_url(&pair), LatencyMetric::Ticker)
            .await?;
        let tickers = result(&document)?;
        let ticker = tickers
            .get(&pair.pair_name)
            .or_else(|| tickers.get(&pair.pretty_name))
            .ok_or_else(|| {
                ExchangeError::malformed(KRAKEN, format!("no ticker for {}", pair.pair_name))
            })?;

        Quote::new(KRAKEN, pair.base, pair.quote, ticker_stats(ticker)?)
            .map_err(|source| ExchangeError::InvalidQuote {
                exchange: KRAKEN,
                source,
            })
    }
}
