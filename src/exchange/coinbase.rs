//! Coinbase spot price API

use super::parse::{exchange_id, parse_price};
use super::{AssetPairs, Exchange, ExchangeContext, ExchangeError};
use crate::asset::{resolve, Asset};
use crate::quote::{PriceStats, Quote};
use crate::telemetry::LatencyMetric;
use async_trait::async_trait;
use serde_json::Value;

/// Exchange name
pub const COINBASE: &str = "Coinbase";

const HOMEPAGE: &str = "https://www.coinbase.com/";

/// Spot price endpoint prefix
pub const SPOT_PRICE_URL: &str = "https://api.coinbase.com/v2/prices";

/// Coinbase exchange
pub struct Coinbase {
    ctx: ExchangeContext,
}

impl Coinbase {
    /// Create a Coinbase adapter
    pub fn new(ctx: ExchangeContext) -> Self {
        Self { ctx }
    }

    /// Spot price URL built from both assets' Coinbase identifiers
    pub fn spot_price_url(
        base: &Asset,
        base_name: &str,
        quote: &Asset,
        quote_name: &str,
    ) -> Result<String, ExchangeError> {
        Ok(format!(
            "{}/{}-{}/spot",
            SPOT_PRICE_URL,
            exchange_id(COINBASE, base, base_name)?,
            exchange_id(COINBASE, quote, quote_name)?
        ))
    }
}

fn remote_errors(document: &Value) -> Option<Vec<String>> {
    let errors = document.get("errors")?.as_array()?;
    let messages: Vec<String> = errors
        .iter()
        .map(|e| {
            e.get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| e.to_string())
        })
        .collect();
    (!messages.is_empty()).then_some(messages)
}

#[async_trait]
impl Exchange for Coinbase {
    fn name(&self) -> &'static str {
        COINBASE
    }

    fn url(&self) -> &'static str {
        HOMEPAGE
    }

    async fn asset_pairs(&self) -> Result<AssetPairs, ExchangeError> {
        Ok(Box::new(std::iter::empty()))
    }

    async fn quote(&self, base: &str, quote: Option<&str>) -> Result<Quote, ExchangeError> {
        let (base_name, quote_name) = match quote {
            Some(quote) => (base, quote),
            None => base
                .split_once('-')
                .ok_or_else(|| ExchangeError::PairNotSupported {
                    exchange: COINBASE,
                    pair: base.trim().to_string(),
                })?,
        };

        let base_asset = resolve(base_name);
        let quote_asset = resolve(quote_name);
        let url = Self::spot_price_url(&base_asset, base_name, &quote_asset, quote_name)?;

        let document = self.ctx.fetch(&url, LatencyMetric::Ticker).await?;

        if let Some(messages) = remote_errors(&document) {
            return Err(ExchangeError::Remote {
                exchange: COINBASE,
                messages,
            });
        }

        let data = document
            .get("data")
            .ok_or_else(|| ExchangeError::malformed(COINBASE, "missing \"data\" field"))?;
        let amount = data.get("amount").ok_or_else(|| ExchangeError::NotQuoted {
            exchange: COINBASE,
            asset: quote_name.trim().to_string(),
        })?;

        let stats = PriceStats {
            last: Some(parse_price(COINBASE, "amount", amount)?),
            ..Default::default()
        };

        Quote::new(COINBASE, base_asset, quote_asset, stats)
            .map(Quote::without_averages)
            .map_err(|source| ExchangeError::InvalidQuote {
                exchange: COINBASE,
                source,
            })
    }
}
