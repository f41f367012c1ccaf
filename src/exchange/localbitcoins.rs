//! LocalBitcoins ticker
//!
//! Only Bitcoin is traded, against whatever currencies the all-currencies
//! ticker reports.

use super::parse::parse_optional_price;
use super::{AssetPairs, Exchange, ExchangeContext, ExchangeError};
use crate::asset::{resolve, BTC};
use crate::quote::{PriceStats, Quote};
use crate::telemetry::LatencyMetric;
use async_trait::async_trait;

/// Exchange name
pub const LOCALBITCOINS: &str = "LocalBitcoins";

const HOMEPAGE: &str = "https://localbitcoins.com/";

/// Ticker for every quoted currency
pub const TICKER_URL: &str = "https://localbitcoins.com/bitcoinaverage/ticker-all-currencies/";

/// LocalBitcoins exchange
pub struct LocalBitcoins {
    ctx: ExchangeContext,
}

impl LocalBitcoins {
    /// Create a LocalBitcoins adapter
    pub fn new(ctx: ExchangeContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl Exchange for LocalBitcoins {
    fn name(&self) -> &'static str {
        LOCALBITCOINS
    }

    fn url(&self) -> &'static str {
        HOMEPAGE
    }

    async fn asset_pairs(&self) -> Result<AssetPairs, ExchangeError> {
        Ok(Box::new(std::iter::empty()))
    }

    async fn quote(&self, base: &str, quote: Option<&str>) -> Result<Quote, ExchangeError> {
        let quote_name = quote.ok_or_else(|| ExchangeError::PairNotSupported {
            exchange: LOCALBITCOINS,
            pair: base.trim().to_string(),
        })?;

        let base_asset = resolve(base);
        if base_asset != BTC {
            return Err(ExchangeError::AssetUnsupported {
                exchange: LOCALBITCOINS,
                asset: base.trim().to_string(),
                reason: format!("{} only supports BTC base asset", LOCALBITCOINS),
            });
        }

        // currencies missing from the registry can still be quoted, they
        // just render with the unknown asset's formatting
        let quote_asset = resolve(quote_name);
        let wanted = quote_name.trim();

        let document = self.ctx.fetch(TICKER_URL, LatencyMetric::Ticker).await?;
        let currencies = document.as_object().ok_or_else(|| {
            ExchangeError::malformed(LOCALBITCOINS, "expected an object keyed by currency")
        })?;

        let prices = currencies
            .iter()
            .find(|(code, _)| quote_asset.matches(code) || code.eq_ignore_ascii_case(wanted))
            .map(|(_, prices)| prices)
            .ok_or_else(|| ExchangeError::NotQuoted {
                exchange: LOCALBITCOINS,
                asset: wanted.to_string(),
            })?;

        let last = parse_optional_price(
            LOCALBITCOINS,
            "rates.last",
            prices.pointer("/rates/last"),
        )?
        .ok_or_else(|| ExchangeError::NotQuoted {
            exchange: LOCALBITCOINS,
            asset: wanted.to_string(),
        })?;
        let day_avg = parse_optional_price(LOCALBITCOINS, "avg_24h", prices.get("avg_24h"))?;

        let stats = PriceStats {
            last: Some(last),
            day_avg,
            ..Default::default()
        };

        Quote::new(LOCALBITCOINS, base_asset, quote_asset, stats).map_err(|source| {
            ExchangeError::InvalidQuote {
                exchange: LOCALBITCOINS,
                source,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::{GBP, UNKNOWN};
    use crate::cache::NullCache;
    use crate::http::MockFetcher;
    use rust_decimal_macros::dec;
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn ticker() -> Value {
        json!({
            "GBP": {
                "volume_btc": "12.5",
                "rates": {"last": "31000.12"},
                "avg_1h": 30950.0,
                "avg_24h": 30500.55
            },
            "ARS": {
                "rates": {"last": "9000000.00"},
                "avg_24h": "8900000.00"
            },
            "XYZ": {"avg_24h": "1.0"}
        })
    }

    fn localbitcoins(fetcher: MockFetcher) -> (LocalBitcoins, Arc<MockFetcher>) {
        let fetcher = Arc::new(fetcher);
        let ctx = ExchangeContext::new(fetcher.clone(), Arc::new(NullCache));
        (LocalBitcoins::new(ctx), fetcher)
    }

    #[tokio::test]
    async fn test_no_pair_listing() {
        let (exchange, fetcher) = localbitcoins(MockFetcher::new());
        assert_eq!(exchange.asset_pairs().await.unwrap().count(), 0);
        assert_eq!(fetcher.request_count(), 0);
    }

    #[tokio::test]
    async fn test_quote() {
        let (exchange, _) = localbitcoins(MockFetcher::new().with_response(TICKER_URL, ticker()));

        let quote = exchange.quote("btc", Some("gbp")).await.unwrap();
        assert_eq!(*quote.base(), BTC);
        assert_eq!(*quote.quote(), GBP);
        assert_eq!(quote.stats().last, Some(dec!(31000.12)));
        assert_eq!(quote.stats().day_avg, Some(dec!(30500.55)));
        assert_eq!(quote.stats().ask, None);
    }

    #[tokio::test]
    async fn test_quote_currency_outside_registry() {
        let (exchange, _) = localbitcoins(MockFetcher::new().with_response(TICKER_URL, ticker()));

        let quote = exchange.quote("XBT", Some("ARS")).await.unwrap();
        assert_eq!(*quote.quote(), UNKNOWN);
        assert_eq!(quote.stats().last, Some(dec!(9000000)));
    }

    #[tokio::test]
    async fn test_non_btc_base_rejected_before_request() {
        let (exchange, fetcher) =
            localbitcoins(MockFetcher::new().with_response(TICKER_URL, ticker()));

        let err = exchange.quote("ETH", Some("GBP")).await.unwrap_err();
        assert!(matches!(err, ExchangeError::AssetUnsupported { .. }));
        assert!(err.to_string().contains("only supports BTC base asset"));
        assert_eq!(fetcher.request_count(), 0);
    }

    #[tokio::test]
    async fn test_currency_not_quoted() {
        let (exchange, _) = localbitcoins(MockFetcher::new().with_response(TICKER_URL, ticker()));

        let err = exchange.quote("BTC", Some("JPY")).await.unwrap_err();
        assert!(matches!(err, ExchangeError::NotQuoted { .. }));

        // entry without a last rate
        let err = exchange.quote("BTC", Some("XYZ")).await.unwrap_err();
        assert!(matches!(err, ExchangeError::NotQuoted { .. }));
    }

    #[tokio::test]
    async fn test_missing_quote_name() {
        let (exchange, _) = localbitcoins(MockFetcher::new());
        let err = exchange.quote("BTC", None).await.unwrap_err();
        assert!(matches!(err, ExchangeError::PairNotSupported { .. }));
    }

    #[tokio::test]
    async fn test_non_object_response_is_malformed() {
        let (exchange, _) = localbitcoins(MockFetcher::new().with_response(TICKER_URL, json!([])));

        let err = exchange.quote("BTC", Some("GBP")).await.unwrap_err();
        assert!(matches!(err, ExchangeError::MalformedResponse { .. }));
    }
}
