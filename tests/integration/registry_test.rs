//! Integration tests for exchange selection

use cryptoquote::asset::{resolve, GBP, UNKNOWN};
use cryptoquote::cache::NullCache;
use cryptoquote::exchange::{ExchangeContext, ExchangeError, ExchangeRegistry, UnknownExchange};
use cryptoquote::http::MockFetcher;
use serde_json::json;
use std::sync::Arc;

const LOCALBITCOINS_TICKER_URL: &str =
    "https://localbitcoins.com/bitcoinaverage/ticker-all-currencies/";

#[tokio::test]
async fn test_selected_exchange_quotes() {
    let fetcher = Arc::new(MockFetcher::new().with_response(
        LOCALBITCOINS_TICKER_URL,
        json!({"GBP": {"rates": {"last": "31000.1"}, "avg_24h": "30000"}}),
    ));
    let ctx = ExchangeContext::new(fetcher.clone(), Arc::new(NullCache));

    let exchange = ExchangeRegistry::builtin()
        .create("localbitcoins", ctx)
        .unwrap();
    let quote = exchange.quote("XBT", Some("£")).await;

    // "£" is a symbol, not a name, and is not quoted
    assert!(matches!(quote, Err(ExchangeError::NotQuoted { .. })));
    assert_eq!(resolve("£"), UNKNOWN);

    let quote = exchange.quote("XBT", Some("zgbp")).await.unwrap();
    assert_eq!(*quote.quote(), GBP);
    let rendered = quote.to_string();
    assert!(rendered.contains("\tLast: £31000.10"));
    assert!(rendered.contains("\tToday average: ? (last 24h: £30000.00)"));
}

#[test]
fn test_unknown_exchange_before_network() {
    let fetcher = Arc::new(MockFetcher::new());
    let ctx = ExchangeContext::new(fetcher.clone(), Arc::new(NullCache));

    let err = ExchangeRegistry::builtin().create("bitstamp", ctx).err();
    assert_eq!(err, Some(UnknownExchange("bitstamp".to_string())));
    assert_eq!(fetcher.request_count(), 0);
}
