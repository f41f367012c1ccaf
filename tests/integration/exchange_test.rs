//! Integration tests for exchange adapters against canned responses

use cryptoquote::asset::{BTC, ETH, EUR, USD};
use cryptoquote::cache::{FileCache, MemoryCache, PairCache};
use cryptoquote::exchange::{Exchange, ExchangeContext, ExchangeError, Kraken};
use cryptoquote::http::{MockFetcher, TransportError};
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use std::sync::Arc;

const ASSET_PAIRS_URL: &str = "https://api.kraken.com/0/public/AssetPairs";
const XBTUSD_TICKER_URL: &str = "https://api.kraken.com/0/public/Ticker?pair=XBTUSD";

fn pairs_document() -> Value {
    json!({
        "error": [],
        "result": {
            "XXBTZUSD": {"altname": "XBTUSD", "base": "XXBT", "quote": "ZUSD"},
            "XXBTZUSD.d": {"altname": "XBTUSD.d", "base": "XXBT", "quote": "ZUSD"},
            "XXBTZEUR": {"altname": "XBTEUR", "base": "XXBT", "quote": "ZEUR"},
            "XETHZUSD": {"altname": "ETHUSD", "base": "XETH", "quote": "ZUSD"}
        }
    })
}

fn ticker_document() -> Value {
    json!({
        "error": [],
        "result": {
            "XXBTZUSD": {
                "a": ["43001.10000", "1", "1.000"],
                "b": ["43000.90000", "2", "2.000"],
                "c": ["43000.95000", "0.01"],
                "l": ["42000.00000", "41500.50000"],
                "h": ["43500.00000", "44000.00000"],
                "p": ["42800.12345", "42650.00000"]
            }
        }
    })
}

fn live_fetcher() -> MockFetcher {
    MockFetcher::new()
        .with_response(ASSET_PAIRS_URL, pairs_document())
        .with_response(XBTUSD_TICKER_URL, ticker_document())
}

fn kraken(fetcher: &Arc<MockFetcher>, cache: Arc<dyn PairCache>) -> Kraken {
    Kraken::new(ExchangeContext::new(fetcher.clone(), cache))
}

#[tokio::test]
async fn test_kraken_quote_end_to_end() {
    let fetcher = Arc::new(live_fetcher());
    let exchange = kraken(&fetcher, Arc::new(MemoryCache::new()));

    let quote = exchange.quote("XBT", Some("usd")).await.unwrap();
    assert_eq!(*quote.base(), BTC);
    assert_eq!(*quote.quote(), USD);
    assert_eq!(quote.stats().ask, Some(dec!(43001.1)));
    assert_eq!(quote.stats().day_low, Some(dec!(41500.5)));
    assert_eq!(
        fetcher.requests(),
        vec![ASSET_PAIRS_URL.to_string(), XBTUSD_TICKER_URL.to_string()]
    );

    let rendered = quote.render();
    let lines: Vec<&str> = rendered.lines().collect();
    assert!(lines[0].starts_with("BTC price on Kraken as of "));
    assert!(lines[0].ends_with(" UTC:"));
    assert_eq!(lines[1], "\tAsk: $43001.10");
    assert_eq!(lines[2], "\tBid: $43000.90");
    assert_eq!(lines[3], "\tLast: $43000.95");
    assert_eq!(lines[4], "\tToday low: $42000.00 (last 24h: $41500.50)");
    assert_eq!(lines[5], "\tToday high: $43500.00 (last 24h: $44000.00)");
    assert_eq!(lines[6], "\tToday average: $42800.12 (last 24h: $42650.00)");
}

#[tokio::test]
async fn test_kraken_listing_cached_across_adapters() {
    let cache = Arc::new(MemoryCache::new());

    let first = Arc::new(live_fetcher());
    kraken(&first, cache.clone())
        .quote("BTC", Some("USD"))
        .await
        .unwrap();
    assert!(cache.contains("kraken_asset_pairs"));

    // a second invocation only needs the ticker
    let second = Arc::new(MockFetcher::new().with_response(XBTUSD_TICKER_URL, ticker_document()));
    kraken(&second, cache.clone())
        .quote("BTC", Some("USD"))
        .await
        .unwrap();
    assert_eq!(second.requests(), vec![XBTUSD_TICKER_URL.to_string()]);
}

#[tokio::test]
async fn test_kraken_file_cache_persists_listing() {
    let dir = tempfile::TempDir::new().unwrap();

    let fetcher = Arc::new(live_fetcher());
    let pairs: Vec<_> = kraken(&fetcher, Arc::new(FileCache::new(dir.path())))
        .asset_pairs()
        .await
        .unwrap()
        .collect();
    assert_eq!(pairs.len(), 3);

    let offline = Arc::new(MockFetcher::new());
    let cached: Vec<_> = kraken(&offline, Arc::new(FileCache::new(dir.path())))
        .asset_pairs()
        .await
        .unwrap()
        .collect();
    assert_eq!(cached.len(), 3);
    assert_eq!(offline.request_count(), 0);
    assert!(cached.iter().any(|p| p.matches("ETH", "USD")));
    assert!(cached.iter().all(|p| !p.pretty_name.ends_with(".d")));
}

#[tokio::test]
async fn test_kraken_corrupt_cache_refetched() {
    let dir = tempfile::TempDir::new().unwrap();
    let cache = FileCache::new(dir.path());
    std::fs::write(cache.path(), "{not json").unwrap();

    let fetcher = Arc::new(live_fetcher());
    let exchange = kraken(&fetcher, Arc::new(cache.clone()));
    let pair = exchange.find_pair("ETH", "USD").await.unwrap();
    assert_eq!(pair.base, ETH);
    assert_eq!(fetcher.requests(), vec![ASSET_PAIRS_URL.to_string()]);

    assert!(cache.read_entry("kraken_asset_pairs").unwrap().is_object());
}

#[tokio::test]
async fn test_kraken_unlisted_pair() {
    let fetcher = Arc::new(live_fetcher());
    let exchange = kraken(&fetcher, Arc::new(MemoryCache::new()));

    let err = exchange.quote("ETH", Some("EUR")).await.unwrap_err();
    assert!(matches!(err, ExchangeError::PairNotSupported { .. }));
    assert!(err.is_resolution());
    // only the listing was requested
    assert_eq!(fetcher.request_count(), 1);
    assert!(EUR.exchange_id("Kraken").is_some());
}

#[tokio::test]
async fn test_kraken_transport_failure_propagates() {
    let fetcher = Arc::new(MockFetcher::new());
    let exchange = kraken(&fetcher, Arc::new(MemoryCache::new()));

    let err = exchange.quote("BTC", Some("USD")).await.unwrap_err();
    assert!(matches!(
        err,
        ExchangeError::Transport(TransportError::Unreachable(_))
    ));
    assert!(!err.is_resolution());
}
