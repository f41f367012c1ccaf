//! Asset pairs as listed by an exchange

use super::Asset;
use std::fmt;

/// A base/quote asset combination on one exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPair {
    /// Exchange the pair belongs to
    pub exchange: &'static str,
    /// Internal/API name of the pair (e.g. "XXBTZUSD")
    pub pair_name: String,
    /// Public name of the pair (e.g. "XBTUSD")
    pub pretty_name: String,
    /// Asset being priced
    pub base: Asset,
    /// Asset the price is denominated in
    pub quote: Asset,
}

impl AssetPair {
    /// Create a new asset pair
    pub fn new(
        exchange: &'static str,
        pair_name: impl Into<String>,
        pretty_name: impl Into<String>,
        base: Asset,
        quote: Asset,
    ) -> Self {
        Self {
            exchange,
            pair_name: pair_name.into(),
            pretty_name: pretty_name.into(),
            base,
            quote,
        }
    }

    /// Check whether both names match this pair's base and quote assets
    pub fn matches(&self, base_name: &str, quote_name: &str) -> bool {
        self.base.matches(base_name) && self.quote.matches(quote_name)
    }

    /// Check whether `name` is this pair's API name or public name
    pub fn is_named(&self, name: &str) -> bool {
        let name = name.trim();
        self.pair_name.eq_ignore_ascii_case(name) || self.pretty_name.eq_ignore_ascii_case(name)
    }

    fn asset_id(&self, asset: &Asset) -> &'static str {
        asset.exchange_id(self.exchange).unwrap_or(asset.name)
    }
}

impl fmt::Display for AssetPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} -> {}) on {}",
            self.pretty_name,
            self.asset_id(&self.base),
            self.asset_id(&self.quote),
            self.exchange
        )
    }
}
