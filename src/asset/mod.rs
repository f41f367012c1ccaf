//! Crypto and fiat currency assets
//!
//! Assets are entries in a static table, looked up by canonical name or by
//! one of the aliases exchanges use for them (Kraken calls Bitcoin "XXBT",
//! most others call it "BTC"). Names that match nothing resolve to the
//! [`UNKNOWN`] sentinel, which formats values but never matches a pair.

mod pair;
mod registry;

pub use pair::AssetPair;
pub use registry::{
    crypto_assets, fiat_assets, resolve, ASSETS, BCH, BTC, CAD, DASH, DOGE, EOS, ETC, ETH, EUR,
    GBP, GNO, JPY, LTC, UNKNOWN, USD, XMR, XRP, ZEC,
};

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

/// Kind of currency an asset represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetClass {
    /// Cryptocurrency
    Crypto,
    /// Government-issued currency
    Fiat,
    /// Unrecognised name
    Unknown,
}

/// Number formatting rule for asset values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    /// Six decimal places
    Default,
    /// Exactly two decimal places
    TwoDecimal,
}

impl ValueFormat {
    /// Number of decimal places rendered
    pub fn decimal_places(self) -> u32 {
        match self {
            ValueFormat::Default => 6,
            ValueFormat::TwoDecimal => 2,
        }
    }
}

/// A crypto or fiat currency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asset {
    /// Canonical name (e.g. "BTC")
    pub name: &'static str,
    /// Display symbol (e.g. "£")
    pub symbol: &'static str,
    /// Crypto, fiat or unknown
    pub class: AssetClass,
    /// Formatting rule for values denominated in this asset
    pub format: ValueFormat,
    /// Whether a space separates the symbol from the number
    pub spaced_symbol: bool,
    /// Alternative names used by exchanges
    pub aliases: &'static [&'static str],
    /// Exchange name to exchange-specific identifier
    pub exchange_ids: &'static [(&'static str, &'static str)],
}

impl Asset {
    /// True for the unknown-asset sentinel
    pub fn is_unknown(&self) -> bool {
        self.class == AssetClass::Unknown
    }

    /// Identifier of this asset at the given exchange, if it is listed there
    pub fn exchange_id(&self, exchange: &str) -> Option<&'static str> {
        self.exchange_ids
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(exchange))
            .map(|(_, id)| *id)
    }

    /// Check whether `name` is the canonical name or one of the aliases
    ///
    /// The unknown sentinel matches nothing.
    pub fn matches(&self, name: &str) -> bool {
        if self.is_unknown() {
            return false;
        }

        let name = name.trim();
        self.name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
    }

    /// Prefix written before formatted values
    pub fn value_prefix(&self) -> String {
        if self.spaced_symbol {
            format!("{} ", self.symbol)
        } else {
            self.symbol.to_string()
        }
    }

    /// Format a value denominated in this asset, e.g. "$3.00" or "BTC 3.000000"
    pub fn formatted_value(&self, value: Decimal) -> String {
        let places = self.format.decimal_places();
        let rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
        format!("{}{:.*}", self.value_prefix(), places as usize, rounded)
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_fiat_two_decimals() {
        assert_eq!(USD.formatted_value(dec!(3)), "$3.00");
        assert_eq!(GBP.formatted_value(dec!(1234.5)), "£1234.50");
        assert_eq!(EUR.formatted_value(dec!(0.005)), "€0.01");
    }

    #[test]
    fn test_crypto_spaced_symbol() {
        assert_eq!(BTC.formatted_value(dec!(3)), "BTC 3.000000");
        assert_eq!(DOGE.formatted_value(dec!(0.25)), "Ð 0.250000");
    }

    #[test]
    fn test_crypto_rounds_to_six_places() {
        assert_eq!(ETH.formatted_value(dec!(0.1234565)), "ETH 0.123457");
    }

    #[test]
    fn test_unknown_formats_without_panicking() {
        assert_eq!(UNKNOWN.formatted_value(dec!(2)), "?2.000000");
        assert_eq!(UNKNOWN.to_string(), "?");
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        assert!(BTC.matches("btc"));
        assert!(BTC.matches("XXBT"));
        assert!(BTC.matches(" xbt "));
        assert!(!BTC.matches("ETH"));
    }

    #[test]
    fn test_unknown_matches_nothing() {
        assert!(!UNKNOWN.matches("?"));
        assert!(!UNKNOWN.matches(""));
    }

    #[test]
    fn test_exchange_id() {
        assert_eq!(BTC.exchange_id("Kraken"), Some("XXBT"));
        assert_eq!(BTC.exchange_id("kraken"), Some("XXBT"));
        assert_eq!(BTC.exchange_id("Coinbase"), Some("BTC"));
        assert_eq!(GNO.exchange_id("Coinbase"), None);
        assert_eq!(UNKNOWN.exchange_id("Kraken"), None);
    }
}
