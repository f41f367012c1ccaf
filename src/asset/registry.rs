//! Static asset table and name resolution

use super::{Asset, AssetClass, ValueFormat};

const fn crypto(
    name: &'static str,
    symbol: &'static str,
    aliases: &'static [&'static str],
    exchange_ids: &'static [(&'static str, &'static str)],
) -> Asset {
    Asset {
        name,
        symbol,
        class: AssetClass::Crypto,
        format: ValueFormat::Default,
        spaced_symbol: true,
        aliases,
        exchange_ids,
    }
}

const fn fiat(
    name: &'static str,
    symbol: &'static str,
    aliases: &'static [&'static str],
    exchange_ids: &'static [(&'static str, &'static str)],
) -> Asset {
    Asset {
        name,
        symbol,
        class: AssetClass::Fiat,
        format: ValueFormat::TwoDecimal,
        spaced_symbol: false,
        aliases,
        exchange_ids,
    }
}

/// Sentinel returned for names that match no known asset
pub const UNKNOWN: Asset = Asset {
    name: "?",
    symbol: "?",
    class: AssetClass::Unknown,
    format: ValueFormat::Default,
    spaced_symbol: false,
    aliases: &[],
    exchange_ids: &[],
};

// crypto

pub const BCH: Asset = crypto(
    "BCH",
    "BCH",
    &[],
    &[("Kraken", "BCH"), ("Coinbase", "BCH")],
);

pub const BTC: Asset = crypto(
    "BTC",
    "BTC",
    &["XBT", "XXBT"],
    &[
        ("Kraken", "XXBT"),
        ("Coinbase", "BTC"),
        ("LocalBitcoins", "BTC"),
    ],
);

pub const DASH: Asset = crypto("DASH", "DASH", &[], &[("Kraken", "DASH")]);

pub const DOGE: Asset = crypto(
    "DOGE",
    "Ð",
    &["XDG", "XXDG"],
    &[("Kraken", "XXDG"), ("Coinbase", "DOGE")],
);

pub const EOS: Asset = crypto("EOS", "EOS", &[], &[("Kraken", "EOS"), ("Coinbase", "EOS")]);

pub const ETC: Asset = crypto(
    "ETC",
    "ETC",
    &["XETC"],
    &[("Kraken", "XETC"), ("Coinbase", "ETC")],
);

pub const ETH: Asset = crypto(
    "ETH",
    "ETH",
    &["XETH"],
    &[("Kraken", "XETH"), ("Coinbase", "ETH")],
);

pub const GNO: Asset = crypto("GNO", "GNO", &[], &[("Kraken", "GNO")]);

pub const LTC: Asset = crypto(
    "LTC",
    "LTC",
    &["XLTC"],
    &[("Kraken", "XLTC"), ("Coinbase", "LTC")],
);

pub const XMR: Asset = crypto("XMR", "XMR", &["XXMR"], &[("Kraken", "XXMR")]);

pub const XRP: Asset = crypto(
    "XRP",
    "XRP",
    &["XXRP"],
    &[("Kraken", "XXRP"), ("Coinbase", "XRP")],
);

pub const ZEC: Asset = crypto(
    "ZEC",
    "ZEC",
    &["XZEC"],
    &[("Kraken", "XZEC"), ("Coinbase", "ZEC")],
);

// fiat

pub const CAD: Asset = fiat(
    "CAD",
    "C$",
    &["ZCAD"],
    &[
        ("Kraken", "ZCAD"),
        ("Coinbase", "CAD"),
        ("LocalBitcoins", "CAD"),
    ],
);

pub const EUR: Asset = fiat(
    "EUR",
    "€",
    &["ZEUR"],
    &[
        ("Kraken", "ZEUR"),
        ("Coinbase", "EUR"),
        ("LocalBitcoins", "EUR"),
    ],
);

pub const GBP: Asset = fiat(
    "GBP",
    "£",
    &["ZGBP"],
    &[
        ("Kraken", "ZGBP"),
        ("Coinbase", "GBP"),
        ("LocalBitcoins", "GBP"),
    ],
);

pub const JPY: Asset = fiat(
    "JPY",
    "¥",
    &["ZJPY"],
    &[
        ("Kraken", "ZJPY"),
        ("Coinbase", "JPY"),
        ("LocalBitcoins", "JPY"),
    ],
);

pub const USD: Asset = fiat(
    "USD",
    "$",
    &["ZUSD"],
    &[
        ("Kraken", "ZUSD"),
        ("Coinbase", "USD"),
        ("LocalBitcoins", "USD"),
    ],
);

/// Every known asset, crypto first then fiat, each group sorted by name
pub static ASSETS: [Asset; 17] = [
    BCH, BTC, DASH, DOGE, EOS, ETC, ETH, GNO, LTC, XMR, XRP, ZEC, CAD, EUR, GBP, JPY, USD,
];

/// Resolve a canonical name or alias to an asset
///
/// Matching ignores case and surrounding whitespace. Unrecognised names
/// resolve to [`UNKNOWN`]; callers decide whether that is fatal.
pub fn resolve(name: &str) -> Asset {
    ASSETS
        .iter()
        .find(|asset| asset.matches(name))
        .copied()
        .unwrap_or(UNKNOWN)
}

/// Known cryptocurrencies
pub fn crypto_assets() -> impl Iterator<Item = &'static Asset> {
    ASSETS.iter().filter(|a| a.class == AssetClass::Crypto)
}

/// Known fiat currencies
pub fn fiat_assets() -> impl Iterator<Item = &'static Asset> {
    ASSETS.iter().filter(|a| a.class == AssetClass::Fiat)
}
