//! List command implementation

use crate::asset::{crypto_assets, fiat_assets, Asset, AssetPair};
use crate::config::Config;
use crate::exchange::{ExchangeInfo, ExchangeRegistry};
use clap::{Args, ValueEnum};

/// What to list
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListTarget {
    /// Supported exchanges
    Exchanges,
    /// Supported assets
    Assets,
    /// Pairs listed by an exchange
    Pairs,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[arg(value_enum)]
    pub target: ListTarget,

    /// Exchange whose pairs are listed (defaults to the configured exchange)
    #[arg(short, long)]
    pub exchange: Option<String>,
}

impl ListArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let registry = ExchangeRegistry::builtin();

        match self.target {
            ListTarget::Exchanges => print!("{}", render_exchanges(registry.exchanges())),
            ListTarget::Assets => print!(
                "{}",
                render_assets(crypto_assets().copied(), fiat_assets().copied())
            ),
            ListTarget::Pairs => {
                let name = self.exchange.as_deref().unwrap_or(&config.exchange.default);
                registry.get(name)?;

                let exchange = registry.create(name, super::exchange_context(config)?)?;
                let pairs: Vec<AssetPair> = exchange.asset_pairs().await?.collect();
                if pairs.is_empty() {
                    println!("{} has no fixed pair listing", exchange.name());
                } else {
                    print!("{}", render_pairs(&pairs));
                }
            }
        }
        Ok(())
    }
}

fn render_exchanges<'a>(exchanges: impl Iterator<Item = &'a ExchangeInfo>) -> String {
    let mut out = String::from("Supported exchanges:\n");
    for info in exchanges {
        out.push_str(&format!("\t{} ({})\n", info.name, info.url));
    }
    out
}

fn asset_line(asset: &Asset) -> String {
    if asset.aliases.is_empty() {
        format!("\t{}\n", asset.name)
    } else {
        format!("\t{} ({})\n", asset.name, asset.aliases.join(", "))
    }
}

fn render_assets(
    crypto: impl Iterator<Item = Asset>,
    fiat: impl Iterator<Item = Asset>,
) -> String {
    let mut out = String::from("Supported cryptocurrency assets:\n");
    crypto.for_each(|asset| out.push_str(&asset_line(&asset)));
    out.push_str("Supported fiat currency assets:\n");
    fiat.for_each(|asset| out.push_str(&asset_line(&asset)));
    out
}

fn render_pairs(pairs: &[AssetPair]) -> String {
    pairs
        .iter()
        .map(|pair| {
            format!(
                "{} ({} -> {})\n",
                pair.pretty_name, pair.base.name, pair.quote.name
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::{BTC, GBP, USD};

    #[test]
    fn test_render_exchanges() {
        let registry = ExchangeRegistry::builtin();
        let out = render_exchanges(registry.exchanges());

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Supported exchanges:");
        assert_eq!(lines[1], "\tCoinbase (https://www.coinbase.com/)");
        assert_eq!(lines[2], "\tKraken (https://www.kraken.com/)");
        assert_eq!(lines[3], "\tLocalBitcoins (https://localbitcoins.com/)");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_render_assets() {
        let out = render_assets([BTC].into_iter(), [GBP].into_iter());
        assert_eq!(
            out,
            "Supported cryptocurrency assets:\n\
             \tBTC (XBT, XXBT)\n\
             Supported fiat currency assets:\n\
             \tGBP (ZGBP)\n"
        );
    }

    #[test]
    fn test_render_all_assets() {
        let out = render_assets(crypto_assets().copied(), fiat_assets().copied());
        // two headers plus one line per asset
        assert_eq!(out.lines().count(), 2 + 12 + 5);
        assert!(!out.contains('?'));
    }

    #[test]
    fn test_render_pairs() {
        let pairs = vec![AssetPair::new("Kraken", "XXBTZUSD", "XBTUSD", BTC, USD)];
        assert_eq!(render_pairs(&pairs), "XBTUSD (BTC -> USD)\n");
    }
}
