//! Price command implementation

use crate::config::Config;
use crate::exchange::ExchangeRegistry;
use clap::Args;

#[derive(Args, Debug)]
pub struct PriceArgs {
    /// Base asset, or a pair name such as XBTUSD when no quote is given
    pub base: String,

    /// Asset the price is expressed in
    pub quote: Option<String>,

    /// Exchange to query (defaults to the configured exchange)
    #[arg(short, long)]
    pub exchange: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl PriceArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let name = self.exchange.as_deref().unwrap_or(&config.exchange.default);
        let registry = ExchangeRegistry::builtin();
        registry.get(name)?;

        let exchange = registry.create(name, super::exchange_context(config)?)?;
        tracing::info!(
            exchange = exchange.name(),
            base = %self.base,
            quote = ?self.quote,
            "Requesting quote"
        );

        let quote = exchange.quote(&self.base, self.quote.as_deref()).await?;
        println!("{}", quote);
        Ok(())
    }
}
