//! Exchange selection by name

use super::coinbase::COINBASE;
use super::kraken::KRAKEN;
use super::localbitcoins::LOCALBITCOINS;
use super::{Coinbase, Exchange, ExchangeContext, Kraken, LocalBitcoins};
use std::collections::BTreeMap;
use thiserror::Error;

/// Name given for an exchange that is not registered
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unrecognised exchange: {0}")]
pub struct UnknownExchange(pub String);

/// Builds an adapter from shared collaborators
pub type ExchangeConstructor = fn(ExchangeContext) -> Box<dyn Exchange>;

fn kraken(ctx: ExchangeContext) -> Box<dyn Exchange> {
    Box::new(Kraken::new(ctx))
}

fn localbitcoins(ctx: ExchangeContext) -> Box<dyn Exchange> {
    Box::new(LocalBitcoins::new(ctx))
}

fn coinbase(ctx: ExchangeContext) -> Box<dyn Exchange> {
    Box::new(Coinbase::new(ctx))
}

/// Registered exchange
#[derive(Debug, Clone, Copy)]
pub struct ExchangeInfo {
    /// Display name
    pub name: &'static str,
    /// Homepage
    pub url: &'static str,
    constructor: ExchangeConstructor,
}

/// Case-insensitive map from exchange name to adapter constructor
#[derive(Debug, Clone, Default)]
pub struct ExchangeRegistry {
    exchanges: BTreeMap<String, ExchangeInfo>,
}

impl ExchangeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in exchange
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(KRAKEN, "https://www.kraken.com/", kraken);
        registry.register(LOCALBITCOINS, "https://localbitcoins.com/", localbitcoins);
        registry.register(COINBASE, "https://www.coinbase.com/", coinbase);
        registry
    }

    /// Add or replace an exchange
    pub fn register(
        &mut self,
        name: &'static str,
        url: &'static str,
        constructor: ExchangeConstructor,
    ) {
        self.exchanges.insert(
            name.to_lowercase(),
            ExchangeInfo {
                name,
                url,
                constructor,
            },
        );
    }

    /// Look up an exchange by name, ignoring case
    pub fn get(&self, name: &str) -> Result<&ExchangeInfo, UnknownExchange> {
        self.exchanges
            .get(&name.trim().to_lowercase())
            .ok_or_else(|| UnknownExchange(name.to_string()))
    }

    /// Build the adapter for `name`
    pub fn create(
        &self,
        name: &str,
        ctx: ExchangeContext,
    ) -> Result<Box<dyn Exchange>, UnknownExchange> {
        let info = self.get(name)?;
        tracing::debug!(exchange = info.name, "Selected exchange");
        Ok((info.constructor)(ctx))
    }

    /// Registered exchanges sorted by name
    pub fn exchanges(&self) -> impl Iterator<Item = &ExchangeInfo> {
        self.exchanges.values()
    }
}
