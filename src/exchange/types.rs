//! Exchange error types

use crate::http::TransportError;
use crate::quote::QuoteError;
use thiserror::Error;

/// Errors from resolving and fetching a quote
#[derive(Debug, Error)]
pub enum ExchangeError {
    /// Names cannot be combined into a pair the exchange lists
    #[error("{pair} is not a supported pair on {exchange}")]
    PairNotSupported {
        exchange: &'static str,
        pair: String,
    },
    /// Asset is known but the exchange has no identifier for it
    #[error("{asset} is not supported on {exchange}: {reason}")]
    AssetUnsupported {
        exchange: &'static str,
        asset: String,
        reason: String,
    },
    /// Response carries no price for the requested asset
    #[error("{asset} not quoted on {exchange}")]
    NotQuoted {
        exchange: &'static str,
        asset: String,
    },
    /// Response is missing expected structure
    #[error("Unexpected response from {exchange}: {detail}")]
    MalformedResponse {
        exchange: &'static str,
        detail: String,
    },
    /// Exchange reported errors of its own
    #[error("{exchange} returned an error: {}", .messages.join("; "))]
    Remote {
        exchange: &'static str,
        messages: Vec<String>,
    },
    /// Reported prices failed validation
    #[error("Invalid quote from {exchange}: {source}")]
    InvalidQuote {
        exchange: &'static str,
        #[source]
        source: QuoteError,
    },
    /// Network failure, passed through untouched
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl ExchangeError {
    /// True when the user asked for something the exchange does not offer
    pub fn is_resolution(&self) -> bool {
        matches!(
            self,
            ExchangeError::PairNotSupported { .. }
                | ExchangeError::AssetUnsupported { .. }
                | ExchangeError::NotQuoted { .. }
        )
    }

    pub(crate) fn malformed(exchange: &'static str, detail: impl Into<String>) -> Self {
        ExchangeError::MalformedResponse {
            exchange,
            detail: detail.into(),
        }
    }
}
