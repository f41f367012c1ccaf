//! HTTP transport
//!
//! Exchanges only ever need "GET a URL and parse the body as JSON", so that
//! is the whole of the [`HttpFetcher`] seam. Failures surface as
//! [`TransportError`] and are propagated by the exchanges untouched.

mod client;
mod mock;

pub use client::ReqwestFetcher;
pub use mock::MockFetcher;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Network level failures
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection, timeout or other request failure
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// Non-2xx response
    #[error("{url} returned {status}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },
    /// Body could not be decoded as JSON
    #[error("Response from {url} is not valid JSON: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// No response is available for the URL
    #[error("No response available for {0}")]
    Unreachable(String),
}

/// Trait for fetching JSON documents
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    /// GET `url` and parse the response body as JSON
    async fn fetch_json(&self, url: &str) -> Result<Value, TransportError>;
}
