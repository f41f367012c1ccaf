//! Request latency events

use std::time::Duration;

/// Latency metric types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatencyMetric {
    /// Pair listing request
    PairListing,
    /// Price request
    Ticker,
}

impl LatencyMetric {
    /// Metric name as emitted in log events
    pub fn name(self) -> &'static str {
        match self {
            LatencyMetric::PairListing => "cryptoquote_pair_listing_latency_ms",
            LatencyMetric::Ticker => "cryptoquote_ticker_latency_ms",
        }
    }
}

/// Record a latency measurement
pub fn record_latency(metric: LatencyMetric, duration: Duration) {
    tracing::debug!(
        metric = metric.name(),
        value_ms = duration.as_millis() as u64,
        "Recording latency"
    );
}
