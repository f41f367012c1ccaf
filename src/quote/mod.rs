//! Normalized price quotes
//!
//! A [`Quote`] is built once from whatever statistics an exchange reports and
//! is immutable afterwards. Missing statistics render as `?`, never as zero.

mod types;

pub use types::{PriceStats, QuoteError};

use crate::asset::Asset;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;

/// Marker rendered for statistics the exchange did not report
pub const UNKNOWN_MARKER: &str = "?";

/// Capture time format used in the header line
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Price snapshot for a pair of assets on an exchange
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    exchange: String,
    base: Asset,
    quote: Asset,
    stats: PriceStats,
    averages: bool,
    time: DateTime<Utc>,
}

impl Quote {
    /// Create a quote captured now
    pub fn new(
        exchange: impl Into<String>,
        base: Asset,
        quote: Asset,
        stats: PriceStats,
    ) -> Result<Self, QuoteError> {
        stats.validate()?;

        Ok(Self {
            exchange: exchange.into(),
            base,
            quote,
            stats,
            averages: true,
            time: Utc::now(),
        })
    }

    /// Use the layout without the averages line
    pub fn without_averages(mut self) -> Self {
        self.averages = false;
        self
    }

    /// Override the capture time
    pub fn captured_at(mut self, time: DateTime<Utc>) -> Self {
        self.time = time;
        self
    }

    /// Exchange the quote came from
    pub fn exchange(&self) -> &str {
        &self.exchange
    }

    /// Asset being priced
    pub fn base(&self) -> &Asset {
        &self.base
    }

    /// Asset the prices are denominated in
    pub fn quote(&self) -> &Asset {
        &self.quote
    }

    /// Reported statistics
    pub fn stats(&self) -> &PriceStats {
        &self.stats
    }

    /// Capture time
    pub fn time(&self) -> DateTime<Utc> {
        self.time
    }

    /// Whether the averages line is rendered
    pub fn has_averages(&self) -> bool {
        self.averages
    }

    fn value(&self, value: Option<Decimal>) -> String {
        match value {
            Some(value) => self.quote.formatted_value(value),
            None => UNKNOWN_MARKER.to_string(),
        }
    }

    /// Multi-line human readable rendering
    pub fn render(&self) -> String {
        let stats = &self.stats;
        let mut lines = vec![
            format!(
                "{} price on {} as of {}:",
                self.base,
                self.exchange,
                self.time.format(TIME_FORMAT)
            ),
            format!("\tAsk: {}", self.value(stats.ask)),
            format!("\tBid: {}", self.value(stats.bid)),
            format!("\tLast: {}", self.value(stats.last)),
            format!(
                "\tToday low: {} (last 24h: {})",
                self.value(stats.today_low),
                self.value(stats.day_low)
            ),
            format!(
                "\tToday high: {} (last 24h: {})",
                self.value(stats.today_high),
                self.value(stats.day_high)
            ),
        ];

        if self.averages {
            lines.push(format!(
                "\tToday average: {} (last 24h: {})",
                self.value(stats.today_avg),
                self.value(stats.day_avg)
            ));
        }

        lines.join("\n")
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
