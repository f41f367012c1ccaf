//! Quote statistics and errors

use rust_decimal::Decimal;
use thiserror::Error;

/// Quote construction errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuoteError {
    /// A reported price was below zero
    #[error("Negative {field} price: {value}")]
    NegativePrice {
        /// Statistic name
        field: &'static str,
        /// Offending value
        value: Decimal,
    },
}

/// Price statistics reported by an exchange
///
/// Every field is optional since exchanges differ in what they report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceStats {
    /// Lowest ask
    pub ask: Option<Decimal>,
    /// Highest bid
    pub bid: Option<Decimal>,
    /// Last trade price
    pub last: Option<Decimal>,
    /// Today's lowest price
    pub today_low: Option<Decimal>,
    /// Today's highest price
    pub today_high: Option<Decimal>,
    /// Today's average price
    pub today_avg: Option<Decimal>,
    /// Lowest price in the last 24h
    pub day_low: Option<Decimal>,
    /// Highest price in the last 24h
    pub day_high: Option<Decimal>,
    /// Average price in the last 24h
    pub day_avg: Option<Decimal>,
}

impl PriceStats {
    fn named(&self) -> [(&'static str, Option<Decimal>); 9] {
        [
            ("ask", self.ask),
            ("bid", self.bid),
            ("last", self.last),
            ("today low", self.today_low),
            ("today high", self.today_high),
            ("today average", self.today_avg),
            ("24h low", self.day_low),
            ("24h high", self.day_high),
            ("24h average", self.day_avg),
        ]
    }

    /// Reject negative prices
    pub fn validate(&self) -> Result<(), QuoteError> {
        for (field, value) in self.named() {
            if let Some(value) = value {
                if value.is_sign_negative() && !value.is_zero() {
                    return Err(QuoteError::NegativePrice { field, value });
                }
            }
        }
        Ok(())
    }

    /// True when no statistic is present
    pub fn is_empty(&self) -> bool {
        self.named().iter().all(|(_, value)| value.is_none())
    }
}
