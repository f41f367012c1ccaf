//! Helpers for picking prices out of exchange JSON

use super::ExchangeError;
use crate::asset::Asset;
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use std::str::FromStr;

/// Parse a price given as a JSON string or number
pub(crate) fn parse_price(
    exchange: &'static str,
    field: &str,
    value: &Value,
) -> Result<Decimal, ExchangeError> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        other => {
            return Err(ExchangeError::malformed(
                exchange,
                format!("{} is not a price: {}", field, other),
            ))
        }
    };

    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|e| ExchangeError::malformed(exchange, format!("{} = {:?}: {}", field, text, e)))
}

/// Parse an optional price
pub(crate) fn parse_optional_price(
    exchange: &'static str,
    field: &str,
    value: Option<&Value>,
) -> Result<Option<Decimal>, ExchangeError> {
    value
        .filter(|v| !v.is_null())
        .map(|v| parse_price(exchange, field, v))
        .transpose()
}

/// Look up a required object field
pub(crate) fn object_field<'a>(
    exchange: &'static str,
    document: &'a Value,
    field: &str,
) -> Result<&'a Map<String, Value>, ExchangeError> {
    document
        .get(field)
        .and_then(Value::as_object)
        .ok_or_else(|| ExchangeError::malformed(exchange, format!("missing \"{}\" object", field)))
}

/// Identifier of `asset` on `exchange`, or an unsupported-asset error
pub(crate) fn exchange_id(
    exchange: &'static str,
    asset: &Asset,
    requested: &str,
) -> Result<&'static str, ExchangeError> {
    asset
        .exchange_id(exchange)
        .ok_or_else(|| ExchangeError::AssetUnsupported {
            exchange,
            asset: requested.trim().to_string(),
            reason: if asset.is_unknown() {
                "unknown asset".to_string()
            } else {
                format!("{} does not list {}", exchange, asset.name)
            },
        })
}
