/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `data` object of the account/balance response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSnapshot {
    #[serde(default)]
    pub currencies: Vec<CurrencyBalance>,
    /// Optimistic-concurrency token required by order creation
    #[serde(
        rename = "balanceVersion",
        deserialize_with = "serde_helpers::deserialize_string_or_number"
    )]
    pub balance_version: String,
}

/// Currency entry as read by the coin lookup
///
/// Only `name` and `value` are decoded; `value` must be present and numeric.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CurrencyValue {
    pub name: String,
    #[serde(deserialize_with = "serde_helpers::deserialize_decimal")]
    pub value: Decimal,
}

impl CurrencyValue {
    /// Decode the first entry of `currencies` whose name matches `coin`, ignoring case
    ///
    /// Other entries are never decoded.
    pub fn find_in(currencies: &[Value], coin: &str) -> Option<serde_json::Result<Self>> {
        currencies
            .iter()
            .find(|entry| {
                entry
                    .get("name")
                    .and_then(Value::as_str)
                    .is_some_and(|name| name.eq_ignore_ascii_case(coin))
            })
            .map(Self::deserialize)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyBalance {
    pub name: String,
    /// Available amount
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub value: Decimal,
    /// Locked amount
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub on_order: Decimal,
    #[serde(default)]
    pub deposit_blocked: bool,
    #[serde(default)]
    pub withdraw_blocked: bool,
}

mod serde_helpers {
    use super::Decimal;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;
    use std::str::FromStr;

    pub fn deserialize_decimal_or_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(Decimal::ZERO);
        }

        if let Some(raw) = value.as_str() {
            if raw.trim().is_empty() {
                return Ok(Decimal::ZERO);
            }
            return Decimal::from_str(raw.trim()).map_err(serde::de::Error::custom);
        }

        if value.is_number() {
            let raw = value.to_string();
            return Decimal::from_str(&raw)
                .or_else(|_| Decimal::from_scientific(&raw))
                .map_err(serde::de::Error::custom);
        }

        Err(serde::de::Error::custom("invalid decimal value"))
    }

    pub fn deserialize_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(raw) => Decimal::from_str(raw.trim()).map_err(serde::de::Error::custom),
            Value::Number(number) => {
                let raw = number.to_string();
                Decimal::from_str(&raw)
                    .or_else(|_| Decimal::from_scientific(&raw))
                    .map_err(serde::de::Error::custom)
            }
            other => Err(serde::de::Error::custom(format!(
                "expected decimal value, got {other}"
            ))),
        }
    }

    pub fn serialize_decimal<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(raw) => Ok(raw),
            Value::Number(number) => Ok(number.to_string()),
            other => Err(serde::de::Error::custom(format!(
                "expected string or number, got {other}"
            ))),
        }
    }
}
