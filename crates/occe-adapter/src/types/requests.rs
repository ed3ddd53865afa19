/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::Side;

/// Order creation parameters, also sent as the POST body
///
/// Decimals travel as their exact text in both the body and the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderParams {
    #[serde(rename = "type")]
    pub order_type: Side,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(rename = "balanceVersion")]
    pub balance_version: String,
}

impl OrderParams {
    /// Query pairs in the order the exchange expects them in the signed URL
    pub fn query_pairs(&self) -> [(&'static str, String); 4] {
        [
            ("type", self.order_type.to_string()),
            ("amount", self.amount.to_string()),
            ("price", self.price.to_string()),
            ("balanceVersion", self.balance_version.clone()),
        ]
    }
}
