/*
[INPUT]:  Order parameters and order ids, signed with the API key pair
[OUTPUT]: Order creation / cancellation confirmation
[POS]:    HTTP layer - trading endpoints (require signed requests)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use std::fmt;

use rust_decimal::Decimal;
use serde_json::Value;
use tracing::debug;

use crate::http::endpoint::Endpoint;
use crate::http::{OcceClient, Result};
use crate::types::{OrderParams, Side};

impl OcceClient {
    /// Create an order on a pair
    ///
    /// Reads the current balance version first, then
    /// POST /v2/{pair}/orders/ with that version embedded in the order.
    pub async fn create_order(
        &self,
        pair: &str,
        side: Side,
        amount: Decimal,
        price: Decimal,
    ) -> Result<Value> {
        let balance_version = self.balance_snapshot().await?.balance_version;
        debug!(%balance_version, %side, "submitting order");

        let params = OrderParams {
            order_type: side,
            amount,
            price,
            balance_version,
        };
        self.call_api(&Endpoint::create_order(pair), Some(&params))
            .await
    }

    /// Cancel an order by id on a pair
    ///
    /// DELETE /v2/{pair}/orders{order_id}
    pub async fn cancel_order(&self, pair: &str, order_id: impl fmt::Display) -> Result<Value> {
        self.call_api(&Endpoint::cancel_order(pair, order_id), None)
            .await
    }
}
