/*
[INPUT]:  Coin names and trading pairs, signed with the API key pair
[OUTPUT]: User account data (balances, open orders, history, order status)
[POS]:    HTTP layer - account endpoints (require signed requests)
[UPDATE]: When adding new account endpoints or changing query parameters
*/

use rust_decimal::Decimal;
use serde_json::Value;

use crate::http::endpoint::Endpoint;
use crate::http::{OcceClient, OcceError, Result};
use crate::types::{BalanceSnapshot, CurrencyValue};

impl OcceClient {
    /// Query user balances
    ///
    /// GET /v2/account/balance
    pub async fn get_balances(&self) -> Result<Value> {
        self.call_api(&Endpoint::Balance, None).await
    }

    /// Query balances and decode the `data` object
    pub async fn balance_snapshot(&self) -> Result<BalanceSnapshot> {
        let mut response = self.get_balances().await?;
        let data = response
            .get_mut("data")
            .map(Value::take)
            .unwrap_or(Value::Null);
        Ok(serde_json::from_value(data)?)
    }

    /// Available amount of one coin, name matched in any case
    ///
    /// Only the first matching entry of `data.currencies` is decoded and its
    /// `value` must be present. [`OcceError::BalanceNotFound`] when no
    /// currency carries that name.
    pub async fn get_balance(&self, coin: &str) -> Result<Decimal> {
        let mut response = self.get_balances().await?;
        let currencies: Vec<Value> = match response.pointer_mut("/data/currencies") {
            Some(currencies) => serde_json::from_value(currencies.take())?,
            None => Vec::new(),
        };

        match CurrencyValue::find_in(&currencies, coin) {
            Some(currency) => Ok(currency?.value),
            None => Err(OcceError::BalanceNotFound {
                coin: coin.to_uppercase(),
            }),
        }
    }

    /// Query the user's open orders on a pair
    ///
    /// GET /v2/account/orders/open/{pair}
    pub async fn get_open_orders(&self, pair: &str) -> Result<Value> {
        self.call_api(&Endpoint::open_orders(pair), None).await
    }

    /// Query the user's order history on a pair
    ///
    /// GET /v2/account/orders_history/{pair}
    pub async fn get_orders_history(&self, pair: &str) -> Result<Value> {
        self.call_api(&Endpoint::orders_history(pair), None).await
    }

    /// Query the status of the user's orders on a pair
    ///
    /// GET /v2/{pair}/orders/status
    pub async fn get_orders_status(&self, pair: &str) -> Result<Value> {
        self.call_api(&Endpoint::orders_status(pair), None).await
    }
}
