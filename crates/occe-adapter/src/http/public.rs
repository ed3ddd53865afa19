/*
[INPUT]:  Optional trading pair identifiers
[OUTPUT]: Raw market data JSON (server time, market info, market orders)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use serde_json::Value;

use crate::http::endpoint::Endpoint;
use crate::http::{OcceClient, Result};

impl OcceClient {
    /// Query exchange server time (unix timestamp)
    ///
    /// GET /public/tradeview/time
    pub async fn get_server_time(&self) -> Result<Value> {
        self.public_request(&Endpoint::ServerTime).await
    }

    /// Query market summaries for every pair, or for one pair
    ///
    /// GET /public/info/ or /public/info/{pair}
    pub async fn get_trade_history(&self, pair: Option<&str>) -> Result<Value> {
        self.public_request(&Endpoint::market_info(pair)).await
    }

    /// Query all open market orders of a pair
    ///
    /// GET /public/orders/{pair}
    pub async fn get_market_orders(&self, pair: &str) -> Result<Value> {
        self.public_request(&Endpoint::market_orders(pair)).await
    }
}
