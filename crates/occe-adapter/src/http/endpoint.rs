/*
[INPUT]:  Endpoint selection and pair / order identifiers
[OUTPUT]: Endpoint path, HTTP verb and signing requirement
[POS]:    HTTP layer - closed set of exchange endpoints
[UPDATE]: When adding new endpoints or changing path templates
*/

use std::fmt;

use reqwest::Method;

/// HTTP verb as it appears in the signed canonical message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Delete,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Delete => "DELETE",
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Verb::Get => Method::GET,
            Verb::Post => Method::POST,
            Verb::Delete => Method::DELETE,
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// OCCE REST endpoints
///
/// Pair arguments are lower-cased by the constructors; the exchange is
/// case-sensitive on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// GET public/tradeview/time
    ServerTime,
    /// GET public/info/ or public/info/{pair}
    MarketInfo { pair: Option<String> },
    /// GET public/orders/{pair}
    MarketOrders { pair: String },
    /// GET v2/account/balance
    Balance,
    /// GET v2/account/orders/open/{pair}
    OpenOrders { pair: String },
    /// GET v2/account/orders_history/{pair}
    OrdersHistory { pair: String },
    /// GET v2/{pair}/orders/status
    OrdersStatus { pair: String },
    /// DELETE v2/{pair}/orders{order_id}
    CancelOrder { pair: String, order_id: String },
    /// POST v2/{pair}/orders/
    CreateOrder { pair: String },
}

impl Endpoint {
    pub fn market_info(pair: Option<&str>) -> Self {
        Endpoint::MarketInfo {
            pair: pair.map(normalize_pair),
        }
    }

    pub fn market_orders(pair: &str) -> Self {
        Endpoint::MarketOrders {
            pair: normalize_pair(pair),
        }
    }

    pub fn open_orders(pair: &str) -> Self {
        Endpoint::OpenOrders {
            pair: normalize_pair(pair),
        }
    }

    pub fn orders_history(pair: &str) -> Self {
        Endpoint::OrdersHistory {
            pair: normalize_pair(pair),
        }
    }

    pub fn orders_status(pair: &str) -> Self {
        Endpoint::OrdersStatus {
            pair: normalize_pair(pair),
        }
    }

    pub fn cancel_order(pair: &str, order_id: impl fmt::Display) -> Self {
        Endpoint::CancelOrder {
            pair: normalize_pair(pair),
            order_id: order_id.to_string(),
        }
    }

    pub fn create_order(pair: &str) -> Self {
        Endpoint::CreateOrder {
            pair: normalize_pair(pair),
        }
    }

    /// Path relative to the public base or the versioned API base
    pub fn path(&self) -> String {
        match self {
            Endpoint::ServerTime => "tradeview/time".to_string(),
            Endpoint::MarketInfo { pair: None } => "info/".to_string(),
            Endpoint::MarketInfo { pair: Some(pair) } => format!("info/{pair}"),
            Endpoint::MarketOrders { pair } => format!("orders/{pair}"),
            Endpoint::Balance => "account/balance".to_string(),
            Endpoint::OpenOrders { pair } => format!("account/orders/open/{pair}"),
            Endpoint::OrdersHistory { pair } => format!("account/orders_history/{pair}"),
            Endpoint::OrdersStatus { pair } => format!("{pair}/orders/status"),
            // No separator between "orders" and the id.
            Endpoint::CancelOrder { pair, order_id } => format!("{pair}/orders{order_id}"),
            Endpoint::CreateOrder { pair } => format!("{pair}/orders/"),
        }
    }

    pub fn verb(&self) -> Verb {
        match self {
            Endpoint::CancelOrder { .. } => Verb::Delete,
            Endpoint::CreateOrder { .. } => Verb::Post,
            _ => Verb::Get,
        }
    }

    /// Whether the endpoint requires a signed request against the v2 API
    pub fn is_signed(&self) -> bool {
        !matches!(
            self,
            Endpoint::ServerTime | Endpoint::MarketInfo { .. } | Endpoint::MarketOrders { .. }
        )
    }
}

fn normalize_pair(pair: &str) -> String {
    pair.to_lowercase()
}
