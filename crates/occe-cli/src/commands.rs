/*
[INPUT]:  Parsed subcommand and a configured OCCE client
[OUTPUT]: JSON value to print for the command
[POS]:    Command layer - maps CLI subcommands to client operations
[UPDATE]: When adding new commands or client operations
*/

use clap::Subcommand;
use occe_adapter::{OcceClient, Side};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tracing::info;

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Exchange server time (unix timestamp)
    ServerTime,
    /// Market summaries for every pair, or one pair
    TradeHistory {
        #[arg(long)]
        pair: Option<String>,
    },
    /// Open market orders of a pair
    MarketOrders { pair: String },
    /// All account balances
    Balances,
    /// Available balance of one coin
    Balance { coin: String },
    /// Open orders of the account on a pair
    OpenOrders { pair: String },
    /// Order history of the account on a pair
    OrdersHistory { pair: String },
    /// Status of the account's orders on a pair
    OrdersStatus { pair: String },
    /// Cancel an order by id
    CancelOrder { pair: String, order_id: String },
    /// Place a limit order
    CreateOrder {
        pair: String,
        #[arg(value_parser = parse_side)]
        side: Side,
        amount: Decimal,
        price: Decimal,
    },
}

impl Command {
    /// Whether the command hits a signed endpoint
    pub fn requires_auth(&self) -> bool {
        !matches!(
            self,
            Command::ServerTime | Command::TradeHistory { .. } | Command::MarketOrders { .. }
        )
    }

    pub async fn run(&self, client: &OcceClient) -> occe_adapter::Result<Value> {
        match self {
            Command::ServerTime => client.get_server_time().await,
            Command::TradeHistory { pair } => client.get_trade_history(pair.as_deref()).await,
            Command::MarketOrders { pair } => client.get_market_orders(pair).await,
            Command::Balances => client.get_balances().await,
            Command::Balance { coin } => {
                let value = client.get_balance(coin).await?;
                Ok(json!({ "coin": coin.to_uppercase(), "value": value.to_string() }))
            }
            Command::OpenOrders { pair } => client.get_open_orders(pair).await,
            Command::OrdersHistory { pair } => client.get_orders_history(pair).await,
            Command::OrdersStatus { pair } => client.get_orders_status(pair).await,
            Command::CancelOrder { pair, order_id } => {
                info!(%pair, %order_id, "cancelling order");
                client.cancel_order(pair, order_id).await
            }
            Command::CreateOrder {
                pair,
                side,
                amount,
                price,
            } => {
                info!(%pair, %side, %amount, %price, "creating order");
                client.create_order(pair, *side, *amount, *price).await
            }
        }
    }
}

fn parse_side(raw: &str) -> Result<Side, String> {
    raw.parse()
}
