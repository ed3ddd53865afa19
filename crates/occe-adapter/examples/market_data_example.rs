/*
[INPUT]:  Trading pair identifier (e.g., "krb_btc")
[OUTPUT]: Market data (server time, market info, market orders)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use occe_adapter::*;

/// Example: Query market data (no authentication required)
#[tokio::main]
async fn main() {
    println!("=== OCCE Market Data Example ===\n");

    let client = match OcceClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let pair = "IDNA_UAH";

    println!("Querying server time...");
    match client.get_server_time().await {
        Ok(time) => println!("✓ Server time: {}", time),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying market info for {}...", pair);
    match client.get_trade_history(Some(pair)).await {
        Ok(info) => println!("✓ Market info: {}", info),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying market orders for {}...", pair);
    match client.get_market_orders(pair).await {
        Ok(orders) => println!("✓ Orders: {}", orders),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Market data example complete");
}
