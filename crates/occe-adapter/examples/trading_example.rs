/*
[INPUT]:  OCCE_ACCESS_KEY / OCCE_SECRET_KEY environment variables
[OUTPUT]: Balances and open orders of the account
[POS]:    Examples - authenticated account queries
[UPDATE]: When trading API changes
*/

use occe_adapter::*;

/// Example: Authenticated calls (signed with the API key pair)
///
/// Placing or cancelling orders works the same way through
/// `create_order` / `cancel_order`; this example only reads.
#[tokio::main]
async fn main() {
    println!("=== OCCE Trading Example ===\n");

    let (Ok(access_key), Ok(secret_key)) = (
        std::env::var("OCCE_ACCESS_KEY"),
        std::env::var("OCCE_SECRET_KEY"),
    ) else {
        eprintln!("Set OCCE_ACCESS_KEY and OCCE_SECRET_KEY to run this example");
        return;
    };

    let client = match OcceClient::with_credentials(Credentials::new(access_key, secret_key)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created");

    match client.get_balance("KRB").await {
        Ok(value) => println!("✓ KRB available: {}", value),
        Err(OcceError::Exchange { message }) => {
            println!("! Exchange API response error: {}", message)
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    match client.get_open_orders("krb_btc").await {
        Ok(orders) => println!("✓ Open orders: {}", orders),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Trading example complete");
}
