/*
[INPUT]:  BUYCOINS_PUBLIC_KEY / BUYCOINS_SECRET_KEY environment variables
[OUTPUT]: Balances, current prices and the first page of the P2P market book
[POS]:    Examples - read-only queries
[UPDATE]: When adding new queries
*/

use buycoins_sdk::*;

/// Example: Query prices, balances and the market book
///
/// Credentials are read from the environment; the endpoint can be
/// overridden with BUYCOINS_GRAPHQL_ENDPOINT.
#[tokio::main]
async fn main() {
    println!("=== BuyCoins Market Data Example ===\n");

    let client = match BuycoinsClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ Client created\n");

    println!("Querying bitcoin prices...");
    match client.get_prices(Some(Cryptocurrency::Bitcoin)).await {
        Ok(prices) => {
            for price in prices {
                println!(
                    "✓ {} buy {} / sell {} (expires {:?})",
                    price.cryptocurrency,
                    price.buy_price_per_coin,
                    price.sell_price_per_coin,
                    price.expires_at_utc()
                );
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying balances...");
    match client.get_balances(None).await {
        Ok(accounts) => {
            for account in accounts {
                println!("✓ {}: {}", account.cryptocurrency, account.confirmed_balance);
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying market book (first 5)...");
    let pagination = PaginationArgs::new().with_first(5);
    match client.get_market_book(Some(Cryptocurrency::Bitcoin), &pagination).await {
        Ok(book) => {
            for order in book.orders.nodes() {
                println!("✓ {:?} {} @ {}", order.side, order.coin_amount, order.price_per_coin);
            }
            if let Some(cursor) = book.orders.next_cursor() {
                println!("  next page: after = {}", cursor);
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Market data example complete");
}
