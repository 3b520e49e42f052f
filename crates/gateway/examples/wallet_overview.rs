/// Example demonstrating basic usage of the transfer gateway
///
/// This example shows how to:
/// 1. Load configuration from the environment
/// 2. Build a gateway over a Solana RPC chain client
/// 3. Query balance, recipient status, and transfer history
///
/// Without the privacy SDK installed the NullProvider is used, so balance
/// queries fall back to the public chain and pool operations report as
/// unavailable.
use gateway::{NullProvider, SolanaChainClient, TransferGateway};
use shared::Config;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    println!("Using RPC endpoint: {}", config.solana.rpc_url);

    let chain = Arc::new(SolanaChainClient::new(config.solana.rpc_url.clone()));
    let gateway = TransferGateway::new(chain, Arc::new(NullProvider));

    let address = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "11111111111111111111111111111111".to_string());

    let balance = gateway.get_balance(&address).await?;
    println!(
        "Balance for {}: {:.4} SOL available, {:.4} locked",
        address, balance.available, balance.locked
    );

    let status = gateway.check_recipient(&address).await;
    println!("Recipient status: {}", serde_json::to_string_pretty(&status)?);

    let history = gateway
        .transfer_history(&address, config.history.default_limit)
        .await;
    println!("Recent transactions: {}", history.len());
    for entry in history {
        println!(
            "  {} {:?} {:.4} {} ({:?})",
            entry.signature, entry.direction, entry.amount, entry.token, entry.status
        );
    }

    Ok(())
}
