use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub solana: SolanaConfig,
    pub history: HistoryConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SolanaConfig {
    pub rpc_url: String,
    pub network: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistoryConfig {
    /// Number of transactions fetched per history query (default: 10)
    pub default_limit: usize,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        Ok(Config {
            solana: SolanaConfig {
                rpc_url: env::var("SOLANA_RPC_URL")
                    .unwrap_or_else(|_| "https://api.mainnet-beta.solana.com".to_string()),
                network: env::var("SOLANA_NETWORK").unwrap_or_else(|_| "mainnet-beta".to_string()),
            },
            history: HistoryConfig {
                default_limit: env::var("HISTORY_DEFAULT_LIMIT")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()?,
            },
        })
    }
}
