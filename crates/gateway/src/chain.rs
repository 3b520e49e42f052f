use async_trait::async_trait;
use shared::{Error, Result};
use solana_client::rpc_client::{GetConfirmedSignaturesForAddress2Config, RpcClient};
use solana_client::rpc_config::RpcTransactionConfig;
use solana_sdk::{
    commitment_config::CommitmentConfig, pubkey::Pubkey, signature::Signature,
};
use solana_transaction_status::UiTransactionEncoding;
use std::str::FromStr;
use tracing::{debug, info, warn};

use crate::types::{AccountRecord, SignatureRecord, TransactionRecord};

/// Read-only view of the public chain consumed by the gateway.
///
/// Implementations own connection management, timeouts, and reconnects; the
/// gateway only issues requests against whatever handle the caller injected.
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Native balance of the account, in lamports.
    async fn get_balance(&self, address: &str) -> Result<u64>;

    /// Account summary, or `None` when the address has never been funded.
    async fn get_account_info(&self, address: &str) -> Result<Option<AccountRecord>>;

    /// Up to `limit` most recent transaction signatures, most-recent-first.
    async fn get_signatures_for_address(
        &self,
        address: &str,
        limit: usize,
    ) -> Result<Vec<SignatureRecord>>;

    /// Full transaction detail, or `None` when the transaction carries no
    /// usable metadata.
    async fn get_transaction(&self, signature: &str) -> Result<Option<TransactionRecord>>;
}

/// Solana RPC implementation of [`ChainClient`].
pub struct SolanaChainClient {
    client: RpcClient,
}

impl SolanaChainClient {
    pub fn new(rpc_url: String) -> Self {
        info!("Initializing Solana chain client with RPC: {}", rpc_url);
        let client = RpcClient::new_with_commitment(rpc_url, CommitmentConfig::confirmed());
        Self { client }
    }

    fn parse_address(&self, address: &str) -> Result<Pubkey> {
        Pubkey::from_str(address).map_err(|e| {
            warn!("Invalid wallet address format: {} - {}", address, e);
            Error::InvalidWalletAddress(format!("Invalid Solana address format: {}", e))
        })
    }
}

#[async_trait]
impl ChainClient for SolanaChainClient {
    async fn get_balance(&self, address: &str) -> Result<u64> {
        let pubkey = self.parse_address(address)?;

        debug!("Fetching SOL balance for address: {}", address);
        let balance = self
            .client
            .get_balance(&pubkey)
            .map_err(|e| Error::SolanaRpc(format!("get_balance failed: {}", e)))?;

        debug!("Retrieved SOL balance: {} lamports", balance);
        Ok(balance)
    }

    async fn get_account_info(&self, address: &str) -> Result<Option<AccountRecord>> {
        let pubkey = self.parse_address(address)?;

        debug!("Fetching account info for address: {}", address);
        let response = self
            .client
            .get_account_with_commitment(&pubkey, CommitmentConfig::confirmed())
            .map_err(|e| Error::SolanaRpc(format!("get_account_info failed: {}", e)))?;

        Ok(response.value.map(|account| AccountRecord {
            lamports: account.lamports,
        }))
    }

    async fn get_signatures_for_address(
        &self,
        address: &str,
        limit: usize,
    ) -> Result<Vec<SignatureRecord>> {
        let pubkey = self.parse_address(address)?;

        debug!("Listing up to {} signatures for address: {}", limit, address);
        let config = GetConfirmedSignaturesForAddress2Config {
            limit: Some(limit),
            ..Default::default()
        };

        let signatures = self
            .client
            .get_signatures_for_address_with_config(&pubkey, config)
            .map_err(|e| Error::SolanaRpc(format!("get_signatures_for_address failed: {}", e)))?;

        Ok(signatures
            .into_iter()
            .map(|status| SignatureRecord {
                signature: status.signature,
                block_time: status.block_time,
                err: status.err.map(|e| e.to_string()),
            })
            .collect())
    }

    async fn get_transaction(&self, signature: &str) -> Result<Option<TransactionRecord>> {
        let sig = Signature::from_str(signature)
            .map_err(|e| Error::SolanaRpc(format!("Invalid transaction signature: {}", e)))?;

        debug!("Fetching transaction detail for signature: {}", signature);
        let config = RpcTransactionConfig {
            encoding: Some(UiTransactionEncoding::Base64),
            commitment: Some(CommitmentConfig::confirmed()),
            max_supported_transaction_version: Some(0),
        };

        let fetched = self
            .client
            .get_transaction_with_config(&sig, config)
            .map_err(|e| Error::SolanaRpc(format!("get_transaction failed: {}", e)))?;

        let meta = match fetched.transaction.meta {
            Some(meta) => meta,
            None => {
                debug!("Transaction {} has no metadata, skipping", signature);
                return Ok(None);
            }
        };

        let account_keys = match fetched.transaction.transaction.decode() {
            Some(decoded) => decoded
                .message
                .static_account_keys()
                .iter()
                .map(|key| key.to_string())
                .collect(),
            None => {
                debug!("Transaction {} could not be decoded, skipping", signature);
                return Ok(None);
            }
        };

        Ok(Some(TransactionRecord {
            pre_balances: meta.pre_balances,
            post_balances: meta.post_balances,
            account_keys,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_address_valid() {
        let client = SolanaChainClient::new("https://api.devnet.solana.com".to_string());
        let result = client.parse_address("11111111111111111111111111111111");
        assert!(result.is_ok());
    }

    #[test]
    fn test_parse_address_invalid() {
        let client = SolanaChainClient::new("https://api.devnet.solana.com".to_string());
        let result = client.parse_address("not_a_valid_address");
        assert!(result.is_err());

        if let Err(Error::InvalidWalletAddress(msg)) = result {
            assert!(msg.contains("Invalid Solana address format"));
        } else {
            panic!("Expected InvalidWalletAddress error");
        }
    }

    #[test]
    fn test_parse_address_empty() {
        let client = SolanaChainClient::new("https://api.devnet.solana.com".to_string());
        assert!(client.parse_address("").is_err());
    }
}
