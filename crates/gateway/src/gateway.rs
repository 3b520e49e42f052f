use chrono::Utc;
use futures::future::join_all;
use shared::models::{
    BalanceSnapshot, Direction, HistoryEntry, PoolReceipt, RecipientStatus, TransferRequest,
    TransferResult, TxStatus,
};
use shared::{Error, Result};
use solana_sdk::native_token::{sol_to_lamports, LAMPORTS_PER_SOL};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::chain::ChainClient;
use crate::provider::{Capability, PrivacyProvider};
use crate::types::ProviderReceipt;

fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}

/// Mediates every call from wallet UI flows to the privacy provider and the
/// public chain, normalizing results into typed outcomes.
///
/// Both collaborators are injected and caller-owned; the gateway holds no
/// other state, so concurrent calls share nothing. Error shapes are part of
/// the contract: balance and transfer operations raise typed errors,
/// [`TransferGateway::check_recipient`] reports failures as data, and
/// [`TransferGateway::transfer_history`] degrades to an empty list.
pub struct TransferGateway {
    chain: Arc<dyn ChainClient>,
    provider: Arc<dyn PrivacyProvider>,
}

impl TransferGateway {
    pub fn new(chain: Arc<dyn ChainClient>, provider: Arc<dyn PrivacyProvider>) -> Self {
        Self { chain, provider }
    }

    /// Syntactic address check: byte length in [32, 44]. Does not verify
    /// checksum, curve validity, or on-chain existence.
    pub fn validate_address(address: &str) -> bool {
        (32..=44).contains(&address.len())
    }

    /// Balance for `address`, privacy pool first.
    ///
    /// When the pool capability is missing or its call fails, falls back
    /// exactly once to the native chain balance, reported as fully available
    /// with nothing locked. The fallback's own failure is terminal.
    pub async fn get_balance(&self, address: &str) -> Result<BalanceSnapshot> {
        if let Capability::Available(pool) = self.provider.pool_balance() {
            match pool.pool_balance(address).await {
                Ok(balance) => {
                    return Ok(BalanceSnapshot::new(
                        lamports_to_sol(balance.available_lamports),
                        lamports_to_sol(balance.locked_lamports),
                    ));
                }
                Err(e) => {
                    warn!(
                        "Privacy pool balance fetch failed for {}, using chain balance: {}",
                        address, e
                    );
                }
            }
        } else {
            debug!("Pool balance capability unavailable, using chain balance");
        }

        let lamports = self.chain.get_balance(address).await.map_err(|e| {
            error!("Chain balance fallback failed for {}: {}", address, e);
            Error::Provider(e.to_string())
        })?;

        Ok(BalanceSnapshot::new(lamports_to_sol(lamports), 0.0))
    }

    /// Submits a private transfer.
    ///
    /// Fails with `Validation` on bad inputs, `CapabilityUnavailable` when
    /// the SDK does not support transfers, and `InsufficientBalance` before
    /// the provider is ever invoked when the sender cannot cover the amount.
    pub async fn submit_transfer(&self, request: &TransferRequest) -> Result<TransferResult> {
        // Written as a negated comparison so NaN fails validation too.
        if !(request.amount > 0.0) {
            return Err(Error::Validation(
                "transfer amount must be positive".to_string(),
            ));
        }
        if !Self::validate_address(&request.sender) {
            return Err(Error::Validation("sender address is malformed".to_string()));
        }
        if !Self::validate_address(&request.recipient) {
            return Err(Error::Validation(
                "recipient address is malformed".to_string(),
            ));
        }

        let transfer = match self.provider.transfer() {
            Capability::Available(handle) => handle,
            Capability::Unavailable => {
                warn!("Transfer capability missing; provider SDK not installed or configured");
                return Err(Error::CapabilityUnavailable(
                    "transfer is not supported by the configured privacy provider".to_string(),
                ));
            }
        };

        let balance = self.get_balance(&request.sender).await?;
        if request.amount > balance.available {
            info!(
                "Rejecting transfer of {} {}: only {} available",
                request.amount, request.token, balance.available
            );
            return Err(Error::InsufficientBalance {
                available: balance.available,
                token: request.token.clone(),
            });
        }

        let receipt = transfer
            .transfer(request)
            .await
            .map_err(classify_provider_error)?;

        let signature = require_transaction_id(&receipt)?;

        info!(
            "Private transfer of {} {} submitted: {}",
            request.amount, request.token, signature
        );
        Ok(TransferResult {
            success: true,
            tx_id: signature.clone(),
            signature,
            timestamp_ms: Utc::now().timestamp_millis(),
        })
    }

    /// Looks up whether a recipient exists on the public chain.
    ///
    /// Never errors: malformed addresses and chain failures are reported
    /// through the returned status object.
    pub async fn check_recipient(&self, address: &str) -> RecipientStatus {
        if !Self::validate_address(address) {
            return RecipientStatus::invalid("Invalid address format");
        }

        match self.chain.get_account_info(address).await {
            Ok(Some(account)) => RecipientStatus::found(lamports_to_sol(account.lamports)),
            Ok(None) => RecipientStatus::unfunded(),
            Err(e) => {
                warn!("Recipient lookup failed for {}: {}", address, e);
                RecipientStatus::invalid(e.to_string())
            }
        }
    }

    /// Recent public-chain transactions for `address`, most-recent-first.
    ///
    /// Never errors: a listing failure yields an empty list, and entries
    /// whose detail fetch fails or lacks metadata are dropped. Detail
    /// fetches run in parallel; output order follows the signature listing,
    /// not completion order. Everything returned here is public-chain data,
    /// so `is_private` is always false.
    pub async fn transfer_history(&self, address: &str, limit: usize) -> Vec<HistoryEntry> {
        let signatures = match self.chain.get_signatures_for_address(address, limit).await {
            Ok(signatures) => signatures,
            Err(e) => {
                warn!("Failed to list signatures for {}: {}", address, e);
                return Vec::new();
            }
        };

        let details = join_all(
            signatures
                .iter()
                .map(|record| self.chain.get_transaction(&record.signature)),
        )
        .await;

        signatures
            .into_iter()
            .zip(details)
            .filter_map(|(record, detail)| {
                let tx = match detail {
                    Ok(Some(tx)) => tx,
                    Ok(None) => return None,
                    Err(e) => {
                        debug!("Dropping history entry {}: {}", record.signature, e);
                        return None;
                    }
                };

                let pre = *tx.pre_balances.first()?;
                let post = *tx.post_balances.first()?;
                let delta = post as i128 - pre as i128;
                let direction = if delta > 0 {
                    Direction::Receive
                } else {
                    Direction::Send
                };

                Some(HistoryEntry {
                    signature: record.signature,
                    direction,
                    amount: lamports_to_sol(delta.unsigned_abs() as u64),
                    token: "SOL".to_string(),
                    from: tx
                        .account_keys
                        .first()
                        .cloned()
                        .unwrap_or_else(|| "Unknown".to_string()),
                    to: tx
                        .account_keys
                        .get(1)
                        .cloned()
                        .unwrap_or_else(|| "Unknown".to_string()),
                    timestamp_ms: record
                        .block_time
                        .map(|t| t * 1000)
                        .unwrap_or_else(|| Utc::now().timestamp_millis()),
                    status: if record.err.is_some() {
                        TxStatus::Failed
                    } else {
                        TxStatus::Success
                    },
                    is_private: false,
                })
            })
            .collect()
    }

    /// Registers `address` as a pool recipient. Required before the wallet
    /// can receive private transfers.
    pub async fn register_recipient(&self, address: &str) -> Result<PoolReceipt> {
        if !Self::validate_address(address) {
            return Err(Error::Validation("wallet address is malformed".to_string()));
        }

        let register = match self.provider.register() {
            Capability::Available(handle) => handle,
            Capability::Unavailable => {
                warn!("Register capability missing; provider SDK not installed or configured");
                return Err(Error::CapabilityUnavailable(
                    "recipient registration is not supported by the configured privacy provider"
                        .to_string(),
                ));
            }
        };

        let receipt = register
            .register(address)
            .await
            .map_err(classify_provider_error)?;

        finish_pool_movement(receipt, 0.0)
    }

    /// Moves `amount` SOL from the public wallet into the privacy pool.
    pub async fn deposit(&self, address: &str, amount: f64) -> Result<PoolReceipt> {
        if !(amount > 0.0) {
            return Err(Error::Validation(
                "deposit amount must be positive".to_string(),
            ));
        }
        if !Self::validate_address(address) {
            return Err(Error::Validation("wallet address is malformed".to_string()));
        }

        let deposit = match self.provider.deposit() {
            Capability::Available(handle) => handle,
            Capability::Unavailable => {
                warn!("Deposit capability missing; provider SDK not installed or configured");
                return Err(Error::CapabilityUnavailable(
                    "deposits are not supported by the configured privacy provider".to_string(),
                ));
            }
        };

        let receipt = deposit
            .deposit(address, sol_to_lamports(amount))
            .await
            .map_err(classify_provider_error)?;

        finish_pool_movement(receipt, amount)
    }

    /// Moves `amount` SOL from the privacy pool back to the public wallet.
    pub async fn withdraw(&self, address: &str, amount: f64) -> Result<PoolReceipt> {
        if !(amount > 0.0) {
            return Err(Error::Validation(
                "withdrawal amount must be positive".to_string(),
            ));
        }
        if !Self::validate_address(address) {
            return Err(Error::Validation("wallet address is malformed".to_string()));
        }

        let withdraw = match self.provider.withdraw() {
            Capability::Available(handle) => handle,
            Capability::Unavailable => {
                warn!("Withdraw capability missing; provider SDK not installed or configured");
                return Err(Error::CapabilityUnavailable(
                    "withdrawals are not supported by the configured privacy provider".to_string(),
                ));
            }
        };

        let receipt = withdraw
            .withdraw(address, sol_to_lamports(amount))
            .await
            .map_err(classify_provider_error)?;

        finish_pool_movement(receipt, amount)
    }
}

/// Missing-capability errors surfaced by the capability call itself pass
/// through; everything else is opaque provider failure.
fn classify_provider_error(e: Error) -> Error {
    match e {
        Error::CapabilityUnavailable(_) => e,
        other => {
            error!("Provider call failed: {}", other);
            Error::Provider(other.to_string())
        }
    }
}

fn require_transaction_id(receipt: &ProviderReceipt) -> Result<String> {
    receipt.transaction_id().ok_or_else(|| {
        error!("Provider returned a receipt without a transaction id");
        Error::Provider("provider returned no transaction id".to_string())
    })
}

fn finish_pool_movement(receipt: ProviderReceipt, amount: f64) -> Result<PoolReceipt> {
    let signature = require_transaction_id(&receipt)?;
    Ok(PoolReceipt {
        success: true,
        signature,
        amount,
        timestamp_ms: Utc::now().timestamp_millis(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_address_length_bounds() {
        assert!(!TransferGateway::validate_address(""));
        assert!(!TransferGateway::validate_address("short"));
        assert!(!TransferGateway::validate_address(&"a".repeat(31)));
        assert!(TransferGateway::validate_address(&"a".repeat(32)));
        assert!(TransferGateway::validate_address(&"a".repeat(44)));
        assert!(!TransferGateway::validate_address(&"a".repeat(45)));
    }

    #[test]
    fn test_validate_address_is_content_independent() {
        // The check is length-only; characters that could never appear in a
        // base58 address are still accepted.
        assert!(TransferGateway::validate_address(&"!".repeat(40)));
    }

    #[test]
    fn test_lamports_to_sol() {
        assert_eq!(lamports_to_sol(LAMPORTS_PER_SOL), 1.0);
        assert_eq!(lamports_to_sol(LAMPORTS_PER_SOL / 2), 0.5);
        assert_eq!(lamports_to_sol(0), 0.0);
    }

    #[test]
    fn test_require_transaction_id_prefers_signature() {
        let receipt = ProviderReceipt {
            signature: Some("sig".to_string()),
            tx_id: Some("tx".to_string()),
        };
        assert_eq!(require_transaction_id(&receipt).unwrap(), "sig");

        let tx_only = ProviderReceipt {
            signature: None,
            tx_id: Some("tx".to_string()),
        };
        assert_eq!(require_transaction_id(&tx_only).unwrap(), "tx");

        let empty = ProviderReceipt::default();
        assert!(require_transaction_id(&empty).is_err());
    }
}
