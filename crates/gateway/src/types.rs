use serde::{Deserialize, Serialize};

/// A signature listing entry as returned by the chain, most-recent-first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureRecord {
    pub signature: String,
    pub block_time: Option<i64>,
    /// Error string when the transaction failed on-chain
    pub err: Option<String>,
}

/// The slice of a fetched transaction the history view needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub pre_balances: Vec<u64>,
    pub post_balances: Vec<u64>,
    pub account_keys: Vec<String>,
}

/// On-chain account summary for recipient lookups.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AccountRecord {
    pub lamports: u64,
}

/// Privacy-pool balance in lamports, as reported by the provider.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PoolBalance {
    pub available_lamports: u64,
    pub locked_lamports: u64,
}

/// Raw provider acknowledgement. Providers name the transaction id field
/// inconsistently, so both spellings are carried and normalized later.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderReceipt {
    pub signature: Option<String>,
    pub tx_id: Option<String>,
}

impl ProviderReceipt {
    /// The transaction id under either name, preferring `signature`.
    pub fn transaction_id(&self) -> Option<String> {
        self.signature.clone().or_else(|| self.tx_id.clone())
    }
}
