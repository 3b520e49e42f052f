use serde::{Deserialize, Serialize};

/// Wallet balance as seen by the privacy pool, in whole SOL units.
///
/// Recomputed on every query; nothing here is cached. `total` is always
/// `available + locked`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSnapshot {
    pub available: f64,
    pub locked: f64,
    pub total: f64,
}

impl BalanceSnapshot {
    pub fn new(available: f64, locked: f64) -> Self {
        Self {
            available,
            locked,
            total: available + locked,
        }
    }
}

/// Whether a transfer stays inside the privacy pool or exits to a public
/// wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferKind {
    Internal,
    External,
}

impl Default for TransferKind {
    fn default() -> Self {
        TransferKind::Internal
    }
}

/// A private-transfer request, constructed by the calling UI flow and
/// immutable once submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferRequest {
    pub sender: String,
    pub recipient: String,
    pub amount: f64,
    #[serde(default = "default_token")]
    pub token: String,
    #[serde(default)]
    pub kind: TransferKind,
    #[serde(default)]
    pub memo: String,
}

fn default_token() -> String {
    "SOL".to_string()
}

impl TransferRequest {
    pub fn new(sender: impl Into<String>, recipient: impl Into<String>, amount: f64) -> Self {
        Self {
            sender: sender.into(),
            recipient: recipient.into(),
            amount,
            token: default_token(),
            kind: TransferKind::default(),
            memo: String::new(),
        }
    }
}

/// Outcome of a submitted transfer. Produced once per request, never
/// mutated. `signature` and `tx_id` always carry the same value; both are
/// kept because downstream consumers read one or the other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferResult {
    pub success: bool,
    pub signature: String,
    pub tx_id: String,
    pub timestamp_ms: i64,
}

/// Outcome of a privacy-pool movement (register, deposit, withdraw).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolReceipt {
    pub success: bool,
    pub signature: String,
    pub amount: f64,
    pub timestamp_ms: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Send,
    Receive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    Success,
    Failed,
}

/// One public-chain transaction as shown in the wallet history view.
/// Reconstructed from chain queries on every call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub signature: String,
    pub direction: Direction,
    pub amount: f64,
    pub token: String,
    pub from: String,
    pub to: String,
    pub timestamp_ms: i64,
    pub status: TxStatus,
    pub is_private: bool,
}

/// Result of a recipient lookup. This is plain data, never an error path:
/// lookups that fail report through the `error` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipientStatus {
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    pub needs_activation: bool,
}

impl RecipientStatus {
    pub fn found(balance: f64) -> Self {
        Self {
            exists: true,
            balance: Some(balance),
            error: None,
            needs_activation: false,
        }
    }

    pub fn unfunded() -> Self {
        Self {
            exists: false,
            balance: None,
            error: Some("Wallet does not exist on chain".to_string()),
            needs_activation: true,
        }
    }

    pub fn invalid(reason: impl Into<String>) -> Self {
        Self {
            exists: false,
            balance: None,
            error: Some(reason.into()),
            needs_activation: false,
        }
    }
}

/// Static metadata for a token the wallet can display.
#[derive(Debug, Clone, Serialize)]
pub struct TokenInfo {
    pub symbol: &'static str,
    pub name: &'static str,
    pub decimals: u8,
    pub icon: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_snapshot_total_invariant() {
        let snapshot = BalanceSnapshot::new(2.5, 1.5);
        assert_eq!(snapshot.total, 4.0);
        assert_eq!(snapshot.available, 2.5);
        assert_eq!(snapshot.locked, 1.5);
    }

    #[test]
    fn test_transfer_request_defaults() {
        let request = TransferRequest::new("sender", "recipient", 1.0);
        assert_eq!(request.token, "SOL");
        assert_eq!(request.kind, TransferKind::Internal);
        assert!(request.memo.is_empty());
    }

    #[test]
    fn test_recipient_status_serializes_without_empty_fields() {
        let status = RecipientStatus::found(0.5);
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["exists"], true);
        assert_eq!(json["balance"], 0.5);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_recipient_status_unfunded() {
        let status = RecipientStatus::unfunded();
        assert!(!status.exists);
        assert!(status.needs_activation);
    }
}
