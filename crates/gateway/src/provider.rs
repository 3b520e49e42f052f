use async_trait::async_trait;
use shared::models::TransferRequest;
use shared::Result;

use crate::types::{PoolBalance, ProviderReceipt};

/// Resolution of an optional provider capability.
///
/// Providers ship capabilities piecemeal across SDK versions, so absence is
/// an expected condition the caller must handle, not a bug. Resolving a
/// capability never performs I/O; only invoking the returned handle does.
#[derive(Debug, Clone, Copy)]
pub enum Capability<T> {
    Available(T),
    Unavailable,
}

impl<T> Capability<T> {
    pub fn is_available(&self) -> bool {
        matches!(self, Capability::Available(_))
    }

    pub fn available(self) -> Option<T> {
        match self {
            Capability::Available(handle) => Some(handle),
            Capability::Unavailable => None,
        }
    }
}

/// Registers a wallet as a privacy-pool recipient.
#[async_trait]
pub trait RegisterCapability: Send + Sync {
    async fn register(&self, address: &str) -> Result<ProviderReceipt>;
}

/// Moves native funds from a public wallet into the privacy pool.
#[async_trait]
pub trait DepositCapability: Send + Sync {
    async fn deposit(&self, address: &str, lamports: u64) -> Result<ProviderReceipt>;
}

/// Moves pool funds back out to a public wallet.
#[async_trait]
pub trait WithdrawCapability: Send + Sync {
    async fn withdraw(&self, address: &str, lamports: u64) -> Result<ProviderReceipt>;
}

/// Queries the shielded balance held by the pool for a wallet.
#[async_trait]
pub trait PoolBalanceCapability: Send + Sync {
    async fn pool_balance(&self, address: &str) -> Result<PoolBalance>;
}

/// Executes a private transfer inside the pool.
#[async_trait]
pub trait TransferCapability: Send + Sync {
    async fn transfer(&self, request: &TransferRequest) -> Result<ProviderReceipt>;
}

/// The external private-transfer SDK, modeled as a set of optional
/// capabilities. Every resolver defaults to [`Capability::Unavailable`] so a
/// provider binding only declares what its SDK version actually supports.
pub trait PrivacyProvider: Send + Sync {
    fn register(&self) -> Capability<&dyn RegisterCapability> {
        Capability::Unavailable
    }

    fn deposit(&self) -> Capability<&dyn DepositCapability> {
        Capability::Unavailable
    }

    fn withdraw(&self) -> Capability<&dyn WithdrawCapability> {
        Capability::Unavailable
    }

    fn pool_balance(&self) -> Capability<&dyn PoolBalanceCapability> {
        Capability::Unavailable
    }

    fn transfer(&self) -> Capability<&dyn TransferCapability> {
        Capability::Unavailable
    }
}

/// Provider binding for deployments without the SDK installed. Every
/// capability resolves to `Unavailable`, which routes balance queries to the
/// public chain and turns pool operations into actionable errors.
pub struct NullProvider;

impl PrivacyProvider for NullProvider {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_provider_has_no_capabilities() {
        let provider = NullProvider;
        assert!(!provider.register().is_available());
        assert!(!provider.deposit().is_available());
        assert!(!provider.withdraw().is_available());
        assert!(!provider.pool_balance().is_available());
        assert!(!provider.transfer().is_available());
    }

    #[test]
    fn test_capability_available() {
        let capability: Capability<u32> = Capability::Available(7);
        assert!(capability.is_available());
        assert_eq!(capability.available(), Some(7));

        let missing: Capability<u32> = Capability::Unavailable;
        assert!(!missing.is_available());
        assert_eq!(missing.available(), None);
    }
}
