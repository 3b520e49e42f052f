pub mod chain;
pub mod gateway;
pub mod provider;
pub mod tokens;
pub mod types;

pub use chain::{ChainClient, SolanaChainClient};
pub use gateway::TransferGateway;
pub use provider::{
    Capability, DepositCapability, NullProvider, PoolBalanceCapability, PrivacyProvider,
    RegisterCapability, TransferCapability, WithdrawCapability,
};
pub use tokens::{format_transfer_amount, supported_tokens};
pub use types::*;
