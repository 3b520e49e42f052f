use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Privacy provider capability not available: {0}")]
    CapabilityUnavailable(String),

    #[error("Insufficient balance: {available:.4} {token} available")]
    InsufficientBalance { available: f64, token: String },

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Solana RPC error: {0}")]
    SolanaRpc(String),

    #[error("Invalid wallet address: {0}")]
    InvalidWalletAddress(String),
}

pub type Result<T> = std::result::Result<T, Error>;
