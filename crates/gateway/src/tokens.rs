use shared::models::TokenInfo;

/// Tokens the wallet can display and transfer.
pub const SUPPORTED_TOKENS: &[TokenInfo] = &[
    TokenInfo {
        symbol: "SOL",
        name: "Solana",
        decimals: 9,
        icon: "https://raw.githubusercontent.com/solana-labs/token-list/main/assets/mainnet/So11111111111111111111111111111111111111112/logo.png",
    },
    TokenInfo {
        symbol: "RADR",
        name: "RADR Coin",
        decimals: 9,
        icon: "https://www.radrlabs.io/icons/radricon.jpg",
    },
    TokenInfo {
        symbol: "WLFI",
        name: "WLFI",
        decimals: 6,
        icon: "https://www.radrlabs.io/icons/wlfi.png",
    },
    TokenInfo {
        symbol: "USDC",
        name: "USD Coin",
        decimals: 6,
        icon: "https://raw.githubusercontent.com/solana-labs/token-list/main/assets/mainnet/EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v/logo.png",
    },
    TokenInfo {
        symbol: "USDT",
        name: "Tether USD",
        decimals: 6,
        icon: "https://raw.githubusercontent.com/solana-labs/token-list/main/assets/mainnet/Es9vMFrzaCERmJfrF4H2FYD4KCoNkY11McCe8BenwNYB/logo.svg",
    },
];

pub fn supported_tokens() -> &'static [TokenInfo] {
    SUPPORTED_TOKENS
}

/// Formats a raw token amount for display. Nine-decimal tokens get four
/// fraction digits, everything else two.
pub fn format_transfer_amount(raw: u64, decimals: u8) -> String {
    let value = raw as f64 / 10f64.powi(decimals as i32);
    if decimals == 9 {
        format!("{:.4}", value)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_tokens_contains_native() {
        let sol = supported_tokens()
            .iter()
            .find(|token| token.symbol == "SOL")
            .expect("SOL must be supported");
        assert_eq!(sol.decimals, 9);
    }

    #[test]
    fn test_format_transfer_amount_nine_decimals() {
        assert_eq!(format_transfer_amount(1_500_000_000, 9), "1.5000");
        assert_eq!(format_transfer_amount(0, 9), "0.0000");
    }

    #[test]
    fn test_format_transfer_amount_six_decimals() {
        assert_eq!(format_transfer_amount(2_500_000, 6), "2.50");
    }
}
