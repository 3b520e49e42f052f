// Property-based tests for address validation: the check is length-only
// and independent of character content.

use gateway::TransferGateway;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_accepts_any_content_with_valid_length(
        len in 32usize..=44usize,
        ch in any::<char>().prop_filter("single-byte", |c| c.is_ascii_graphic()),
    ) {
        let address: String = std::iter::repeat(ch).take(len).collect();
        prop_assert!(TransferGateway::validate_address(&address));
    }

    #[test]
    fn prop_rejects_short_addresses(len in 0usize..32usize) {
        let address = "x".repeat(len);
        prop_assert!(!TransferGateway::validate_address(&address));
    }

    #[test]
    fn prop_rejects_long_addresses(len in 45usize..128usize) {
        let address = "x".repeat(len);
        prop_assert!(!TransferGateway::validate_address(&address));
    }

    #[test]
    fn prop_validity_depends_only_on_length(address in "[A-HJ-NP-Za-km-z1-9]{20,60}") {
        let expected = (32..=44).contains(&address.len());
        prop_assert_eq!(TransferGateway::validate_address(&address), expected);
    }
}
