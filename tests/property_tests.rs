//! Property-based tests using proptest
//!
//! - Round trip: any key signing any claim recovers to its own address
//! - Binding: a different claimed address never matches
//! - Envelope parsing accepts only 0x1b/0x1c suffixes and 132-char inputs

use proptest::prelude::*;
use zkfetch_verify::{
    Address, ClaimRecord, ClaimSigner, RecoveryBit, SignatureEnvelope, SignatureVerifier,
};

fn signer_from(mut secret: [u8; 32]) -> ClaimSigner {
    // Stay below the group order and away from zero.
    secret[0] &= 0x7f;
    secret[31] |= 1;
    ClaimSigner::from_hex(&hex::encode(secret)).unwrap()
}

fn claim_strategy() -> impl Strategy<Value = ClaimRecord> {
    (
        "0x[0-9a-f]{1,64}",
        "0x[0-9a-fA-F]{40}",
        1u64..4_000_000_000u64,
        1u64..10_000u64,
    )
        .prop_map(|(identifier, owner, ts, epoch)| ClaimRecord::new(identifier, owner, ts, epoch))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_sign_then_verify_matches(
        secret in any::<[u8; 32]>(),
        claim in claim_strategy(),
    ) {
        let signer = signer_from(secret);
        let signature = signer.sign_claim(&claim).unwrap().to_hex();

        let verifier = SignatureVerifier::new();
        let result = verifier
            .verify(&claim, &signature, &signer.address().to_hex())
            .unwrap();
        prop_assert!(result.is_match());

        let again = verifier.recover_address(&claim, &signature).unwrap();
        prop_assert_eq!(again, signer.address());
    }

    #[test]
    fn prop_other_address_never_matches(
        secret in any::<[u8; 32]>(),
        other in any::<[u8; 20]>(),
        claim in claim_strategy(),
    ) {
        let signer = signer_from(secret);
        let other = Address::from_bytes(other);
        prop_assume!(other != signer.address());

        let signature = signer.sign_claim(&claim).unwrap().to_hex();
        let result = SignatureVerifier::new()
            .verify(&claim, &signature, &other.to_hex())
            .unwrap();
        prop_assert!(!result.is_match());
    }

    #[test]
    fn prop_claimed_address_case_insensitive(
        secret in any::<[u8; 32]>(),
        claim in claim_strategy(),
    ) {
        let signer = signer_from(secret);
        let signature = signer.sign_claim(&claim).unwrap().to_hex();
        let upper = format!("0x{}", signer.address().to_hex()[2..].to_uppercase());

        let result = SignatureVerifier::new().verify(&claim, &signature, &upper).unwrap();
        prop_assert!(result.is_match());
    }

    #[test]
    fn prop_recovery_suffix(compact in any::<[u8; 32]>(), suffix in any::<u8>()) {
        let hex = format!("0x{}{:02x}", hex::encode([compact, compact].concat()), suffix);
        let parsed = SignatureEnvelope::parse(&hex);

        match suffix {
            0x1b => prop_assert_eq!(parsed.unwrap().recovery(), RecoveryBit::Even),
            0x1c => prop_assert_eq!(parsed.unwrap().recovery(), RecoveryBit::Odd),
            _ => prop_assert!(parsed.unwrap_err().is_malformed()),
        }
    }

    #[test]
    fn prop_wrong_length_is_malformed(body in "[0-9a-f]{0,200}") {
        prop_assume!(body.len() != 130);
        let err = SignatureEnvelope::parse(&format!("0x{}", body)).unwrap_err();
        prop_assert!(err.is_malformed());
    }

    #[test]
    fn prop_parse_never_panics(input in "\\PC{0,160}") {
        let _ = SignatureEnvelope::parse(&input);
        let _ = input.parse::<Address>();
    }
}
