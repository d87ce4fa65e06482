//! Fuzz target for signature envelope parsing and recovery
//! Tests: SignatureEnvelope::parse(), SignatureVerifier::verify()
//! Goal: arbitrary strings never panic; outcomes stay in the three expected shapes

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use zkfetch_verify::{ClaimRecord, SignatureEnvelope, SignatureVerifier};

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    signature: String,
    compact: [u8; 64],
    suffix: u8,
    identifier: String,
    owner: String,
    timestamp_s: u64,
    epoch: u64,
}

fuzz_target!(|input: FuzzInput| {
    if let Ok(envelope) = SignatureEnvelope::parse(&input.signature) {
        // Anything that parses must re-encode to the same bytes.
        let reparsed = SignatureEnvelope::parse(&envelope.to_hex()).unwrap();
        assert_eq!(reparsed, envelope);
    }

    let claim = ClaimRecord::new(input.identifier, input.owner, input.timestamp_s, input.epoch);
    let well_formed = format!("0x{}{:02x}", hex::encode(input.compact), input.suffix);

    let verifier = SignatureVerifier::new();
    let _ = verifier.verify(&claim, &input.signature, "0x7e5f4552091a69125d5dfcb7b8c2659029395bdf");
    match verifier.recover_address(&claim, &well_formed) {
        Ok(_) => assert!(input.suffix == 0x1b || input.suffix == 0x1c),
        Err(e) => assert!(e.is_malformed() || e.is_invalid_signature() || claim.check().is_err()),
    }
});
