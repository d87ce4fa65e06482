//! Fuzz target for proof record JSON
//! Tests: ProofRecord::from_json_str(), ProofValidator::violations(), verify_proof()
//! Goal: hostile JSON is rejected with an error, never a panic

#![no_main]

use libfuzzer_sys::fuzz_target;
use zkfetch_verify::validation::FixedClock;
use zkfetch_verify::{ProofRecord, ProofValidator, SignatureVerifier, ValidationPolicy};

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(record) = ProofRecord::from_json_str(json) else {
        return;
    };

    if let Ok(validator) =
        ProofValidator::with_clock(ValidationPolicy::default(), FixedClock(1_735_996_100))
    {
        let _ = validator.violations(&record);
    }
    let _ = SignatureVerifier::new().verify_proof(&record);

    if let Ok(out) = record.to_json_pretty() {
        let again = ProofRecord::from_json_str(&out).unwrap();
        assert_eq!(again, record);
    }
});
