//! # Verify Proof Example
//!
//! Loads a proof record JSON, validates its fields and checks the witness signature.
//!
//! ```text
//! RUST_LOG=debug cargo run --example verify_proof -- tests/fixtures/proof.json
//! ```

use zkfetch_verify::{ProofRecord, ProofValidator, SignatureVerifier, ValidationPolicy};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tests/fixtures/proof.json".to_string());

    println!("=== zkFetch Proof Verification ===\n");

    // 1. Load record
    println!("1. Loading {}...", path);
    let record = ProofRecord::from_file(&path)?;
    println!("   Identifier: {}", record.identifier);
    println!("   Owner: {}", record.claim_data.owner);
    println!("   Timestamp: {}", record.claim_data.timestamp_s);
    println!("   Epoch: {}", record.claim_data.epoch);

    // 2. Field validation
    println!("\n2. Validating fields...");
    let validator = ProofValidator::new(ValidationPolicy::default())?;
    let violations = validator.violations(&record)?;
    if violations.is_empty() {
        println!("   All checks passed");
    } else {
        for violation in &violations {
            println!("   {}", violation);
        }
    }

    // 3. Signature
    println!("\n3. Verifying witness signature...");
    let result = SignatureVerifier::new().verify_proof(&record)?;
    println!("   Recovered: {}", result.derived);
    println!("   Claimed:   {}", result.claimed);

    if result.is_match() {
        println!("   Signature is valid!");
    } else {
        println!("   Signature does not belong to the witness!");
    }

    Ok(())
}
