//! Proof records - the JSON attestation shape and its parameters payload

pub mod parameters;
pub mod proof_record;

pub use parameters::ClaimParameters;
pub use proof_record::{ClaimData, ProofRecord};
