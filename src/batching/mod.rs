//! Batching - verify many proof records, results re-associated by index

pub mod batch_verifier;

pub use batch_verifier::{BatchEntry, BatchReport, BatchVerifier};
