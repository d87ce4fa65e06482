//! Core traits: Verifier, Clock

use crate::core::errors::Result;
use crate::core::types::VerificationResult;
use crate::record::ProofRecord;

/// Verifies a complete proof record against its primary witness.
pub trait Verifier {
    fn verify_record(&self, record: &ProofRecord) -> Result<VerificationResult>;

    /// One result per record, in input order. Failures stay per-record.
    fn verify_records(&self, records: &[ProofRecord]) -> Vec<Result<VerificationResult>> {
        records.iter().map(|record| self.verify_record(record)).collect()
    }
}

/// Source of the current UNIX time, in seconds.
pub trait Clock {
    fn now_secs(&self) -> Result<u64>;
}
