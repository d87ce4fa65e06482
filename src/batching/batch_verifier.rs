//! BatchVerifier - independent verification of many proof records

use crate::core::errors::{Result, VerifyError};
use crate::core::traits::Verifier;
use crate::core::types::VerificationResult;
use crate::record::ProofRecord;
use crate::utils::constants::MAX_BATCH_SIZE;
use crate::verifier::SignatureVerifier;

/// One record's outcome, tied back to its input position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    pub index: usize,
    pub identifier: String,
    pub outcome: Result<VerificationResult>,
}

impl BatchEntry {
    pub fn is_match(&self) -> bool {
        matches!(&self.outcome, Ok(result) if result.is_match())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub entries: Vec<BatchEntry>,
    pub matched: usize,
    pub mismatched: usize,
    pub failed: usize,
}

impl BatchReport {
    fn from_entries(entries: Vec<BatchEntry>) -> Self {
        let mut report = Self::default();
        for entry in &entries {
            match &entry.outcome {
                Ok(result) if result.is_match() => report.matched += 1,
                Ok(_) => report.mismatched += 1,
                Err(_) => report.failed += 1,
            }
        }
        report.entries = entries;
        report
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn all_matched(&self) -> bool {
        !self.entries.is_empty() && self.matched == self.entries.len()
    }
}

#[derive(Debug, Clone, Default)]
pub struct BatchVerifier<V: Verifier = SignatureVerifier> {
    verifier: V,
}

impl BatchVerifier<SignatureVerifier> {
    pub fn new() -> Self {
        Self::with_verifier(SignatureVerifier::new())
    }
}

impl<V: Verifier> BatchVerifier<V> {
    pub fn with_verifier(verifier: V) -> Self {
        Self { verifier }
    }

    pub fn inner_verifier(&self) -> &V {
        &self.verifier
    }

    fn check_size(records: &[ProofRecord]) -> Result<()> {
        if records.is_empty() {
            return Err(VerifyError::BatchError {
                reason: "Batch is empty".into(),
            });
        }
        if records.len() > MAX_BATCH_SIZE {
            return Err(VerifyError::BatchError {
                reason: format!(
                    "Batch too large: {} > {}",
                    records.len(),
                    MAX_BATCH_SIZE
                ),
            });
        }
        Ok(())
    }

    fn entry(&self, index: usize, record: &ProofRecord) -> BatchEntry {
        let outcome = self.verifier.verify_record(record);
        match &outcome {
            Ok(result) if !result.is_match() => tracing::warn!(
                index,
                identifier = %record.identifier,
                derived = %result.derived,
                claimed = %result.claimed,
                "witness signature does not match"
            ),
            Err(e) => tracing::warn!(
                index,
                identifier = %record.identifier,
                error = %e,
                "proof record could not be verified"
            ),
            Ok(_) => {}
        }
        BatchEntry {
            index,
            identifier: record.identifier.clone(),
            outcome,
        }
    }
}

#[cfg(not(feature = "parallel"))]
impl<V: Verifier> BatchVerifier<V> {
    /// Entries come back in input order.
    pub fn verify_batch(&self, records: &[ProofRecord]) -> Result<BatchReport> {
        Self::check_size(records)?;

        let entries = records
            .iter()
            .enumerate()
            .map(|(index, record)| self.entry(index, record))
            .collect();
        Ok(BatchReport::from_entries(entries))
    }
}

#[cfg(feature = "parallel")]
impl<V: Verifier + Sync> BatchVerifier<V> {
    /// Entries come back in input order regardless of completion order.
    pub fn verify_batch(&self, records: &[ProofRecord]) -> Result<BatchReport> {
        use rayon::prelude::*;

        Self::check_size(records)?;

        let entries = records
            .par_iter()
            .enumerate()
            .map(|(index, record)| self.entry(index, record))
            .collect();
        Ok(BatchReport::from_entries(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{ClaimRecord, WitnessIdentity};
    use crate::signature::ClaimSigner;

    fn signer(seed: u8) -> ClaimSigner {
        ClaimSigner::from_hex(&format!("{:064x}", seed as u64 + 1)).unwrap()
    }

    fn signed_record(signer: &ClaimSigner, identifier: &str) -> ProofRecord {
        let claim = ClaimRecord::new(identifier, "0xowner", 1_700_000_000, 3);
        let mut record = ProofRecord {
            identifier: identifier.into(),
            signatures: vec![signer.sign_claim(&claim).unwrap().to_hex()],
            witnesses: vec![WitnessIdentity::new(signer.address().to_hex(), "wss://w")],
            ..Default::default()
        };
        record.claim_data.owner = claim.owner;
        record.claim_data.timestamp_s = claim.timestamp_s;
        record.claim_data.epoch = claim.epoch;
        record
    }

    #[test]
    fn test_batch_all_match() {
        let records: Vec<_> = (0..4)
            .map(|i| signed_record(&signer(i), &format!("0x{:02x}", i)))
            .collect();

        let report = BatchVerifier::new().verify_batch(&records).unwrap();
        assert_eq!(report.len(), 4);
        assert_eq!(report.matched, 4);
        assert!(report.all_matched());
        for (i, entry) in report.entries.iter().enumerate() {
            assert_eq!(entry.index, i);
            assert_eq!(entry.identifier, format!("0x{:02x}", i));
        }
    }

    #[test]
    fn test_batch_mixed_outcomes() {
        let good = signed_record(&signer(1), "0x01");

        let mut wrong_witness = signed_record(&signer(2), "0x02");
        wrong_witness.witnesses[0].id = signer(3).address().to_hex();

        let mut malformed = signed_record(&signer(4), "0x04");
        malformed.signatures[0].truncate(100);

        let report = BatchVerifier::new()
            .verify_batch(&[good, wrong_witness, malformed])
            .unwrap();
        assert_eq!((report.matched, report.mismatched, report.failed), (1, 1, 1));
        assert!(!report.all_matched());
        assert!(report.entries[0].is_match());
        assert!(!report.entries[1].is_match());
        assert!(report.entries[2].outcome.as_ref().unwrap_err().is_malformed());
    }

    #[test]
    fn test_batch_empty_is_error() {
        let err = BatchVerifier::new().verify_batch(&[]).unwrap_err();
        assert!(matches!(err, VerifyError::BatchError { .. }));
    }

    #[test]
    fn test_batch_too_large_is_error() {
        let records = vec![ProofRecord::default(); MAX_BATCH_SIZE + 1];
        assert!(BatchVerifier::new().verify_batch(&records).is_err());
    }
}
