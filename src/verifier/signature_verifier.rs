//! SignatureVerifier - witness signature check over a claim's canonical message

use crate::core::errors::Result;
use crate::core::traits::Verifier;
use crate::core::types::{Address, ClaimRecord, VerificationResult};
use crate::record::ProofRecord;
use crate::signature::envelope::SignatureEnvelope;
use crate::signature::recovery;
use crate::utils::hash::hash_personal_message;

/// Stateless; a single value can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignatureVerifier;

impl SignatureVerifier {
    pub fn new() -> Self {
        Self
    }

    /// Address that produced `signature_hex` over `claim`.
    pub fn recover_address(&self, claim: &ClaimRecord, signature_hex: &str) -> Result<Address> {
        claim.check()?;
        let envelope = SignatureEnvelope::parse(signature_hex)?;

        let message = claim.canonical_message();
        let digest = hash_personal_message(message.as_bytes());
        recovery::recover_address(&digest, &envelope)
    }

    /// `Ok` with `is_match() == false` means the signature is valid but was
    /// made by someone else. Malformed and unrecoverable signatures are `Err`.
    pub fn verify(
        &self,
        claim: &ClaimRecord,
        signature_hex: &str,
        claimed_address: &str,
    ) -> Result<VerificationResult> {
        let claimed: Address = claimed_address.parse()?;
        let derived = self.recover_address(claim, signature_hex)?;
        let result = VerificationResult::new(derived, claimed);

        tracing::debug!(
            identifier = %claim.identifier,
            derived = %derived,
            claimed = %claimed,
            matched = result.is_match(),
            "verified witness signature"
        );
        Ok(result)
    }

    /// Checks `signatures[0]` against `witnesses[0].id`.
    pub fn verify_proof(&self, record: &ProofRecord) -> Result<VerificationResult> {
        let signature = record.primary_signature()?;
        let witness = record.primary_witness()?;
        self.verify(&record.claim(), signature, &witness.id)
    }
}

impl Verifier for SignatureVerifier {
    fn verify_record(&self, record: &ProofRecord) -> Result<VerificationResult> {
        self.verify_proof(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::VerifyError;
    use crate::core::types::WitnessIdentity;
    use crate::signature::ClaimSigner;

    fn signer() -> ClaimSigner {
        ClaimSigner::from_hex("0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318")
            .unwrap()
    }

    fn claim() -> ClaimRecord {
        ClaimRecord::new(
            "0xabc123",
            "0x96faf173bb7171a530b3e44f35f32d1307bda4fa",
            1_700_000_000,
            5,
        )
    }

    #[test]
    fn test_verify_match() {
        let signer = signer();
        let sig = signer.sign_claim(&claim()).unwrap().to_hex();

        let result = SignatureVerifier::new()
            .verify(&claim(), &sig, &signer.address().to_hex())
            .unwrap();
        assert!(result.is_match());
        assert_eq!(result.derived, signer.address());
    }

    #[test]
    fn test_verify_mismatch_is_not_an_error() {
        let sig = signer().sign_claim(&claim()).unwrap().to_hex();

        let result = SignatureVerifier::new()
            .verify(&claim(), &sig, "0x0000000000000000000000000000000000000001")
            .unwrap();
        assert!(!result.is_match());
    }

    #[test]
    fn test_verify_altered_claim_does_not_match() {
        let signer = signer();
        let sig = signer.sign_claim(&claim()).unwrap().to_hex();

        let mut altered = claim();
        altered.epoch = 6;
        let result = SignatureVerifier::new()
            .verify(&altered, &sig, &signer.address().to_hex())
            .unwrap();
        assert!(!result.is_match());
    }

    #[test]
    fn test_verify_rejects_bad_claimed_address() {
        let sig = signer().sign_claim(&claim()).unwrap().to_hex();
        let err = SignatureVerifier::new()
            .verify(&claim(), &sig, "0x1234")
            .unwrap_err();
        assert!(matches!(err, VerifyError::InvalidAddress { .. }));
    }

    #[test]
    fn test_verify_proof_uses_first_signature_and_witness() {
        let signer = signer();
        let claim = claim();
        let mut record = ProofRecord {
            identifier: claim.identifier.clone(),
            ..Default::default()
        };
        record.claim_data.owner = claim.owner.clone();
        record.claim_data.timestamp_s = claim.timestamp_s;
        record.claim_data.epoch = claim.epoch;
        record.signatures = vec![signer.sign_claim(&claim).unwrap().to_hex(), "junk".into()];
        record.witnesses = vec![
            WitnessIdentity::new(signer.address().to_hex(), "wss://a"),
            WitnessIdentity::new("0x0000000000000000000000000000000000000001", "wss://b"),
        ];

        assert!(SignatureVerifier::new().verify_record(&record).unwrap().is_match());

        record.signatures.clear();
        assert!(matches!(
            SignatureVerifier::new().verify_proof(&record),
            Err(VerifyError::InvalidRecord { .. })
        ));
    }
}
