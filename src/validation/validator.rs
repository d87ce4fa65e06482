//! ProofValidator - record field checks, run separately from signature verification

use crate::core::errors::{Result, VerifyError};
use crate::core::traits::Clock;
use crate::record::{ClaimParameters, ProofRecord};
use crate::validation::clock::SystemClock;
use crate::validation::fields::{
    is_valid_epoch, is_valid_ethereum_address, is_valid_positive_number, is_valid_timestamp,
    is_valid_url,
};
use crate::validation::policy::ValidationPolicy;

#[derive(Debug, Clone)]
pub struct ProofValidator<C: Clock = SystemClock> {
    policy: ValidationPolicy,
    clock: C,
}

impl ProofValidator<SystemClock> {
    pub fn new(policy: ValidationPolicy) -> Result<Self> {
        Self::with_clock(policy, SystemClock)
    }
}

impl<C: Clock> ProofValidator<C> {
    pub fn with_clock(policy: ValidationPolicy, clock: C) -> Result<Self> {
        policy.validate()?;
        Ok(Self { policy, clock })
    }

    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    /// First failing rule, if any.
    pub fn validate(&self, record: &ProofRecord) -> Result<()> {
        match self.violations(record)?.into_iter().next() {
            Some(violation) => Err(violation),
            None => Ok(()),
        }
    }

    /// Every failing rule, in check order. `Err` only if the clock fails.
    pub fn violations(&self, record: &ProofRecord) -> Result<Vec<VerifyError>> {
        let now = self.clock.now_secs()?;
        let mut out = Vec::new();

        if let Err(e) = record.check_structure() {
            out.push(e);
        }

        if !is_valid_epoch(record.claim_data.epoch) {
            out.push(VerifyError::policy(
                "claimData.epoch",
                "epoch must be a positive integer",
            ));
        }

        if !is_valid_timestamp(
            record.claim_data.timestamp_s,
            now,
            self.policy.timestamp_tolerance_secs,
        ) {
            out.push(VerifyError::policy(
                "claimData.timestampS",
                format!(
                    "timestamp {} is zero or more than {}s past {}",
                    record.claim_data.timestamp_s, self.policy.timestamp_tolerance_secs, now
                ),
            ));
        }

        if !self.policy.allows_provider(&record.claim_data.provider) {
            out.push(VerifyError::policy(
                "claimData.provider",
                format!(
                    "provider {:?} is not one of {:?}",
                    record.claim_data.provider, self.policy.allowed_providers
                ),
            ));
        }

        match ClaimParameters::parse(&record.claim_data.parameters) {
            Ok(params) if !is_valid_url(&params.url) => out.push(VerifyError::policy(
                "claimData.parameters",
                format!("url {:?} is not an absolute URL", params.url),
            )),
            Ok(_) => {}
            Err(e) => out.push(e),
        }

        self.check_witnesses(record, &mut out);

        if self.policy.require_price {
            match record.price() {
                Some(price) if is_valid_positive_number(price) => {}
                Some(price) => out.push(VerifyError::policy(
                    "extractedParameterValues.price",
                    format!("{:?} is not a positive number", price),
                )),
                None => out.push(VerifyError::policy(
                    "extractedParameterValues.price",
                    "missing",
                )),
            }
        }

        if !out.is_empty() {
            tracing::debug!(
                identifier = %record.identifier,
                violations = out.len(),
                "proof record failed validation"
            );
        }
        Ok(out)
    }

    fn check_witnesses(&self, record: &ProofRecord, out: &mut Vec<VerifyError>) {
        let limit = if self.policy.check_all_witnesses {
            record.witnesses.len()
        } else {
            1
        };

        for (i, witness) in record.witnesses.iter().take(limit).enumerate() {
            if !is_valid_ethereum_address(&witness.id) {
                out.push(VerifyError::policy(
                    "witnesses.id",
                    format!("witness {} id {:?} is not an address", i, witness.id),
                ));
            }
            if !witness.url.contains(self.policy.witness_url_scheme.as_str()) {
                out.push(VerifyError::policy(
                    "witnesses.url",
                    format!(
                        "witness {} url {:?} does not contain {:?}",
                        i, witness.url, self.policy.witness_url_scheme
                    ),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::WitnessIdentity;
    use crate::validation::clock::FixedClock;

    const NOW: u64 = 1_735_996_100;

    fn record() -> ProofRecord {
        let mut record = ProofRecord {
            identifier: "0xabc123".into(),
            signatures: vec![format!("0x{}1b", "11".repeat(64))],
            witnesses: vec![WitnessIdentity::new(
                "0x244897572368eadf65bfbc5aec98d8e5443a9072",
                "wss://witness.reclaimprotocol.org/ws",
            )],
            ..Default::default()
        };
        record.claim_data.provider = "http".into();
        record.claim_data.parameters =
            r#"{"method":"GET","url":"https://example.com/p","responseMatches":[]}"#.into();
        record.claim_data.owner = "0x96faf173bb7171a530b3e44f35f32d1307bda4fa".into();
        record.claim_data.timestamp_s = NOW - 100;
        record.claim_data.epoch = 1;
        record
            .extracted_parameter_values
            .insert("price".into(), "0.92".into());
        record
    }

    fn validator() -> ProofValidator<FixedClock> {
        ProofValidator::with_clock(ValidationPolicy::default(), FixedClock(NOW)).unwrap()
    }

    fn fields(errors: &[VerifyError]) -> Vec<&'static str> {
        errors
            .iter()
            .filter_map(|e| match e {
                VerifyError::PolicyViolation { field, .. } => Some(*field),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_valid_record_passes() {
        assert!(validator().validate(&record()).is_ok());
        assert!(validator().violations(&record()).unwrap().is_empty());
    }

    #[test]
    fn test_zero_epoch() {
        let mut r = record();
        r.claim_data.epoch = 0;
        let err = validator().validate(&r).unwrap_err();
        assert!(matches!(err, VerifyError::PolicyViolation { field: "claimData.epoch", .. }));
    }

    #[test]
    fn test_future_timestamp() {
        let mut r = record();
        r.claim_data.timestamp_s = NOW + 301;
        assert_eq!(
            fields(&validator().violations(&r).unwrap()),
            vec!["claimData.timestampS"]
        );

        r.claim_data.timestamp_s = NOW + 300;
        assert!(validator().validate(&r).is_ok());
    }

    #[test]
    fn test_provider_not_allowed() {
        let mut r = record();
        r.claim_data.provider = "ftp".into();
        assert_eq!(
            fields(&validator().violations(&r).unwrap()),
            vec!["claimData.provider"]
        );
    }

    #[test]
    fn test_bad_parameters() {
        let mut r = record();
        r.claim_data.parameters = "{".into();
        assert_eq!(
            fields(&validator().violations(&r).unwrap()),
            vec!["claimData.parameters"]
        );

        r.claim_data.parameters =
            r#"{"method":"GET","url":"nope","responseMatches":[]}"#.into();
        assert_eq!(
            fields(&validator().violations(&r).unwrap()),
            vec!["claimData.parameters"]
        );
    }

    #[test]
    fn test_witness_checks() {
        let mut r = record();
        r.witnesses.push(WitnessIdentity::new("0x12", "https://nope"));
        assert_eq!(
            fields(&validator().violations(&r).unwrap()),
            vec!["witnesses.id", "witnesses.url"]
        );

        let first_only = ProofValidator::with_clock(
            ValidationPolicy::builder()
                .check_all_witnesses(false)
                .build()
                .unwrap(),
            FixedClock(NOW),
        )
        .unwrap();
        assert!(first_only.validate(&r).is_ok());
    }

    #[test]
    fn test_price_checks() {
        let mut r = record();
        r.extracted_parameter_values
            .insert("price".into(), "-3".into());
        assert_eq!(
            fields(&validator().violations(&r).unwrap()),
            vec!["extractedParameterValues.price"]
        );

        r.extracted_parameter_values.clear();
        assert_eq!(
            fields(&validator().violations(&r).unwrap()),
            vec!["extractedParameterValues.price"]
        );

        let lenient = ProofValidator::with_clock(
            ValidationPolicy::builder().require_price(false).build().unwrap(),
            FixedClock(NOW),
        )
        .unwrap();
        assert!(lenient.validate(&r).is_ok());
    }

    #[test]
    fn test_structure_errors_are_reported() {
        let mut r = record();
        r.signatures.clear();
        let violations = validator().violations(&r).unwrap();
        assert!(matches!(violations[0], VerifyError::InvalidRecord { .. }));
    }

    #[test]
    fn test_invalid_policy_is_rejected() {
        let policy = ValidationPolicy {
            allowed_providers: vec![],
            ..ValidationPolicy::default()
        };
        assert!(ProofValidator::with_clock(policy, FixedClock(NOW)).is_err());
    }

    #[test]
    fn test_system_clock_validator() {
        let validator = ProofValidator::new(ValidationPolicy::default()).unwrap();
        assert!(validator.validate(&record()).is_ok());
    }
}
