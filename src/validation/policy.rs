//! ValidationPolicy - explicit knobs for the record checks

use crate::core::errors::{Result, VerifyError};
use crate::utils::constants::{
    DEFAULT_PROVIDERS, DEFAULT_WITNESS_URL_SCHEME, TIMESTAMP_TOLERANCE_SECS,
};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationPolicy {
    /// How far past "now" a claim timestamp may be.
    pub timestamp_tolerance_secs: u64,
    pub allowed_providers: Vec<String>,
    /// Require `extractedParameterValues.price` to be a positive number.
    pub require_price: bool,
    /// Substring every witness URL must contain.
    pub witness_url_scheme: String,
    /// Check every witness in the list, not just the first.
    pub check_all_witnesses: bool,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            timestamp_tolerance_secs: TIMESTAMP_TOLERANCE_SECS,
            allowed_providers: DEFAULT_PROVIDERS.iter().map(|p| p.to_string()).collect(),
            require_price: true,
            witness_url_scheme: DEFAULT_WITNESS_URL_SCHEME.to_string(),
            check_all_witnesses: true,
        }
    }
}

impl ValidationPolicy {
    /// HTTPS-only providers and no clock skew.
    pub fn strict() -> Self {
        Self {
            timestamp_tolerance_secs: 0,
            allowed_providers: vec!["https".to_string()],
            ..Self::default()
        }
    }

    pub fn builder() -> ValidationPolicyBuilder {
        ValidationPolicyBuilder::new()
    }

    pub fn validate(&self) -> Result<()> {
        if self.allowed_providers.is_empty() {
            return Err(VerifyError::Configuration {
                reason: "allowed_providers is empty".into(),
            });
        }

        if self.allowed_providers.iter().any(|p| p.is_empty()) {
            return Err(VerifyError::Configuration {
                reason: "allowed_providers contains an empty entry".into(),
            });
        }

        if self.witness_url_scheme.is_empty() {
            return Err(VerifyError::Configuration {
                reason: "witness_url_scheme is empty".into(),
            });
        }

        Ok(())
    }

    pub fn allows_provider(&self, provider: &str) -> bool {
        self.allowed_providers.iter().any(|p| p == provider)
    }
}

#[derive(Debug, Clone)]
pub struct ValidationPolicyBuilder {
    policy: ValidationPolicy,
}

impl ValidationPolicyBuilder {
    pub fn new() -> Self {
        Self {
            policy: ValidationPolicy::default(),
        }
    }

    pub fn timestamp_tolerance_secs(mut self, secs: u64) -> Self {
        self.policy.timestamp_tolerance_secs = secs;
        self
    }

    pub fn allowed_providers<I, S>(mut self, providers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.policy.allowed_providers = providers.into_iter().map(Into::into).collect();
        self
    }

    pub fn require_price(mut self, require: bool) -> Self {
        self.policy.require_price = require;
        self
    }

    pub fn witness_url_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.policy.witness_url_scheme = scheme.into();
        self
    }

    pub fn check_all_witnesses(mut self, all: bool) -> Self {
        self.policy.check_all_witnesses = all;
        self
    }

    pub fn build(self) -> Result<ValidationPolicy> {
        self.policy.validate()?;
        Ok(self.policy)
    }
}

impl Default for ValidationPolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}
