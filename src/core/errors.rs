//! Error types for zkfetch-verify

use core::fmt;

pub type Result<T> = core::result::Result<T, VerifyError>;

/// Every failure the crate can report.
///
/// A signature that recovers cleanly but belongs to someone other than the
/// claimed witness is not an error; see [`crate::VerificationResult`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    /// Wrong length, unparseable hex or an unknown recovery suffix.
    MalformedSignature { reason: String },
    /// Well-formed signature from which no public key can be recovered.
    InvalidSignature { reason: String },
    InvalidClaim { reason: String },
    InvalidAddress { address: String },
    InvalidRecord { reason: String },
    PolicyViolation { field: &'static str, reason: String },
    Configuration { reason: String },
    BatchError { reason: String },
    Serialization { reason: String },
    Io { path: String, reason: String },
}

impl VerifyError {
    pub fn is_malformed(&self) -> bool {
        matches!(self, VerifyError::MalformedSignature { .. })
    }

    pub fn is_invalid_signature(&self) -> bool {
        matches!(self, VerifyError::InvalidSignature { .. })
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        VerifyError::MalformedSignature {
            reason: reason.into(),
        }
    }

    pub(crate) fn policy(field: &'static str, reason: impl Into<String>) -> Self {
        VerifyError::PolicyViolation {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifyError::MalformedSignature { reason } => {
                write!(f, "Malformed signature: {}", reason)
            }
            VerifyError::InvalidSignature { reason } => {
                write!(f, "Invalid signature: {}", reason)
            }
            VerifyError::InvalidClaim { reason } => {
                write!(f, "Invalid claim: {}", reason)
            }
            VerifyError::InvalidAddress { address } => {
                write!(f, "Invalid address: {:?}", address)
            }
            VerifyError::InvalidRecord { reason } => {
                write!(f, "Invalid proof record: {}", reason)
            }
            VerifyError::PolicyViolation { field, reason } => {
                write!(f, "Policy violation on {}: {}", field, reason)
            }
            VerifyError::Configuration { reason } => {
                write!(f, "Configuration error: {}", reason)
            }
            VerifyError::BatchError { reason } => {
                write!(f, "Batch processing error: {}", reason)
            }
            VerifyError::Serialization { reason } => {
                write!(f, "Serialization error: {}", reason)
            }
            VerifyError::Io { path, reason } => {
                write!(f, "I/O error on {}: {}", path, reason)
            }
        }
    }
}

impl std::error::Error for VerifyError {}

impl From<serde_json::Error> for VerifyError {
    fn from(err: serde_json::Error) -> Self {
        VerifyError::Serialization {
            reason: err.to_string(),
        }
    }
}
