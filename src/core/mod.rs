//! Core types and traits (ClaimRecord, Address, VerificationResult, Verifier, Clock)

pub mod errors;
pub mod traits;
pub mod types;

// Re-exports
pub use errors::{Result, VerifyError};
pub use traits::{Clock, Verifier};
pub use types::{Address, ClaimRecord, VerificationResult, WitnessIdentity};
