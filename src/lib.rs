//! zkfetch-verify - witness signature verification for zkFetch attestations
//!
//! Rebuilds the canonical claim message, recovers the secp256k1 signer from
//! the detached witness signature, derives its Ethereum-style address and
//! compares it with the witness identity. Record validation and batch
//! verification sit on top of that core.

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms, unused_qualifications, missing_debug_implementations)]

pub mod batching;
pub mod core;
pub mod record;
pub mod signature;
pub mod utils;
pub mod validation;
pub mod verifier;

pub use crate::core::{
    errors::{Result, VerifyError},
    traits::{Clock, Verifier},
    types::{Address, ClaimRecord, VerificationResult, WitnessIdentity},
};

pub use crate::record::{ClaimData, ClaimParameters, ProofRecord};

pub use crate::signature::{ClaimSigner, RecoveryBit, SignatureEnvelope};

pub use crate::validation::{ProofValidator, SystemClock, ValidationPolicy};

pub use crate::verifier::SignatureVerifier;

pub use crate::batching::{BatchReport, BatchVerifier};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = "zkfetch-verify";

/// Prelude module for convenient re-exports
pub mod prelude {
    pub use crate::core::errors::{Result, VerifyError};
    pub use crate::core::traits::{Clock, Verifier};
    pub use crate::core::types::{Address, ClaimRecord, VerificationResult, WitnessIdentity};
    pub use crate::record::ProofRecord;
    pub use crate::validation::{ProofValidator, ValidationPolicy};
    pub use crate::verifier::SignatureVerifier;
}
