//! Witness signature verification

pub mod signature_verifier;

pub use signature_verifier::SignatureVerifier;
