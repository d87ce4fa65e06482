//! Signature handling - envelope parsing, key recovery, claim signing

pub mod envelope;
pub mod recovery;
pub mod signer;

pub use envelope::{RecoveryBit, SignatureEnvelope};
pub use recovery::{
    address_from_public_key, address_from_verifying_key, decompress_public_key, recover_address,
    recover_public_key, CompressedPublicKey,
};
pub use signer::ClaimSigner;
