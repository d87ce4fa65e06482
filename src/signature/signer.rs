//! ClaimSigner - the witness side: personal-sign a claim's canonical message

use crate::core::errors::{Result, VerifyError};
use crate::core::types::{Address, ClaimRecord};
use crate::signature::envelope::{RecoveryBit, SignatureEnvelope};
use crate::signature::recovery::address_from_verifying_key;
use crate::utils::constants::{COMPACT_SIGNATURE_LEN, HEX_PREFIX};
use crate::utils::hash::hash_personal_message;

use k256::ecdsa::SigningKey;
use zeroize::Zeroizing;

/// Produces signatures in the exact format [`crate::SignatureVerifier`] consumes.
#[derive(Clone)]
pub struct ClaimSigner {
    key: SigningKey,
    address: Address,
}

impl ClaimSigner {
    pub fn from_signing_key(key: SigningKey) -> Self {
        let address = address_from_verifying_key(key.verifying_key());
        Self { key, address }
    }

    /// 32-byte secret scalar, hex, with or without `0x`.
    pub fn from_hex(secret_hex: &str) -> Result<Self> {
        let trimmed = secret_hex.strip_prefix(HEX_PREFIX).unwrap_or(secret_hex);

        let mut secret = Zeroizing::new([0u8; 32]);
        hex::decode_to_slice(trimmed, &mut secret[..]).map_err(|e| VerifyError::Configuration {
            reason: format!("secret key is not 32 bytes of hex: {}", e),
        })?;

        let key = SigningKey::from_slice(&secret[..]).map_err(|_| VerifyError::Configuration {
            reason: "secret key is not a valid secp256k1 scalar".into(),
        })?;
        Ok(Self::from_signing_key(key))
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn sign_message(&self, message: &[u8]) -> Result<SignatureEnvelope> {
        let digest = hash_personal_message(message);
        let (signature, recovery_id) = self
            .key
            .sign_prehash_recoverable(&digest)
            .map_err(|e| VerifyError::InvalidSignature {
                reason: format!("signing failed: {}", e),
            })?;

        let mut compact = [0u8; COMPACT_SIGNATURE_LEN];
        compact.copy_from_slice(&signature.to_bytes());
        Ok(SignatureEnvelope::new(
            compact,
            RecoveryBit::from_parity(recovery_id.is_y_odd()),
        ))
    }

    pub fn sign_claim(&self, claim: &ClaimRecord) -> Result<SignatureEnvelope> {
        claim.check()?;
        self.sign_message(claim.canonical_message().as_bytes())
    }
}

impl core::fmt::Debug for ClaimSigner {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ClaimSigner")
            .field("address", &self.address)
            .field("key", &"<redacted>")
            .finish()
    }
}
