//! Public key recovery (secp256k1), point decompression and address derivation

use crate::core::errors::{Result, VerifyError};
use crate::core::types::{Address, HashDigest};
use crate::signature::envelope::SignatureEnvelope;
use crate::utils::constants::{
    ADDRESS_LEN, COMPRESSED_PUBLIC_KEY_LEN, KECCAK256_OUTPUT_LEN, PUBLIC_KEY_BODY_LEN,
    UNCOMPRESSED_POINT_TAG, UNCOMPRESSED_PUBLIC_KEY_LEN,
};
use crate::utils::hash::keccak256;

use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::PublicKey;

/// SEC1 compressed point: parity tag (0x02/0x03) ‖ x.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompressedPublicKey(pub [u8; COMPRESSED_PUBLIC_KEY_LEN]);

fn invalid(reason: impl Into<String>) -> VerifyError {
    VerifyError::InvalidSignature {
        reason: reason.into(),
    }
}

/// Recover the signer key from a prehashed 32-byte digest.
///
/// High-S signatures are accepted: s is replaced by n - s and the recovery
/// bit flipped, which recovers the same key.
pub fn recover_public_key(
    digest: &HashDigest,
    envelope: &SignatureEnvelope,
) -> Result<CompressedPublicKey> {
    let mut signature = Signature::from_slice(envelope.compact())
        .map_err(|_| invalid("r or s out of range"))?;
    let mut bit = envelope.recovery();

    if let Some(normalized) = signature.normalize_s() {
        signature = normalized;
        bit = bit.flipped();
    }

    let recovery_id =
        RecoveryId::from_byte(bit.as_u8()).ok_or_else(|| invalid("recovery id out of range"))?;

    let key = VerifyingKey::recover_from_prehash(digest, &signature, recovery_id)
        .map_err(|_| invalid("public key recovery failed"))?;

    let point = key.to_encoded_point(true);
    let mut compressed = [0u8; COMPRESSED_PUBLIC_KEY_LEN];
    compressed.copy_from_slice(point.as_bytes());
    Ok(CompressedPublicKey(compressed))
}

/// Expand to `0x04 ‖ x ‖ y` and return `x ‖ y`.
pub fn decompress_public_key(
    compressed: &CompressedPublicKey,
) -> Result<[u8; PUBLIC_KEY_BODY_LEN]> {
    let key = PublicKey::from_sec1_bytes(&compressed.0)
        .map_err(|_| invalid("recovered point is not on the curve"))?;

    let point = key.to_encoded_point(false);
    let bytes = point.as_bytes();
    if bytes.len() != UNCOMPRESSED_PUBLIC_KEY_LEN || bytes[0] != UNCOMPRESSED_POINT_TAG {
        return Err(invalid("unexpected uncompressed point encoding"));
    }

    let mut body = [0u8; PUBLIC_KEY_BODY_LEN];
    body.copy_from_slice(&bytes[1..]);
    Ok(body)
}

/// Low-order 20 bytes of `keccak256(x ‖ y)`.
pub fn address_from_public_key(body: &[u8; PUBLIC_KEY_BODY_LEN]) -> Address {
    let hash = keccak256(body);
    let mut address = [0u8; ADDRESS_LEN];
    address.copy_from_slice(&hash[KECCAK256_OUTPUT_LEN - ADDRESS_LEN..]);
    Address::from_bytes(address)
}

pub fn address_from_verifying_key(key: &VerifyingKey) -> Address {
    let point = key.to_encoded_point(false);
    let mut body = [0u8; PUBLIC_KEY_BODY_LEN];
    body.copy_from_slice(&point.as_bytes()[1..]);
    address_from_public_key(&body)
}

/// Recover, decompress, hash and truncate.
pub fn recover_address(digest: &HashDigest, envelope: &SignatureEnvelope) -> Result<Address> {
    let compressed = recover_public_key(digest, envelope)?;
    let body = decompress_public_key(&compressed)?;
    Ok(address_from_public_key(&body))
}
