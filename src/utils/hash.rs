//! Hash utilities - Keccak-256 and the EIP-191 personal-message digest
//!
//! Keccak-256 here is the original Keccak submission padding (0x01) used by
//! Ethereum, not the NIST SHA3-256 padding (0x06). The two are not
//! interchangeable; the tests pin both against known vectors.

use crate::core::types::HashDigest;
use crate::utils::constants::PERSONAL_MESSAGE_PREFIX;

use sha3::{Digest, Keccak256};

pub fn keccak256(data: &[u8]) -> HashDigest {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// `keccak256(prefix ‖ decimal(len(message)) ‖ message)`
///
/// The length is the UTF-8 byte length, not the character count.
pub fn hash_personal_message(message: &[u8]) -> HashDigest {
    let length = message.len().to_string();

    let mut hasher = Keccak256::new();
    hasher.update(PERSONAL_MESSAGE_PREFIX);
    hasher.update(length.as_bytes());
    hasher.update(message);
    hasher.finalize().into()
}

/// Constant-time equality comparison for fixed-size byte arrays.
pub fn constant_time_eq_fixed<const N: usize>(a: &[u8; N], b: &[u8; N]) -> bool {
    use subtle::ConstantTimeEq;
    a.ct_eq(b).into()
}
