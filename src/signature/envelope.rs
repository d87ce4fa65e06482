//! SignatureEnvelope - `0x` + compact r‖s + one-byte recovery suffix

use crate::core::errors::{Result, VerifyError};
use crate::utils::constants::{
    COMPACT_SIGNATURE_HEX_LEN, COMPACT_SIGNATURE_LEN, HEX_PREFIX, RECOVERY_SUFFIX_EVEN,
    RECOVERY_SUFFIX_ODD, SIGNATURE_HEX_LEN,
};

use core::fmt;
use core::str::FromStr;

/// Normalized recovery bit (y parity of the ephemeral point R).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecoveryBit {
    Even,
    Odd,
}

impl RecoveryBit {
    /// `0x1b` → even, `0x1c` → odd. There is no fallback for other values.
    pub fn from_suffix(suffix: u8) -> Result<Self> {
        match suffix {
            RECOVERY_SUFFIX_EVEN => Ok(RecoveryBit::Even),
            RECOVERY_SUFFIX_ODD => Ok(RecoveryBit::Odd),
            other => Err(VerifyError::malformed(format!(
                "invalid recovery suffix 0x{:02x} (expected 0x1b or 0x1c)",
                other
            ))),
        }
    }

    pub fn to_suffix(self) -> u8 {
        match self {
            RecoveryBit::Even => RECOVERY_SUFFIX_EVEN,
            RecoveryBit::Odd => RECOVERY_SUFFIX_ODD,
        }
    }

    pub fn from_parity(is_odd: bool) -> Self {
        if is_odd {
            RecoveryBit::Odd
        } else {
            RecoveryBit::Even
        }
    }

    pub fn is_odd(self) -> bool {
        matches!(self, RecoveryBit::Odd)
    }

    pub fn flipped(self) -> Self {
        Self::from_parity(!self.is_odd())
    }

    pub fn as_u8(self) -> u8 {
        self.is_odd() as u8
    }
}

/// Decoded detached signature. Holds bytes only; no curve checks happen here.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SignatureEnvelope {
    compact: [u8; COMPACT_SIGNATURE_LEN],
    recovery: RecoveryBit,
}

impl SignatureEnvelope {
    pub fn new(compact: [u8; COMPACT_SIGNATURE_LEN], recovery: RecoveryBit) -> Self {
        Self { compact, recovery }
    }

    pub fn parse(signature_hex: &str) -> Result<Self> {
        let body = signature_hex
            .strip_prefix(HEX_PREFIX)
            .ok_or_else(|| VerifyError::malformed("missing 0x prefix"))?;

        if signature_hex.len() != SIGNATURE_HEX_LEN {
            return Err(VerifyError::malformed(format!(
                "expected {} characters, got {}",
                SIGNATURE_HEX_LEN,
                signature_hex.len()
            )));
        }
        // Length is checked in bytes; a multi-byte char could still straddle the split.
        if !body.is_char_boundary(COMPACT_SIGNATURE_HEX_LEN) {
            return Err(VerifyError::malformed("signature is not hex"));
        }
        let (compact_hex, suffix_hex) = body.split_at(COMPACT_SIGNATURE_HEX_LEN);

        let mut suffix = [0u8; 1];
        hex::decode_to_slice(suffix_hex, &mut suffix)
            .map_err(|e| VerifyError::malformed(format!("recovery suffix: {}", e)))?;
        let recovery = RecoveryBit::from_suffix(suffix[0])?;

        let mut compact = [0u8; COMPACT_SIGNATURE_LEN];
        hex::decode_to_slice(compact_hex, &mut compact)
            .map_err(|e| VerifyError::malformed(format!("compact signature: {}", e)))?;

        Ok(Self { compact, recovery })
    }

    pub fn compact(&self) -> &[u8; COMPACT_SIGNATURE_LEN] {
        &self.compact
    }

    pub fn r(&self) -> &[u8] {
        &self.compact[..32]
    }

    pub fn s(&self) -> &[u8] {
        &self.compact[32..]
    }

    pub fn recovery(&self) -> RecoveryBit {
        self.recovery
    }

    pub fn to_hex(&self) -> String {
        format!(
            "{}{}{:02x}",
            HEX_PREFIX,
            hex::encode(self.compact),
            self.recovery.to_suffix()
        )
    }
}

impl FromStr for SignatureEnvelope {
    type Err = VerifyError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for SignatureEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for SignatureEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignatureEnvelope")
            .field("r", &hex::encode(self.r()))
            .field("s", &hex::encode(self.s()))
            .field("recovery", &self.recovery)
            .finish()
    }
}
