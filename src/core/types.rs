//! Core types: ClaimRecord, WitnessIdentity, Address, VerificationResult

use crate::core::errors::{Result, VerifyError};
use crate::utils::constants::{ADDRESS_HEX_LEN, ADDRESS_LEN, HEX_PREFIX};

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

pub type HashDigest = [u8; 32];

/// The four claim fields a witness signs over.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRecord {
    pub identifier: String,
    pub owner: String,
    pub timestamp_s: u64,
    pub epoch: u64,
}

impl ClaimRecord {
    pub fn new(
        identifier: impl Into<String>,
        owner: impl Into<String>,
        timestamp_s: u64,
        epoch: u64,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            owner: owner.into(),
            timestamp_s,
            epoch,
        }
    }

    /// `identifier\nowner\ntimestampS\nepoch`, no trailing newline.
    pub fn canonical_message(&self) -> String {
        format!(
            "{}\n{}\n{}\n{}",
            self.identifier, self.owner, self.timestamp_s, self.epoch
        )
    }

    pub fn check(&self) -> Result<()> {
        if self.identifier.is_empty() {
            return Err(VerifyError::InvalidClaim {
                reason: "identifier is empty".into(),
            });
        }
        if self.owner.is_empty() {
            return Err(VerifyError::InvalidClaim {
                reason: "owner is empty".into(),
            });
        }
        Ok(())
    }
}

/// An attesting party: its account address and transport endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WitnessIdentity {
    pub id: String,
    pub url: String,
}

impl WitnessIdentity {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
        }
    }

    pub fn address(&self) -> Result<Address> {
        self.id.parse()
    }
}

/// 20-byte account address. Parsing is case-insensitive; display is lowercase.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    pub const fn from_bytes(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        format!("{}{}", HEX_PREFIX, hex::encode(self.0))
    }

    /// Byte comparison without early exit.
    pub fn ct_eq(&self, other: &Address) -> bool {
        crate::utils::hash::constant_time_eq_fixed(&self.0, &other.0)
    }
}

impl FromStr for Address {
    type Err = VerifyError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || VerifyError::InvalidAddress {
            address: s.to_string(),
        };

        if s.len() != ADDRESS_HEX_LEN {
            return Err(invalid());
        }
        let body = s.strip_prefix(HEX_PREFIX).ok_or_else(invalid)?;

        let mut bytes = [0u8; ADDRESS_LEN];
        hex::decode_to_slice(body, &mut bytes).map_err(|_| invalid())?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_hex())
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Outcome of a completed verification. A mismatch is a valid result, not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub derived: Address,
    pub claimed: Address,
    matched: bool,
}

impl VerificationResult {
    pub fn new(derived: Address, claimed: Address) -> Self {
        Self {
            derived,
            claimed,
            matched: derived.ct_eq(&claimed),
        }
    }

    pub fn is_match(&self) -> bool {
        self.matched
    }
}
