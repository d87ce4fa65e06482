//! ProofRecord - the attestation JSON produced by the proof service

use crate::core::errors::{Result, VerifyError};
use crate::core::types::{ClaimRecord, WitnessIdentity};

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimData {
    #[serde(default)]
    pub provider: String,
    /// JSON-encoded request description; see [`crate::record::ClaimParameters`].
    #[serde(default)]
    pub parameters: String,
    pub owner: String,
    pub timestamp_s: u64,
    pub epoch: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofRecord {
    pub identifier: String,
    pub claim_data: ClaimData,
    #[serde(default)]
    pub signatures: Vec<String>,
    #[serde(default)]
    pub extracted_parameter_values: BTreeMap<String, String>,
    #[serde(default)]
    pub witnesses: Vec<WitnessIdentity>,
}

impl ProofRecord {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| io_error(path, e))?;
        let record = Self::from_reader(BufReader::new(file))?;

        tracing::debug!(
            path = %path.display(),
            identifier = %record.identifier,
            signatures = record.signatures.len(),
            witnesses = record.witnesses.len(),
            "loaded proof record"
        );
        Ok(record)
    }

    /// Two-space indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_json_pretty()?;
        std::fs::write(path, json).map_err(|e| io_error(path, e))
    }

    /// The four signed fields, in signing order.
    pub fn claim(&self) -> ClaimRecord {
        ClaimRecord {
            identifier: self.identifier.clone(),
            owner: self.claim_data.owner.clone(),
            timestamp_s: self.claim_data.timestamp_s,
            epoch: self.claim_data.epoch,
        }
    }

    pub fn primary_signature(&self) -> Result<&str> {
        self.signatures
            .first()
            .map(String::as_str)
            .ok_or_else(|| VerifyError::InvalidRecord {
                reason: "no signatures".into(),
            })
    }

    pub fn primary_witness(&self) -> Result<&WitnessIdentity> {
        self.witnesses.first().ok_or_else(|| VerifyError::InvalidRecord {
            reason: "no witnesses".into(),
        })
    }

    pub fn price(&self) -> Option<&str> {
        self.extracted_parameter_values.get("price").map(String::as_str)
    }

    /// Shape checks only; field formats belong to [`crate::validation`].
    pub fn check_structure(&self) -> Result<()> {
        if self.identifier.is_empty() {
            return Err(VerifyError::InvalidRecord {
                reason: "identifier is empty".into(),
            });
        }
        self.primary_signature()?;
        self.primary_witness()?;
        Ok(())
    }
}

fn io_error(path: &Path, err: std::io::Error) -> VerifyError {
    VerifyError::Io {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}
