//! ClaimParameters - decoded `claimData.parameters`

use crate::core::errors::{Result, VerifyError};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The HTTP request a witness executed. Unknown keys are preserved in `extra`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimParameters {
    pub method: String,
    pub url: String,
    pub response_matches: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ClaimParameters {
    pub fn parse(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| {
            VerifyError::policy(
                "claimData.parameters",
                format!("not a valid parameters object: {}", e),
            )
        })
    }
}
