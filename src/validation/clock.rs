//! Clocks for the timestamp window check

use crate::core::errors::{Result, VerifyError};
use crate::core::traits::Clock;

use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_secs(&self) -> Result<u64> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| VerifyError::Configuration {
                reason: format!("System time error: {}", e),
            })?;
        Ok(now.as_secs())
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_secs(&self) -> Result<u64> {
        Ok(self.0)
    }
}
