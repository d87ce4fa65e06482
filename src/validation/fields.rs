//! Field validators for the parts of a proof record outside the signature

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

static ETHEREUM_ADDRESS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0x[a-fA-F0-9]{40}$").expect("static regex"));

pub fn is_valid_ethereum_address(address: &str) -> bool {
    ETHEREUM_ADDRESS.is_match(address)
}

/// Positive and at most `tolerance_secs` ahead of `now_secs`.
pub fn is_valid_timestamp(timestamp_s: u64, now_secs: u64, tolerance_secs: u64) -> bool {
    timestamp_s > 0 && timestamp_s <= now_secs.saturating_add(tolerance_secs)
}

pub fn is_valid_positive_number(value: &str) -> bool {
    value
        .trim()
        .parse::<f64>()
        .map(|n| n.is_finite() && n > 0.0)
        .unwrap_or(false)
}

pub fn is_valid_url(value: &str) -> bool {
    Url::parse(value).is_ok()
}

pub fn is_valid_epoch(epoch: u64) -> bool {
    epoch > 0
}
