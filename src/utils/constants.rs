//! Constants - wire-format lengths, recovery suffixes, hashing preamble, limits

/// EIP-191 (version 0x45) preamble. The decimal byte length of the message
/// follows it directly, then the message itself.
pub const PERSONAL_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n";

pub const COMPACT_SIGNATURE_LEN: usize = 64;
pub const COMPACT_SIGNATURE_HEX_LEN: usize = COMPACT_SIGNATURE_LEN * 2;
pub const RECOVERY_SUFFIX_HEX_LEN: usize = 2;
pub const HEX_PREFIX: &str = "0x";

/// `0x` + r‖s + suffix
pub const SIGNATURE_HEX_LEN: usize =
    HEX_PREFIX.len() + COMPACT_SIGNATURE_HEX_LEN + RECOVERY_SUFFIX_HEX_LEN;

pub const RECOVERY_SUFFIX_EVEN: u8 = 0x1b;
pub const RECOVERY_SUFFIX_ODD: u8 = 0x1c;

pub const COMPRESSED_PUBLIC_KEY_LEN: usize = 33;
pub const UNCOMPRESSED_PUBLIC_KEY_LEN: usize = 65;
pub const PUBLIC_KEY_BODY_LEN: usize = 64;
pub const UNCOMPRESSED_POINT_TAG: u8 = 0x04;

pub const ADDRESS_LEN: usize = 20;
pub const ADDRESS_HEX_LEN: usize = HEX_PREFIX.len() + ADDRESS_LEN * 2;
pub const KECCAK256_OUTPUT_LEN: usize = 32;

/// Allowed clock skew for claims stamped slightly in the future.
pub const TIMESTAMP_TOLERANCE_SECS: u64 = 300;

pub const MAX_BATCH_SIZE: usize = 10_000;

pub const DEFAULT_PROVIDERS: &[&str] = &["http", "https"];
pub const DEFAULT_WITNESS_URL_SCHEME: &str = "wss://";
