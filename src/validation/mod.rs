//! Record validation - field validators, policy, clocks

pub mod clock;
pub mod fields;
pub mod policy;
pub mod validator;

pub use clock::{FixedClock, SystemClock};
pub use fields::{
    is_valid_epoch, is_valid_ethereum_address, is_valid_positive_number, is_valid_timestamp,
    is_valid_url,
};
pub use policy::{ValidationPolicy, ValidationPolicyBuilder};
pub use validator::ProofValidator;
