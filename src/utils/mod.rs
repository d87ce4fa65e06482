//! Utility functions - hashing, constants

pub mod constants;
pub mod hash;

pub use constants::*;
pub use hash::{hash_personal_message, keccak256};
