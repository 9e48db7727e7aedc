use crate::gender::Gender;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// First validation stage that rejected an identity number.
///
/// The boolean surface of the crate collapses every variant to `false`;
/// this type exists for callers that need to know which stage failed.
#[derive(Serialize, Deserialize, Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("identity number has {found} digits, expected 13")]
    InvalidLength { found: usize },

    #[error("identity number contains a non-digit character {found:?}")]
    InvalidCharacter { found: char },

    #[error("gender digit does not encode the expected {expected:?} gender")]
    GenderMismatch { expected: Gender },

    #[error("digits {month:02}{day:02} are not a valid birth month and day")]
    InvalidBirthDate { month: u32, day: u32 },

    #[error("check digit is {found}, expected {expected}")]
    ChecksumMismatch { expected: u32, found: u32 },
}
