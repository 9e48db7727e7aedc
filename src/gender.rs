use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Position of the digit whose magnitude encodes gender.
pub(crate) const GENDER_DIGIT_INDEX: usize = 6;

/// Gender marker encoded in the sequence-number portion of an identity
/// number: a gender digit of 5 or above encodes Male, below 5 Female.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

/// Read the gender encoded at digit index 6.
pub(crate) fn encoded_gender(digits: &[u32]) -> Gender {
    if digits[GENDER_DIGIT_INDEX] >= 5 {
        Gender::Male
    } else {
        Gender::Female
    }
}

/// Vacuously true when no expectation is supplied.
pub(crate) fn check_gender(
    digits: &[u32],
    expected_gender: Option<Gender>,
) -> Result<(), ValidationError> {
    let expected = match expected_gender {
        Some(gender) => gender,
        None => return Ok(()),
    };
    if encoded_gender(digits) == expected {
        Ok(())
    } else {
        Err(ValidationError::GenderMismatch { expected })
    }
}
