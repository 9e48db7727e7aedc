//! Validation of South African identity numbers.
//!
//! An identity number is a 13-digit code of the form `YYMMDD SSSS CAZ`:
//! digits 0-5 encode the birth date, digit 6 encodes gender (5 and above
//! is male), digits 7-11 are sequence and citizenship digits, and digit
//! 12 is a Luhn-style check digit recomputed from the first 12 digits.
//! Validation is purely structural; nothing is looked up externally.
//!
//! The [`validate`]/[`validate_str`] surface yields a single boolean.
//! [`check`]/[`check_str`] additionally report which stage rejected the
//! number. The `u64` surface cannot represent identity numbers whose
//! canonical form starts with a zero digit (they convert to fewer than
//! 13 digits and fail the length check); pass those through the string
//! surface, which preserves leading zeros.

// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod birth_date;
mod checksum;
mod config;
mod digits;
mod error;
mod gender;

pub use birth_date::BirthDatePolicy;
pub use config::ValidationConfig;
pub use error::ValidationError;
pub use gender::Gender;

use crate::digits::{extract_digits, ID_LENGTH};

/// Validate an identity number, optionally requiring the gender digit to
/// encode `expected_gender`. Uses the permissive birth-date policy.
pub fn validate(id_number: u64, expected_gender: Option<Gender>) -> bool {
    let mut config = ValidationConfig::new();
    if let Some(gender) = expected_gender {
        config = config.expected_gender(gender);
    }
    check(id_number, &config).is_ok()
}

/// [`validate`] for an identity number carried as a digit string.
pub fn validate_str(id_number: &str, expected_gender: Option<Gender>) -> bool {
    let mut config = ValidationConfig::new();
    if let Some(gender) = expected_gender {
        config = config.expected_gender(gender);
    }
    check_str(id_number, &config).is_ok()
}

/// Validate an identity number, reporting the first failing stage.
pub fn check(id_number: u64, config: &ValidationConfig) -> Result<(), ValidationError> {
    check_digit_sequence(&extract_digits(id_number), config)
}

/// [`check`] for an identity number carried as a digit string. Leading
/// zeros count towards the length; any non-digit character is rejected
/// (no separator stripping).
pub fn check_str(id_number: &str, config: &ValidationConfig) -> Result<(), ValidationError> {
    let mut digits = Vec::with_capacity(ID_LENGTH);
    for c in id_number.chars() {
        match c.to_digit(10) {
            Some(digit) => digits.push(digit),
            None => return Err(ValidationError::InvalidCharacter { found: c }),
        }
    }
    check_digit_sequence(&digits, config)
}

fn check_digit_sequence(
    digits: &[u32],
    config: &ValidationConfig,
) -> Result<(), ValidationError> {
    if digits.len() != ID_LENGTH {
        return Err(ValidationError::InvalidLength {
            found: digits.len(),
        });
    }
    gender::check_gender(digits, config.expected_gender)?;
    birth_date::check_birth_date(digits, config.birth_date_policy)?;
    checksum::check_checksum(digits)
}

#[cfg(test)]
mod test {
    use super::*;

    // Hand-verified fixed vectors: 8001015009083 is born 1980-01-01,
    // male (gender digit 5); 9202204720086 is born 1992-02-20, female
    // (gender digit 4).
    const VALID_MALE: u64 = 8001015009083;
    const VALID_FEMALE: u64 = 9202204720086;

    #[test]
    fn validates_well_formed_numbers() {
        assert!(validate(VALID_MALE, None));
        assert!(validate(VALID_MALE, Some(Gender::Male)));
        assert!(validate(VALID_FEMALE, None));
        assert!(validate(VALID_FEMALE, Some(Gender::Female)));
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(!validate(123, None));
        assert!(!validate(0, None));
        // 12 digits
        assert!(!validate(800101500908, None));
        // 14 digits
        assert!(!validate(80010150090831, None));
        assert_eq!(
            check(12345, &ValidationConfig::new()),
            Err(ValidationError::InvalidLength { found: 5 })
        );
    }

    #[test]
    fn rejects_gender_mismatch() {
        assert!(!validate(VALID_MALE, Some(Gender::Female)));
        assert!(!validate(VALID_FEMALE, Some(Gender::Male)));
        assert_eq!(
            check(VALID_MALE, &ValidationConfig::new().expected_gender(Gender::Female)),
            Err(ValidationError::GenderMismatch {
                expected: Gender::Female
            })
        );
    }

    #[test]
    fn rejects_invalid_birth_date() {
        // Month 13 and day 00, each with a correct check digit.
        assert!(!validate(8013015009089, None));
        assert!(!validate(8001005009084, None));
        assert_eq!(
            check(8013015009089, &ValidationConfig::new()),
            Err(ValidationError::InvalidBirthDate { month: 13, day: 1 })
        );
    }

    #[test]
    fn rejects_checksum_mismatch() {
        // VALID_MALE with only the check digit altered.
        assert!(!validate(8001015009084, None));
        assert_eq!(
            check(8001015009084, &ValidationConfig::new()),
            Err(ValidationError::ChecksumMismatch {
                expected: 3,
                found: 4,
            })
        );
    }

    #[test]
    fn strict_policy_rejects_impossible_days() {
        let strict = ValidationConfig::new().birth_date_policy(BirthDatePolicy::Strict);
        // April 31 and February 30, both checksum-correct.
        for number in [9004315009082, 9002305009085] {
            assert!(check(number, &ValidationConfig::new()).is_ok());
            assert_eq!(
                check(number, &strict),
                Err(ValidationError::InvalidBirthDate {
                    month: extract_month(number),
                    day: extract_day(number),
                })
            );
        }
    }

    #[test]
    fn strict_policy_windows_february_29() {
        let strict = ValidationConfig::new().birth_date_policy(BirthDatePolicy::Strict);
        // Birth year digits 96 window to 1996 (leap) for the rest of
        // this century; 95 windows to a non-leap year.
        assert!(check(9602295009082, &strict).is_ok());
        assert_eq!(
            check(9502295009083, &strict),
            Err(ValidationError::InvalidBirthDate { month: 2, day: 29 })
        );
        // The permissive policy accepts both.
        assert!(check(9502295009083, &ValidationConfig::new()).is_ok());
    }

    #[test]
    fn string_surface_preserves_leading_zeros() {
        // Born 2000-02-29; as a u64 this number would lose its leading
        // zeros and fail the length check.
        let strict = ValidationConfig::new().birth_date_policy(BirthDatePolicy::Strict);
        assert!(validate_str("0002295009087", None));
        assert!(check_str("0002295009087", &strict).is_ok());
        assert_eq!(
            check(2295009087, &ValidationConfig::new()),
            Err(ValidationError::InvalidLength { found: 10 })
        );
    }

    #[test]
    fn string_surface_rejects_non_digits() {
        assert!(!validate_str("800101 500908", None));
        assert_eq!(
            check_str("800101-5009083", &ValidationConfig::new()),
            Err(ValidationError::InvalidCharacter { found: '-' })
        );
    }

    #[test]
    fn validation_is_idempotent() {
        for _ in 0..3 {
            assert!(validate(VALID_MALE, Some(Gender::Male)));
            assert!(!validate(8001015009084, None));
        }
    }

    fn extract_month(number: u64) -> u32 {
        ((number / 1_000_000_000) % 100) as u32
    }

    fn extract_day(number: u64) -> u32 {
        ((number / 10_000_000) % 100) as u32
    }
}
