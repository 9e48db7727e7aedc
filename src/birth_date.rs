use crate::error::ValidationError;
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

const THIRTY_DAY_MONTHS: [u32; 4] = [4, 6, 9, 11];
const FEBRUARY: u32 = 2;

/// How strictly the embedded birth date is checked.
///
/// `Permissive` only range-checks the month ([1,12]) and day ([1,31]).
/// `Strict` additionally enforces per-month day counts and requires a
/// leap birth year for February 29, windowing the two-digit year against
/// the current two-digit year (greater than the current value means the
/// 1900s, otherwise the 2000s). The windowing makes February 29 results
/// depend on the year the check runs for birth years near a century
/// boundary.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BirthDatePolicy {
    #[default]
    Permissive,
    Strict,
}

/// Validate digits 2-5 as the birth month and day under the given policy.
pub(crate) fn check_birth_date(
    digits: &[u32],
    policy: BirthDatePolicy,
) -> Result<(), ValidationError> {
    let month = digits[2] * 10 + digits[3];
    let day = digits[4] * 10 + digits[5];

    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(ValidationError::InvalidBirthDate { month, day });
    }

    if policy == BirthDatePolicy::Strict {
        let two_digit_year = digits[0] * 10 + digits[1];
        if !strict_day_count_is_valid(month, day, two_digit_year, current_two_digit_year()) {
            return Err(ValidationError::InvalidBirthDate { month, day });
        }
    }

    Ok(())
}

fn strict_day_count_is_valid(
    month: u32,
    day: u32,
    two_digit_year: u32,
    current_two_digit_year: u32,
) -> bool {
    if THIRTY_DAY_MONTHS.contains(&month) && day > 30 {
        return false;
    }
    if month == FEBRUARY {
        if day > 29 {
            return false;
        }
        if day == 29 {
            return is_leap_year(windowed_birth_year(two_digit_year, current_two_digit_year));
        }
    }
    // 31-day months need nothing beyond the [1,31] range check.
    true
}

fn windowed_birth_year(two_digit_year: u32, current_two_digit_year: u32) -> u32 {
    if two_digit_year > current_two_digit_year {
        1900 + two_digit_year
    } else {
        2000 + two_digit_year
    }
}

fn is_leap_year(year: u32) -> bool {
    year % 400 == 0 || (year % 4 == 0 && year % 100 != 0)
}

fn current_two_digit_year() -> u32 {
    (Utc::now().year() % 100) as u32
}
