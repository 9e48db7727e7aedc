use crate::digits::sum_all_digits;
use crate::error::ValidationError;

/// Position of the check digit.
const CHECK_DIGIT_INDEX: usize = 12;

/// Recompute the verification digit from the first 12 digits and compare
/// it to the check digit.
///
/// Odd-indexed digits (1, 3, 5, 7, 9, 11) are summed directly;
/// even-indexed digits (0, 2, 4, 6, 8, 10) are concatenated into a
/// single number, doubled, and the digits of the product summed. This is
/// the Luhn scheme with the alternating doubling expressed as a single
/// multiplication over the concatenated even group.
pub(crate) fn check_checksum(digits: &[u32]) -> Result<(), ValidationError> {
    let odd_sum: u32 = digits[..CHECK_DIGIT_INDEX].iter().skip(1).step_by(2).sum();

    let even_concat = digits[..CHECK_DIGIT_INDEX]
        .iter()
        .step_by(2)
        .fold(0, |acc, digit| acc * 10 + digit);
    let even_doubled_digit_sum = sum_all_digits(even_concat * 2);

    let verification = (10 - ((odd_sum + even_doubled_digit_sum) % 10)) % 10;

    let check_digit = digits[CHECK_DIGIT_INDEX];
    if verification == check_digit {
        Ok(())
    } else {
        Err(ValidationError::ChecksumMismatch {
            expected: verification,
            found: check_digit,
        })
    }
}
