/// Number of digits in a well-formed identity number.
pub(crate) const ID_LENGTH: usize = 13;

/// Decompose a number into its decimal digits, most significant first.
/// The result is not padded; `0` yields a single digit.
pub(crate) fn extract_digits(id_number: u64) -> Vec<u32> {
    if id_number == 0 {
        return vec![0];
    }
    let mut digits = Vec::with_capacity(ID_LENGTH);
    let mut num = id_number;
    while num > 0 {
        digits.push((num % 10) as u32);
        num /= 10;
    }
    digits.reverse();
    digits
}

/// Sum all the digits from a number
#[inline]
pub(crate) fn sum_all_digits(digits: u32) -> u32 {
    let mut sum = 0;
    let mut num = digits;
    while num > 0 {
        sum += num % 10;
        num /= 10;
    }
    sum
}
