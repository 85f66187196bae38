//! GTIN check-digit validation.
//!
//! Digits are weighted 1 and 3 alternately starting from the rightmost
//! (check) digit; the string is valid when the weighted sum is a multiple of 10.
//! The validator imposes no length policy: any non-empty run of ASCII digits
//! is checked, so a lone `"0"` passes.

#[inline]
fn digit_at(bytes: &[u8], index: usize) -> Option<u32> {
    let byte = bytes[index];
    byte.is_ascii_digit().then(|| u32::from(byte - b'0'))
}

/// Returns `true` when `candidate` is a non-empty digit string whose
/// weighted mod-10 checksum is zero.
///
/// Non-digit characters are rejected while the checksum is accumulated.
/// The weight-3 positions are scanned first, right to left, then the
/// weight-1 positions.
pub fn is_valid_gtin(candidate: &str) -> bool {
    let bytes = candidate.as_bytes();
    let len = bytes.len();
    if len == 0 {
        return false;
    }

    // Kept reduced mod 10 so arbitrarily long input cannot overflow.
    let mut sum: u32 = 0;
    for index in (0..len - 1).rev().step_by(2) {
        match digit_at(bytes, index) {
            Some(digit) => sum = (sum + digit) % 10,
            None => return false,
        }
    }

    sum = (sum * 3) % 10;

    for index in (0..len).rev().step_by(2) {
        match digit_at(bytes, index) {
            Some(digit) => sum = (sum + digit) % 10,
            None => return false,
        }
    }

    sum == 0
}

/// Validity of the decimal rendering of `candidate`.
pub fn is_valid_gtin_u64(candidate: u64) -> bool {
    is_valid_gtin(&candidate.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        // UPC-A
        assert!(is_valid_gtin("036000291452"));
        // EAN-13
        assert!(is_valid_gtin("4006381333931"));
        // EAN-8
        assert!(is_valid_gtin("96385074"));
        // GTIN-14
        assert!(is_valid_gtin("10614141000415"));
    }

    #[test]
    fn test_corrupted_check_digit() {
        assert!(!is_valid_gtin("036000291453"));
        assert!(!is_valid_gtin("4006381333932"));
    }

    #[test]
    fn test_empty_and_non_digit() {
        assert!(!is_valid_gtin(""));
        assert!(!is_valid_gtin("12a456"));
        assert!(!is_valid_gtin("036000-291452"));
        assert!(!is_valid_gtin(" 036000291452"));
        assert!(!is_valid_gtin("036000291452 "));
        // Full-width digits are not ASCII digits.
        assert!(!is_valid_gtin("０３６"));
    }

    #[test]
    fn test_single_digit() {
        assert!(is_valid_gtin("0"));
        for digit in 1..=9 {
            assert!(!is_valid_gtin(&digit.to_string()));
        }
    }

    #[test]
    fn test_leading_zeros_do_not_change_validity() {
        assert!(is_valid_gtin("36000291452"));
        assert!(is_valid_gtin("0000036000291452"));
    }

    #[test]
    fn test_long_input_does_not_overflow() {
        let long = "0".repeat(100_000);
        assert!(is_valid_gtin(&long));
        let mut bad = long.clone();
        bad.push('7');
        assert!(!is_valid_gtin(&bad));
    }

    #[test]
    fn test_u64() {
        assert!(is_valid_gtin_u64(36000291452));
        assert!(is_valid_gtin_u64(0));
        assert!(!is_valid_gtin_u64(36000291453));
    }
}
