//! Helpers to convert and add digits from characters.

#[inline]
pub(crate) fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

// Convert an ASCII digit to its value. The caller has already checked
// `is_digit`.
#[inline]
pub(crate) fn to_digit(c: u8) -> u64 {
    u64::from(c - b'0')
}

// Add digit to mantissa, or None on overflow.
#[inline]
pub(crate) fn add_digit(value: u64, c: u8) -> Option<u64> {
    value.checked_mul(10)?.checked_add(to_digit(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_digit_overflow() {
        assert_eq!(add_digit(0, b'7'), Some(7));
        assert_eq!(add_digit(1844674407370955161, b'5'), Some(u64::MAX));
        assert_eq!(add_digit(1844674407370955161, b'6'), None);
        assert_eq!(add_digit(u64::MAX / 5, b'0'), None);
    }
}
