//! Canonical digit store.

use itertools::Itertools;
use std::fmt;
use std::ops::Range;

/// Fixed-length sequence of lowercase hexadecimal digits.
///
/// Every derived representation of an address is computed from this store.
/// The contents are only set by the normalization path in
/// [`AddressSpec::normalize`](crate::AddressSpec::normalize), which
/// guarantees `0-9a-f` only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Digits(Box<str>);

impl Digits {
    /// Wraps already-normalized digits.
    pub(crate) fn from_normalized(digits: String) -> Self {
        debug_assert!(digits.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')));
        Digits(digits.into_boxed_str())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Digit at `index`, if any.
    pub fn nibble(&self, index: usize) -> Option<char> {
        self.0.as_bytes().get(index).map(|&b| b as char)
    }

    /// First digit. Stores are never empty for a valid kind.
    pub fn leading(&self) -> char {
        self.nibble(0).unwrap_or('0')
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }

    /// Sub-range of digits, clamped to the store length.
    pub fn slice(&self, range: Range<usize>) -> &str {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        &self.0[start..end]
    }

    /// Integer value of the digits.
    pub fn to_u128(&self) -> u128 {
        self.iter()
            .filter_map(|c| c.to_digit(16))
            .fold(0u128, |acc, d| (acc << 4) | u128::from(d))
    }

    /// `0x` followed by the digits.
    pub fn to_hex(&self) -> String {
        format!("0x{}", self.0)
    }

    /// Base-2 form of the integer value, `0b` prefixed, no padding.
    pub fn to_bin(&self) -> String {
        format!("{:#b}", self.to_u128())
    }

    /// Each digit as four binary digits, separated by spaces.
    pub fn to_padded_binary(&self) -> String {
        self.iter()
            .filter_map(|c| c.to_digit(16))
            .map(|d| format!("{:04b}", d))
            .join(" ")
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Digits {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn digits(s: &str) -> Digits {
        Digits::from_normalized(s.to_string())
    }

    #[test]
    fn test_integer_value() {
        assert_eq!(digits("123456789abc").to_u128(), 0x1234_5678_9abc);
        assert_eq!(digits("0000").to_u128(), 0);
        assert_eq!(digits(&"f".repeat(32)).to_u128(), u128::MAX);
    }

    #[test]
    fn test_hex_and_bin() {
        let d = digits("00a5");
        assert_eq!(d.to_hex(), "0x00a5");
        assert_eq!(d.to_bin(), "0b10100101");
        assert_eq!(digits("0000").to_bin(), "0b0");
    }

    #[test]
    fn test_padded_binary() {
        assert_eq!(digits("0a5f").to_padded_binary(), "0000 1010 0101 1111");
    }

    #[test]
    fn test_slice_and_nibble() {
        let d = digits("123456789abc");
        assert_eq!(d.slice(0..6), "123456");
        assert_eq!(d.slice(9..20), "abc");
        assert_eq!(d.nibble(11), Some('c'));
        assert_eq!(d.nibble(12), None);
        assert_eq!(d.leading(), '1');
    }
}
